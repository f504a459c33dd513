use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::template::errors::TemplateError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for TemplateError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let message = self.to_string();
        match self {
            TemplateError::NameEmpty | TemplateError::EmptySelection => {
                error_response(StatusCode::BAD_REQUEST, "ValidationError", &message)
            }
            TemplateError::NotFound => error_response(StatusCode::NOT_FOUND, "NotFound", &message),
            TemplateError::Repository(_) => {
                error_response(StatusCode::INTERNAL_SERVER_ERROR, "InternalError", &message)
            }
        }
    }
}

use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::combination::errors::CombinationError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for CombinationError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match &self {
            CombinationError::NameEmpty => error_response(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "combination.name_empty",
            ),
            CombinationError::InvalidPrice => error_response(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "combination.invalid_price",
            ),
            CombinationError::NotFound => {
                error_response(StatusCode::NOT_FOUND, "NotFound", "combination.not_found")
            }
            CombinationError::Repository(_) => error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        }
    }
}

use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::catalog::errors::CatalogError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for CatalogError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match &self {
            CatalogError::ProductNotFound => error_response(
                StatusCode::NOT_FOUND,
                "NotFound",
                "catalog.product_not_found",
            ),
            CatalogError::Repository(_) => error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "catalog.unavailable",
            ),
        }
    }
}

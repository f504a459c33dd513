use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::daily_menu::errors::MenuError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for MenuError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let message = self.to_string();
        if self.is_validation() {
            return error_response(StatusCode::BAD_REQUEST, "ValidationError", &message);
        }

        match self {
            MenuError::NotFound | MenuError::NoMenuLoaded => {
                error_response(StatusCode::NOT_FOUND, "NotFound", &message)
            }
            MenuError::RestaurantMissing => {
                error_response(StatusCode::UNAUTHORIZED, "Unauthorized", &message)
            }
            _ => error_response(StatusCode::INTERNAL_SERVER_ERROR, "InternalError", &message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::RepositoryError;

    #[test]
    fn should_map_missing_principio_to_bad_request() {
        let (status, body) = MenuError::PrincipioRequired.into_error_response();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.0.message, "menu.principio_required");
    }

    #[test]
    fn should_map_aborted_transaction_to_internal_error() {
        let (status, body) =
            MenuError::Repository(RepositoryError::TransactionAborted).into_error_response();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.0.message, "repository.persistence");
    }

    #[test]
    fn should_map_missing_menu_to_not_found() {
        let (status, _) = MenuError::NotFound.into_error_response();
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}

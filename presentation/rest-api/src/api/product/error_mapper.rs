use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ProductError::NameEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.name_empty",
            ),
            ProductError::NameLength => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.name_length",
            ),
            ProductError::PriceOutOfRange => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.price_out_of_range",
            ),
            ProductError::AvatarRequired => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "product.avatar_required",
            ),
            ProductError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "product.not_found"),
            ProductError::UploadFailed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "MediaError",
                "media.upload_failed",
            ),
            ProductError::AssetDeleteFailed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "MediaError",
                "media.delete_failed",
            ),
            ProductError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}

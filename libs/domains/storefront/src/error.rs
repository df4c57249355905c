use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use database::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorefrontError {
    #[error("{0}")]
    Store(#[from] StoreError),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Failed to decode stored document: {0}")]
    Decode(String),

    #[error("Failed to encode document for storage: {0}")]
    Encode(String),
}

pub type StorefrontResult<T> = Result<T, StorefrontError>;

/// Convert StorefrontError to AppError for standardized error responses
impl From<StorefrontError> for AppError {
    fn from(err: StorefrontError) -> Self {
        match err {
            // Store failures surface as 500 carrying the store's own
            // message ("Database not available" when no connection).
            StorefrontError::Store(e) => AppError::InternalServerError(e.to_string()),
            StorefrontError::Validation(msg) => AppError::BadRequest(msg),
            StorefrontError::Decode(msg) => AppError::InternalServerError(msg),
            StorefrontError::Encode(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for StorefrontError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

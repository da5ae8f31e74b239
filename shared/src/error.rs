use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Unauthorized")]
    UnauthorizedError,
    #[error("Operation not permitted")]
    ForbiddenOperation,
    #[error("{0}")]
    PaymentRequired(String),
    #[error("{0}")]
    EntityNotFound(String),
    #[error("invalid data: {}", .0.join(", "))]
    InvalidData(Vec<String>),
    #[error("Database operation failed")]
    SpecificOperationError(#[source] sqlx::Error),
    #[error("{0}")]
    ConversionEntityError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status_code = match self {
            AppError::UnauthorizedError => StatusCode::UNAUTHORIZED,
            AppError::ForbiddenOperation => StatusCode::FORBIDDEN,
            AppError::PaymentRequired(_) => StatusCode::PAYMENT_REQUIRED,
            // A malformed id cannot match any entity either.
            AppError::EntityNotFound(_) | AppError::InvalidData(_) => StatusCode::NOT_FOUND,
            // Unclassified failures are reported as 404 rather than 500.
            e @ (AppError::SpecificOperationError(_) | AppError::ConversionEntityError(_)) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Unexpected error happened"
                );
                StatusCode::NOT_FOUND
            }
        };
        status_code.into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

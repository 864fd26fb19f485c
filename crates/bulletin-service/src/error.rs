//! Boundary error type and its mapping to the shared error contract.

use bulletin_core::error::DomainError;
use bulletin_core::ports::AuthError;
use bulletin_shared::ErrorResponse;

/// Application-level error returned by the boundary operations.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("unauthorized")]
    Unauthorized,

    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// The RFC 7807 response handed to the caller.
    pub fn to_response(&self) -> ErrorResponse {
        match self {
            AppError::NotFound(detail) => ErrorResponse::not_found(detail.clone()),
            AppError::BadRequest(detail) => ErrorResponse::bad_request(detail.clone()),
            AppError::Unauthorized => ErrorResponse::unauthorized(),
            AppError::Internal(detail) => {
                tracing::error!("internal error surfaced to caller: {}", detail);
                ErrorResponse::internal_error()
            }
        }
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { entity, id } => AppError::NotFound(format!("{entity} {id}")),
            DomainError::Validation(msg) => AppError::BadRequest(msg),
            DomainError::Unauthorized => AppError::Unauthorized,
            DomainError::MalformedEncoding(msg) => AppError::Internal(msg),
            DomainError::Persistence(msg) => AppError::Internal(msg),
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::HashingError(msg) => AppError::Internal(msg),
            // Every other auth failure is the caller's: missing, invalid,
            // or expired credentials.
            _ => AppError::Unauthorized,
        }
    }
}

/// Result type alias for boundary operations.
pub type AppResult<T> = Result<T, AppError>;

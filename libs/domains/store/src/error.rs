use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid document id '{0}'")]
    InvalidId(String),

    #[error("invalid query: {0}")]
    Validation(String),

    #[error("duplicate document: {0}")]
    Duplicate(String),

    #[error("store operation timed out after {0:?}")]
    Timeout(Duration),

    #[error("database error: {0}")]
    Database(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Convert StoreError to AppError for standardized error responses
impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::InvalidId(id) => {
                AppError::BadRequest(format!("Invalid document id '{}'", id))
            }
            StoreError::Validation(msg) => AppError::BadRequest(msg),
            StoreError::Duplicate(msg) => AppError::Conflict(msg),
            StoreError::Timeout(d) => {
                AppError::ServiceUnavailable(format!("store operation timed out after {:?}", d))
            }
            StoreError::Database(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        use mongodb::error::{ErrorKind, WriteFailure};

        // E11000: a unique index rejected the write.
        if let ErrorKind::Write(WriteFailure::WriteError(ref write_error)) = *err.kind {
            if write_error.code == 11000 {
                return StoreError::Duplicate(write_error.message.clone());
            }
        }

        StoreError::Database(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_invalid_id_is_a_client_error() {
        let response = StoreError::InvalidId("nope".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_validation_is_a_client_error() {
        let response = StoreError::Validation("limit must be positive".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_timeout_maps_to_service_unavailable() {
        let response = StoreError::Timeout(Duration::from_secs(10)).into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_database_maps_to_server_error() {
        let response = StoreError::Database("broken pipe".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

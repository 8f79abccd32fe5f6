use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::modules::users::core::ports::UserStoreError;

/// Failures surfaced by the users HTTP endpoints.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("User not found!")]
    NotFound,

    #[error("Invalid user data: {0}")]
    InvalidBody(String),

    #[error(transparent)]
    Store(UserStoreError),
}

impl From<UserStoreError> for ApiError {
    fn from(error: UserStoreError) -> Self {
        match error {
            UserStoreError::NotFound { .. } => ApiError::NotFound,
            other => ApiError::Store(other),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(error: serde_json::Error) -> Self {
        ApiError::InvalidBody(error.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::InvalidBody(reason) => {
                tracing::warn!("error decoding user data :: {reason}");
                StatusCode::BAD_REQUEST
            }
            ApiError::Store(error) => {
                tracing::error!("user store failure: {error}");
                return (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response();
            }
        };
        (status, self.to_string()).into_response()
    }
}

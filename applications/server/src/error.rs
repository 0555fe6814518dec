/// Server error types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use usuarios_core::DirectoryError;

pub type Result<T> = std::result::Result<T, ServerError>;

/// Body sent with every 404 for a user id
pub const USER_NOT_FOUND_MESSAGE: &str = "El usuario no se encuentra.";

#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Directory(#[from] DirectoryError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ServerError::Directory(DirectoryError::UserNotFound(id)) => {
                tracing::debug!(%id, "user not found");
                (StatusCode::NOT_FOUND, USER_NOT_FOUND_MESSAGE.to_string())
            }
            ServerError::Directory(DirectoryError::InvalidInput(msg)) => {
                (StatusCode::BAD_REQUEST, msg)
            }
            ServerError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ServerError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ServerError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ServerError::Io(ref e) => {
                tracing::error!("IO error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        // Plain-text bodies: (StatusCode, String) sets text/plain; charset=utf-8
        (status, message).into_response()
    }
}

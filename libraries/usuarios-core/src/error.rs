/// Core error types for the user directory
use thiserror::Error;

/// Result type alias using `DirectoryError`
pub type Result<T> = std::result::Result<T, DirectoryError>;

/// Core error type for directory operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// No user matches the requested id, as it appeared in the request
    #[error("User not found: {0}")]
    UserNotFound(String),

    /// The `nombre` field failed validation
    #[error("{0}")]
    InvalidInput(String),
}

impl DirectoryError {
    /// Create a not found error
    pub fn user_not_found(id: impl Into<String>) -> Self {
        Self::UserNotFound(id.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Whether this error means the requested user does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UserNotFound(_))
    }
}

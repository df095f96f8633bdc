//! Error types for the identity service.

use crate::error::AppError;
use record_store::StoreError;
use thiserror::Error;

/// Errors that can occur during user operations.
#[derive(Debug, Error)]
pub enum UserError {
    /// No user with that id or username.
    #[error("User not found: {0}")]
    NotFound(String),

    /// The username is already registered.
    #[error("User already exists: {0}")]
    AlreadyExists(String),

    /// The username exists but the password differs.
    #[error("Invalid credentials for {0}")]
    InvalidCredentials(String),

    /// The user store could not be reached.
    #[error("User store error: {0}")]
    Store(#[from] StoreError),
}

impl From<UserError> for AppError {
    fn from(e: UserError) -> Self {
        match e {
            UserError::NotFound(_) => AppError::NotFound("User not found".into()),
            UserError::AlreadyExists(_) => AppError::Conflict("User already exists".into()),
            UserError::InvalidCredentials(_) => AppError::Unauthorized("Invalid credentials".into()),
            UserError::Store(e) => {
                tracing::error!(error = %e, "User store failure");
                AppError::Internal("Internal server error".into())
            }
        }
    }
}

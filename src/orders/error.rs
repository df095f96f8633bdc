//! Error types for the order service.

use crate::clients::LookupError;
use crate::error::AppError;
use crate::model::{ProductId, UserId};
use record_store::StoreError;
use thiserror::Error;

/// Errors that can occur while placing or reading orders.
#[derive(Debug, Error)]
pub enum OrderError {
    /// The order payload failed validation.
    #[error("Order validation error: {0}")]
    Invalid(String),

    /// The referenced user does not exist.
    #[error("Invalid user: {0}")]
    UserNotFound(UserId),

    /// The referenced product does not exist.
    #[error("Invalid product: {0}")]
    ProductNotFound(ProductId),

    /// A dependency could not answer whether a reference exists.
    #[error("Could not check {resource} existence: {source}")]
    Lookup {
        resource: &'static str,
        #[source]
        source: LookupError,
    },

    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// The order store could not be reached.
    #[error("Order store error: {0}")]
    Store(#[source] StoreError),
}

impl From<OrderError> for AppError {
    fn from(e: OrderError) -> Self {
        match e {
            OrderError::Invalid(reason) => AppError::BadRequest(reason),
            OrderError::UserNotFound(_) => AppError::NotFound("user not found".into()),
            OrderError::ProductNotFound(_) => AppError::NotFound("product not found".into()),
            OrderError::Lookup { resource, source } => {
                tracing::error!(resource, error = %source, "Existence check failed");
                AppError::Internal(format!("error checking {resource} existence"))
            }
            OrderError::NotFound(_) => AppError::NotFound("Order not found".into()),
            OrderError::Store(e) => {
                tracing::error!(error = %e, "Order store failure");
                AppError::Internal("Internal server error".into())
            }
        }
    }
}

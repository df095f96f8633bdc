//! Error types for the catalog service.

use crate::error::AppError;
use record_store::StoreError;
use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Error)]
pub enum ProductError {
    /// The requested product was not found.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// The product data failed validation.
    #[error("Invalid product: {0}")]
    Invalid(String),

    /// The product store could not be reached.
    #[error("Product store error: {0}")]
    Store(#[source] StoreError),
}

impl From<ProductError> for AppError {
    fn from(e: ProductError) -> Self {
        match e {
            ProductError::NotFound(_) => AppError::NotFound("Product not found".into()),
            ProductError::Invalid(reason) => AppError::BadRequest(reason),
            ProductError::Store(e) => {
                tracing::error!(error = %e, "Product store failure");
                AppError::Internal("Internal server error".into())
            }
        }
    }
}

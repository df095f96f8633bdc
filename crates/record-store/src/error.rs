//! # Store Errors
//!
//! Common error type shared by every record store and its handles.

/// Errors that can occur within a record store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store closed")]
    StoreClosed,
    #[error("Store dropped response channel")]
    StoreDropped,
    #[error("Record not found: {0}")]
    NotFound(String),
    #[error("Invalid record: {0}")]
    Invalid(Box<dyn std::error::Error + Send + Sync>),
    #[error("Identifier space exhausted")]
    Exhausted,
}

//! # Existence Checks
//!
//! The order orchestrator needs exactly one thing from the identity and
//! catalog services: does a referenced identifier currently exist? This
//! module puts that question behind the [`ExistenceCheck`] trait so the
//! orchestrator can be driven by HTTP lookups in production and by in-process
//! stores or scripted fakes in tests.

use async_trait::async_trait;
use record_store::{Record, RecordStore, StoreError};
use reqwest::StatusCode;

/// Answer to an existence check that completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Existence {
    Found,
    Missing,
}

/// An existence check that could not be answered.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("lookup timed out")]
    Timeout,
    #[error("lookup request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("unexpected lookup status: {0}")]
    UnexpectedStatus(StatusCode),
    #[error("lookup store unavailable: {0}")]
    Store(#[source] StoreError),
}

impl From<reqwest::Error> for LookupError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            LookupError::Timeout
        } else {
            LookupError::Transport(e)
        }
    }
}

pub type ExistenceResult = Result<Existence, LookupError>;

/// A dependency that can answer "does record `id` exist".
#[async_trait]
pub trait ExistenceCheck: Send + Sync {
    async fn exists(&self, id: u32) -> ExistenceResult;
}

/// In-process lookups straight against a store handle.
#[async_trait]
impl<T: Record> ExistenceCheck for RecordStore<T> {
    async fn exists(&self, id: u32) -> ExistenceResult {
        match self.get(T::Id::from(id)).await {
            Ok(Some(_)) => Ok(Existence::Found),
            Ok(None) => Ok(Existence::Missing),
            Err(e) => Err(LookupError::Store(e)),
        }
    }
}

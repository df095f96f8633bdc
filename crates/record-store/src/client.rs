//! # The Store Handle
//!
//! [`RecordStore`] is the cloneable half of a store. Every request handler
//! receives its own clone; all of them talk to the same [`StoreActor`](crate::StoreActor).

use crate::error::StoreError;
use crate::message::{Filter, StoreRequest};
use crate::record::Record;
use tokio::sync::{mpsc, oneshot};

/// A type-safe handle for interacting with a `StoreActor`.
#[derive(Clone)]
pub struct RecordStore<T: Record> {
    sender: mpsc::Sender<StoreRequest<T>>,
}

impl<T: Record> RecordStore<T> {
    pub fn new(sender: mpsc::Sender<StoreRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<R, StoreError>>) -> StoreRequest<T>,
    ) -> Result<R, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| StoreError::StoreClosed)?;
        response.await.map_err(|_| StoreError::StoreDropped)?
    }

    /// Appends a record, assigning it the next sequential identifier.
    pub async fn add(&self, params: T::Create) -> Result<T, StoreError> {
        self.request(|respond_to| StoreRequest::Add {
            id: None,
            params,
            respond_to,
        })
        .await
    }

    /// Appends a record whose identifier is already set.
    pub async fn add_with_id(&self, id: T::Id, params: T::Create) -> Result<T, StoreError> {
        self.request(|respond_to| StoreRequest::Add {
            id: Some(id),
            params,
            respond_to,
        })
        .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, StoreError> {
        self.request(|respond_to| StoreRequest::Get { id, respond_to })
            .await
    }

    /// Returns the first record, in insertion order, matching `filter`.
    pub async fn find<F>(&self, filter: F) -> Result<Option<T>, StoreError>
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        let filter: Filter<T> = Box::new(filter);
        self.request(|respond_to| StoreRequest::Find { filter, respond_to })
            .await
    }

    pub async fn list(&self) -> Result<Vec<T>, StoreError> {
        self.request(|respond_to| StoreRequest::List { respond_to })
            .await
    }

    /// Replaces the record stored under `id`, keeping that identifier.
    pub async fn update(&self, id: T::Id, params: T::Create) -> Result<T, StoreError> {
        self.request(|respond_to| StoreRequest::Update {
            id,
            params,
            respond_to,
        })
        .await
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), StoreError> {
        self.request(|respond_to| StoreRequest::Delete { id, respond_to })
            .await
    }

    pub async fn count(&self) -> Result<usize, StoreError> {
        self.request(|respond_to| StoreRequest::Count { respond_to })
            .await
    }
}

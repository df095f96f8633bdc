//! # The Store Actor
//!
//! This module defines [`StoreActor`], the task that owns one entity kind's
//! records and serves every request against them.

use crate::client::RecordStore;
use crate::error::StoreError;
use crate::message::StoreRequest;
use crate::record::Record;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The single-writer task that owns a collection of records.
///
/// # Architecture Note
/// This struct is the "server" half of the store. It owns the sequence of
/// records and the receiving end of the channel; the cloneable
/// [`RecordStore`] handle is the other half.
///
/// **Concurrency Model**:
/// Requests are processed *sequentially* in [`run`](Self::run), so reading the
/// current count and appending the new record can never interleave with
/// another request. No `Mutex` guards the records; exclusive ownership by the
/// task does.
///
/// **Layout**:
/// Records live in insertion order in a `Vec`. A map from identifier to the
/// position of its *first* occurrence makes lookups O(1) while keeping the
/// first-match semantics of a linear scan, even when an identifier repeats
/// after a delete.
pub struct StoreActor<T: Record> {
    receiver: mpsc::Receiver<StoreRequest<T>>,
    records: Vec<T>,
    index: HashMap<T::Id, usize>,
}

impl<T: Record> StoreActor<T> {
    /// Creates an empty store and the handle used to talk to it.
    pub fn new(buffer_size: usize) -> (Self, RecordStore<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            records: Vec::new(),
            index: HashMap::new(),
        };
        let store = RecordStore::new(sender);
        (actor, store)
    }

    /// Runs the store's event loop, processing requests until every handle is dropped.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "User" instead of "restaurant::model::user::User")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StoreRequest::Add {
                    id,
                    params,
                    respond_to,
                } => {
                    debug!(entity_type, ?params, "Add");
                    let result = self.add(id, params);
                    match &result {
                        Ok(record) => {
                            info!(entity_type, id = %record.id(), size = self.records.len(), "Created")
                        }
                        Err(e) => warn!(entity_type, error = %e, "Add failed"),
                    }
                    let _ = respond_to.send(result);
                }
                StoreRequest::Get { id, respond_to } => {
                    let record = self.position(&id).and_then(|p| self.records.get(p)).cloned();
                    debug!(entity_type, %id, found = record.is_some(), "Get");
                    let _ = respond_to.send(Ok(record));
                }
                StoreRequest::Find { filter, respond_to } => {
                    let record = self.records.iter().find(|r| filter(r)).cloned();
                    debug!(entity_type, found = record.is_some(), "Find");
                    let _ = respond_to.send(Ok(record));
                }
                StoreRequest::List { respond_to } => {
                    debug!(entity_type, size = self.records.len(), "List");
                    let _ = respond_to.send(Ok(self.records.clone()));
                }
                StoreRequest::Update {
                    id,
                    params,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?params, "Update");
                    let result = self.update(id.clone(), params);
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Updated"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Update failed"),
                    }
                    let _ = respond_to.send(result);
                }
                StoreRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let result = self.delete(&id);
                    match &result {
                        Ok(()) => info!(entity_type, %id, size = self.records.len(), "Deleted"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Delete failed"),
                    }
                    let _ = respond_to.send(result);
                }
                StoreRequest::Count { respond_to } => {
                    let _ = respond_to.send(Ok(self.records.len()));
                }
            }
        }

        info!(entity_type, size = self.records.len(), "Shutdown");
    }

    fn add(&mut self, id: Option<T::Id>, params: T::Create) -> Result<T, StoreError> {
        let id = match id {
            Some(id) => id,
            None => self.next_id()?,
        };
        let record = T::from_create_params(id, params)
            .map_err(|e| StoreError::Invalid(Box::new(e)))?;

        let position = self.records.len();
        self.index.entry(record.id().clone()).or_insert(position);
        self.records.push(record.clone());
        Ok(record)
    }

    /// `count + 1`, the identifier the next appended record receives.
    fn next_id(&self) -> Result<T::Id, StoreError> {
        self.records
            .len()
            .checked_add(1)
            .and_then(|next| u32::try_from(next).ok())
            .map(T::Id::from)
            .ok_or(StoreError::Exhausted)
    }

    fn position(&self, id: &T::Id) -> Option<usize> {
        self.index.get(id).copied()
    }

    fn update(&mut self, id: T::Id, params: T::Create) -> Result<T, StoreError> {
        let slot = self
            .position(&id)
            .and_then(|p| self.records.get_mut(p))
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        let record = T::from_create_params(id, params)
            .map_err(|e| StoreError::Invalid(Box::new(e)))?;
        *slot = record.clone();
        Ok(record)
    }

    fn delete(&mut self, id: &T::Id) -> Result<(), StoreError> {
        let position = self
            .position(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        self.records.remove(position);
        self.reindex();
        Ok(())
    }

    /// Positions after a removal shift left, so the index is rebuilt.
    fn reindex(&mut self) {
        self.index.clear();
        for (position, record) in self.records.iter().enumerate() {
            self.index.entry(record.id().clone()).or_insert(position);
        }
    }
}

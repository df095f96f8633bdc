//! # Store Messages
//!
//! This module defines the request type exchanged between a
//! [`RecordStore`](crate::RecordStore) handle and its [`StoreActor`](crate::StoreActor).

use crate::error::StoreError;
use crate::record::Record;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the store.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// A predicate over a non-indexed field, evaluated inside the store task.
pub type Filter<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

/// Internal message type sent to the store to request operations.
///
/// The variants map one-to-one onto the repository primitives: append,
/// lookup by id, lookup by field, full listing, replacement, removal and
/// count. Each carries its own reply channel, so a handle can issue requests
/// from any task while the store processes them strictly in order.
pub enum StoreRequest<T: Record> {
    Add {
        id: Option<T::Id>,
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Find {
        filter: Filter<T>,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        params: T::Create,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Count {
        respond_to: Response<usize>,
    },
}

//! # Mock Stores
//!
//! [`MockStore<T>`] hands out a real [`RecordStore<T>`] whose requests are
//! answered from a queue of scripted expectations instead of a running
//! [`StoreActor`](crate::StoreActor). Use it to test code *around* a store
//! handle, especially failure paths that a real store cannot produce on
//! demand.
//!
//! | | MockStore | Real store |
//! |---|---|---|
//! | **State** | None, answers are scripted | Real records |
//! | **Determinism** | Fully deterministic | Subject to scheduler |
//! | **Error injection** | `return_err(StoreError::StoreClosed)` | Hard |
//!
//! ```rust
//! use record_store::mock::MockStore;
//! use record_store::{Record, StoreError};
//!
//! #[derive(Clone, Debug)]
//! struct Guest { id: u32 }
//! #[derive(Debug)]
//! struct GuestCreate;
//!
//! impl Record for Guest {
//!     type Id = u32;
//!     type Create = GuestCreate;
//!     type Error = std::convert::Infallible;
//!     fn id(&self) -> &u32 { &self.id }
//!     fn from_create_params(id: u32, _: GuestCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id })
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockStore::<Guest>::new();
//!     mock.expect_get(1).return_err(StoreError::StoreClosed);
//!
//!     let store = mock.store();
//!     let result = store.get(1).await;
//!     assert!(matches!(result, Err(StoreError::StoreClosed)));
//!
//!     mock.verify();
//! }
//! ```
//!
//! For asserting on the raw requests instead, use [`create_mock_store`] with
//! [`expect_add`] and [`expect_find`].

use crate::client::RecordStore;
use crate::error::StoreError;
use crate::message::{Filter, StoreRequest};
use crate::record::Record;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

/// A scripted answer for the next request.
enum Expectation<T: Record> {
    Add(Result<T, StoreError>),
    Get(T::Id, Result<Option<T>, StoreError>),
    Find(Result<Option<T>, StoreError>),
    List(Result<Vec<T>, StoreError>),
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

fn push<T: Record>(expectations: &Expectations<T>, expectation: Expectation<T>) {
    expectations
        .lock()
        .expect("mock expectations poisoned")
        .push_back(expectation);
}

/// A mock store with expectation tracking for fluent testing.
///
/// Expectations are consumed in order; a request that does not match the
/// next expectation panics the background task, which surfaces in the test
/// as a `StoreDropped` error.
pub struct MockStore<T: Record> {
    store: RecordStore<T>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: Record> Default for MockStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> MockStore<T> {
    /// Creates a new mock store with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StoreRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue
                    .lock()
                    .expect("mock expectations poisoned")
                    .pop_front();

                match (request, expectation) {
                    (StoreRequest::Add { respond_to, .. }, Some(Expectation::Add(response))) => {
                        let _ = respond_to.send(response);
                    }
                    (StoreRequest::Get { id, respond_to }, Some(Expectation::Get(expected, response))) => {
                        assert_eq!(id, expected, "get called with an unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (StoreRequest::Find { respond_to, .. }, Some(Expectation::Find(response))) => {
                        let _ = respond_to.send(response);
                    }
                    (StoreRequest::List { respond_to }, Some(Expectation::List(response))) => {
                        let _ = respond_to.send(response);
                    }
                    _ => panic!("Unexpected request or expectation mismatch"),
                }
            }
        });

        Self {
            store: RecordStore::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns a store handle for use in tests.
    pub fn store(&self) -> RecordStore<T> {
        self.store.clone()
    }

    /// Expects an `add` or `add_with_id` operation.
    pub fn expect_add(&mut self) -> ExpectationBuilder<T, T> {
        ExpectationBuilder::new(self.expectations.clone(), Expectation::Add)
    }

    /// Expects a `get` operation for `id`.
    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| {
            Expectation::Get(id, response)
        })
    }

    /// Expects a `find` operation.
    pub fn expect_find(&mut self) -> ExpectationBuilder<T, Option<T>> {
        ExpectationBuilder::new(self.expectations.clone(), Expectation::Find)
    }

    /// Expects a `list` operation.
    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        ExpectationBuilder::new(self.expectations.clone(), Expectation::List)
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self
            .expectations
            .lock()
            .expect("mock expectations poisoned")
            .len();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

type Wrap<T, R> = Box<dyn FnOnce(Result<R, StoreError>) -> Expectation<T> + Send>;

/// Builder for a single expectation returning `R`.
pub struct ExpectationBuilder<T: Record, R> {
    expectations: Expectations<T>,
    wrap: Wrap<T, R>,
}

impl<T: Record, R> ExpectationBuilder<T, R> {
    fn new(
        expectations: Expectations<T>,
        wrap: impl FnOnce(Result<R, StoreError>) -> Expectation<T> + Send + 'static,
    ) -> Self {
        Self {
            expectations,
            wrap: Box::new(wrap),
        }
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        push(&self.expectations, (self.wrap)(Ok(value)));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: StoreError) {
        push(&self.expectations, (self.wrap)(Err(error)));
    }
}

// =============================================================================
// RAW REQUEST HELPERS
// =============================================================================

/// Creates a store handle and the receiver its requests arrive on.
///
/// The test plays the part of the store: it pulls each request off the
/// receiver, asserts on it, and answers through the enclosed reply channel.
pub fn create_mock_store<T: Record>(
    buffer_size: usize,
) -> (RecordStore<T>, mpsc::Receiver<StoreRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (RecordStore::new(sender), receiver)
}

/// Helper to verify that the next message is an Add request.
pub async fn expect_add<T: Record>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(
    Option<T::Id>,
    T::Create,
    oneshot::Sender<Result<T, StoreError>>,
)> {
    match receiver.recv().await {
        Some(StoreRequest::Add {
            id,
            params,
            respond_to,
        }) => Some((id, params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Find request.
pub async fn expect_find<T: Record>(
    receiver: &mut mpsc::Receiver<StoreRequest<T>>,
) -> Option<(Filter<T>, oneshot::Sender<Result<Option<T>, StoreError>>)> {
    match receiver.recv().await {
        Some(StoreRequest::Find { filter, respond_to }) => Some((filter, respond_to)),
        _ => None,
    }
}

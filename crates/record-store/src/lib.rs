//! # Record Store
//!
//! An in-memory, process-lifetime repository for one kind of record, built on
//! the **Actor Model**: the records are owned by a single Tokio task, and every
//! request handler talks to that task through a cloneable handle.
//!
//! ## Why an actor?
//!
//! A repository that assigns identifiers as `count + 1` is only correct if the
//! count and the append cannot interleave with another request. Rather than
//! wrapping the collection in a lock, each store owns its records outright and
//! processes requests one at a time:
//!
//! - **Isolated state**: only the [`StoreActor`] touches the records
//! - **Message passing**: a [`RecordStore`] handle sends [`StoreRequest`]s and awaits a reply
//! - **Sequential processing**: identifier assignment is race-free by construction
//!
//! ## Core Concepts
//!
//! - [`Record`] - the trait an entity kind implements (identifier type, create payload, validation)
//! - [`StoreActor`] - the task that owns the records
//! - [`RecordStore`] - the handle injected into handlers (`add`, `get`, `find`, `list`, `update`, `delete`, `count`)
//! - [`RecordClient`] - trait for domain clients that wrap a handle with their own error type
//! - [`StoreError`] - common failures (store gone, not found, invalid record)
//!
//! ## Semantics
//!
//! Records are kept in insertion order. Lookups by identifier return the
//! *first* record with that identifier, exactly like a linear scan, but are
//! served from an index. Deletion removes and shifts. After a deletion the
//! next minted identifier is again `count + 1`, which can repeat an
//! identifier that is still present.
//!
//! ## Quick Start
//!
//! ```rust
//! use record_store::{Record, StoreActor};
//!
//! #[derive(Clone, Debug)]
//! struct Dish { id: u32, name: String }
//!
//! #[derive(Debug)]
//! struct DishCreate { name: String }
//!
//! impl Record for Dish {
//!     type Id = u32;
//!     type Create = DishCreate;
//!     type Error = std::convert::Infallible;
//!     fn id(&self) -> &u32 { &self.id }
//!     fn from_create_params(id: u32, p: DishCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, name: p.name })
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, store) = StoreActor::<Dish>::new(32);
//!     let handle = tokio::spawn(actor.run());
//!
//!     let burger = store.add(DishCreate { name: "Burger".into() }).await.unwrap();
//!     assert_eq!(burger.id, 1);
//!
//!     let found = store.find(|d: &Dish| d.name == "Burger").await.unwrap();
//!     assert_eq!(found.map(|d| d.id), Some(1));
//!
//!     // Dropping the last handle stops the store.
//!     drop(store);
//!     handle.await.unwrap();
//! }
//! ```
//!
//! ## Testing
//!
//! See [`mock`] for a scripted [`RecordStore`] that needs no running actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod error;
pub mod message;
pub mod mock;
pub mod record;

// Re-export core types for convenience
pub use actor::StoreActor;
pub use client::RecordStore;
pub use client_trait::RecordClient;
pub use error::StoreError;
pub use message::{Filter, Response, StoreRequest};
pub use record::Record;

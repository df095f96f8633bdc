//! # The Record Trait
//!
//! This module defines the contract that every entity kind must satisfy to be
//! held by a [`StoreActor`](crate::StoreActor).

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any entity kind must implement to live in a record store.
///
/// # Architecture Note
/// By defining one contract that Users, Products and Orders all satisfy, the
/// store loop is written *once* and reused for every entity kind.
///
/// The associated types keep each store honest: a `User` is built from a
/// `User::Create` payload, and the compiler rejects a `Product` payload sent
/// to the user store.
///
/// # Identifiers
/// Identifiers are minted by the store as `count + 1`, so `Id` must be
/// constructible from a `u32`.
pub trait Record: Clone + Send + Sync + 'static {
    /// The identifier for this record (e.g., a `u32` newtype).
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The payload a record is built from.
    ///
    /// Also used as the replacement body for a full update, so an update can
    /// never change the identifier.
    type Create: Send + Sync + Debug;

    /// Validation failure raised while building a record.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The identifier this record was stored under.
    fn id(&self) -> &Self::Id;

    /// Construct the full record from its identifier and payload.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;
}

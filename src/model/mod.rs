//! Pure data structures (records and request payloads) implementing the [`Record`](record_store::Record) trait.

pub mod order;
pub mod product;
pub mod user;

pub use order::*;
pub use product::*;
pub use user::*;

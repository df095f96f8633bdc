//! The catalog service: the menu of products.

pub mod error;
pub mod record;
pub mod routes;

pub use error::*;
pub use routes::router;

use crate::clients::ProductClient;
use crate::model::Product;
use record_store::StoreActor;

/// Creates a new product store actor and its client.
pub fn new() -> (StoreActor<Product>, ProductClient) {
    let (actor, store) = StoreActor::new(32);
    (actor, ProductClient::new(store))
}

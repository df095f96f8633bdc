//! The order service: order placement and order history.

pub mod error;
pub mod orchestrator;
pub mod record;
pub mod routes;

pub use error::*;
pub use orchestrator::OrderOrchestrator;
pub use routes::router;

use crate::clients::OrderClient;
use crate::model::Order;
use record_store::StoreActor;

/// Creates a new order store actor and its client.
pub fn new() -> (StoreActor<Order>, OrderClient) {
    let (actor, store) = StoreActor::new(32);
    (actor, OrderClient::new(store))
}

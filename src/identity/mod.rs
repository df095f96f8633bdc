//! The identity service: users, registration and login.

pub mod error;
pub mod record;
pub mod routes;
pub mod service;

pub use error::*;
pub use routes::router;
pub use service::IdentityService;

use crate::clients::UserClient;
use crate::model::User;
use record_store::StoreActor;

/// Creates a new user store actor and its client.
pub fn new() -> (StoreActor<User>, UserClient) {
    let (actor, store) = StoreActor::new(32);
    (actor, UserClient::new(store))
}

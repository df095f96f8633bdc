//! Domain clients over the record stores, and the existence checks the
//! order service uses to reach the other two services.

pub mod existence;
pub mod http_lookup;
pub mod order_client;
pub mod product_client;
pub mod user_client;

pub use existence::*;
pub use http_lookup::HttpLookup;
pub use order_client::OrderClient;
pub use product_client::ProductClient;
pub use user_client::UserClient;

//! Process lifecycle: store startup, fixtures, listeners and shutdown.

pub mod fixtures;
pub mod restaurant_system;
pub mod server;
pub mod tracing;

pub use restaurant_system::RestaurantSystem;

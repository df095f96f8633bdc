//! # Logging
//!
//! [`setup_tracing`] installs the process-wide subscriber: compact lines,
//! no module targets (the store actor tags its lines with `entity_type`),
//! filtered by `RUST_LOG` and defaulting to `info`.
//!
//! ## What Gets Logged
//!
//! - **Stores**: startup, every create/update/delete with `id` and `size`,
//!   and shutdown
//! - **Orders**: each placement decision, inside a `place_order` span
//!   carrying `user_id` and `product_id`. Store lines come from the store's
//!   own task and carry no request span
//! - **HTTP**: one span per request from `tower_http`'s `TraceLayer`
//!
//! ```text
//! INFO Store started entity_type="Order"
//! INFO place_order: Rejected: user not found user_id=9 product_id=1
//! INFO Created entity_type="Order" id=order_1 size=1
//! INFO place_order: Order placed order_id=order_1 user_id=1 product_id=1
//! ```
//!
//! `RUST_LOG=debug` adds payloads and lookup URLs; `RUST_LOG=tower_http=debug`
//! adds request and response lines.

use tracing_subscriber::EnvFilter;

pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

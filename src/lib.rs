//! # Restaurant Services
//!
//! Three small HTTP services for a restaurant:
//!
//! - **identity**: registers users and checks logins
//! - **catalog**: keeps the menu of products
//! - **order**: accepts orders, but only after confirming that the
//!   referenced user and product exist
//!
//! ## Architecture Notes
//!
//! ### 1. One actor per store
//! Each entity kind lives in a [`record_store::StoreActor`] task that owns its
//! records outright. Handlers hold cloneable [`record_store::RecordStore`]
//! handles and every operation is a request/reply message, so id assignment
//! (`count + 1`) never races.
//!
//! ### 2. Orchestration in the request task
//! [`orders::OrderOrchestrator`] runs the user check, then the product check,
//! then the append. The checks go through [`clients::ExistenceCheck`], which
//! is HTTP ([`clients::HttpLookup`]) between processes and a direct store
//! query when everything runs in one process.
//!
//! ### 3. Errors
//! Each domain has its own error enum (`UserError`, `ProductError`,
//! `OrderError`) that converts into [`error::AppError`], the only type that
//! knows about status codes.
//!
//! ## Module Tour
//!
//! - [`model`]: `User`, `Product`, `Order` and their request payloads
//! - [`clients`]: typed store clients and existence checks
//! - [`identity`], [`catalog`], [`orders`]: per-service rules and routes
//! - [`lifecycle`]: startup, fixtures, listeners, shutdown, logging
//! - [`config`]: flags and environment

pub mod catalog;
pub mod clients;
pub mod config;
pub mod error;
pub mod identity;
pub mod lifecycle;
pub mod model;
pub mod orders;
pub mod response;

//! Runtime configuration.
//!
//! Every setting is a command-line flag with an environment-variable
//! fallback, so the same binary runs unchanged under docker-compose
//! (service names as hosts) and locally (`.env` or flags).

use clap::{ArgAction, Args, ValueEnum};
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

/// Which of the three services this process runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Service {
    /// Users, registration and login
    Identity,
    /// The product menu
    Catalog,
    /// Order placement, checking the other two over HTTP
    Order,
    /// All three in one process, orders checking the stores directly
    All,
}

#[derive(Debug, Clone, Args)]
pub struct Config {
    /// Address every listener binds to
    #[arg(long, env = "LISTEN_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    #[arg(long, env = "IDENTITY_PORT", default_value_t = 8081)]
    pub identity_port: u16,

    #[arg(long, env = "CATALOG_PORT", default_value_t = 8082)]
    pub catalog_port: u16,

    #[arg(long, env = "ORDER_PORT", default_value_t = 8080)]
    pub order_port: u16,

    /// Base URL the order service uses to reach the identity service
    #[arg(long, env = "IDENTITY_URL", default_value = "http://auth-service:8081")]
    pub identity_url: String,

    /// Base URL the order service uses to reach the catalog service
    #[arg(long, env = "CATALOG_URL", default_value = "http://product-service:8082")]
    pub catalog_url: String,

    /// Per-request timeout for existence lookups, in milliseconds
    #[arg(long, env = "LOOKUP_TIMEOUT_MS", default_value_t = 5000)]
    pub lookup_timeout_ms: u64,

    /// Load the fixture users and products at startup
    #[arg(long, env = "SEED_FIXTURES", default_value_t = true, action = ArgAction::Set)]
    pub seed: bool,
}

impl Config {
    pub fn identity_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.identity_port)
    }

    pub fn catalog_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.catalog_port)
    }

    pub fn order_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.order_port)
    }

    pub fn lookup_timeout(&self) -> Duration {
        Duration::from_millis(self.lookup_timeout_ms)
    }
}

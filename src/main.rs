//! Restaurant services binary.
//!
//! # Usage
//!
//! ```bash
//! # All three services in one process (orders check the stores directly)
//! restaurant all
//!
//! # One service per process, as in docker-compose
//! restaurant identity --identity-port 8081
//! restaurant catalog --catalog-port 8082
//! restaurant order --identity-url http://localhost:8081 --catalog-url http://localhost:8082
//! ```
//!
//! Every flag also reads an environment variable (see `--help`), and a
//! `.env` file in the working directory is loaded first.

use clap::Parser;
use restaurant::config::{Config, Service};
use restaurant::lifecycle::tracing::setup_tracing;
use restaurant::lifecycle::RestaurantSystem;

#[derive(Parser)]
#[command(name = "restaurant")]
#[command(version, about = "Identity, catalog and order services for a restaurant")]
struct Cli {
    /// Service to run
    #[arg(value_enum, default_value = "all")]
    service: Service,

    #[command(flatten)]
    config: Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Missing .env is fine; flags and the real environment still apply.
    let _ = dotenvy::dotenv();
    setup_tracing();

    let cli = Cli::parse();
    tracing::info!(service = ?cli.service, "Starting");

    RestaurantSystem::start(&cli.config)
        .await?
        .run(cli.service, &cli.config)
        .await
}

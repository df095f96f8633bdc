use super::{fixtures, server};
use crate::clients::{ExistenceCheck, HttpLookup, OrderClient, ProductClient, UserClient};
use crate::config::{Config, Service};
use crate::orders::OrderOrchestrator;
use anyhow::Context;
use axum::Router;
use record_store::RecordClient;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinSet;
use tracing::{error, info};

/// Owner of the three record stores and the routers built on them.
///
/// `RestaurantSystem` is responsible for:
/// - **Lifecycle**: spawning each store actor and awaiting it on shutdown
/// - **Wiring**: handing the order router its two existence checks
/// - **Startup data**: loading the fixtures
///
/// # Example
///
/// ```ignore
/// let system = RestaurantSystem::new();
/// system.seed().await?;
///
/// let identity = system.identity_router();
/// let (users, products) = system.in_process_lookups();
/// let orders = system.order_router(users, products);
/// // ... serve the routers ...
///
/// system.shutdown().await?;
/// ```
pub struct RestaurantSystem {
    pub user_client: UserClient,
    pub product_client: ProductClient,
    pub order_client: OrderClient,

    /// Store actor tasks, awaited on shutdown.
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl Default for RestaurantSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl RestaurantSystem {
    /// Spawns an empty store for each entity kind.
    pub fn new() -> Self {
        let (user_actor, user_client) = crate::identity::new();
        let (product_actor, product_client) = crate::catalog::new();
        let (order_actor, order_client) = crate::orders::new();

        let handles = vec![
            tokio::spawn(user_actor.run()),
            tokio::spawn(product_actor.run()),
            tokio::spawn(order_actor.run()),
        ];

        Self {
            user_client,
            product_client,
            order_client,
            handles,
        }
    }

    /// Loads fixture users and products. Orders start empty.
    pub async fn seed(&self) -> anyhow::Result<()> {
        fixtures::seed_users(&self.user_client).await?;
        fixtures::seed_products(&self.product_client).await
    }

    pub fn identity_router(&self) -> Router {
        let service = crate::identity::IdentityService::new(self.user_client.clone());
        server::with_service_layers(crate::identity::router(service), "identity")
    }

    pub fn catalog_router(&self) -> Router {
        server::with_service_layers(crate::catalog::router(self.product_client.clone()), "catalog")
    }

    pub fn order_router(
        &self,
        users: Arc<dyn ExistenceCheck>,
        products: Arc<dyn ExistenceCheck>,
    ) -> Router {
        let orchestrator = OrderOrchestrator::new(users, products, self.order_client.clone());
        server::with_service_layers(crate::orders::router(orchestrator), "order")
    }

    /// Existence checks that query this process's own user and product stores.
    pub fn in_process_lookups(&self) -> Lookups {
        (
            Arc::new(self.user_client.store().clone()),
            Arc::new(self.product_client.store().clone()),
        )
    }

    /// Existence checks over HTTP against the configured service URLs.
    pub fn http_lookups(config: &Config) -> anyhow::Result<Lookups> {
        let client = HttpLookup::client_with_timeout(config.lookup_timeout())
            .context("building lookup client")?;
        Ok((
            Arc::new(HttpLookup::identity(client.clone(), config.identity_url.as_str())),
            Arc::new(HttpLookup::catalog(client, config.catalog_url.as_str())),
        ))
    }

    /// Spawns the stores and, when `config.seed` is set, loads the fixtures.
    pub async fn start(config: &Config) -> anyhow::Result<Self> {
        let system = Self::new();
        if config.seed {
            system.seed().await?;
        }
        Ok(system)
    }

    /// The routers `service` consists of, each with the address it binds to.
    ///
    /// `Order` reaches the other two services over HTTP; `All` queries this
    /// process's stores directly.
    pub fn routers(&self, service: Service, config: &Config) -> anyhow::Result<Vec<ServiceRouter>> {
        let identity = || ServiceRouter {
            name: "identity",
            addr: config.identity_addr(),
            router: self.identity_router(),
        };
        let catalog = || ServiceRouter {
            name: "catalog",
            addr: config.catalog_addr(),
            router: self.catalog_router(),
        };
        let order = |(users, products): Lookups| ServiceRouter {
            name: "order",
            addr: config.order_addr(),
            router: self.order_router(users, products),
        };

        Ok(match service {
            Service::Identity => vec![identity()],
            Service::Catalog => vec![catalog()],
            Service::Order => vec![order(Self::http_lookups(config)?)],
            Service::All => vec![identity(), catalog(), order(self.in_process_lookups())],
        })
    }

    /// Runs `service` until Ctrl-C or SIGTERM.
    pub async fn run(self, service: Service, config: &Config) -> anyhow::Result<()> {
        // The sender lives in the signal task, which only exits after sending.
        let (stop, shutdown) = watch::channel(false);
        tokio::spawn(async move {
            server::shutdown_signal().await;
            let _ = stop.send(true);
        });

        let mut servers = JoinSet::new();
        for ServiceRouter { name, addr, router } in self.routers(service, config)? {
            let listener = server::bind(addr).await?;
            servers.spawn(server::serve(name, listener, router, shutdown.clone()));
        }

        let mut first_error = None;
        while let Some(joined) = servers.join_next().await {
            let result = match joined {
                Ok(result) => result,
                Err(e) if e.is_cancelled() => continue,
                Err(e) => Err(e.into()),
            };
            if let Err(e) = result {
                error!(error = %e, "Server failed");
                servers.abort_all();
                first_error.get_or_insert(e);
            }
        }

        let stopped = self.shutdown().await;
        match first_error {
            Some(e) => Err(e),
            None => stopped,
        }
    }

    /// Stops every store and waits for the actor tasks to finish.
    ///
    /// Every handle must be gone for a store to stop, so this is called only
    /// after the routers holding clones have been dropped. All tasks are
    /// awaited even if one of them failed; the first failure is returned.
    pub async fn shutdown(self) -> anyhow::Result<()> {
        info!("Shutting down stores...");

        drop(self.user_client);
        drop(self.product_client);
        drop(self.order_client);

        let mut first_error = None;
        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Store task failed");
                first_error.get_or_insert(e);
            }
        }

        if let Some(e) = first_error {
            anyhow::bail!("store task failed: {e}");
        }
        info!("Shutdown complete");
        Ok(())
    }
}

/// User and product existence checks, in that order.
pub type Lookups = (Arc<dyn ExistenceCheck>, Arc<dyn ExistenceCheck>);

/// A router together with its service name and listen address.
pub struct ServiceRouter {
    pub name: &'static str,
    pub addr: SocketAddr,
    pub router: Router,
}

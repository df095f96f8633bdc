//! # Order Orchestration
//!
//! Placing an order is the only operation that spans services. The
//! orchestrator runs it inside the request task:
//!
//! 1. reject a non-positive quantity
//! 2. ask the identity side whether the user exists
//! 3. only then ask the catalog side whether the product exists
//! 4. append the order
//!
//! Any failure stops the sequence before the append, so a rejected order
//! never touches the order store. The checks are not transactional across
//! services: a user removed between step 2 and step 4 goes unnoticed.

use super::OrderError;
use crate::clients::{Existence, ExistenceCheck, OrderClient};
use crate::model::{Order, OrderId, OrderRequest, UserId};
use record_store::RecordClient;
use std::sync::Arc;
use tracing::{info, instrument, warn};

#[derive(Clone)]
pub struct OrderOrchestrator {
    users: Arc<dyn ExistenceCheck>,
    products: Arc<dyn ExistenceCheck>,
    orders: OrderClient,
}

impl OrderOrchestrator {
    pub fn new(
        users: Arc<dyn ExistenceCheck>,
        products: Arc<dyn ExistenceCheck>,
        orders: OrderClient,
    ) -> Self {
        Self {
            users,
            products,
            orders,
        }
    }

    pub fn orders(&self) -> &OrderClient {
        &self.orders
    }

    #[instrument(
        name = "place_order",
        skip(self, request),
        fields(user_id = request.user_id.0, product_id = request.product_id.0)
    )]
    pub async fn place_order(&self, request: OrderRequest) -> Result<Order, OrderError> {
        if request.quantity == 0 {
            return Err(OrderError::Invalid("quantity must be positive".into()));
        }

        match self.users.exists(request.user_id.0).await {
            Ok(Existence::Found) => {}
            Ok(Existence::Missing) => {
                info!("Rejected: user not found");
                return Err(OrderError::UserNotFound(request.user_id));
            }
            Err(source) => {
                warn!(error = %source, "User lookup failed");
                return Err(OrderError::Lookup {
                    resource: "user",
                    source,
                });
            }
        }

        match self.products.exists(request.product_id.0).await {
            Ok(Existence::Found) => {}
            Ok(Existence::Missing) => {
                info!("Rejected: product not found");
                return Err(OrderError::ProductNotFound(request.product_id));
            }
            Err(source) => {
                warn!(error = %source, "Product lookup failed");
                return Err(OrderError::Lookup {
                    resource: "product",
                    source,
                });
            }
        }

        let order = self.orders.record_order(request).await?;
        info!(order_id = %order.id, "Order placed");
        Ok(order)
    }

    /// Every order, or only those of `user_id` when given.
    pub async fn list_orders(&self, user_id: Option<u32>) -> Result<Vec<Order>, OrderError> {
        match user_id {
            Some(user_id) => self.orders.list_for_user(UserId(user_id)).await,
            None => self.orders.list().await,
        }
    }

    pub async fn get_order(&self, id: u32) -> Result<Order, OrderError> {
        let id = OrderId(id);
        self.orders
            .get(id)
            .await?
            .ok_or_else(|| OrderError::NotFound(id.to_string()))
    }
}

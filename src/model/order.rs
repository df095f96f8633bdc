use crate::model::{ProductId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Represents a customer order.
///
/// # Record Store
/// This struct implements the [`Record`](record_store::Record) trait, so it
/// can be held by a [`StoreActor`](record_store::StoreActor).
///
/// See [`crate::orders::record`] for details on:
/// - Creation parameters ([`OrderRequest`])
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    pub id: OrderId,
    #[serde(rename = "userID")]
    pub user_id: UserId,
    #[serde(rename = "productID")]
    pub product_id: ProductId,
    pub quantity: u32,
    /// Client-supplied; not checked against price × quantity.
    #[serde(rename = "totalPrice")]
    pub total_price: Decimal,
}

/// Payload for placing a new order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRequest {
    #[serde(rename = "userID")]
    pub user_id: UserId,
    #[serde(rename = "productID")]
    pub product_id: ProductId,
    pub quantity: u32,
    #[serde(rename = "totalPrice")]
    pub total_price: Decimal,
}

impl OrderRequest {
    pub fn new(user_id: u32, product_id: u32, quantity: u32, total_price: Decimal) -> Self {
        Self {
            user_id: UserId(user_id),
            product_id: ProductId(product_id),
            quantity,
            total_price,
        }
    }
}

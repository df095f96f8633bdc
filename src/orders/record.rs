//! [`Record`] implementation for the [`Order`] domain type.
//!
//! Orders are only ever built after the orchestrator has checked their
//! references, so construction itself cannot fail.

use crate::model::{Order, OrderId, OrderRequest};
use record_store::Record;
use std::convert::Infallible;

impl Record for Order {
    type Id = OrderId;
    type Create = OrderRequest;
    type Error = Infallible;

    fn id(&self) -> &OrderId {
        &self.id
    }

    fn from_create_params(id: OrderId, request: OrderRequest) -> Result<Self, Infallible> {
        Ok(Self {
            id,
            user_id: request.user_id,
            product_id: request.product_id,
            quantity: request.quantity,
            total_price: request.total_price,
        })
    }
}

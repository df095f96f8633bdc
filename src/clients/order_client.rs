use crate::model::{Order, OrderRequest, UserId};
use crate::orders::OrderError;
use async_trait::async_trait;
use record_store::{RecordClient, RecordStore, StoreError};
use tracing::{debug, instrument};

/// Client for the order store.
///
/// Appends without checking references. Validation happens in
/// [`OrderOrchestrator`](crate::orders::OrderOrchestrator) before this is called.
#[derive(Clone)]
pub struct OrderClient {
    store: RecordStore<Order>,
}

impl OrderClient {
    pub fn new(store: RecordStore<Order>) -> Self {
        Self { store }
    }

    #[instrument(skip(self, request))]
    pub async fn record_order(&self, request: OrderRequest) -> Result<Order, OrderError> {
        debug!(?request, "record_order called");
        self.store.add(request).await.map_err(Self::map_error)
    }

    /// Orders placed by `user_id`, in insertion order.
    pub async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Order>, OrderError> {
        let orders = self.list().await?;
        Ok(orders
            .into_iter()
            .filter(|order| order.user_id == user_id)
            .collect())
    }
}

#[async_trait]
impl RecordClient<Order> for OrderClient {
    type Error = OrderError;

    fn store(&self) -> &RecordStore<Order> {
        &self.store
    }

    fn map_error(e: StoreError) -> Self::Error {
        match e {
            StoreError::NotFound(id) => OrderError::NotFound(id),
            other => OrderError::Store(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OrderId, ProductId};
    use record_store::mock::MockStore;
    use rust_decimal::Decimal;

    fn order(id: u32, user: u32) -> Order {
        Order {
            id: OrderId(id),
            user_id: UserId(user),
            product_id: ProductId(1),
            quantity: 1,
            total_price: Decimal::new(1599, 2),
        }
    }

    #[tokio::test]
    async fn test_list_for_user_filters_in_order() {
        let mut mock = MockStore::<Order>::new();
        mock.expect_list()
            .return_ok(vec![order(1, 1), order(2, 2), order(3, 1)]);

        let client = OrderClient::new(mock.store());
        let ids: Vec<_> = client
            .list_for_user(UserId(1))
            .await
            .unwrap()
            .into_iter()
            .map(|o| o.id)
            .collect();

        assert_eq!(ids, vec![OrderId(1), OrderId(3)]);
        mock.verify();
    }

    #[tokio::test]
    async fn test_record_order_store_closed() {
        let mut mock = MockStore::<Order>::new();
        mock.expect_add().return_err(StoreError::StoreClosed);

        let client = OrderClient::new(mock.store());
        let result = client
            .record_order(OrderRequest::new(1, 1, 2, Decimal::new(3198, 2)))
            .await;

        assert!(matches!(result, Err(OrderError::Store(StoreError::StoreClosed))));
        mock.verify();
    }
}

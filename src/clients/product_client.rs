use crate::catalog::ProductError;
use crate::model::{Product, ProductDraft, ProductId};
use async_trait::async_trait;
use record_store::{RecordClient, RecordStore, StoreError};
use tracing::{debug, instrument};

/// Client for the product store.
#[derive(Clone)]
pub struct ProductClient {
    store: RecordStore<Product>,
}

impl ProductClient {
    pub fn new(store: RecordStore<Product>) -> Self {
        Self { store }
    }

    #[instrument(skip(self, draft), fields(name = %draft.name))]
    pub async fn create(&self, draft: ProductDraft) -> Result<Product, ProductError> {
        debug!(?draft, "Sending request");
        self.store.add(draft).await.map_err(Self::map_error)
    }

    /// Replaces every field of product `id` except the id itself.
    #[instrument(skip(self, draft))]
    pub async fn replace(&self, id: u32, draft: ProductDraft) -> Result<Product, ProductError> {
        debug!(?draft, "Sending request");
        self.store
            .update(ProductId(id), draft)
            .await
            .map_err(Self::map_error)
    }

    /// Inserts a fixture product under a fixed id.
    pub async fn seed(&self, id: u32, draft: ProductDraft) -> Result<Product, ProductError> {
        self.store
            .add_with_id(ProductId(id), draft)
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl RecordClient<Product> for ProductClient {
    type Error = ProductError;

    fn store(&self) -> &RecordStore<Product> {
        &self.store
    }

    fn map_error(e: StoreError) -> Self::Error {
        match e {
            StoreError::NotFound(id) => ProductError::NotFound(id),
            StoreError::Invalid(reason) => ProductError::Invalid(reason.to_string()),
            other => ProductError::Store(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use record_store::mock::MockStore;
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn test_create_product_success() {
        let mut mock = MockStore::<Product>::new();
        mock.expect_add().return_ok(Product {
            id: ProductId(1),
            name: "Burger".into(),
            description: "Delicious beef burger".into(),
            price: Decimal::new(1599, 2),
        });

        let client = ProductClient::new(mock.store());
        let product = client
            .create(ProductDraft::new("Burger", "Delicious beef burger", Decimal::new(1599, 2)))
            .await
            .unwrap();

        assert_eq!(product.id, ProductId(1));
        mock.verify();
    }

    #[tokio::test]
    async fn test_error_mapping() {
        let mut mock = MockStore::<Product>::new();
        mock.expect_add()
            .return_err(StoreError::Invalid("price must not be negative, got -1".into()));
        mock.expect_get(ProductId(9)).return_err(StoreError::StoreDropped);

        let client = ProductClient::new(mock.store());

        let invalid = client
            .create(ProductDraft::new("Refund", "", Decimal::NEGATIVE_ONE))
            .await;
        assert!(matches!(invalid, Err(ProductError::Invalid(reason)) if reason.contains("negative")));

        let dropped = client.get(ProductId(9)).await;
        assert!(matches!(dropped, Err(ProductError::Store(StoreError::StoreDropped))));

        mock.verify();
    }
}

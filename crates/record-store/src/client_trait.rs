use crate::{Record, RecordStore, StoreError};
use async_trait::async_trait;

/// Trait for domain-specific clients to inherit the standard read and delete operations.
///
/// A domain client wraps a [`RecordStore`] and speaks its own error type. By
/// supplying [`store`](RecordClient::store) and
/// [`map_error`](RecordClient::map_error), it gets `get`, `list`, `count`
/// and `delete` for free.
///
/// # Example
///
/// ```rust
/// use record_store::{Record, RecordClient, RecordStore, StoreActor, StoreError};
///
/// #[derive(Clone, Debug)]
/// struct Table { id: u32, seats: u8 }
///
/// #[derive(Debug)]
/// struct TableCreate { seats: u8 }
///
/// impl Record for Table {
///     type Id = u32;
///     type Create = TableCreate;
///     type Error = std::convert::Infallible;
///     fn id(&self) -> &u32 { &self.id }
///     fn from_create_params(id: u32, p: TableCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id, seats: p.seats })
///     }
/// }
///
/// #[derive(Debug)]
/// struct TableError(String);
///
/// struct TableClient { store: RecordStore<Table> }
///
/// impl RecordClient<Table> for TableClient {
///     type Error = TableError;
///     fn store(&self) -> &RecordStore<Table> { &self.store }
///     fn map_error(e: StoreError) -> TableError { TableError(e.to_string()) }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, store) = StoreActor::<Table>::new(8);
///     tokio::spawn(actor.run());
///
///     store.add(TableCreate { seats: 4 }).await.unwrap();
///     let tables = TableClient { store };
///
///     // get() and count() are provided automatically
///     assert_eq!(tables.get(1).await.unwrap().unwrap().seats, 4);
///     assert_eq!(tables.count().await.unwrap(), 1);
/// }
/// ```
#[async_trait]
pub trait RecordClient<T: Record>: Send + Sync {
    /// The domain-specific error type.
    type Error: Send + Sync;

    /// Access the underlying store handle.
    fn store(&self) -> &RecordStore<T>;

    /// Map store errors to the domain error type.
    fn map_error(e: StoreError) -> Self::Error;

    /// Fetch a record by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.store().get(id).await.map_err(Self::map_error)
    }

    /// Fetch every record in insertion order.
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        self.store().list().await.map_err(Self::map_error)
    }

    async fn count(&self) -> Result<usize, Self::Error> {
        self.store().count().await.map_err(Self::map_error)
    }

    /// Delete a record by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.store().delete(id).await.map_err(Self::map_error)
    }
}

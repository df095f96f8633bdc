use crate::identity::UserError;
use crate::model::{Credentials, User, UserId};
use async_trait::async_trait;
use record_store::{RecordClient, RecordStore, StoreError};
use tracing::{debug, instrument};

/// Client for the user store.
#[derive(Clone)]
pub struct UserClient {
    store: RecordStore<User>,
}

impl UserClient {
    pub fn new(store: RecordStore<User>) -> Self {
        Self { store }
    }

    /// Appends a user under the next sequential id.
    ///
    /// Does not check the username; uniqueness is the caller's job.
    #[instrument(skip(self, credentials), fields(username = %credentials.username))]
    pub async fn register(&self, credentials: Credentials) -> Result<User, UserError> {
        debug!("Sending request");
        self.store.add(credentials).await.map_err(Self::map_error)
    }

    /// Inserts a fixture user under a fixed id.
    pub async fn seed(&self, id: u32, credentials: Credentials) -> Result<User, UserError> {
        self.store
            .add_with_id(UserId(id), credentials)
            .await
            .map_err(Self::map_error)
    }

    /// First user, in insertion order, with exactly this username.
    #[instrument(skip(self))]
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserError> {
        debug!("Sending request");
        let username = username.to_string();
        self.store
            .find(move |user: &User| user.username == username)
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl RecordClient<User> for UserClient {
    type Error = UserError;

    fn store(&self) -> &RecordStore<User> {
        &self.store
    }

    fn map_error(e: StoreError) -> Self::Error {
        match e {
            StoreError::NotFound(id) => UserError::NotFound(id),
            other => UserError::Store(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use record_store::mock::{create_mock_store, expect_add, MockStore};

    fn admin() -> User {
        User {
            id: UserId(1),
            username: "admin".into(),
            password: "admin123".into(),
        }
    }

    #[tokio::test]
    async fn test_register_sends_add_without_id() {
        let (store, mut receiver) = create_mock_store::<User>(10);
        let client = UserClient::new(store);

        let handle = tokio::spawn(async move {
            client
                .register(Credentials::new("admin", "admin123"))
                .await
        });

        let (id, params, responder) = expect_add(&mut receiver)
            .await
            .expect("Expected Add request");
        assert_eq!(id, None);
        assert_eq!(params.username, "admin");
        responder.send(Ok(admin())).unwrap();

        let user = handle.await.unwrap().unwrap();
        assert_eq!(user.id, UserId(1));
    }

    #[tokio::test]
    async fn test_find_by_username_and_store_failure() {
        let mut mock = MockStore::<User>::new();
        mock.expect_find().return_ok(Some(admin()));
        mock.expect_find().return_err(StoreError::StoreClosed);

        let client = UserClient::new(mock.store());

        let found = client.find_by_username("admin").await.unwrap();
        assert_eq!(found.map(|u| u.id), Some(UserId(1)));

        let result = client.find_by_username("admin").await;
        assert!(matches!(result, Err(UserError::Store(StoreError::StoreClosed))));

        mock.verify();
    }
}

//! Registration, login and lookup rules on top of the user store.

use super::UserError;
use crate::clients::UserClient;
use crate::model::{Credentials, User, UserId};
use record_store::RecordClient;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, instrument};

/// The identity service's request-facing operations.
///
/// Cloned into every handler. The registration lock is shared by all clones
/// so that "is the username free" and "append" happen as one step.
#[derive(Clone)]
pub struct IdentityService {
    users: UserClient,
    registration: Arc<Mutex<()>>,
}

impl IdentityService {
    pub fn new(users: UserClient) -> Self {
        Self {
            users,
            registration: Arc::new(Mutex::new(())),
        }
    }

    #[instrument(skip(self, credentials), fields(username = %credentials.username))]
    pub async fn register(&self, credentials: Credentials) -> Result<User, UserError> {
        let _guard = self.registration.lock().await;

        if self.users.find_by_username(&credentials.username).await?.is_some() {
            info!("Username taken");
            return Err(UserError::AlreadyExists(credentials.username));
        }

        let user = self.users.register(credentials).await?;
        info!(user_id = %user.id, "Registered");
        Ok(user)
    }

    /// Checks credentials against the first user with that username.
    #[instrument(skip(self, credentials), fields(username = %credentials.username))]
    pub async fn login(&self, credentials: Credentials) -> Result<User, UserError> {
        let user = self
            .users
            .find_by_username(&credentials.username)
            .await?
            .ok_or_else(|| UserError::NotFound(credentials.username.clone()))?;

        if !user.password_matches(&credentials.password) {
            info!("Password mismatch");
            return Err(UserError::InvalidCredentials(credentials.username));
        }
        Ok(user)
    }

    pub async fn user(&self, id: u32) -> Result<User, UserError> {
        let id = UserId(id);
        self.users
            .get(id)
            .await?
            .ok_or_else(|| UserError::NotFound(id.to_string()))
    }

    pub async fn list(&self) -> Result<Vec<User>, UserError> {
        self.users.list().await
    }
}

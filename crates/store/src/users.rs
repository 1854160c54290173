//! User store. Read-only: the admin lists accounts but never edits them
//! here.

use tokio::sync::{RwLock, RwLockReadGuard};
use tracing::debug;

use clementine_client::UsersGateway;
use clementine_core::User;

use crate::collection::Collection;
use crate::error::StoreError;

/// Local cache of user accounts.
pub struct UserStore<G> {
    gateway: G,
    state: RwLock<Collection<User>>,
}

impl<G: UsersGateway> UserStore<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            state: RwLock::new(Collection::new()),
        }
    }

    /// Read access to the cached collection.
    pub async fn state(&self) -> RwLockReadGuard<'_, Collection<User>> {
        self.state.read().await
    }

    /// Reload all users; on failure the stale collection stays available.
    ///
    /// # Errors
    ///
    /// Propagates the gateway failure.
    pub async fn refresh(&self) -> Result<(), StoreError> {
        self.state.write().await.begin_load();
        match self.gateway.list_users().await {
            Ok(users) => {
                debug!(count = users.len(), "loaded users");
                self.state.write().await.load_succeeded(users);
                Ok(())
            }
            Err(err) => {
                self.state.write().await.load_failed(err.to_string());
                Err(err.into())
            }
        }
    }
}

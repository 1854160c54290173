//! Users resource.

use clementine_core::User;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::gateway::UsersGateway;

impl UsersGateway for ApiClient {
    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.get("/users").await
    }
}

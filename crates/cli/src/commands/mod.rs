//! Command implementations.

pub mod attributes;
pub mod auth;
pub mod categories;
pub mod orders;
pub mod products;
pub mod users;

use clementine_client::{ApiClient, ClientConfig};

/// Build an [`ApiClient`] from the environment (`API_BASE_URL`, optional
/// `ADMIN_API_TOKEN`).
pub(crate) fn client() -> Result<ApiClient, Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let config = ClientConfig::from_env()?;
    Ok(ApiClient::new(&config))
}

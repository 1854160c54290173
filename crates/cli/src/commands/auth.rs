//! Authentication commands.
//!
//! # Usage
//!
//! ```bash
//! clementine login -e admin@example.com -p secret
//! ```
//!
//! The printed token can be exported as `ADMIN_API_TOKEN` for subsequent
//! commands.

use tracing::info;

/// Authenticate and print the bearer token.
pub async fn login(email: &str, password: &str) -> Result<(), Box<dyn std::error::Error>> {
    let client = super::client()?;

    let session = client.login(email, password).await?;

    info!("Logged in as {}", session.user.display_name());
    info!(
        "Export this for subsequent commands: ADMIN_API_TOKEN={}",
        session.token
    );
    Ok(())
}

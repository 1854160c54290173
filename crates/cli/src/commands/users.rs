//! User commands.

use tracing::info;

use clementine_store::UserStore;

/// List customer accounts.
pub async fn list() -> Result<(), Box<dyn std::error::Error>> {
    let store = UserStore::new(super::client()?);
    store.refresh().await?;

    let state = store.state().await;
    info!("{} users", state.len());
    for user in state.items() {
        info!(
            "#{} {} <{}> role={} active={}",
            user.id,
            user.display_name(),
            user.email,
            user.role.as_deref().unwrap_or("-"),
            user.is_active.unwrap_or(true)
        );
    }
    Ok(())
}

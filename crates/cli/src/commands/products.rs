//! Product commands.
//!
//! # Usage
//!
//! ```bash
//! clementine products list
//! clementine products toggle 3
//! clementine products delete 3
//! ```

use tracing::info;

use clementine_core::ProductId;
use clementine_store::ProductStore;

/// List all products with their variants.
pub async fn list() -> Result<(), Box<dyn std::error::Error>> {
    let store = ProductStore::new(super::client()?);
    store.refresh().await?;

    let state = store.state().await;
    info!("{} products", state.len());
    for product in state.items() {
        info!(
            "#{} {} [{}] active={} ({} variants)",
            product.id,
            product.name,
            product.slug,
            product.is_active,
            product.variants.len()
        );
        for variant in &product.variants {
            info!(
                "    #{} {} price={} stock={} active={}",
                variant.id, variant.sku, variant.price, variant.stock, variant.is_active
            );
        }
    }
    Ok(())
}

/// Flip a product's active flag.
pub async fn toggle(id: i32) -> Result<(), Box<dyn std::error::Error>> {
    let store = ProductStore::new(super::client()?);
    store.refresh().await?;

    let product = store.toggle_active(ProductId::new(id)).await?;
    info!("Product #{} is now active={}", product.id, product.is_active);
    Ok(())
}

/// Delete a product.
pub async fn delete(id: i32) -> Result<(), Box<dyn std::error::Error>> {
    let store = ProductStore::new(super::client()?);
    store.refresh().await?;

    store.remove(ProductId::new(id)).await?;
    info!("Product #{id} deleted");
    Ok(())
}

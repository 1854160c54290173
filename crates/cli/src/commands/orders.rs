//! Order commands.
//!
//! # Usage
//!
//! ```bash
//! clementine orders list
//! clementine orders show 12
//! clementine orders set-status 12 shipped
//! clementine orders receipt 12 -o order-12.pdf
//! ```

use tracing::info;

use clementine_core::{OrderId, OrderStatus};
use clementine_store::OrderStore;

/// List all orders.
pub async fn list() -> Result<(), Box<dyn std::error::Error>> {
    let store = OrderStore::new(super::client()?);
    store.refresh().await?;

    let state = store.state().await;
    info!("{} orders", state.len());
    for order in state.items() {
        info!(
            "#{} {} {} total={} ({})",
            order.id,
            order.user.email,
            order.status.label(),
            order.total,
            order.payment_method
        );
    }
    Ok(())
}

/// Show one order with its line items.
pub async fn show(id: i32) -> Result<(), Box<dyn std::error::Error>> {
    let store = OrderStore::new(super::client()?);

    let order = store.fetch(OrderId::new(id)).await?;
    info!(
        "Order #{} {} {} total={}",
        order.id,
        order.user.email,
        order.status.label(),
        order.total
    );
    for item in order.items.as_deref().unwrap_or_default() {
        info!(
            "    {} x{} @ {} ({})",
            item.variant.sku, item.quantity, item.price, item.variant.product.name
        );
    }
    Ok(())
}

/// Move an order to a new status.
pub async fn set_status(id: i32, status: OrderStatus) -> Result<(), Box<dyn std::error::Error>> {
    let store = OrderStore::new(super::client()?);
    store.refresh().await?;

    let order = store.update_status(OrderId::new(id), status).await?;
    info!("Order #{} is now {}", order.id, order.status.label());
    Ok(())
}

/// Download an order receipt as PDF.
pub async fn receipt(id: i32, out: &str) -> Result<(), Box<dyn std::error::Error>> {
    let store = OrderStore::new(super::client()?);
    store.refresh().await?;

    let bytes = store.receipt(OrderId::new(id)).await?;
    std::fs::write(out, &bytes)?;
    info!("Receipt for order #{id} written to {out} ({} bytes)", bytes.len());
    Ok(())
}

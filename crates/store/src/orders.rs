//! Order store.

use tokio::sync::{RwLock, RwLockReadGuard};
use tracing::debug;

use clementine_client::OrdersGateway;
use clementine_core::{Order, OrderId, OrderStatus};

use crate::collection::Collection;
use crate::error::StoreError;

const ENTITY: &str = "order";

/// Local cache of customer orders. Orders are created by shoppers, never
/// here; the only mutation is the status transition.
pub struct OrderStore<G> {
    gateway: G,
    state: RwLock<Collection<Order>>,
}

impl<G: OrdersGateway> OrderStore<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            state: RwLock::new(Collection::new()),
        }
    }

    /// Read access to the cached collection.
    pub async fn state(&self) -> RwLockReadGuard<'_, Collection<Order>> {
        self.state.read().await
    }

    /// Reload all orders; the list endpoint omits line items. On failure the
    /// stale collection stays available.
    ///
    /// # Errors
    ///
    /// Propagates the gateway failure.
    pub async fn refresh(&self) -> Result<(), StoreError> {
        self.state.write().await.begin_load();
        match self.gateway.list_orders().await {
            Ok(orders) => {
                debug!(count = orders.len(), "loaded orders");
                self.state.write().await.load_succeeded(orders);
                Ok(())
            }
            Err(err) => {
                self.state.write().await.load_failed(err.to_string());
                Err(err.into())
            }
        }
    }

    /// Fetch one order with its line items and refresh the cached copy.
    ///
    /// # Errors
    ///
    /// Propagates the gateway failure.
    pub async fn fetch(&self, id: OrderId) -> Result<Order, StoreError> {
        match self.gateway.get_order(id).await {
            Ok(order) => {
                self.state.write().await.replace(order.clone());
                Ok(order)
            }
            Err(err) => {
                self.state.write().await.record_error(err.to_string());
                Err(err.into())
            }
        }
    }

    /// Move an order to a new status. The backend enforces which transitions
    /// are legal; an illegal one is rejected and the cached record keeps its
    /// previous status.
    ///
    /// # Errors
    ///
    /// Fails fast with [`StoreError::MutationInFlight`] when this order
    /// already has a pending mutation, otherwise propagates the gateway
    /// failure with the cache unchanged.
    pub async fn update_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<Order, StoreError> {
        self.state.write().await.claim(id, ENTITY)?;
        let result = self.gateway.update_order_status(id, status).await;
        let mut state = self.state.write().await;
        state.release(id);
        match result {
            Ok(updated) => {
                state.replace(updated.clone());
                Ok(updated)
            }
            Err(err) => {
                state.record_error(err.to_string());
                Err(err.into())
            }
        }
    }

    /// Download the order receipt as PDF bytes. The claim keeps a second
    /// download (or a concurrent status change) from piling onto the same
    /// order.
    ///
    /// # Errors
    ///
    /// Same contract as [`Self::update_status`].
    pub async fn receipt(&self, id: OrderId) -> Result<Vec<u8>, StoreError> {
        self.state.write().await.claim(id, ENTITY)?;
        let result = self.gateway.order_receipt(id).await;
        let mut state = self.state.write().await;
        state.release(id);
        match result {
            Ok(bytes) => Ok(bytes),
            Err(err) => {
                state.record_error(err.to_string());
                Err(err.into())
            }
        }
    }
}

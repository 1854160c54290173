//! Orders resource.

use clementine_core::{Order, OrderId, OrderStatus, UpdateOrderStatusInput};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::gateway::OrdersGateway;

impl OrdersGateway for ApiClient {
    async fn list_orders(&self) -> Result<Vec<Order>, ApiError> {
        self.get("/orders").await
    }

    async fn get_order(&self, id: OrderId) -> Result<Order, ApiError> {
        self.get(&format!("/orders/{id}")).await
    }

    async fn update_order_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<Order, ApiError> {
        self.patch(
            &format!("/orders/{id}/status"),
            &UpdateOrderStatusInput { status },
        )
        .await
    }

    async fn order_receipt(&self, id: OrderId) -> Result<Vec<u8>, ApiError> {
        self.get_bytes(&format!("/orders/{id}/receipt")).await
    }
}

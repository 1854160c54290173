//! Order domain types.
//!
//! Orders are read/update-status only in the admin; they are authored by the
//! storefront checkout. Each order item carries a snapshot of the variant it
//! was purchased as, so later catalog edits do not rewrite order history.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{OrderId, OrderItemId, OrderStatus, ProductId, UserId, VariantId};

use super::Keyed;

/// Purchaser summary nested in an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderUser {
    /// Server-assigned ID.
    pub id: UserId,
    /// Account email.
    pub email: String,
}

/// Product summary nested in an order item's variant snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderProduct {
    /// Server-assigned ID.
    pub id: ProductId,
    /// Product name at snapshot time.
    pub name: String,
    /// Product slug at snapshot time.
    pub slug: String,
}

/// Variant snapshot nested in an order item.
///
/// Monetary fields on orders arrive as JSON strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderVariant {
    /// Server-assigned ID.
    pub id: VariantId,
    /// SKU at snapshot time.
    pub sku: String,
    /// Price at snapshot time.
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    /// Stock at snapshot time.
    pub stock: i32,
    /// Owning product.
    pub product_id: ProductId,
    /// Product summary.
    pub product: OrderProduct,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// A line item on an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// Server-assigned ID.
    pub id: OrderItemId,
    /// Owning order.
    pub order_id: OrderId,
    /// Purchased variant.
    pub variant_id: VariantId,
    /// Quantity purchased.
    pub quantity: u32,
    /// Unit price charged.
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    /// Variant snapshot.
    pub variant: OrderVariant,
}

/// A customer order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Server-assigned ID.
    pub id: OrderId,
    /// Purchaser.
    pub user_id: UserId,
    /// Current lifecycle status.
    pub status: OrderStatus,
    /// Payment method label.
    pub payment_method: String,
    /// Order total.
    #[serde(with = "rust_decimal::serde::str")]
    pub total: Decimal,
    /// Purchaser summary.
    pub user: OrderUser,
    /// Line items, included by the detail endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<OrderItem>>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Keyed for Order {
    type Id = OrderId;

    fn key(&self) -> OrderId {
        self.id
    }
}

/// Input for updating an order's status.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderStatusInput {
    /// The status to set.
    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::dec;

    #[test]
    fn test_order_money_fields_parse_from_strings() {
        let json = r#"{
            "id": 9,
            "userId": 4,
            "status": "PAID",
            "paymentMethod": "card",
            "total": "59.98",
            "user": {"id": 4, "email": "shopper@example.com"},
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-02T00:00:00Z"
        }"#;

        let order: Order = serde_json::from_str(json).expect("deserialize order");
        assert_eq!(order.total, dec!(59.98));
        assert_eq!(order.status, OrderStatus::Paid);
        assert!(order.items.is_none());
    }
}

//! Shared record builders for store tests.

use chrono::{DateTime, Utc};
use rust_decimal::dec;

use clementine_core::sku::AttributeDirectory;
use clementine_core::{
    Attribute, AttributeId, AttributeValue, AttributeValueId, Category, CategoryId, Order,
    OrderId, OrderStatus, OrderUser, Product, ProductId, ProductVariant, UserId, VariantAttribute,
    VariantId,
};

pub(crate) fn ts() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
        .expect("timestamp")
        .with_timezone(&Utc)
}

pub(crate) fn variant(id: i32, product_id: i32, sku: &str) -> ProductVariant {
    ProductVariant {
        id: VariantId::new(id),
        sku: sku.to_string(),
        price: dec!(19.99),
        stock: 5,
        product_id: ProductId::new(product_id),
        attributes: Vec::new(),
        is_active: true,
        created_at: ts(),
        updated_at: ts(),
    }
}

pub(crate) fn product(id: i32, name: &str, variants: Vec<ProductVariant>) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        slug: clementine_core::slug::generate_slug(name),
        description: "Test product".to_string(),
        brand: None,
        is_active: true,
        category_id: CategoryId::new(1),
        category: None,
        variants,
        images: Vec::new(),
        created_at: ts(),
        updated_at: ts(),
    }
}

pub(crate) fn category(id: i32, name: &str, product_count: u32) -> Category {
    Category {
        id: CategoryId::new(id),
        name: name.to_string(),
        slug: clementine_core::slug::generate_slug(name),
        is_active: true,
        parent_id: None,
        children: Vec::new(),
        product_count,
        created_at: ts(),
        updated_at: ts(),
    }
}

pub(crate) fn attribute(id: i32, name: &str) -> Attribute {
    Attribute {
        id: AttributeId::new(id),
        name: name.to_string(),
        values: None,
        created_at: ts(),
        updated_at: ts(),
    }
}

pub(crate) fn attribute_value(id: i32, attribute_id: i32, value: &str) -> AttributeValue {
    AttributeValue {
        id: AttributeValueId::new(id),
        value: value.to_string(),
        attribute_id: AttributeId::new(attribute_id),
        attribute: None,
        created_at: ts(),
        updated_at: ts(),
    }
}

pub(crate) fn order(id: i32, status: OrderStatus) -> Order {
    Order {
        id: OrderId::new(id),
        user_id: UserId::new(4),
        status,
        payment_method: "card".to_string(),
        total: dec!(59.98),
        user: OrderUser {
            id: UserId::new(4),
            email: "shopper@example.com".to_string(),
        },
        items: None,
        created_at: ts(),
        updated_at: ts(),
    }
}

pub(crate) fn selection(attribute_id: i32, value_id: i32) -> VariantAttribute {
    VariantAttribute {
        attribute_id: AttributeId::new(attribute_id),
        value_id: AttributeValueId::new(value_id),
    }
}

/// Size (id 1: L, M) and Color (id 2: White, Black) under value ids 1-4.
pub(crate) fn directory() -> AttributeDirectory {
    AttributeDirectory::from_catalog(
        &[attribute(1, "Size"), attribute(2, "Color")],
        &[
            attribute_value(1, 1, "L"),
            attribute_value(2, 1, "M"),
            attribute_value(3, 2, "White"),
            attribute_value(4, 2, "Black"),
        ],
    )
}

//! Product and variant domain types.
//!
//! A product is purchasable only through its variants: the backend (and the
//! pre-flight checks in [`crate::validate`]) require at least one variant per
//! product. A variant's `attributes` hold at most one value per attribute
//! axis; selecting a new value for an axis replaces the prior selection.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{AttributeId, AttributeValueId, CategoryId, ProductId, VariantId};

use super::{Keyed, category::Category};

/// A `{attribute, value}` selection on a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantAttribute {
    /// The attribute axis (e.g. Color).
    pub attribute_id: AttributeId,
    /// The chosen value on that axis (e.g. Red).
    pub value_id: AttributeValueId,
}

/// Replace-or-insert a selection on an attribute axis.
///
/// Keeps the invariant that `attrs` holds at most one entry per
/// `attribute_id`: an existing entry for the axis is overwritten in place,
/// otherwise the selection is appended.
pub fn select_axis(
    attrs: &mut Vec<VariantAttribute>,
    attribute_id: AttributeId,
    value_id: AttributeValueId,
) {
    if let Some(existing) = attrs.iter_mut().find(|a| a.attribute_id == attribute_id) {
        existing.value_id = value_id;
    } else {
        attrs.push(VariantAttribute {
            attribute_id,
            value_id,
        });
    }
}

/// One purchasable variant of a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariant {
    /// Server-assigned ID.
    pub id: VariantId,
    /// Derived stock keeping unit, see [`crate::sku`].
    pub sku: String,
    /// Unit price, non-negative.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Units on hand, non-negative.
    pub stock: i32,
    /// Owning product.
    pub product_id: ProductId,
    /// Attribute selections, at most one per axis.
    #[serde(default)]
    pub attributes: Vec<VariantAttribute>,
    /// Whether the variant is purchasable right now.
    pub is_active: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Keyed for ProductVariant {
    type Id = VariantId;

    fn key(&self) -> VariantId {
        self.id
    }
}

impl ProductVariant {
    /// Select `value_id` on `attribute_id`, replacing any prior selection on
    /// that axis.
    pub fn select_attribute(&mut self, attribute_id: AttributeId, value_id: AttributeValueId) {
        select_axis(&mut self.attributes, attribute_id, value_id);
    }
}

/// An ordered product image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductImage {
    /// Image URL.
    pub url: String,
    /// Alternative text.
    pub alt_text: String,
    /// Zero-based position in the gallery.
    pub position: u32,
}

/// Reassign image positions densely as `0..n-1`.
///
/// Removing an image mid-gallery leaves a gap; the backend expects dense
/// positions on every save.
pub fn normalize_image_positions(images: &mut [ProductImage]) {
    images.sort_by_key(|image| image.position);
    for (index, image) in images.iter_mut().enumerate() {
        image.position = u32::try_from(index).unwrap_or(u32::MAX);
    }
}

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Server-assigned ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// URL-safe identifier, unique across products (server-enforced).
    pub slug: String,
    /// Description text.
    pub description: String,
    /// Optional brand name.
    #[serde(default)]
    pub brand: Option<String>,
    /// Whether the product is visible to shoppers.
    pub is_active: bool,
    /// Owning category.
    pub category_id: CategoryId,
    /// Owning category record, included by the list endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Box<Category>>,
    /// Purchasable variants, never empty for an accepted product.
    pub variants: Vec<ProductVariant>,
    /// Gallery images, densely positioned.
    #[serde(default)]
    pub images: Vec<ProductImage>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Keyed for Product {
    type Id = ProductId;

    fn key(&self) -> ProductId {
        self.id
    }
}

/// Input for creating a variant (no ID yet; the backend assigns one).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVariantInput {
    /// SKU, normally composed by [`crate::sku`]; must be non-empty.
    pub sku: String,
    /// Unit price, non-negative.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Units on hand, non-negative.
    pub stock: i32,
    /// Attribute selections, at most one per axis.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<VariantAttribute>,
    /// Initial active flag; defaults server-side when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl CreateVariantInput {
    /// Select `value_id` on `attribute_id`, replacing any prior selection on
    /// that axis.
    pub fn select_attribute(&mut self, attribute_id: AttributeId, value_id: AttributeValueId) {
        select_axis(&mut self.attributes, attribute_id, value_id);
    }
}

/// Input for creating a product.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductInput {
    /// Display name, 1..=100 chars.
    pub name: String,
    /// URL-safe identifier; auto-derived from the name unless overridden.
    pub slug: String,
    /// Description text, 1..=500 chars.
    pub description: String,
    /// Owning category.
    pub category_id: CategoryId,
    /// Variants to create with the product; must be non-empty.
    pub variants: Vec<CreateVariantInput>,
    /// Gallery images.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<ProductImage>,
}

/// Input for updating a product. Only provided fields are changed; providing
/// `variants` replaces the variant set wholesale.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductInput {
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New slug.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New owning category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<CategoryId>,
    /// Replacement variant set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variants: Option<Vec<CreateVariantInput>>,
    /// Replacement image gallery.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<ProductImage>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_axis_replaces_existing_selection() {
        let color = AttributeId::new(2);
        let mut attrs = vec![VariantAttribute {
            attribute_id: color,
            value_id: AttributeValueId::new(10), // Red
        }];

        select_axis(&mut attrs, color, AttributeValueId::new(11)); // Blue

        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs.first().map(|a| a.value_id), Some(AttributeValueId::new(11)));
    }

    #[test]
    fn test_select_axis_appends_new_axis() {
        let mut attrs = vec![VariantAttribute {
            attribute_id: AttributeId::new(1),
            value_id: AttributeValueId::new(3),
        }];

        select_axis(&mut attrs, AttributeId::new(2), AttributeValueId::new(10));

        assert_eq!(attrs.len(), 2);
    }

    #[test]
    fn test_normalize_image_positions_closes_gaps() {
        let mut images = vec![
            ProductImage {
                url: "a.jpg".into(),
                alt_text: String::new(),
                position: 0,
            },
            ProductImage {
                url: "c.jpg".into(),
                alt_text: String::new(),
                position: 5,
            },
            ProductImage {
                url: "b.jpg".into(),
                alt_text: String::new(),
                position: 2,
            },
        ];

        normalize_image_positions(&mut images);

        let positions: Vec<u32> = images.iter().map(|i| i.position).collect();
        let urls: Vec<&str> = images.iter().map(|i| i.url.as_str()).collect();
        assert_eq!(positions, vec![0, 1, 2]);
        assert_eq!(urls, vec!["a.jpg", "b.jpg", "c.jpg"]);
    }
}

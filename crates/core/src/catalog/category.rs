//! Category domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::CategoryId;

use super::Keyed;

/// A product category.
///
/// The model permits arbitrary nesting via `children`; in practice the admin
/// uses a single parent/child level. `parent_id`, when set, must reference
/// another category, and the backend rejects cycles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Server-assigned ID.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// URL-safe identifier, unique across categories (server-enforced).
    pub slug: String,
    /// Whether the category is visible to shoppers.
    pub is_active: bool,
    /// Parent category, `None` for top-level categories.
    pub parent_id: Option<CategoryId>,
    /// Child categories.
    #[serde(default)]
    pub children: Vec<Category>,
    /// Number of products filed under this category.
    #[serde(default)]
    pub product_count: u32,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Keyed for Category {
    type Id = CategoryId;

    fn key(&self) -> CategoryId {
        self.id
    }
}

impl Category {
    /// Whether this category sits at the top level.
    #[must_use]
    pub const fn is_top_level(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// Input for creating a category.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryInput {
    /// Display name.
    pub name: String,
    /// URL-safe identifier; auto-derived from the name unless overridden.
    pub slug: String,
    /// Optional parent category.
    pub parent_id: Option<CategoryId>,
}

/// Input for updating a category. Only provided fields are changed.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategoryInput {
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New slug.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// New parent; `Some(None)` reparents to top level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Option<CategoryId>>,
}

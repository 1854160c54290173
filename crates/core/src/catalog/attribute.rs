//! Attribute and attribute-value domain types.
//!
//! An [`Attribute`] is a characteristic axis (e.g. "Color", "Size"); an
//! [`AttributeValue`] is one concrete value on that axis (e.g. "Red", "M").
//! Deleting an attribute cascades to its values on the backend.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{AttributeId, AttributeValueId};

use super::Keyed;

/// A characteristic axis used to classify product variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    /// Server-assigned ID.
    pub id: AttributeId,
    /// Display name (e.g. "Color").
    pub name: String,
    /// Values for this attribute, when the endpoint eager-loads them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<AttributeValue>>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Keyed for Attribute {
    type Id = AttributeId;

    fn key(&self) -> AttributeId {
        self.id
    }
}

/// One concrete value belonging to exactly one [`Attribute`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeValue {
    /// Server-assigned ID.
    pub id: AttributeValueId,
    /// The value itself (e.g. "Red", "M").
    pub value: String,
    /// ID of the parent attribute.
    pub attribute_id: AttributeId,
    /// Parent attribute summary, included by the list endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute: Option<Box<Attribute>>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Keyed for AttributeValue {
    type Id = AttributeValueId;

    fn key(&self) -> AttributeValueId {
        self.id
    }
}

/// Input for creating an attribute.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAttributeInput {
    /// Name of the attribute to create.
    pub name: String,
}

/// Input for renaming an attribute.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAttributeInput {
    /// New name for the attribute.
    pub name: String,
}

/// Input for creating an attribute value.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAttributeValueInput {
    /// The value to create (e.g. "Red", "Large").
    pub value: String,
    /// ID of the parent attribute.
    pub attribute_id: AttributeId,
}

/// Input for updating an attribute value.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAttributeValueInput {
    /// New value string.
    pub value: String,
}

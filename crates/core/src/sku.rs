//! Variant SKU composition.
//!
//! A variant's SKU is derived from the product name plus its Size and Color
//! selections: `{nameRoot}-{sizeCode}-{colorCode}`, all uppercase. The name
//! root is the initials of every word followed by the consonants of the last
//! word ("Classic T-Shirt" → `CTSHRT`). Axes are resolved through the loaded
//! attribute catalog by attribute *name*, so the composer keeps working
//! whatever IDs the backend happened to assign to "Size" and "Color".
//!
//! Missing selections leave their segment empty (`CTSHRT--` until both axes
//! are chosen). Uniqueness across variants is not checked here; a duplicate
//! SKU surfaces as a conflict on the write.

use std::collections::HashMap;

use crate::catalog::{Attribute, AttributeValue, VariantAttribute};
use crate::types::{AttributeId, AttributeValueId};

/// Axis name the composer treats as the size segment.
pub const SIZE_AXIS: &str = "Size";
/// Axis name the composer treats as the color segment.
pub const COLOR_AXIS: &str = "Color";

const VOWELS: [char; 5] = ['A', 'E', 'I', 'O', 'U'];

/// Fixed short codes for well-known color names. Unknown colors fall back to
/// the uppercased value with non-alphanumerics stripped.
const COLOR_CODES: [(&str, &str); 12] = [
    ("black", "BLK"),
    ("white", "WHT"),
    ("red", "RED"),
    ("blue", "BLU"),
    ("green", "GRN"),
    ("gray", "GRY"),
    ("navy", "NVY"),
    ("yellow", "YLW"),
    ("orange", "ORG"),
    ("purple", "PRP"),
    ("pink", "PNK"),
    ("brown", "BRN"),
];

/// Derive the SKU root from a product name.
///
/// Uppercase the name, keep only letters, spaces and hyphens, split on
/// whitespace; the root is the first letter of every word, followed by the
/// last word minus its first letter, vowels and hyphens. An empty or
/// letterless name yields an empty root.
#[must_use]
pub fn name_root(name: &str) -> String {
    let cleaned: String = name
        .to_uppercase()
        .chars()
        .filter(|c| c.is_alphabetic() || *c == ' ' || *c == '-')
        .collect();

    let words: Vec<&str> = cleaned.split_whitespace().collect();
    let Some(last) = words.last() else {
        return String::new();
    };

    let initials: String = words.iter().filter_map(|w| w.chars().next()).collect();
    let tail: String = last
        .chars()
        .skip(1)
        .filter(|c| c.is_alphabetic() && !VOWELS.contains(c))
        .collect();

    initials + &tail
}

/// Short code for a size value: the value itself, uppercased.
#[must_use]
pub fn size_code(value: &str) -> String {
    value.trim().to_uppercase()
}

/// Short code for a color value: dictionary lookup, falling back to the
/// uppercased value with non-alphanumerics stripped.
#[must_use]
pub fn color_code(value: &str) -> String {
    let trimmed = value.trim();
    for (name, code) in COLOR_CODES {
        if trimmed.eq_ignore_ascii_case(name) {
            return (*code).to_string();
        }
    }
    trimmed
        .to_uppercase()
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect()
}

/// Assemble the final SKU. Absent codes leave their segment empty.
#[must_use]
pub fn compose(root: &str, size: Option<&str>, color: Option<&str>) -> String {
    format!(
        "{root}-{}-{}",
        size.unwrap_or_default(),
        color.unwrap_or_default()
    )
    .to_uppercase()
}

/// Lookup table from the loaded attribute catalog, used to resolve a
/// variant's `{attributeId, valueId}` selections to value strings by axis
/// name.
#[derive(Debug, Clone, Default)]
pub struct AttributeDirectory {
    names: HashMap<AttributeId, String>,
    values: HashMap<AttributeValueId, (AttributeId, String)>,
}

impl AttributeDirectory {
    /// Build a directory from loaded attributes and values. Eager-loaded
    /// children on the attributes are absorbed as well.
    #[must_use]
    pub fn from_catalog(attributes: &[Attribute], values: &[AttributeValue]) -> Self {
        let mut dir = Self::default();
        for attribute in attributes {
            dir.insert_attribute(attribute);
        }
        for value in values {
            dir.insert_value(value);
        }
        dir
    }

    /// Register an attribute and any eager-loaded values.
    pub fn insert_attribute(&mut self, attribute: &Attribute) {
        self.names.insert(attribute.id, attribute.name.clone());
        if let Some(values) = &attribute.values {
            for value in values {
                self.insert_value(value);
            }
        }
    }

    /// Register a single attribute value.
    pub fn insert_value(&mut self, value: &AttributeValue) {
        self.values
            .insert(value.id, (value.attribute_id, value.value.clone()));
        if let Some(attribute) = &value.attribute {
            self.names.insert(attribute.id, attribute.name.clone());
        }
    }

    /// The attribute ID whose name matches `axis`, case-insensitively.
    #[must_use]
    pub fn axis_id(&self, axis: &str) -> Option<AttributeId> {
        self.names
            .iter()
            .find(|(_, name)| name.eq_ignore_ascii_case(axis))
            .map(|(id, _)| *id)
    }

    /// The value string a variant selected on the named axis, if any.
    #[must_use]
    pub fn selected_value<'a>(
        &'a self,
        selections: &[VariantAttribute],
        axis: &str,
    ) -> Option<&'a str> {
        let axis_id = self.axis_id(axis)?;
        let selection = selections.iter().find(|s| s.attribute_id == axis_id)?;
        let (owner, value) = self.values.get(&selection.value_id)?;
        (*owner == axis_id).then_some(value.as_str())
    }
}

/// Compose the SKU for a variant's current selections.
#[must_use]
pub fn compose_for_variant(
    product_name: &str,
    selections: &[VariantAttribute],
    directory: &AttributeDirectory,
) -> String {
    let size = directory
        .selected_value(selections, SIZE_AXIS)
        .map(|v| size_code(v));
    let color = directory
        .selected_value(selections, COLOR_AXIS)
        .map(|v| color_code(v));
    compose(
        &name_root(product_name),
        size.as_deref(),
        color.as_deref(),
    )
}

/// A SKU input field with recompute-on-change semantics.
///
/// The composed value is written only when it differs from the previous
/// composition, so an unrelated edit never churns the field. A manual
/// override sticks: once an operator types their own SKU, later
/// recompositions leave it untouched.
#[derive(Debug, Clone, Default)]
pub struct SkuField {
    value: String,
    overridden: bool,
}

impl SkuField {
    /// Start with an empty, auto-managed SKU.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current SKU value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether the operator has taken the field over.
    #[must_use]
    pub const fn is_overridden(&self) -> bool {
        self.overridden
    }

    /// Operator typed a SKU directly; auto-composition stops tracking.
    pub fn set_manual(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.overridden = true;
    }

    /// Apply a freshly composed SKU. Returns `true` when the stored value
    /// actually changed; overridden fields and unchanged compositions return
    /// `false` without writing.
    pub fn recompose(&mut self, composed: &str) -> bool {
        if self.overridden || self.value == composed {
            return false;
        }
        self.value = composed.to_string();
        true
    }
}

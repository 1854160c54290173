//! Pure pre-flight validation predicates.
//!
//! Every check here runs before a remote call is issued; a failure stops the
//! operation locally and never reaches the network. Checks are field-scoped
//! so callers can surface them next to the offending input.

use thiserror::Error;

use crate::catalog::{CreateProductInput, CreateVariantInput};

/// Maximum product name length, in characters.
pub const MAX_NAME_LEN: usize = 100;
/// Maximum product description length, in characters.
pub const MAX_DESCRIPTION_LEN: usize = 500;

/// A field-scoped validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required name field is empty.
    #[error("{field} name must not be empty")]
    EmptyName {
        /// Which entity's name was empty.
        field: &'static str,
    },

    /// Product name exceeds [`MAX_NAME_LEN`].
    #[error("name must be at most {MAX_NAME_LEN} characters")]
    NameTooLong,

    /// Product description is empty.
    #[error("description must not be empty")]
    EmptyDescription,

    /// Product description exceeds [`MAX_DESCRIPTION_LEN`].
    #[error("description must be at most {MAX_DESCRIPTION_LEN} characters")]
    DescriptionTooLong,

    /// Variant price is negative.
    #[error("price must be zero or positive")]
    InvalidPrice,

    /// Variant stock is negative.
    #[error("stock must be zero or positive")]
    InvalidStock,

    /// Variant SKU is empty at submission time.
    #[error("SKU must not be empty")]
    MissingSku,

    /// Product has no variants.
    #[error("a product needs at least one variant")]
    NoVariants,

    /// Category reference is not a positive ID.
    #[error("a valid category must be selected")]
    InvalidCategory,
}

/// Validate an attribute name: non-empty after trimming.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyName`] for blank input.
pub fn validate_attribute_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName { field: "attribute" });
    }
    Ok(())
}

/// Validate a category name: non-empty after trimming.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyName`] for blank input.
pub fn validate_category_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName { field: "category" });
    }
    Ok(())
}

/// Validate a product name: non-empty, at most [`MAX_NAME_LEN`] characters.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyName`] or [`ValidationError::NameTooLong`].
pub fn validate_product_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName { field: "product" });
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::NameTooLong);
    }
    Ok(())
}

/// Validate a product description: non-empty, at most
/// [`MAX_DESCRIPTION_LEN`] characters.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyDescription`] or
/// [`ValidationError::DescriptionTooLong`].
pub fn validate_product_description(description: &str) -> Result<(), ValidationError> {
    if description.trim().is_empty() {
        return Err(ValidationError::EmptyDescription);
    }
    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(ValidationError::DescriptionTooLong);
    }
    Ok(())
}

/// Validate a variant payload: non-negative price and stock, non-empty SKU.
///
/// The SKU is normally auto-composed, but a manual override path exists and
/// must still produce a non-empty value.
///
/// # Errors
///
/// Returns the first failing check among [`ValidationError::InvalidPrice`],
/// [`ValidationError::InvalidStock`], [`ValidationError::MissingSku`].
pub fn validate_variant(variant: &CreateVariantInput) -> Result<(), ValidationError> {
    if variant.price.is_sign_negative() {
        return Err(ValidationError::InvalidPrice);
    }
    if variant.stock < 0 {
        return Err(ValidationError::InvalidStock);
    }
    if variant.sku.trim().is_empty() {
        return Err(ValidationError::MissingSku);
    }
    Ok(())
}

/// Validate a full product payload immediately before create/update.
///
/// # Errors
///
/// Returns the first failing check: name/description bounds,
/// [`ValidationError::InvalidCategory`] for a non-positive category ID,
/// [`ValidationError::NoVariants`] for an empty variant list, then each
/// variant via [`validate_variant`].
pub fn validate_product(product: &CreateProductInput) -> Result<(), ValidationError> {
    validate_product_name(&product.name)?;
    validate_product_description(&product.description)?;
    if product.category_id.as_i32() < 1 {
        return Err(ValidationError::InvalidCategory);
    }
    if product.variants.is_empty() {
        return Err(ValidationError::NoVariants);
    }
    for variant in &product.variants {
        validate_variant(variant)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CategoryId;
    use rust_decimal::dec;

    fn variant(sku: &str) -> CreateVariantInput {
        CreateVariantInput {
            sku: sku.to_string(),
            price: dec!(19.99),
            stock: 5,
            attributes: Vec::new(),
            is_active: None,
        }
    }

    fn product(variants: Vec<CreateVariantInput>) -> CreateProductInput {
        CreateProductInput {
            name: "Classic T-Shirt".to_string(),
            slug: "classic-t-shirt".to_string(),
            description: "A classic tee.".to_string(),
            category_id: CategoryId::new(1),
            variants,
            images: Vec::new(),
        }
    }

    #[test]
    fn test_blank_names_rejected() {
        assert_eq!(
            validate_attribute_name("   "),
            Err(ValidationError::EmptyName { field: "attribute" })
        );
        assert_eq!(
            validate_category_name(""),
            Err(ValidationError::EmptyName { field: "category" })
        );
        assert!(validate_attribute_name("Color").is_ok());
    }

    #[test]
    fn test_product_name_and_description_bounds() {
        assert_eq!(
            validate_product_name(&"x".repeat(101)),
            Err(ValidationError::NameTooLong)
        );
        assert!(validate_product_name(&"x".repeat(100)).is_ok());
        assert_eq!(
            validate_product_description(&"y".repeat(501)),
            Err(ValidationError::DescriptionTooLong)
        );
    }

    #[test]
    fn test_variant_rejects_negative_price_and_stock() {
        let mut v = variant("CTSHRT-L-WHT");
        v.price = dec!(-0.01);
        assert_eq!(validate_variant(&v), Err(ValidationError::InvalidPrice));

        let mut v = variant("CTSHRT-L-WHT");
        v.stock = -1;
        assert_eq!(validate_variant(&v), Err(ValidationError::InvalidStock));
    }

    #[test]
    fn test_variant_requires_sku() {
        assert_eq!(
            validate_variant(&variant("  ")),
            Err(ValidationError::MissingSku)
        );
    }

    #[test]
    fn test_product_rejects_zero_variants_for_all_inputs() {
        // P4: empty variant lists never pass, whatever the rest looks like.
        assert_eq!(
            validate_product(&product(Vec::new())),
            Err(ValidationError::NoVariants)
        );
    }

    #[test]
    fn test_product_rejects_non_positive_category() {
        let mut p = product(vec![variant("CTSHRT-L-WHT")]);
        p.category_id = CategoryId::new(0);
        assert_eq!(validate_product(&p), Err(ValidationError::InvalidCategory));
    }

    #[test]
    fn test_valid_product_passes() {
        assert!(validate_product(&product(vec![variant("CTSHRT-L-WHT")])).is_ok());
    }
}

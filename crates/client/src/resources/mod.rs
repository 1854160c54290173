//! Gateway trait implementations for [`ApiClient`], one module per resource.
//!
//! [`ApiClient`]: crate::ApiClient

mod attribute_values;
mod attributes;
mod categories;
mod orders;
mod products;
mod users;

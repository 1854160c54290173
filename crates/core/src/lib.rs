//! Clementine Core - Shared catalog types library.
//!
//! This crate provides the common types used across all Clementine components:
//! - `client` - REST gateway to the commerce backend
//! - `store` - optimistic local caches over the gateway
//! - `cli` - command-line administration tools
//!
//! # Architecture
//!
//! The core crate contains only types and pure derivation rules - no I/O, no
//! HTTP clients, no async. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and status enums
//! - [`catalog`] - Catalog entities: attributes, categories, products, orders, users
//! - [`validate`] - Pure pre-flight validation predicates
//! - [`slug`] - URL-safe slug derivation
//! - [`sku`] - Variant SKU composition

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod sku;
pub mod slug;
pub mod types;
pub mod validate;

pub use catalog::*;
pub use types::*;
pub use validate::ValidationError;

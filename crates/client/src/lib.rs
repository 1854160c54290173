//! Clementine Client - REST gateway to the commerce backend.
//!
//! Every resource is exposed through the same uniform contract:
//! `GET/POST/PATCH/DELETE /{resource}[/{id}]` plus a handful of
//! resource-specific extensions (toggle endpoints, order status, receipts).
//! Responses arrive in a `{message, status, data}` envelope; this crate
//! unwraps `data` and turns failures into the typed [`ApiError`] taxonomy so
//! callers never inspect transport shapes themselves.
//!
//! # Authentication
//!
//! A bearer token is attached to every request once set (normally by
//! [`ApiClient::login`]). A 401 on any call other than login clears the
//! stored token before the error is returned; routing the operator back to a
//! login screen is the caller's concern.
//!
//! # Example
//!
//! ```rust,ignore
//! use clementine_client::{ApiClient, ClientConfig};
//!
//! let client = ApiClient::new(&ClientConfig::from_env()?)?;
//! client.login("admin@example.com", "hunter2").await?;
//! let products = client.list_products().await?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

mod auth;
mod client;
mod config;
mod error;
mod gateway;
mod resources;

pub use auth::AuthSession;
pub use client::ApiClient;
pub use config::{ClientConfig, ConfigError};
pub use error::ApiError;
pub use gateway::{
    AttributeValuesGateway, AttributesGateway, CategoriesGateway, OrdersGateway, ProductsGateway,
    UsersGateway,
};

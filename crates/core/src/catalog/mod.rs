//! Catalog entities as returned by the commerce backend.
//!
//! Field names follow the backend's camelCase wire format. Every entity is
//! authored remotely: the backend assigns IDs and timestamps, and local code
//! only ever holds records the backend has already accepted.

pub mod attribute;
pub mod category;
pub mod order;
pub mod product;
pub mod user;

pub use attribute::*;
pub use category::*;
pub use order::*;
pub use product::*;
pub use user::*;

/// An entity addressable by a typed numeric ID.
///
/// Implemented by every top-level catalog record so collection caches can be
/// written once, generically.
pub trait Keyed {
    /// The typed ID for this entity.
    type Id: Copy + Eq + std::hash::Hash + std::fmt::Display;

    /// The record's server-assigned ID.
    fn key(&self) -> Self::Id;
}

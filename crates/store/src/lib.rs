//! Clementine Store - optimistic local caches over the remote gateway.
//!
//! One store per entity family holds the last-known-good collection and
//! applies the minimal mutation implied by each successful remote operation.
//! Nothing is ever mutated locally before the backend confirms: a rejected
//! call leaves the cache exactly as it was, so the caller never renders state
//! the server has not accepted. The cost is a visible latency window per
//! operation, which an interactive admin tolerates.
//!
//! # In-flight locking
//!
//! Every id-addressed mutation claims the id first; a second mutation on the
//! same id while one is pending fails fast with
//! [`StoreError::MutationInFlight`] and never reaches the network. Callers
//! can map that error straight onto a disabled control. Operations on
//! different ids are independent and may overlap freely.
//!
//! # Failure bookkeeping
//!
//! Each store records the last failure message for passive display (the
//! "error banner" slot) *and* returns the typed error to the caller, so UI
//! code can still branch on conflicts vs. generic failures.

#![cfg_attr(not(test), forbid(unsafe_code))]

mod attribute_values;
mod attributes;
mod categories;
mod collection;
mod error;
mod orders;
mod products;
mod users;

#[cfg(test)]
mod test_fixtures;

pub use attribute_values::AttributeValueStore;
pub use attributes::AttributeStore;
pub use categories::CategoryStore;
pub use collection::Collection;
pub use error::StoreError;
pub use orders::OrderStore;
pub use products::ProductStore;
pub use users::UserStore;

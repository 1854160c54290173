//! Integration tests for Clementine.
//!
//! # Running Tests
//!
//! ```bash
//! # Point the tests at a running commerce backend
//! export API_BASE_URL=http://localhost:5000
//! export ADMIN_API_TOKEN=...   # or let the tests log in
//!
//! # Run integration tests (all #[ignore]d by default)
//! cargo test -p clementine-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `catalog_read` - Read paths: listing endpoints and envelope decoding
//! - `catalog_mutations` - Mutation round-trips against a scratch backend
//!
//! The mutation tests create and then delete their own records; run them
//! against a disposable backend only.

/// Base URL for the commerce backend (configurable via environment).
#[must_use]
pub fn api_base_url() -> String {
    std::env::var("API_BASE_URL").unwrap_or_else(|_| "http://localhost:5000".to_string())
}

//! Store-level errors.

use thiserror::Error;

use clementine_client::ApiError;
use clementine_core::ValidationError;

/// Errors returned by store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A pre-flight check failed; no request was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The remote operation was rejected or the transport failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Another mutation for the same record is still pending; no request was
    /// sent. Retry once the pending operation resolves.
    #[error("{entity} {id} already has a mutation in flight")]
    MutationInFlight {
        /// Entity family (e.g. "product").
        entity: &'static str,
        /// The contended record's ID.
        id: String,
    },
}

impl StoreError {
    /// Whether this failure is a remote uniqueness conflict (duplicate slug
    /// or SKU), which should prompt for a different value.
    #[must_use]
    pub const fn is_conflict(&self) -> bool {
        matches!(self, Self::Api(ApiError::Conflict(_)))
    }
}

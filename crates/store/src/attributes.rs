//! Attribute store.

use tokio::sync::{RwLock, RwLockReadGuard};
use tracing::debug;

use clementine_client::AttributesGateway;
use clementine_core::validate::validate_attribute_name;
use clementine_core::{Attribute, AttributeId, CreateAttributeInput, UpdateAttributeInput};

use crate::collection::Collection;
use crate::error::StoreError;

const ENTITY: &str = "attribute";

/// Local cache of the attribute axes (Size, Color, ...).
pub struct AttributeStore<G> {
    gateway: G,
    state: RwLock<Collection<Attribute>>,
}

impl<G: AttributesGateway> AttributeStore<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            state: RwLock::new(Collection::new()),
        }
    }

    /// Read access to the cached collection.
    pub async fn state(&self) -> RwLockReadGuard<'_, Collection<Attribute>> {
        self.state.read().await
    }

    /// Reload all attributes; on failure the stale collection stays
    /// available.
    ///
    /// # Errors
    ///
    /// Propagates the gateway failure.
    pub async fn refresh(&self) -> Result<(), StoreError> {
        self.state.write().await.begin_load();
        match self.gateway.list_attributes().await {
            Ok(attributes) => {
                debug!(count = attributes.len(), "loaded attributes");
                self.state.write().await.load_succeeded(attributes);
                Ok(())
            }
            Err(err) => {
                self.state.write().await.load_failed(err.to_string());
                Err(err.into())
            }
        }
    }

    /// Fetch one attribute, typically with its values included, and refresh
    /// its cached copy.
    ///
    /// # Errors
    ///
    /// Propagates the gateway failure.
    pub async fn fetch(&self, id: AttributeId) -> Result<Attribute, StoreError> {
        match self.gateway.get_attribute(id).await {
            Ok(attribute) => {
                self.state.write().await.replace(attribute.clone());
                Ok(attribute)
            }
            Err(err) => {
                self.state.write().await.record_error(err.to_string());
                Err(err.into())
            }
        }
    }

    /// Create an attribute axis.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Validation`] for a blank name before any request
    /// is sent, or the gateway failure with the cache unchanged.
    pub async fn create(&self, input: &CreateAttributeInput) -> Result<Attribute, StoreError> {
        validate_attribute_name(&input.name)?;
        match self.gateway.create_attribute(input).await {
            Ok(attribute) => {
                self.state.write().await.insert(attribute.clone());
                Ok(attribute)
            }
            Err(err) => {
                self.state.write().await.record_error(err.to_string());
                Err(err.into())
            }
        }
    }

    /// Rename an attribute axis.
    ///
    /// # Errors
    ///
    /// Fails fast with [`StoreError::MutationInFlight`] when this attribute
    /// already has a pending mutation, otherwise propagates the gateway
    /// failure with the cache unchanged.
    pub async fn update(
        &self,
        id: AttributeId,
        input: &UpdateAttributeInput,
    ) -> Result<Attribute, StoreError> {
        validate_attribute_name(&input.name)?;
        self.state.write().await.claim(id, ENTITY)?;
        let result = self.gateway.update_attribute(id, input).await;
        let mut state = self.state.write().await;
        state.release(id);
        match result {
            Ok(updated) => {
                state.replace(updated.clone());
                Ok(updated)
            }
            Err(err) => {
                state.record_error(err.to_string());
                Err(err.into())
            }
        }
    }

    /// Delete an attribute axis. The backend cascades to its values.
    ///
    /// # Errors
    ///
    /// Same contract as [`Self::update`].
    pub async fn remove(&self, id: AttributeId) -> Result<(), StoreError> {
        self.state.write().await.claim(id, ENTITY)?;
        let result = self.gateway.delete_attribute(id).await;
        let mut state = self.state.write().await;
        state.release(id);
        match result {
            Ok(()) => {
                state.remove(id);
                Ok(())
            }
            Err(err) => {
                state.record_error(err.to_string());
                Err(err.into())
            }
        }
    }
}

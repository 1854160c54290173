//! Category store.

use tokio::sync::{RwLock, RwLockReadGuard};
use tracing::debug;

use clementine_client::CategoriesGateway;
use clementine_core::slug::generate_slug;
use clementine_core::validate::validate_category_name;
use clementine_core::{Category, CategoryId, CreateCategoryInput, UpdateCategoryInput};

use crate::collection::Collection;
use crate::error::StoreError;

const ENTITY: &str = "category";

/// Local cache of the category tree.
pub struct CategoryStore<G> {
    gateway: G,
    state: RwLock<Collection<Category>>,
}

impl<G: CategoriesGateway> CategoryStore<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            state: RwLock::new(Collection::new()),
        }
    }

    /// Read access to the cached collection.
    pub async fn state(&self) -> RwLockReadGuard<'_, Collection<Category>> {
        self.state.read().await
    }

    /// Reload the tree; on failure the stale collection stays available.
    ///
    /// # Errors
    ///
    /// Propagates the gateway failure.
    pub async fn refresh(&self) -> Result<(), StoreError> {
        self.state.write().await.begin_load();
        match self.gateway.list_categories().await {
            Ok(categories) => {
                debug!(count = categories.len(), "loaded categories");
                self.state.write().await.load_succeeded(categories);
                Ok(())
            }
            Err(err) => {
                self.state.write().await.load_failed(err.to_string());
                Err(err.into())
            }
        }
    }

    /// Create a category. A blank slug is derived from the name before
    /// submission; a duplicate slug comes back as a conflict with the cache
    /// unchanged, so the caller can prompt for a different one.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Validation`] for a blank name before any request
    /// is sent, or the gateway failure.
    pub async fn create(&self, mut input: CreateCategoryInput) -> Result<Category, StoreError> {
        validate_category_name(&input.name)?;
        if input.slug.trim().is_empty() {
            input.slug = generate_slug(&input.name);
        }
        match self.gateway.create_category(&input).await {
            Ok(category) => {
                self.state.write().await.insert(category.clone());
                Ok(category)
            }
            Err(err) => {
                self.state.write().await.record_error(err.to_string());
                Err(err.into())
            }
        }
    }

    /// Update a category; the cached record is replaced with the response.
    ///
    /// # Errors
    ///
    /// Fails fast with [`StoreError::MutationInFlight`] when this category
    /// already has a pending mutation, otherwise propagates the gateway
    /// failure with the cache unchanged.
    pub async fn update(
        &self,
        id: CategoryId,
        input: &UpdateCategoryInput,
    ) -> Result<Category, StoreError> {
        if let Some(name) = &input.name {
            validate_category_name(name)?;
        }
        self.state.write().await.claim(id, ENTITY)?;
        let result = self.gateway.update_category(id, input).await;
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

    /// Delete a category. The backend rejects deletion while products are
    /// still filed under it; the record stays cached in that case.
    ///
    /// # Errors
    ///
    /// Same contract as [`Self::update`].
    pub async fn remove(&self, id: CategoryId) -> Result<(), StoreError> {
        self.state.write().await.claim(id, ENTITY)?;
        let result = self.gateway.delete_category(id).await;
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

    /// Flip a category's active flag; the server computes the new value.
    ///
    /// # Errors
    ///
    /// Same contract as [`Self::update`].
    pub async fn toggle_active(&self, id: CategoryId) -> Result<Category, StoreError> {
        self.state.write().await.claim(id, ENTITY)?;
        let result = self.gateway.toggle_category_active(id).await;
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
}

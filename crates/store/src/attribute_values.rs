//! Attribute-value store.

use tokio::sync::{RwLock, RwLockReadGuard};
use tracing::debug;

use clementine_client::AttributeValuesGateway;
use clementine_core::{
    AttributeId, AttributeValue, AttributeValueId, CreateAttributeValueInput,
    UpdateAttributeValueInput,
};

use crate::collection::Collection;
use crate::error::StoreError;

const ENTITY: &str = "attribute value";

/// Local cache of the attribute values across all axes.
///
/// Value strings carry no local length or format rules; uniqueness within an
/// axis is the backend's call and comes back as a conflict.
pub struct AttributeValueStore<G> {
    gateway: G,
    state: RwLock<Collection<AttributeValue>>,
}

impl<G: AttributeValuesGateway> AttributeValueStore<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            state: RwLock::new(Collection::new()),
        }
    }

    /// Read access to the cached collection.
    pub async fn state(&self) -> RwLockReadGuard<'_, Collection<AttributeValue>> {
        self.state.read().await
    }

    /// Reload values across all attributes; on failure the stale collection
    /// stays available.
    ///
    /// # Errors
    ///
    /// Propagates the gateway failure.
    pub async fn refresh(&self) -> Result<(), StoreError> {
        self.state.write().await.begin_load();
        match self.gateway.list_attribute_values().await {
            Ok(values) => {
                debug!(count = values.len(), "loaded attribute values");
                self.state.write().await.load_succeeded(values);
                Ok(())
            }
            Err(err) => {
                self.state.write().await.load_failed(err.to_string());
                Err(err.into())
            }
        }
    }

    /// Fetch the values for one attribute. The result is returned directly
    /// and merged into the cache record by record.
    ///
    /// # Errors
    ///
    /// Propagates the gateway failure.
    pub async fn for_attribute(
        &self,
        attribute_id: AttributeId,
    ) -> Result<Vec<AttributeValue>, StoreError> {
        match self.gateway.list_values_for_attribute(attribute_id).await {
            Ok(values) => {
                let mut state = self.state.write().await;
                for value in &values {
                    if state.find(value.id).is_some() {
                        state.replace(value.clone());
                    } else {
                        state.insert(value.clone());
                    }
                }
                Ok(values)
            }
            Err(err) => {
                self.state.write().await.record_error(err.to_string());
                Err(err.into())
            }
        }
    }

    /// Create a value under its attribute.
    ///
    /// # Errors
    ///
    /// Propagates the gateway failure with the cache unchanged.
    pub async fn create(
        &self,
        input: &CreateAttributeValueInput,
    ) -> Result<AttributeValue, StoreError> {
        match self.gateway.create_attribute_value(input).await {
            Ok(value) => {
                self.state.write().await.insert(value.clone());
                Ok(value)
            }
            Err(err) => {
                self.state.write().await.record_error(err.to_string());
                Err(err.into())
            }
        }
    }

    /// Rewrite a value's string.
    ///
    /// # Errors
    ///
    /// Fails fast with [`StoreError::MutationInFlight`] when this value
    /// already has a pending mutation, otherwise propagates the gateway
    /// failure with the cache unchanged.
    pub async fn update(
        &self,
        id: AttributeValueId,
        input: &UpdateAttributeValueInput,
    ) -> Result<AttributeValue, StoreError> {
        self.state.write().await.claim(id, ENTITY)?;
        let result = self.gateway.update_attribute_value(id, input).await;
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

    /// Delete a value.
    ///
    /// # Errors
    ///
    /// Same contract as [`Self::update`].
    pub async fn remove(&self, id: AttributeValueId) -> Result<(), StoreError> {
        self.state.write().await.claim(id, ENTITY)?;
        let result = self.gateway.delete_attribute_value(id).await;
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

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use clementine_client::ApiError;

    use super::*;
    use crate::test_fixtures::attribute_value;

    #[derive(Default)]
    struct MockGateway {
        list: Mutex<Vec<Result<Vec<AttributeValue>, ApiError>>>,
        for_attribute: Mutex<Vec<Result<Vec<AttributeValue>, ApiError>>>,
        create: Mutex<Vec<Result<AttributeValue, ApiError>>>,
        update: Mutex<Vec<Result<AttributeValue, ApiError>>>,
        delete: Mutex<Vec<Result<(), ApiError>>>,
    }

    fn pop<T>(queue: &Mutex<Vec<T>>, op: &str) -> T {
        let mut queue = queue.lock().expect("lock");
        assert!(!queue.is_empty(), "unexpected {op} call");
        queue.remove(0)
    }

    impl AttributeValuesGateway for MockGateway {
        async fn list_attribute_values(&self) -> Result<Vec<AttributeValue>, ApiError> {
            pop(&self.list, "list")
        }

        async fn list_values_for_attribute(
            &self,
            _attribute_id: AttributeId,
        ) -> Result<Vec<AttributeValue>, ApiError> {
            pop(&self.for_attribute, "for_attribute")
        }

        async fn create_attribute_value(
            &self,
            _input: &CreateAttributeValueInput,
        ) -> Result<AttributeValue, ApiError> {
            pop(&self.create, "create")
        }

        async fn update_attribute_value(
            &self,
            _id: AttributeValueId,
            _input: &UpdateAttributeValueInput,
        ) -> Result<AttributeValue, ApiError> {
            pop(&self.update, "update")
        }

        async fn delete_attribute_value(&self, _id: AttributeValueId) -> Result<(), ApiError> {
            pop(&self.delete, "delete")
        }
    }

    #[tokio::test]
    async fn test_values_created_in_sequence_all_land_in_cache() {
        // A new axis gets populated value by value; every confirmed create
        // appends without disturbing earlier ones.
        let gateway = MockGateway {
            create: Mutex::new(vec![
                Ok(attribute_value(10, 3, "Cotton")),
                Ok(attribute_value(11, 3, "Linen")),
            ]),
            ..MockGateway::default()
        };
        let store = AttributeValueStore::new(gateway);

        for value in ["Cotton", "Linen"] {
            store
                .create(&CreateAttributeValueInput {
                    value: value.to_string(),
                    attribute_id: AttributeId::new(3),
                })
                .await
                .expect("create");
        }

        let state = store.state().await;
        let values: Vec<&str> = state.items().iter().map(|v| v.value.as_str()).collect();
        assert_eq!(values, vec!["Cotton", "Linen"]);
    }

    #[tokio::test]
    async fn test_for_attribute_merges_without_duplicates() {
        let gateway = MockGateway {
            list: Mutex::new(vec![Ok(vec![
                attribute_value(1, 1, "L"),
                attribute_value(3, 2, "White"),
            ])]),
            for_attribute: Mutex::new(vec![Ok(vec![
                attribute_value(1, 1, "L"),
                attribute_value(2, 1, "M"),
            ])]),
            ..MockGateway::default()
        };
        let store = AttributeValueStore::new(gateway);
        store.refresh().await.expect("load");

        let values = store
            .for_attribute(AttributeId::new(1))
            .await
            .expect("fetch");

        assert_eq!(values.len(), 2);
        assert_eq!(store.state().await.len(), 3, "no duplicate for id 1");
    }

    #[tokio::test]
    async fn test_duplicate_value_conflict_leaves_cache_unchanged() {
        let existing = attribute_value(3, 2, "White");
        let gateway = MockGateway {
            list: Mutex::new(vec![Ok(vec![existing.clone()])]),
            create: Mutex::new(vec![Err(ApiError::Conflict(
                "value already exists for attribute".to_string(),
            ))]),
            ..MockGateway::default()
        };
        let store = AttributeValueStore::new(gateway);
        store.refresh().await.expect("load");

        let err = store
            .create(&CreateAttributeValueInput {
                value: "White".to_string(),
                attribute_id: AttributeId::new(2),
            })
            .await
            .expect_err("conflict");

        assert!(err.is_conflict());
        assert_eq!(store.state().await.items(), &[existing]);
    }

    #[tokio::test]
    async fn test_remove_drops_only_that_value() {
        let gateway = MockGateway {
            list: Mutex::new(vec![Ok(vec![
                attribute_value(3, 2, "White"),
                attribute_value(4, 2, "Black"),
            ])]),
            delete: Mutex::new(vec![Ok(())]),
            ..MockGateway::default()
        };
        let store = AttributeValueStore::new(gateway);
        store.refresh().await.expect("load");

        store
            .remove(AttributeValueId::new(3))
            .await
            .expect("delete");

        let state = store.state().await;
        assert_eq!(state.len(), 1);
        assert!(state.find(AttributeValueId::new(4)).is_some());
    }
}

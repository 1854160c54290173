//! Product store: cache plus optimistic mutations for products and their
//! variants.

use tokio::sync::{RwLock, RwLockReadGuard};
use tracing::debug;

use clementine_client::{ApiError, ProductsGateway};
use clementine_core::sku::{AttributeDirectory, compose_for_variant};
use clementine_core::slug::generate_slug;
use clementine_core::validate::{
    validate_product, validate_product_description, validate_product_name, validate_variant,
};
use clementine_core::{
    CreateProductInput, CreateVariantInput, Product, ProductId, UpdateProductInput,
    ValidationError, VariantId, normalize_image_positions,
};

use crate::collection::Collection;
use crate::error::StoreError;

const ENTITY: &str = "product";

/// Local cache of the product catalog, mutated only after the backend
/// confirms each operation.
pub struct ProductStore<G> {
    gateway: G,
    state: RwLock<Collection<Product>>,
}

impl<G: ProductsGateway> ProductStore<G> {
    /// Create an empty store over the given gateway.
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            state: RwLock::new(Collection::new()),
        }
    }

    /// Read access to the cached collection.
    pub async fn state(&self) -> RwLockReadGuard<'_, Collection<Product>> {
        self.state.read().await
    }

    /// Reload the whole collection. On failure the stale collection stays
    /// available and the error is recorded.
    ///
    /// # Errors
    ///
    /// Propagates the gateway failure.
    pub async fn refresh(&self) -> Result<(), StoreError> {
        self.state.write().await.begin_load();
        match self.gateway.list_products().await {
            Ok(products) => {
                debug!(count = products.len(), "loaded products");
                self.state.write().await.load_succeeded(products);
                Ok(())
            }
            Err(err) => {
                self.state.write().await.load_failed(err.to_string());
                Err(err.into())
            }
        }
    }

    /// Fetch a single product and refresh its cached copy.
    ///
    /// # Errors
    ///
    /// Propagates the gateway failure.
    pub async fn fetch(&self, id: ProductId) -> Result<Product, StoreError> {
        match self.gateway.get_product(id).await {
            Ok(product) => {
                self.state.write().await.replace(product.clone());
                Ok(product)
            }
            Err(err) => {
                self.state.write().await.record_error(err.to_string());
                Err(err.into())
            }
        }
    }

    /// Create a product.
    ///
    /// Variants without a manually entered SKU get one composed from the
    /// product name and their attribute selections before validation. After
    /// the backend assigns the product ID the SKUs are recomposed, and when
    /// any differ a follow-up update materializes the final values (SKU
    /// derivation may incorporate the ID in a future scheme). The cache only
    /// ever holds the record the backend returned last.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Validation`] before any request is sent, or the
    /// gateway failure; either way the cache is unchanged.
    pub async fn create(
        &self,
        mut input: CreateProductInput,
        directory: &AttributeDirectory,
    ) -> Result<Product, StoreError> {
        if input.slug.trim().is_empty() {
            input.slug = generate_slug(&input.name);
        }
        // Remember which SKUs are ours to manage; manual entries stick.
        let auto_sku: Vec<bool> = input
            .variants
            .iter()
            .map(|v| v.sku.trim().is_empty())
            .collect();
        for variant in &mut input.variants {
            if variant.sku.trim().is_empty() {
                variant.sku = compose_for_variant(&input.name, &variant.attributes, directory);
            }
        }
        normalize_image_positions(&mut input.images);
        validate_product(&input)?;

        let created = match self.gateway.create_product(&input).await {
            Ok(product) => product,
            Err(err) => {
                self.state.write().await.record_error(err.to_string());
                return Err(err.into());
            }
        };

        let finalized = match self.finalize_skus(&created, &auto_sku, directory).await {
            Ok(product) => product.unwrap_or(created),
            Err(err) => {
                // The product exists remotely; cache it and report the
                // failed follow-up.
                self.state.write().await.insert(created);
                self.state.write().await.record_error(err.to_string());
                return Err(err.into());
            }
        };

        self.state.write().await.insert(finalized.clone());
        Ok(finalized)
    }

    /// Recompose auto-managed SKUs against the server-assigned record and
    /// push an update when any changed. Returns the updated record, or
    /// `None` when the composition already matches.
    async fn finalize_skus(
        &self,
        created: &Product,
        auto_sku: &[bool],
        directory: &AttributeDirectory,
    ) -> Result<Option<Product>, ApiError> {
        let mut changed = false;
        let variants: Vec<CreateVariantInput> = created
            .variants
            .iter()
            .enumerate()
            .map(|(index, variant)| {
                let mut sku = variant.sku.clone();
                if auto_sku.get(index).copied().unwrap_or(false) {
                    let composed =
                        compose_for_variant(&created.name, &variant.attributes, directory);
                    if composed != sku {
                        sku = composed;
                        changed = true;
                    }
                }
                CreateVariantInput {
                    sku,
                    price: variant.price,
                    stock: variant.stock,
                    attributes: variant.attributes.clone(),
                    is_active: Some(variant.is_active),
                }
            })
            .collect();

        if !changed {
            return Ok(None);
        }

        debug!(product = %created.id, "materializing final variant SKUs");
        let patch = UpdateProductInput {
            variants: Some(variants),
            ..UpdateProductInput::default()
        };
        self.gateway.update_product(created.id, &patch).await.map(Some)
    }

    /// Update a product; the cached record is replaced with the response.
    ///
    /// Provided fields get the same pre-flight checks `create` runs: name and
    /// description bounds, a non-empty replacement variant set with each
    /// variant validated, a positive category ID, and image positions
    /// re-densified before submission.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Validation`] before any request is sent, fails
    /// fast with [`StoreError::MutationInFlight`] when this product already
    /// has a pending mutation, otherwise propagates the gateway failure with
    /// the cache unchanged.
    pub async fn update(
        &self,
        id: ProductId,
        mut input: UpdateProductInput,
    ) -> Result<Product, StoreError> {
        if let Some(name) = &input.name {
            validate_product_name(name)?;
        }
        if let Some(description) = &input.description {
            validate_product_description(description)?;
        }
        if let Some(category_id) = input.category_id
            && category_id.as_i32() < 1
        {
            return Err(ValidationError::InvalidCategory.into());
        }
        if let Some(variants) = &input.variants {
            if variants.is_empty() {
                return Err(ValidationError::NoVariants.into());
            }
            for variant in variants {
                validate_variant(variant)?;
            }
        }
        if let Some(images) = &mut input.images {
            normalize_image_positions(images);
        }

        self.state.write().await.claim(id, ENTITY)?;
        let result = self.gateway.update_product(id, &input).await;
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

    /// Delete a product; it leaves the cache only once the backend confirms.
    ///
    /// # Errors
    ///
    /// Same contract as [`Self::update`].
    pub async fn remove(&self, id: ProductId) -> Result<(), StoreError> {
        self.state.write().await.claim(id, ENTITY)?;
        let result = self.gateway.delete_product(id).await;
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

    /// Flip a product's active flag. The server computes the new value; the
    /// cache shows no intermediate state while the call is pending.
    ///
    /// # Errors
    ///
    /// Same contract as [`Self::update`].
    pub async fn toggle_active(&self, id: ProductId) -> Result<Product, StoreError> {
        self.state.write().await.claim(id, ENTITY)?;
        let result = self.gateway.toggle_product_active(id).await;
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

    /// Flip one variant's active flag. Claims the owning product, since the
    /// response replaces the whole cached product record.
    ///
    /// # Errors
    ///
    /// Same contract as [`Self::update`].
    pub async fn toggle_variant_active(
        &self,
        id: ProductId,
        variant_id: VariantId,
    ) -> Result<Product, StoreError> {
        self.state.write().await.claim(id, ENTITY)?;
        let result = self.gateway.toggle_variant_active(id, variant_id).await;
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

    /// Delete one variant; on success only that variant is dropped from the
    /// cached product.
    ///
    /// # Errors
    ///
    /// Same contract as [`Self::update`].
    pub async fn delete_variant(
        &self,
        id: ProductId,
        variant_id: VariantId,
    ) -> Result<(), StoreError> {
        self.state.write().await.claim(id, ENTITY)?;
        let result = self.gateway.delete_variant(id, variant_id).await;
        let mut state = self.state.write().await;
        state.release(id);
        match result {
            Ok(()) => {
                state.update_with(id, |product| {
                    product.variants.retain(|v| v.id != variant_id);
                });
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
    use std::sync::{Arc, Mutex};

    use tokio::sync::Semaphore;

    use clementine_core::{CategoryId, ProductImage};
    use rust_decimal::dec;

    use super::*;
    use crate::test_fixtures::{directory, product, selection, variant};

    #[derive(Default)]
    struct MockState {
        list: Vec<Result<Vec<Product>, ApiError>>,
        create: Vec<Result<Product, ApiError>>,
        update: Vec<Result<Product, ApiError>>,
        delete: Vec<Result<(), ApiError>>,
        toggle: Vec<Result<Product, ApiError>>,
        toggle_variant: Vec<Result<Product, ApiError>>,
        delete_variant: Vec<Result<(), ApiError>>,
        create_inputs: Vec<CreateProductInput>,
        update_inputs: Vec<(ProductId, UpdateProductInput)>,
    }

    #[derive(Clone, Default)]
    struct MockGateway {
        state: Arc<Mutex<MockState>>,
        /// When set, toggle calls block until a permit is available.
        toggle_gate: Option<Arc<Semaphore>>,
    }

    fn pop<T>(queue: &mut Vec<T>, op: &str) -> T {
        assert!(!queue.is_empty(), "unexpected {op} call");
        queue.remove(0)
    }

    impl ProductsGateway for MockGateway {
        async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
            pop(&mut self.state.lock().expect("lock").list, "list")
        }

        async fn get_product(&self, _id: ProductId) -> Result<Product, ApiError> {
            panic!("unexpected get call");
        }

        async fn create_product(&self, input: &CreateProductInput) -> Result<Product, ApiError> {
            let mut state = self.state.lock().expect("lock");
            state.create_inputs.push(input.clone());
            pop(&mut state.create, "create")
        }

        async fn update_product(
            &self,
            id: ProductId,
            input: &UpdateProductInput,
        ) -> Result<Product, ApiError> {
            let mut state = self.state.lock().expect("lock");
            state.update_inputs.push((id, input.clone()));
            pop(&mut state.update, "update")
        }

        async fn delete_product(&self, _id: ProductId) -> Result<(), ApiError> {
            pop(&mut self.state.lock().expect("lock").delete, "delete")
        }

        async fn toggle_product_active(&self, _id: ProductId) -> Result<Product, ApiError> {
            if let Some(gate) = &self.toggle_gate {
                gate.acquire().await.expect("gate").forget();
            }
            pop(&mut self.state.lock().expect("lock").toggle, "toggle")
        }

        async fn toggle_variant_active(
            &self,
            _id: ProductId,
            _variant_id: VariantId,
        ) -> Result<Product, ApiError> {
            let mut state = self.state.lock().expect("lock");
            pop(&mut state.toggle_variant, "toggle_variant")
        }

        async fn delete_variant(
            &self,
            _id: ProductId,
            _variant_id: VariantId,
        ) -> Result<(), ApiError> {
            let mut state = self.state.lock().expect("lock");
            pop(&mut state.delete_variant, "delete_variant")
        }
    }

    fn store_with(state: MockState) -> (ProductStore<MockGateway>, MockGateway) {
        let gateway = MockGateway {
            state: Arc::new(Mutex::new(state)),
            toggle_gate: None,
        };
        (ProductStore::new(gateway.clone()), gateway)
    }

    fn create_input(variants: Vec<CreateVariantInput>) -> CreateProductInput {
        CreateProductInput {
            name: "Classic T-Shirt".to_string(),
            slug: "classic-t-shirt".to_string(),
            description: "A classic tee.".to_string(),
            category_id: CategoryId::new(1),
            variants,
            images: Vec::new(),
        }
    }

    fn auto_variant() -> CreateVariantInput {
        CreateVariantInput {
            sku: String::new(),
            price: dec!(19.99),
            stock: 5,
            attributes: vec![selection(1, 1), selection(2, 3)], // L / White
            is_active: None,
        }
    }

    #[tokio::test]
    async fn test_refresh_failure_keeps_stale_collection() {
        let (store, _) = store_with(MockState {
            list: vec![
                Ok(vec![product(1, "Classic T-Shirt", vec![])]),
                Err(ApiError::Api {
                    status: 500,
                    message: "backend down".to_string(),
                }),
            ],
            ..MockState::default()
        });

        store.refresh().await.expect("first load");
        assert_eq!(store.state().await.len(), 1);

        let err = store.refresh().await.expect_err("second load fails");
        assert!(matches!(err, StoreError::Api(_)));

        let state = store.state().await;
        assert_eq!(state.len(), 1, "stale collection survives");
        assert_eq!(state.error(), Some("API error (500): backend down"));
        assert!(!state.is_loading());
    }

    #[tokio::test]
    async fn test_create_validates_before_any_request() {
        let (store, gateway) = store_with(MockState::default());

        let err = store
            .create(create_input(Vec::new()), &directory())
            .await
            .expect_err("no variants");
        assert!(matches!(
            err,
            StoreError::Validation(ValidationError::NoVariants)
        ));
        assert!(
            gateway.state.lock().expect("lock").create_inputs.is_empty(),
            "validation failures never reach the gateway"
        );
        assert!(store.state().await.is_empty());
    }

    #[tokio::test]
    async fn test_create_composes_skus_and_appends_server_record() {
        let mut accepted = variant(1, 7, "CTSHRT-L-WHT");
        accepted.attributes = vec![selection(1, 1), selection(2, 3)];
        let created = product(7, "Classic T-Shirt", vec![accepted]);
        let (store, gateway) = store_with(MockState {
            create: vec![Ok(created.clone())],
            ..MockState::default()
        });

        let result = store
            .create(create_input(vec![auto_variant()]), &directory())
            .await
            .expect("create");

        let sent = gateway.state.lock().expect("lock").create_inputs.remove(0);
        assert_eq!(
            sent.variants.first().map(|v| v.sku.as_str()),
            Some("CTSHRT-L-WHT"),
            "SKU composed before submission"
        );
        assert_eq!(result.id, ProductId::new(7));
        assert_eq!(store.state().await.items(), &[created]);
    }

    #[tokio::test]
    async fn test_create_materializes_final_skus_after_id_assignment() {
        // The backend accepted the product but normalized the variant SKU to
        // a placeholder; once the id is known the store recomposes and
        // pushes the final value.
        let mut placeholder = variant(1, 7, "PENDING");
        placeholder.attributes = vec![selection(1, 1), selection(2, 3)];
        let created = product(7, "Classic T-Shirt", vec![placeholder]);

        let mut final_variant = variant(1, 7, "CTSHRT-L-WHT");
        final_variant.attributes = vec![selection(1, 1), selection(2, 3)];
        let finalized = product(7, "Classic T-Shirt", vec![final_variant]);

        let (store, gateway) = store_with(MockState {
            create: vec![Ok(created)],
            update: vec![Ok(finalized.clone())],
            ..MockState::default()
        });

        let result = store
            .create(create_input(vec![auto_variant()]), &directory())
            .await
            .expect("create");

        let (patched_id, patch) = gateway.state.lock().expect("lock").update_inputs.remove(0);
        assert_eq!(patched_id, ProductId::new(7));
        let patched_skus: Vec<&str> = patch
            .variants
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|v| v.sku.as_str())
            .collect();
        assert_eq!(patched_skus, vec!["CTSHRT-L-WHT"]);
        assert_eq!(result, finalized);
        assert_eq!(store.state().await.items(), &[finalized]);
    }

    #[tokio::test]
    async fn test_create_leaves_manual_skus_alone() {
        let mut manual = auto_variant();
        manual.sku = "LEGACY-001".to_string();
        let created = product(7, "Classic T-Shirt", vec![variant(1, 7, "LEGACY-001")]);
        let (store, gateway) = store_with(MockState {
            create: vec![Ok(created)],
            ..MockState::default()
        });

        store
            .create(create_input(vec![manual]), &directory())
            .await
            .expect("create");

        let state = gateway.state.lock().expect("lock");
        assert_eq!(
            state.create_inputs.first().and_then(|i| i.variants.first()).map(|v| v.sku.as_str()),
            Some("LEGACY-001")
        );
        assert!(
            state.update_inputs.is_empty(),
            "no follow-up update for overridden SKUs"
        );
    }

    #[tokio::test]
    async fn test_create_rejection_leaves_cache_unchanged() {
        let (store, _) = store_with(MockState {
            create: vec![Err(ApiError::Conflict("slug already in use".to_string()))],
            ..MockState::default()
        });

        let err = store
            .create(create_input(vec![auto_variant()]), &directory())
            .await
            .expect_err("conflict");

        // P3: nothing was inserted, and the conflict is distinguishable.
        assert!(err.is_conflict());
        let state = store.state().await;
        assert!(state.is_empty());
        assert_eq!(state.error(), Some("Conflict: slug already in use"));
    }

    #[tokio::test]
    async fn test_update_replaces_only_matching_record() {
        let first = product(1, "Classic T-Shirt", vec![]);
        let second = product(2, "Rain Parka", vec![]);
        let renamed = product(2, "Rain Jacket", vec![]);
        let (store, _) = store_with(MockState {
            list: vec![Ok(vec![first.clone(), second])],
            update: vec![Ok(renamed.clone())],
            ..MockState::default()
        });
        store.refresh().await.expect("load");

        store
            .update(ProductId::new(2), UpdateProductInput::default())
            .await
            .expect("update");

        assert_eq!(store.state().await.items(), &[first, renamed]);
    }

    #[tokio::test]
    async fn test_update_rejects_empty_variant_set_locally() {
        let (store, gateway) = store_with(MockState::default());

        let err = store
            .update(
                ProductId::new(1),
                UpdateProductInput {
                    variants: Some(Vec::new()),
                    ..UpdateProductInput::default()
                },
            )
            .await
            .expect_err("no variants");

        assert!(matches!(
            err,
            StoreError::Validation(ValidationError::NoVariants)
        ));
        assert!(
            gateway.state.lock().expect("lock").update_inputs.is_empty(),
            "validation failures never reach the gateway"
        );
    }

    #[tokio::test]
    async fn test_update_normalizes_image_positions_before_submission() {
        let updated = product(1, "Classic T-Shirt", vec![]);
        let (store, gateway) = store_with(MockState {
            list: vec![Ok(vec![updated.clone()])],
            update: vec![Ok(updated)],
            ..MockState::default()
        });
        store.refresh().await.expect("load");

        let gapped = |url: &str, position: u32| ProductImage {
            url: url.to_string(),
            alt_text: String::new(),
            position,
        };
        store
            .update(
                ProductId::new(1),
                UpdateProductInput {
                    images: Some(vec![gapped("b.jpg", 5), gapped("a.jpg", 0)]),
                    ..UpdateProductInput::default()
                },
            )
            .await
            .expect("update");

        let (_, sent) = gateway.state.lock().expect("lock").update_inputs.remove(0);
        let positions: Vec<u32> = sent
            .images
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|i| i.position)
            .collect();
        assert_eq!(positions, vec![0, 1], "gapped positions re-densified");
    }

    #[tokio::test]
    async fn test_remove_failure_keeps_record() {
        let existing = product(1, "Classic T-Shirt", vec![]);
        let (store, _) = store_with(MockState {
            list: vec![Ok(vec![existing.clone()])],
            delete: vec![Err(ApiError::NotFound("product 1".to_string()))],
            ..MockState::default()
        });
        store.refresh().await.expect("load");

        store
            .remove(ProductId::new(1))
            .await
            .expect_err("delete fails");

        assert_eq!(store.state().await.items(), &[existing]);
    }

    #[tokio::test]
    async fn test_delete_variant_drops_only_that_variant() {
        let p = product(1, "Classic T-Shirt", vec![variant(10, 1, "A--"), variant(11, 1, "B--")]);
        let (store, _) = store_with(MockState {
            list: vec![Ok(vec![p])],
            delete_variant: vec![Ok(())],
            ..MockState::default()
        });
        store.refresh().await.expect("load");

        store
            .delete_variant(ProductId::new(1), VariantId::new(10))
            .await
            .expect("delete variant");

        let state = store.state().await;
        let skus: Vec<&str> = state
            .find(ProductId::new(1))
            .expect("product")
            .variants
            .iter()
            .map(|v| v.sku.as_str())
            .collect();
        assert_eq!(skus, vec!["B--"]);
    }

    #[tokio::test]
    async fn test_concurrent_toggle_on_same_id_fails_fast() {
        let before = product(1, "Classic T-Shirt", vec![]);
        let mut after = before.clone();
        after.is_active = false;

        let gate = Arc::new(Semaphore::new(0));
        let gateway = MockGateway {
            state: Arc::new(Mutex::new(MockState {
                list: vec![Ok(vec![before.clone()])],
                toggle: vec![Ok(after.clone())],
                ..MockState::default()
            })),
            toggle_gate: Some(Arc::clone(&gate)),
        };
        let store = Arc::new(ProductStore::new(gateway));
        store.refresh().await.expect("load");

        let background = {
            let store = Arc::clone(&store);
            tokio::spawn(async move { store.toggle_active(ProductId::new(1)).await })
        };
        // Let the first toggle claim the id and park on the gateway.
        for _ in 0..4 {
            tokio::task::yield_now().await;
        }
        assert!(store.state().await.is_mutating(ProductId::new(1)));

        // Second mutation on the same id fails fast, no network call.
        let err = store
            .toggle_active(ProductId::new(1))
            .await
            .expect_err("in flight");
        assert!(matches!(err, StoreError::MutationInFlight { .. }));

        // No intermediate flip was ever visible.
        assert_eq!(
            store.state().await.find(ProductId::new(1)),
            Some(&before)
        );

        gate.add_permits(1);
        let toggled = background
            .await
            .expect("join")
            .expect("first toggle resolves");
        assert!(!toggled.is_active);

        let state = store.state().await;
        assert_eq!(state.find(ProductId::new(1)), Some(&after));
        assert!(!state.is_mutating(ProductId::new(1)), "claim released");
    }
}

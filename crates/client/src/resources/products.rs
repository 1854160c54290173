//! Products resource.

use clementine_core::{CreateProductInput, Product, ProductId, UpdateProductInput, VariantId};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::gateway::ProductsGateway;

impl ProductsGateway for ApiClient {
    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        self.get("/products").await
    }

    async fn get_product(&self, id: ProductId) -> Result<Product, ApiError> {
        self.get(&format!("/products/{id}")).await
    }

    async fn create_product(&self, input: &CreateProductInput) -> Result<Product, ApiError> {
        self.post("/products", input).await
    }

    async fn update_product(
        &self,
        id: ProductId,
        input: &UpdateProductInput,
    ) -> Result<Product, ApiError> {
        self.patch(&format!("/products/{id}"), input).await
    }

    async fn delete_product(&self, id: ProductId) -> Result<(), ApiError> {
        self.delete(&format!("/products/{id}")).await
    }

    async fn toggle_product_active(&self, id: ProductId) -> Result<Product, ApiError> {
        self.patch_empty(&format!("/products/{id}/toggle-active"))
            .await
    }

    async fn toggle_variant_active(
        &self,
        id: ProductId,
        variant_id: VariantId,
    ) -> Result<Product, ApiError> {
        self.patch_empty(&format!("/products/{id}/variants/{variant_id}/toggle-active"))
            .await
    }

    async fn delete_variant(&self, id: ProductId, variant_id: VariantId) -> Result<(), ApiError> {
        self.delete(&format!("/products/{id}/variants/{variant_id}"))
            .await
    }
}

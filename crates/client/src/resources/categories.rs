//! Categories resource.

use clementine_core::{Category, CategoryId, CreateCategoryInput, UpdateCategoryInput};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::gateway::CategoriesGateway;

impl CategoriesGateway for ApiClient {
    async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get("/categories").await
    }

    async fn create_category(&self, input: &CreateCategoryInput) -> Result<Category, ApiError> {
        self.post("/categories", input).await
    }

    async fn update_category(
        &self,
        id: CategoryId,
        input: &UpdateCategoryInput,
    ) -> Result<Category, ApiError> {
        self.patch(&format!("/categories/{id}"), input).await
    }

    async fn delete_category(&self, id: CategoryId) -> Result<(), ApiError> {
        self.delete(&format!("/categories/{id}")).await
    }

    async fn toggle_category_active(&self, id: CategoryId) -> Result<Category, ApiError> {
        self.patch_empty(&format!("/categories/{id}/toggle-active"))
            .await
    }
}

//! Attributes resource.

use clementine_core::{Attribute, AttributeId, CreateAttributeInput, UpdateAttributeInput};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::gateway::AttributesGateway;

impl AttributesGateway for ApiClient {
    async fn list_attributes(&self) -> Result<Vec<Attribute>, ApiError> {
        self.get("/attributes").await
    }

    async fn get_attribute(&self, id: AttributeId) -> Result<Attribute, ApiError> {
        self.get(&format!("/attributes/{id}")).await
    }

    async fn create_attribute(&self, input: &CreateAttributeInput) -> Result<Attribute, ApiError> {
        self.post("/attributes", input).await
    }

    async fn update_attribute(
        &self,
        id: AttributeId,
        input: &UpdateAttributeInput,
    ) -> Result<Attribute, ApiError> {
        self.patch(&format!("/attributes/{id}"), input).await
    }

    async fn delete_attribute(&self, id: AttributeId) -> Result<(), ApiError> {
        self.delete(&format!("/attributes/{id}")).await
    }
}

//! Attribute-values resource.

use clementine_core::{
    AttributeId, AttributeValue, AttributeValueId, CreateAttributeValueInput,
    UpdateAttributeValueInput,
};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::gateway::AttributeValuesGateway;

impl AttributeValuesGateway for ApiClient {
    async fn list_attribute_values(&self) -> Result<Vec<AttributeValue>, ApiError> {
        self.get("/attribute-values").await
    }

    async fn list_values_for_attribute(
        &self,
        attribute_id: AttributeId,
    ) -> Result<Vec<AttributeValue>, ApiError> {
        self.get(&format!("/attributes/{attribute_id}/values")).await
    }

    async fn create_attribute_value(
        &self,
        input: &CreateAttributeValueInput,
    ) -> Result<AttributeValue, ApiError> {
        self.post("/attribute-values", input).await
    }

    async fn update_attribute_value(
        &self,
        id: AttributeValueId,
        input: &UpdateAttributeValueInput,
    ) -> Result<AttributeValue, ApiError> {
        self.patch(&format!("/attribute-values/{id}"), input).await
    }

    async fn delete_attribute_value(&self, id: AttributeValueId) -> Result<(), ApiError> {
        self.delete(&format!("/attribute-values/{id}")).await
    }
}

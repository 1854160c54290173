//! Gateway traits: the remote-synchronization contract per resource.
//!
//! Local stores are generic over these traits rather than over [`ApiClient`]
//! directly, so their optimistic-update semantics can be unit-tested against
//! in-memory fakes. [`ApiClient`] implements every trait in
//! [`crate::resources`].
//!
//! [`ApiClient`]: crate::ApiClient

use clementine_core::{
    Attribute, AttributeId, AttributeValue, AttributeValueId, Category, CategoryId,
    CreateAttributeInput, CreateAttributeValueInput, CreateCategoryInput, CreateProductInput,
    Order, OrderId, OrderStatus, Product, ProductId, UpdateAttributeInput,
    UpdateAttributeValueInput, UpdateCategoryInput, UpdateProductInput, User, VariantId,
};

use crate::error::ApiError;

/// Remote contract for the products resource.
#[allow(async_fn_in_trait)]
pub trait ProductsGateway {
    /// `GET /products`
    async fn list_products(&self) -> Result<Vec<Product>, ApiError>;

    /// `GET /products/{id}`
    async fn get_product(&self, id: ProductId) -> Result<Product, ApiError>;

    /// `POST /products`
    async fn create_product(&self, input: &CreateProductInput) -> Result<Product, ApiError>;

    /// `PATCH /products/{id}` - partial update; only provided fields change.
    async fn update_product(
        &self,
        id: ProductId,
        input: &UpdateProductInput,
    ) -> Result<Product, ApiError>;

    /// `DELETE /products/{id}`
    async fn delete_product(&self, id: ProductId) -> Result<(), ApiError>;

    /// `PATCH /products/{id}/toggle-active` - the server computes the new flag.
    async fn toggle_product_active(&self, id: ProductId) -> Result<Product, ApiError>;

    /// `PATCH /products/{id}/variants/{variant_id}/toggle-active`
    async fn toggle_variant_active(
        &self,
        id: ProductId,
        variant_id: VariantId,
    ) -> Result<Product, ApiError>;

    /// `DELETE /products/{id}/variants/{variant_id}`
    async fn delete_variant(&self, id: ProductId, variant_id: VariantId) -> Result<(), ApiError>;
}

/// Remote contract for the categories resource.
#[allow(async_fn_in_trait)]
pub trait CategoriesGateway {
    /// `GET /categories`
    async fn list_categories(&self) -> Result<Vec<Category>, ApiError>;

    /// `POST /categories`
    async fn create_category(&self, input: &CreateCategoryInput) -> Result<Category, ApiError>;

    /// `PATCH /categories/{id}`
    async fn update_category(
        &self,
        id: CategoryId,
        input: &UpdateCategoryInput,
    ) -> Result<Category, ApiError>;

    /// `DELETE /categories/{id}`
    async fn delete_category(&self, id: CategoryId) -> Result<(), ApiError>;

    /// `PATCH /categories/{id}/toggle-active`
    async fn toggle_category_active(&self, id: CategoryId) -> Result<Category, ApiError>;
}

/// Remote contract for the attributes resource.
#[allow(async_fn_in_trait)]
pub trait AttributesGateway {
    /// `GET /attributes`
    async fn list_attributes(&self) -> Result<Vec<Attribute>, ApiError>;

    /// `GET /attributes/{id}`
    async fn get_attribute(&self, id: AttributeId) -> Result<Attribute, ApiError>;

    /// `POST /attributes`
    async fn create_attribute(&self, input: &CreateAttributeInput) -> Result<Attribute, ApiError>;

    /// `PATCH /attributes/{id}`
    async fn update_attribute(
        &self,
        id: AttributeId,
        input: &UpdateAttributeInput,
    ) -> Result<Attribute, ApiError>;

    /// `DELETE /attributes/{id}` - cascades to the attribute's values.
    async fn delete_attribute(&self, id: AttributeId) -> Result<(), ApiError>;
}

/// Remote contract for the attribute-values resource.
#[allow(async_fn_in_trait)]
pub trait AttributeValuesGateway {
    /// `GET /attribute-values`
    async fn list_attribute_values(&self) -> Result<Vec<AttributeValue>, ApiError>;

    /// `GET /attributes/{id}/values`
    async fn list_values_for_attribute(
        &self,
        attribute_id: AttributeId,
    ) -> Result<Vec<AttributeValue>, ApiError>;

    /// `POST /attribute-values`
    async fn create_attribute_value(
        &self,
        input: &CreateAttributeValueInput,
    ) -> Result<AttributeValue, ApiError>;

    /// `PATCH /attribute-values/{id}`
    async fn update_attribute_value(
        &self,
        id: AttributeValueId,
        input: &UpdateAttributeValueInput,
    ) -> Result<AttributeValue, ApiError>;

    /// `DELETE /attribute-values/{id}`
    async fn delete_attribute_value(&self, id: AttributeValueId) -> Result<(), ApiError>;
}

/// Remote contract for the orders resource.
#[allow(async_fn_in_trait)]
pub trait OrdersGateway {
    /// `GET /orders`
    async fn list_orders(&self) -> Result<Vec<Order>, ApiError>;

    /// `GET /orders/{id}` - includes line items.
    async fn get_order(&self, id: OrderId) -> Result<Order, ApiError>;

    /// `PATCH /orders/{id}/status`
    async fn update_order_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<Order, ApiError>;

    /// `GET /orders/{id}/receipt` - PDF bytes.
    async fn order_receipt(&self, id: OrderId) -> Result<Vec<u8>, ApiError>;
}

/// Remote contract for the users resource.
#[allow(async_fn_in_trait)]
pub trait UsersGateway {
    /// `GET /users`
    async fn list_users(&self) -> Result<Vec<User>, ApiError>;
}

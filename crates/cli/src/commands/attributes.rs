//! Attribute commands.
//!
//! # Usage
//!
//! ```bash
//! clementine attributes list
//! clementine attributes create -n "Material"
//! clementine attributes values 3
//! clementine attributes add-value -a 3 -v "Linen"
//! ```

use tracing::info;

use clementine_core::{AttributeId, CreateAttributeInput, CreateAttributeValueInput};
use clementine_store::{AttributeStore, AttributeValueStore};

/// List attribute axes.
pub async fn list() -> Result<(), Box<dyn std::error::Error>> {
    let store = AttributeStore::new(super::client()?);
    store.refresh().await?;

    let state = store.state().await;
    info!("{} attributes", state.len());
    for attribute in state.items() {
        info!("#{} {}", attribute.id, attribute.name);
    }
    Ok(())
}

/// Create an attribute axis.
pub async fn create(name: &str) -> Result<(), Box<dyn std::error::Error>> {
    let store = AttributeStore::new(super::client()?);

    let created = store
        .create(&CreateAttributeInput {
            name: name.to_owned(),
        })
        .await?;

    info!("Attribute #{} ({}) created", created.id, created.name);
    Ok(())
}

/// List the values on one axis.
pub async fn values(id: i32) -> Result<(), Box<dyn std::error::Error>> {
    let store = AttributeValueStore::new(super::client()?);

    let values = store.for_attribute(AttributeId::new(id)).await?;
    info!("{} values on attribute #{id}", values.len());
    for value in values {
        info!("#{} {}", value.id, value.value);
    }
    Ok(())
}

/// Add a value to an axis.
pub async fn add_value(attribute: i32, value: &str) -> Result<(), Box<dyn std::error::Error>> {
    let store = AttributeValueStore::new(super::client()?);

    let created = store
        .create(&CreateAttributeValueInput {
            value: value.to_owned(),
            attribute_id: AttributeId::new(attribute),
        })
        .await?;

    info!(
        "Value #{} ({}) added to attribute #{}",
        created.id, created.value, created.attribute_id
    );
    Ok(())
}

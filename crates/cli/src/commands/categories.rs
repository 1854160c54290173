//! Category commands.
//!
//! # Usage
//!
//! ```bash
//! clementine categories list
//! clementine categories create -n "Summer Sale"
//! clementine categories create -n "Shirts" -p 1
//! clementine categories toggle 2
//! clementine categories delete 2
//! ```

use tracing::info;

use clementine_core::{Category, CategoryId, CreateCategoryInput};
use clementine_store::CategoryStore;

/// List the category tree.
pub async fn list() -> Result<(), Box<dyn std::error::Error>> {
    let store = CategoryStore::new(super::client()?);
    store.refresh().await?;

    let state = store.state().await;
    info!("{} categories", state.len());
    for category in state.items().iter().filter(|c| c.is_top_level()) {
        print_category(category, 0);
    }
    Ok(())
}

fn print_category(category: &Category, depth: usize) {
    info!(
        "{}#{} {} [{}] active={} products={}",
        "  ".repeat(depth),
        category.id,
        category.name,
        category.slug,
        category.is_active,
        category.product_count
    );
    for child in &category.children {
        print_category(child, depth + 1);
    }
}

/// Create a category. The slug is derived from the name unless given.
pub async fn create(
    name: &str,
    slug: Option<&str>,
    parent: Option<i32>,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = CategoryStore::new(super::client()?);

    let created = store
        .create(CreateCategoryInput {
            name: name.to_owned(),
            slug: slug.unwrap_or_default().to_owned(),
            parent_id: parent.map(CategoryId::new),
        })
        .await?;

    info!("Category #{} created with slug [{}]", created.id, created.slug);
    Ok(())
}

/// Flip a category's active flag.
pub async fn toggle(id: i32) -> Result<(), Box<dyn std::error::Error>> {
    let store = CategoryStore::new(super::client()?);
    store.refresh().await?;

    let category = store.toggle_active(CategoryId::new(id)).await?;
    info!("Category #{} is now active={}", category.id, category.is_active);
    Ok(())
}

/// Delete a category.
pub async fn delete(id: i32) -> Result<(), Box<dyn std::error::Error>> {
    let store = CategoryStore::new(super::client()?);
    store.refresh().await?;

    store.remove(CategoryId::new(id)).await?;
    info!("Category #{id} deleted");
    Ok(())
}

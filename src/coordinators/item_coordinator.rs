use std::sync::Arc;

use crate::app_data::AppData;
use crate::services::normalize_title;
use crate::stores::ItemStore;
use crate::types::internal::{Item, ItemFailure, ItemId, ItemOutcome, TitleInput};

/// Item coordinator that runs one CRUD use case per call
///
/// Holds no state besides the injected store. Checks run in a fixed order:
/// id shape, then title, then the store, so rejected input never costs a
/// database round trip. Whatever the store returns is classified into an
/// `ItemFailure` here; nothing unclassified reaches the API layer.
pub struct ItemCoordinator {
    item_store: Arc<ItemStore>,
}

impl ItemCoordinator {
    /// Create ItemCoordinator from AppData
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self::with_store(app_data.item_store.clone())
    }

    pub fn with_store(item_store: Arc<ItemStore>) -> Self {
        Self { item_store }
    }

    /// List all items, newest first
    pub async fn list_items(&self) -> ItemOutcome<Vec<Item>> {
        self.item_store
            .list()
            .await
            .map_err(|e| ItemFailure::from_internal_error(e, "Failed to fetch items."))
    }

    /// Create an item from a raw title
    pub async fn create_item(&self, title: TitleInput) -> ItemOutcome<Item> {
        let title = normalize_title(title).ok_or_else(|| {
            tracing::debug!("Rejected create: title missing or blank");
            ItemFailure::title_required()
        })?;

        self.item_store
            .create(&title)
            .await
            .map_err(|e| ItemFailure::from_internal_error(e, "Failed to create item."))
    }

    /// Replace the title of the item named by `raw_id`
    pub async fn update_item(&self, raw_id: &str, title: TitleInput) -> ItemOutcome<Item> {
        let id = parse_id(raw_id)?;

        let title = normalize_title(title).ok_or_else(|| {
            tracing::debug!("Rejected update of {}: title missing or blank", id);
            ItemFailure::title_required()
        })?;

        self.item_store
            .replace(&id, &title)
            .await
            .map_err(|e| ItemFailure::from_internal_error(e, "Failed to update item."))
    }

    /// Delete the item named by `raw_id`
    pub async fn delete_item(&self, raw_id: &str) -> ItemOutcome<()> {
        let id = parse_id(raw_id)?;

        self.item_store
            .delete(&id)
            .await
            .map_err(|e| ItemFailure::from_internal_error(e, "Failed to delete item."))
    }
}

fn parse_id(raw_id: &str) -> ItemOutcome<ItemId> {
    ItemId::parse(raw_id).ok_or_else(|| {
        tracing::debug!("Rejected malformed item id: {:?}", raw_id);
        ItemFailure::invalid_id()
    })
}

use std::sync::Arc;

use poem_openapi::{param::Path, payload::Json, OpenApi, Tags};

use crate::coordinators::ItemCoordinator;
use crate::errors::ItemsError;
use crate::types::dto::items::{CreateItemResponse, DeleteItemResponse, ItemRequest, ItemResponse};
use crate::types::internal::TitleInput;

/// Items API
pub struct ItemsApi {
    coordinator: Arc<ItemCoordinator>,
}

impl ItemsApi {
    /// Create a new ItemsApi with the given ItemCoordinator
    pub fn new(coordinator: Arc<ItemCoordinator>) -> Self {
        Self { coordinator }
    }
}

/// API tags for item endpoints
#[derive(Tags)]
enum ItemTags {
    /// Item management endpoints
    Items,
}

#[OpenApi]
impl ItemsApi {
    /// List all items, most recently created first
    #[oai(path = "/items", method = "get", tag = "ItemTags::Items")]
    async fn list_items(&self) -> Result<Json<Vec<ItemResponse>>, ItemsError> {
        let items = self.coordinator.list_items().await?;
        Ok(Json(items.into_iter().map(ItemResponse::from).collect()))
    }

    /// Create a new item
    ///
    /// The title is trimmed; blank titles and titles over 120 characters are rejected
    #[oai(path = "/items", method = "post", tag = "ItemTags::Items")]
    async fn create_item(&self, body: Json<ItemRequest>) -> Result<CreateItemResponse, ItemsError> {
        let title = TitleInput::from(body.0.title);
        let item = self.coordinator.create_item(title).await?;
        Ok(CreateItemResponse::Created(Json(item.into())))
    }

    /// Replace the title of an item
    #[oai(path = "/items/:id", method = "put", tag = "ItemTags::Items")]
    async fn update_item(
        &self,
        id: Path<String>,
        body: Json<ItemRequest>,
    ) -> Result<Json<ItemResponse>, ItemsError> {
        let title = TitleInput::from(body.0.title);
        let item = self.coordinator.update_item(&id.0, title).await?;
        Ok(Json(item.into()))
    }

    /// Delete an item
    #[oai(path = "/items/:id", method = "delete", tag = "ItemTags::Items")]
    async fn delete_item(&self, id: Path<String>) -> Result<DeleteItemResponse, ItemsError> {
        self.coordinator.delete_item(&id.0).await?;
        Ok(DeleteItemResponse::Deleted)
    }
}

use chrono::{DateTime, SecondsFormat, Utc};
use poem_openapi::{payload::Json, ApiResponse, Object};

use crate::types::internal::Item;

/// Request body for creating or replacing an item
///
/// `title` is deliberately untyped here; the coordinator decides what counts
/// as a title.
#[derive(Object, Debug)]
pub struct ItemRequest {
    /// Title of the item (1-120 characters after trimming)
    pub title: Option<serde_json::Value>,
}

/// Response model representing an item
#[derive(Object, Debug, Clone, PartialEq)]
#[oai(rename_all = "camelCase")]
pub struct ItemResponse {
    /// Unique identifier for the item
    pub id: String,

    /// Trimmed title
    pub title: String,

    /// Creation time (ISO 8601, UTC)
    pub created_at: String,

    /// Last modification time (ISO 8601, UTC)
    pub updated_at: String,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id.to_string(),
            title: item.title,
            created_at: to_iso8601(&item.created_at),
            updated_at: to_iso8601(&item.updated_at),
        }
    }
}

fn to_iso8601(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[derive(ApiResponse, Debug)]
pub enum CreateItemResponse {
    /// Item created
    #[oai(status = 201)]
    Created(Json<ItemResponse>),
}

#[derive(ApiResponse, Debug)]
pub enum DeleteItemResponse {
    /// Item deleted, empty body
    #[oai(status = 204)]
    Deleted,
}

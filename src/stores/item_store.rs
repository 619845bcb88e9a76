use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set,
};

use crate::errors::internal::ItemError;
use crate::errors::InternalError;
use crate::stores::clock::MonotonicClock;
use crate::types::db::item::{self, Entity as ItemEntity};
use crate::types::internal::{Item, ItemId};

/// Longest title the store will persist, in characters
pub const MAX_TITLE_LENGTH: usize = 120;

/// Repository for item records
///
/// Owns the durable item set. Every write re-validates the title on its own,
/// independent of any check done by callers, and stamps timestamps from a
/// monotonic clock so creation order and update order are never ambiguous.
pub struct ItemStore {
    db: DatabaseConnection,
    clock: MonotonicClock,
}

impl ItemStore {
    /// Create a new ItemStore with the given database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            clock: MonotonicClock::new(),
        }
    }

    /// List all items, most recently created first
    ///
    /// # Errors
    ///
    /// Returns `InternalError::Database` when the query fails
    pub async fn list(&self) -> Result<Vec<Item>, InternalError> {
        let models = ItemEntity::find()
            .order_by_desc(item::Column::CreatedAt)
            .order_by_desc(item::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_items", e))?;

        models.into_iter().map(Item::try_from).collect()
    }

    /// Persist a new item
    ///
    /// Assigns a fresh id and sets both timestamps to the same instant.
    ///
    /// # Errors
    ///
    /// * `ItemError::ConstraintViolation` - title is blank or too long
    /// * `InternalError::Database` - insert failed
    pub async fn create(&self, title: &str) -> Result<Item, InternalError> {
        let title = check_title(title)?;
        let now = self.clock.now_micros();

        let new_item = item::ActiveModel {
            id: Set(ItemId::generate().to_string()),
            title: Set(title),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = new_item
            .insert(&self.db)
            .await
            .map_err(|e| InternalError::database("create_item", e))?;

        tracing::debug!("Created item {}", model.id);

        Item::try_from(model)
    }

    /// Replace the title of an existing item
    ///
    /// Refreshes `updated_at`; `id` and `created_at` are never touched.
    /// Concurrent replaces of the same id are last-write-wins.
    ///
    /// # Errors
    ///
    /// * `ItemError::ConstraintViolation` - title is blank or too long
    /// * `ItemError::NotFound` - no item with this id (including one deleted
    ///   between the lookup and the write)
    /// * `InternalError::Database` - query or update failed
    pub async fn replace(&self, id: &ItemId, title: &str) -> Result<Item, InternalError> {
        let title = check_title(title)?;

        let existing = ItemEntity::find_by_id(id.as_str())
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_item_for_replace", e))?
            .ok_or_else(|| ItemError::not_found(id.as_str()))?;

        let mut active_model: item::ActiveModel = existing.into();
        active_model.title = Set(title);
        active_model.updated_at = Set(self.clock.now_micros());

        let model = match active_model.update(&self.db).await {
            Ok(model) => model,
            Err(DbErr::RecordNotUpdated) => return Err(ItemError::not_found(id.as_str()).into()),
            Err(e) => return Err(InternalError::database("replace_item", e)),
        };

        tracing::debug!("Replaced title of item {}", model.id);

        Item::try_from(model)
    }

    /// Delete an item
    ///
    /// # Errors
    ///
    /// * `ItemError::NotFound` - nothing was deleted
    /// * `InternalError::Database` - delete failed
    pub async fn delete(&self, id: &ItemId) -> Result<(), InternalError> {
        let result = ItemEntity::delete_by_id(id.as_str())
            .exec(&self.db)
            .await
            .map_err(|e| InternalError::database("delete_item", e))?;

        if result.rows_affected == 0 {
            return Err(ItemError::not_found(id.as_str()).into());
        }

        tracing::debug!("Deleted item {}", id);

        Ok(())
    }
}

/// Store-side title rule: trimmed length between 1 and `MAX_TITLE_LENGTH`
fn check_title(title: &str) -> Result<String, ItemError> {
    let title = title.trim();

    if title.is_empty() {
        return Err(ItemError::constraint_violation("title", "Title cannot be empty."));
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(ItemError::constraint_violation(
            "title",
            format!("Title must be at most {} characters.", MAX_TITLE_LENGTH),
        ));
    }

    Ok(title.to_string())
}

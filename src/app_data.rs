use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::stores::ItemStore;

/// Centralized application data following the main-owned stores pattern
///
/// Created once in main.rs and shared with coordinators. Nothing in the
/// crate looks up a connection on its own; the store handle built here is
/// the only path to the database.
///
/// ```text
/// main.rs
///   ↓
/// AppData::init(db)
///   └─ item_store (Arc<ItemStore>)
///   ↓ wrapped in Arc<AppData>
///   └─ ItemCoordinator::new(app_data) → extracts item_store
/// ```
pub struct AppData {
    pub item_store: Arc<ItemStore>,
}

impl AppData {
    /// Initialize all application data
    ///
    /// The database should be connected and migrated before calling this.
    pub fn init(db: DatabaseConnection) -> Self {
        tracing::debug!("Creating stores...");
        let item_store = Arc::new(ItemStore::new(db));

        Self { item_store }
    }
}

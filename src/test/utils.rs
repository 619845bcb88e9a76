// Test utilities shared across unit tests
// Only compiled when running tests

use std::sync::Arc;

use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};

use crate::app_data::AppData;
use crate::coordinators::ItemCoordinator;
use crate::stores::ItemStore;

/// Creates an in-memory database with migrations applied
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Creates an in-memory database without the items table
///
/// Every store query against it fails, which stands in for an unavailable
/// store. It also proves a code path never reached the store: if it had,
/// the result would be an internal failure instead of the expected one.
pub async fn setup_broken_db() -> DatabaseConnection {
    Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database")
}

/// Creates AppData over a migrated in-memory database
pub async fn setup_test_app_data() -> Arc<AppData> {
    Arc::new(AppData::init(setup_test_db().await))
}

/// Creates a coordinator and its store over a migrated in-memory database
pub async fn setup_test_coordinator() -> (Arc<ItemStore>, ItemCoordinator) {
    let app_data = setup_test_app_data().await;
    let item_store = app_data.item_store.clone();
    (item_store, ItemCoordinator::new(app_data))
}

/// Creates a coordinator whose store always fails
pub async fn setup_broken_coordinator() -> ItemCoordinator {
    let db = setup_broken_db().await;
    ItemCoordinator::with_store(Arc::new(ItemStore::new(db)))
}

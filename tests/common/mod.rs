// Common test utilities for integration tests

use std::sync::Arc;

use itemstash_backend::api::build_app;
use itemstash_backend::app_data::AppData;
use itemstash_backend::config::{EnvironmentProvider, ServerSettings};
use migration::{Migrator, MigratorTrait};
use poem::Endpoint;
use sea_orm::{Database, DatabaseConnection};

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

/// Creates an in-memory database that was never migrated
#[allow(dead_code)]
pub async fn setup_unmigrated_db() -> DatabaseConnection {
    Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database")
}

/// Environment with nothing set, so every setting takes its default
struct EmptyEnvironment;

impl EnvironmentProvider for EmptyEnvironment {
    fn get_var(&self, _key: &str) -> Option<String> {
        None
    }
}

/// Builds the full HTTP application over a fresh in-memory database
#[allow(dead_code)]
pub async fn setup_test_app() -> impl Endpoint {
    let db = setup_test_db().await;
    let settings = ServerSettings::from_env_provider(Arc::new(EmptyEnvironment))
        .expect("Default settings should load");
    build_app(Arc::new(AppData::init(db)), &settings)
}

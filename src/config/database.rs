use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::config::ServerSettings;
use crate::errors::internal::DatabaseError;
use crate::errors::InternalError;

/// Connect to the item database
///
/// Connect and acquire timeouts come from the settings, so a stalled store
/// surfaces as a database error instead of a hung request.
/// Does NOT run migrations - call `migrate_database()` separately.
///
/// # Returns
/// * `Ok(DatabaseConnection)` - Connection established successfully
/// * `Err(InternalError)` - Connection failed
pub async fn init_database(settings: &ServerSettings) -> Result<DatabaseConnection, InternalError> {
    let mut options = ConnectOptions::new(settings.database_url().to_string());
    options
        .connect_timeout(settings.database_timeout())
        .acquire_timeout(settings.database_timeout())
        .sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .map_err(|source| DatabaseError::Connect { source })?;

    tracing::debug!("Connected to item database");

    Ok(db)
}

/// Run migrations on the item database
///
/// # Returns
/// * `Ok(())` - Migrations completed successfully
/// * `Err(InternalError)` - Migration failed
pub async fn migrate_database(db: &DatabaseConnection) -> Result<(), InternalError> {
    Migrator::up(db, None)
        .await
        .map_err(|source| DatabaseError::Migration { source })?;

    tracing::debug!("Item database migrations completed");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MockEnvironment;
    use crate::stores::ItemStore;
    use std::sync::Arc;

    fn memory_settings() -> ServerSettings {
        let env = MockEnvironment::empty().with_var("DATABASE_URL", "sqlite::memory:");
        ServerSettings::from_env_provider(Arc::new(env)).unwrap()
    }

    #[tokio::test]
    async fn test_init_and_migrate_database() {
        let db = init_database(&memory_settings()).await.unwrap();
        migrate_database(&db).await.unwrap();

        let store = ItemStore::new(db);
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_migrations_are_idempotent() {
        let db = init_database(&memory_settings()).await.unwrap();

        migrate_database(&db).await.unwrap();
        migrate_database(&db).await.unwrap();
    }

    #[tokio::test]
    async fn test_bad_url_is_connect_error() {
        let env = MockEnvironment::empty().with_var("DATABASE_URL", "nosuchdriver://nowhere");
        let settings = ServerSettings::from_env_provider(Arc::new(env)).unwrap();

        let result = init_database(&settings).await;
        assert!(matches!(
            result,
            Err(InternalError::Database(DatabaseError::Connect { .. }))
        ));
    }
}

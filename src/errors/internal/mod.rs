use thiserror::Error;

pub mod database;
pub mod item;

pub use database::DatabaseError;
pub use item::ItemError;

/// Internal error type for store and coordinator operations
///
/// Separates infrastructure errors (database, parse) from domain errors
/// (item). Never rendered directly: the item coordinator classifies it into
/// an `ItemFailure` before anything reaches the API layer.
#[derive(Error, Debug)]
pub enum InternalError {
    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error("Parse error: failed to parse {value_type}: {message}")]
    Parse {
        value_type: String,
        message: String,
    },

    #[error(transparent)]
    Item(#[from] ItemError),
}

impl InternalError {
    pub fn database(operation: &str, source: sea_orm::DbErr) -> InternalError {
        InternalError::Database(DatabaseError::Operation {
            operation: operation.to_string(),
            source,
        })
    }

    pub fn parse(value_type: impl Into<String>, message: impl Into<String>) -> InternalError {
        InternalError::Parse {
            value_type: value_type.into(),
            message: message.into(),
        }
    }

    /// True for failures of the storage layer itself rather than of the request
    pub fn is_storage_failure(&self) -> bool {
        matches!(self, InternalError::Database(_) | InternalError::Parse { .. })
    }
}

use crate::errors::internal::{InternalError, ItemError};

/// Classified failure of one item use case
///
/// Every error the coordinator can produce is one of these three kinds.
/// Messages are safe to show to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemFailure {
    /// Caller input broke a documented constraint; resubmitting fixed input helps
    ValidationFailed(String),
    /// Well-formed id that names no stored item
    NotFound,
    /// Storage or other internal fault; details were logged, not returned
    InternalFailure(String),
}

pub type ItemOutcome<T> = Result<T, ItemFailure>;

impl ItemFailure {
    pub fn title_required() -> Self {
        ItemFailure::ValidationFailed("Title is required.".to_string())
    }

    pub fn invalid_id() -> Self {
        ItemFailure::ValidationFailed("Invalid item id.".to_string())
    }

    /// Reclassify a store error
    ///
    /// Domain errors map onto their outcome. Everything else is logged here
    /// and replaced by `InternalFailure(message)` so no storage detail leaks.
    pub fn from_internal_error(err: InternalError, message: &str) -> Self {
        if err.is_storage_failure() {
            tracing::error!("{} Storage failure: {}", message, err);
            return ItemFailure::InternalFailure(message.to_string());
        }

        match err {
            InternalError::Item(ItemError::NotFound { id }) => {
                tracing::debug!("Item not found: {}", id);
                ItemFailure::NotFound
            }
            InternalError::Item(ItemError::ConstraintViolation { field, reason }) => {
                tracing::debug!("Store rejected {}: {}", field, reason);
                ItemFailure::ValidationFailed(reason)
            }
            err => {
                tracing::error!("{} Unclassified error: {}", message, err);
                ItemFailure::InternalFailure(message.to_string())
            }
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ItemFailure::ValidationFailed(message) => message,
            ItemFailure::NotFound => "Item not found.",
            ItemFailure::InternalFailure(message) => message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::DbErr;

    #[test]
    fn test_not_found_is_classified() {
        let err = InternalError::from(ItemError::not_found("0123456789abcdef0123456789abcdef"));
        let failure = ItemFailure::from_internal_error(err, "Failed to update item.");

        assert_eq!(failure, ItemFailure::NotFound);
        assert_eq!(failure.message(), "Item not found.");
    }

    #[test]
    fn test_constraint_violation_becomes_validation_failure() {
        let err = InternalError::from(ItemError::constraint_violation(
            "title",
            "Title must be at most 120 characters.",
        ));
        let failure = ItemFailure::from_internal_error(err, "Failed to create item.");

        assert_eq!(
            failure,
            ItemFailure::ValidationFailed("Title must be at most 120 characters.".to_string())
        );
    }

    #[test]
    fn test_database_error_hides_detail() {
        let err = InternalError::database("list_items", DbErr::Custom("disk I/O error".to_string()));
        let failure = ItemFailure::from_internal_error(err, "Failed to fetch items.");

        assert_eq!(failure, ItemFailure::InternalFailure("Failed to fetch items.".to_string()));
        assert!(!failure.message().contains("disk"));
    }

    #[test]
    fn test_parse_error_is_internal_failure() {
        let err = InternalError::parse("timestamp", "out of range");
        let failure = ItemFailure::from_internal_error(err, "Failed to fetch items.");

        assert!(matches!(failure, ItemFailure::InternalFailure(_)));
    }

    #[test]
    fn test_connect_failure_is_internal_failure() {
        let err = InternalError::from(crate::errors::internal::DatabaseError::Connect {
            source: DbErr::Custom("unreachable".to_string()),
        });
        let failure = ItemFailure::from_internal_error(err, "Failed to delete item.");

        assert_eq!(failure, ItemFailure::InternalFailure("Failed to delete item.".to_string()));
    }
}

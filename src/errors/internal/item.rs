use thiserror::Error;

/// Item store specific errors
#[derive(Error, Debug)]
pub enum ItemError {
    /// No stored item carries this id
    #[error("Item not found: {id}")]
    NotFound { id: String },

    /// A field failed the store's own validation
    #[error("Item constraint violated on {field}: {reason}")]
    ConstraintViolation {
        field: &'static str,
        reason: String,
    },
}

impl ItemError {
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    pub fn constraint_violation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::ConstraintViolation {
            field,
            reason: reason.into(),
        }
    }
}

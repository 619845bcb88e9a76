use std::fmt;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::errors::InternalError;
use crate::services::item_validator::is_valid_item_id;
use crate::types::db::item;

/// Store-assigned item identifier: 32 lowercase hex characters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemId(String);

impl ItemId {
    /// Mint a fresh identifier for a new record
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    /// Accept a caller-supplied identifier if it has the right shape
    ///
    /// Hex digits are accepted in either case and canonicalized to lowercase,
    /// which is how the store writes them.
    pub fn parse(raw: &str) -> Option<Self> {
        if is_valid_item_id(raw) {
            Some(Self(raw.to_ascii_lowercase()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A stored item as the rest of the crate sees it
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<item::Model> for Item {
    type Error = InternalError;

    fn try_from(model: item::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            created_at: timestamp_from_micros(model.created_at)?,
            updated_at: timestamp_from_micros(model.updated_at)?,
            id: ItemId(model.id),
            title: model.title,
        })
    }
}

fn timestamp_from_micros(micros: i64) -> Result<DateTime<Utc>, InternalError> {
    DateTime::<Utc>::from_timestamp_micros(micros)
        .ok_or_else(|| InternalError::parse("timestamp", format!("{} is out of range", micros)))
}

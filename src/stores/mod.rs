// Stores layer - Data access and repository pattern
pub mod clock;
pub mod item_store;

pub use item_store::{ItemStore, MAX_TITLE_LENGTH};

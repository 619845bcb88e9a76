// Domain types shared by stores, coordinators and the API layer
pub mod item;
pub mod item_outcome;
pub mod title_input;

pub use item::{Item, ItemId};
pub use item_outcome::{ItemFailure, ItemOutcome};
pub use title_input::TitleInput;

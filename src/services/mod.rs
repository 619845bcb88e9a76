// Services layer - Input validation rules
pub mod item_validator;

pub use item_validator::{is_valid_item_id, normalize_title};

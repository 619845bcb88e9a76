use crate::types::internal::TitleInput;

/// Length of a store identifier in hex characters
pub const ITEM_ID_LENGTH: usize = 32;

/// Check whether a caller-supplied string has the shape of an item id
///
/// Only the syntax is checked (exactly 32 ASCII hex digits, either case);
/// whether an item with this id exists is the store's business.
pub fn is_valid_item_id(raw: &str) -> bool {
    raw.len() == ITEM_ID_LENGTH && raw.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Turn a raw title into its canonical form
///
/// Rejects anything that is not a string, then trims surrounding whitespace
/// and rejects an empty result. The upper length bound is left to the item
/// store, which validates every write on its own.
///
/// # Returns
/// * `Some(title)` - trimmed, non-empty title
/// * `None` - input cannot be a title
pub fn normalize_title(input: TitleInput) -> Option<String> {
    let TitleInput::Text(text) = input else {
        return None;
    };

    let title = text.trim();
    if title.is_empty() {
        None
    } else {
        Some(title.to_string())
    }
}

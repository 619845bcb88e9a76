use serde_json::Value;

/// The `title` field of a create/update body, as parsed at the boundary
///
/// The API accepts any JSON value for `title`; this is the tagged form the
/// coordinator receives, so a non-string title is representable and gets
/// rejected by the title normalizer rather than by the JSON parser.
#[derive(Debug, Clone, PartialEq)]
pub enum TitleInput {
    /// A JSON string, untrimmed
    Text(String),
    /// Field absent or `null`
    Missing,
    /// Present but not a string (number, bool, array, object)
    NotText,
}

impl From<Option<Value>> for TitleInput {
    fn from(value: Option<Value>) -> Self {
        match value {
            None | Some(Value::Null) => TitleInput::Missing,
            Some(Value::String(text)) => TitleInput::Text(text),
            Some(_) => TitleInput::NotText,
        }
    }
}

impl From<&str> for TitleInput {
    fn from(value: &str) -> Self {
        TitleInput::Text(value.to_string())
    }
}

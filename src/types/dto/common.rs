use poem_openapi::Object;

/// Response model for health check endpoint
#[derive(Object, Debug)]
pub struct HealthResponse {
    /// Status message
    pub message: String,

    /// Timestamp of the health check (ISO 8601 format)
    pub timestamp: String,
}

/// Error body returned by every failing endpoint
#[derive(Object, Debug, Clone, PartialEq)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

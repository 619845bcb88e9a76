use poem_openapi::{payload::Json, ApiResponse};
use std::fmt;

use crate::types::dto::common::ErrorResponse;
use crate::types::internal::ItemFailure;

/// Item endpoint error responses
#[derive(ApiResponse, Debug)]
pub enum ItemsError {
    /// Invalid item id or title
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),

    /// Item not found
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl ItemsError {
    /// HTTP status code of this response
    pub fn status_code(&self) -> u16 {
        match self {
            ItemsError::BadRequest(_) => 400,
            ItemsError::NotFound(_) => 404,
            ItemsError::InternalError(_) => 500,
        }
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> &str {
        match self {
            ItemsError::BadRequest(json) => &json.0.message,
            ItemsError::NotFound(json) => &json.0.message,
            ItemsError::InternalError(json) => &json.0.message,
        }
    }
}

impl From<ItemFailure> for ItemsError {
    fn from(failure: ItemFailure) -> Self {
        let body = Json(ErrorResponse::new(failure.message()));
        match failure {
            ItemFailure::ValidationFailed(_) => ItemsError::BadRequest(body),
            ItemFailure::NotFound => ItemsError::NotFound(body),
            ItemFailure::InternalFailure(_) => ItemsError::InternalError(body),
        }
    }
}

impl fmt::Display for ItemsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.status_code(), self.message())
    }
}

use poem::error::{MethodNotAllowedError, NotFoundError};
use poem::http::StatusCode;
use poem::{IntoResponse, Response};
use poem_openapi::error::{ContentTypeError, ParseRequestPayloadError};
use serde_json::json;

// Errors raised by the framework before any handler runs. They get the same
// `{ "message": ... }` body as handler errors.

/// Unmatched route
pub async fn route_not_found(_: NotFoundError) -> Response {
    error_response(StatusCode::NOT_FOUND, "Route not found.")
}

/// Known path with a method it does not serve; treated as an unmatched route
pub async fn method_not_allowed(_: MethodNotAllowedError) -> Response {
    error_response(StatusCode::NOT_FOUND, "Route not found.")
}

/// Body that is not JSON or not a JSON object
pub async fn invalid_payload(err: ParseRequestPayloadError) -> Response {
    tracing::debug!("Rejected request body: {}", err);
    error_response(StatusCode::BAD_REQUEST, "Invalid request body.")
}

/// Missing or non-JSON content type on a request that needs a body
pub async fn invalid_content_type(err: ContentTypeError) -> Response {
    tracing::debug!("Rejected content type: {}", err);
    error_response(StatusCode::BAD_REQUEST, "Invalid request body.")
}

fn error_response(status: StatusCode, message: &str) -> Response {
    poem::web::Json(json!({ "message": message }))
        .with_status(status)
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_of(response: Response) -> serde_json::Value {
        let body = response.into_body().into_string().await.unwrap();
        serde_json::from_str(&body).unwrap()
    }

    #[tokio::test]
    async fn test_route_not_found_body() {
        let response = route_not_found(NotFoundError).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_of(response).await, json!({ "message": "Route not found." }));
    }

    #[tokio::test]
    async fn test_method_not_allowed_reads_as_route_not_found() {
        let response = method_not_allowed(MethodNotAllowedError).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_of(response).await, json!({ "message": "Route not found." }));
    }

    #[tokio::test]
    async fn test_invalid_payload_body() {
        let err = ParseRequestPayloadError {
            reason: "expected object".to_string(),
        };
        let response = invalid_payload(err).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_of(response).await, json!({ "message": "Invalid request body." }));
    }
}

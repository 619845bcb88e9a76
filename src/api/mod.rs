// API layer - HTTP endpoints
pub mod fallback;
pub mod health;
pub mod items;

use std::sync::Arc;

use poem::http::Method;
use poem::middleware::{Cors, Tracing};
use poem::{Endpoint, EndpointExt, Route};
use poem_openapi::OpenApiService;

pub use health::HealthApi;
pub use items::ItemsApi;

use crate::app_data::AppData;
use crate::config::ServerSettings;
use crate::coordinators::ItemCoordinator;

/// Assemble the HTTP application
///
/// API under `/api`, Swagger UI under `/swagger`. Framework errors
/// (unmatched route or method, unparsable body) are rendered as `{ "message": ... }`.
pub fn build_app(app_data: Arc<AppData>, settings: &ServerSettings) -> impl Endpoint {
    let coordinator = Arc::new(ItemCoordinator::new(app_data));
    let items_api = ItemsApi::new(coordinator);

    let api_service = OpenApiService::new((HealthApi, items_api), "Items API", env!("CARGO_PKG_VERSION"))
        .server(format!("http://localhost:{}/api", settings.server_port()));
    let ui = api_service.swagger_ui();

    let cors = Cors::new()
        .allow_origin(settings.client_origin())
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_header("content-type");

    Route::new()
        .nest("/api", api_service)
        .nest("/swagger", ui)
        .catch_error(fallback::route_not_found)
        .catch_error(fallback::method_not_allowed)
        .catch_error(fallback::invalid_payload)
        .catch_error(fallback::invalid_content_type)
        .with(cors)
        .with(Tracing)
}

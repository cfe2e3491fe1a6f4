// API layer - HTTP endpoints
pub mod health;
pub mod items;

pub use health::HealthApi;
pub use items::ItemsApi;

use poem::middleware::{Cors, Tracing};
use poem::{Endpoint, EndpointExt, Route};
use poem_openapi::OpenApiService;

use crate::app_data::AppData;
use crate::contracts;

pub const API_TITLE: &str = "Itty Bitty Context API";
pub const API_VERSION: &str = "1.0";
pub const API_DESCRIPTION: &str = "A well-structured template API for agentic development";

/// All OpenAPI operations served under `/api`
pub type ApiService = OpenApiService<(HealthApi, ItemsApi), ()>;

const CORS_METHODS: [&str; 7] = ["GET", "HEAD", "PUT", "PATCH", "POST", "DELETE", "OPTIONS"];

/// Build the OpenAPI service from the route table
///
/// The same value serves requests and renders the OpenAPI document, so the
/// published schema cannot drift from the handlers.
pub fn build_api_service(app_data: &AppData) -> ApiService {
    let items_api = ItemsApi::new(app_data.item_store.clone());

    OpenApiService::new((HealthApi, items_api), API_TITLE, API_VERSION)
        .description(API_DESCRIPTION)
        .server(format!(
            "{}{}",
            app_data.settings.public_url(),
            contracts::API_PREFIX
        ))
}

/// Compose the full application: API, docs, CORS and request tracing
pub fn build_app(app_data: &AppData) -> impl Endpoint {
    let api_service = build_api_service(app_data);
    let ui = api_service.swagger_ui();
    let spec = api_service.spec_endpoint();

    Route::new()
        .at(contracts::DOCS_JSON, spec)
        .nest(contracts::DOCS, ui)
        .nest(contracts::API_PREFIX, api_service)
        .with(build_cors(app_data.settings.cors_origins()))
        .with(Tracing)
}

/// CORS policy for the configured frontend origins
///
/// An empty origin list leaves every origin allowed.
fn build_cors(origins: &[String]) -> Cors {
    origins
        .iter()
        .fold(Cors::new(), |cors, origin| cors.allow_origin(origin.as_str()))
        .allow_methods(CORS_METHODS)
        .allow_credentials(true)
}

use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

use crate::state::AppState;
use domain_storefront::{StorefrontRepository, StorefrontService, handlers};

pub mod diagnostics;

/// Compose the full application router.
///
/// Storefront endpoints live under `/api`; the root banner and the
/// `/test` diagnostic sit at the top level.
pub fn routes<R: StorefrontRepository + 'static>(
    service: StorefrontService<R>,
    state: AppState,
) -> Router {
    let api = Router::new()
        .route("/hello", get(hello))
        .merge(handlers::router(service));

    Router::new()
        .route("/", get(root))
        .nest("/api", api)
        .merge(diagnostics::router(state))
        .route("/api-docs/openapi.json", get(openapi_json))
}

/// Liveness banner
#[utoipa::path(
    get,
    path = "/",
    tag = "Meta",
    responses(
        (status = 200, description = "Service is up")
    )
)]
pub async fn root() -> Json<Value> {
    Json(json!({ "message": "Grosir Backend is running" }))
}

/// Static greeting used by frontend connectivity checks
#[utoipa::path(
    get,
    path = "/api/hello",
    tag = "Meta",
    responses(
        (status = 200, description = "Greeting")
    )
)]
pub async fn hello() -> Json<Value> {
    Json(json!({ "message": "Hello from Grosir API" }))
}

/// Serve the generated OpenAPI document
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    use utoipa::OpenApi;
    Json(crate::openapi::ApiDoc::openapi())
}

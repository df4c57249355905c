//! Store-connectivity diagnostic endpoint.

use axum::{Json, Router, extract::State, routing::get};
use serde_json::{Value, json};

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/test", get(test_database))
        .with_state(state)
}

fn env_presence(key: &str) -> &'static str {
    if std::env::var(key).is_ok() {
        "set"
    } else {
        "not set"
    }
}

/// Report whether the backend can reach its document store.
///
/// Always returns 200; connectivity problems are described in the body
/// rather than surfaced as errors, so the endpoint stays usable for
/// debugging a broken deployment.
#[utoipa::path(
    get,
    path = "/test",
    tag = "Meta",
    responses(
        (status = 200, description = "Diagnostic report")
    )
)]
pub async fn test_database(State(state): State<AppState>) -> Json<Value> {
    let mut report = json!({
        "backend": "running",
        "database": "not available",
        "connection_status": "not connected",
        "collections": [],
        "database_url": env_presence("DATABASE_URL"),
        "database_name": env_presence("DATABASE_NAME"),
    });

    if state.store.is_available() {
        report["database"] = json!("available");
        if let Some(name) = state.store.name() {
            report["database_name_resolved"] = json!(name);
        }

        match state.store.list_collection_names().await {
            Ok(mut collections) => {
                collections.truncate(10);
                report["database"] = json!("connected and working");
                report["connection_status"] = json!("connected");
                report["collections"] = json!(collections);
            }
            Err(e) => {
                report["database"] = json!(format!("connected but error: {}", e));
            }
        }
    }

    Json(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use database::DocumentStore;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_diagnostics_reports_unavailable_store() {
        let app = router(AppState {
            store: DocumentStore::unavailable(),
        });

        let response = app
            .oneshot(Request::builder().uri("/test").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body["backend"], "running");
        assert_eq!(body["database"], "not available");
        assert_eq!(body["connection_status"], "not connected");
        assert_eq!(body["collections"], json!([]));
        assert!(body["database_url"] == "set" || body["database_url"] == "not set");
    }
}

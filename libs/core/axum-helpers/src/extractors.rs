//! Custom extractors for Axum handlers.

use crate::errors::ErrorResponse;
use axum::{
    extract::{FromRequest, Json, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON extractor with automatic validation.
///
/// Decodes the request body with serde, then runs the `validator`
/// crate's `Validate` checks. Both failure modes reject with a 400 and
/// the standard `{detail}` shape before the handler runs, so invalid
/// payloads never reach the store.
///
/// # Example
/// ```ignore
/// use axum_helpers::ValidatedJson;
///
/// async fn submit(ValidatedJson(payload): ValidatedJson<ContactMessage>) { /* ... */ }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await.map_err(|e| {
            tracing::info!("JSON extraction error: {}", e.body_text());
            (
                StatusCode::BAD_REQUEST,
                axum::Json(ErrorResponse::new(e.body_text())),
            )
                .into_response()
        })?;

        data.validate().map_err(|e| {
            let detail = e
                .field_errors()
                .iter()
                .flat_map(|(field, errors)| {
                    errors.iter().map(move |err| match &err.message {
                        Some(message) => format!("{}: {}", field, message),
                        None => format!("{}: {}", field, err.code),
                    })
                })
                .collect::<Vec<_>>()
                .join("; ");

            tracing::info!("Validation error: {}", detail);
            (
                StatusCode::BAD_REQUEST,
                axum::Json(ErrorResponse::new(format!(
                    "Request validation failed: {}",
                    detail
                ))),
            )
                .into_response()
        })?;

        Ok(ValidatedJson(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, routing::post};
    use http_body_util::BodyExt;
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize, Validate)]
    struct Payload {
        #[validate(length(min = 1))]
        name: String,
    }

    fn app() -> Router {
        async fn handler(ValidatedJson(p): ValidatedJson<Payload>) -> String {
            p.name
        }
        Router::new().route("/", post(handler))
    }

    fn json_request(body: &str) -> Request {
        Request::builder()
            .method("POST")
            .uri("/")
            .header("content-type", "application/json")
            .body(axum::body::Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_payload_passes() {
        let response = app().oneshot(json_request(r#"{"name":"ok"}"#)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_missing_field_rejected_with_detail() {
        let response = app().oneshot(json_request(r#"{}"#)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(body["detail"].is_string());
    }

    #[tokio::test]
    async fn test_validation_failure_rejected() {
        let response = app().oneshot(json_request(r#"{"name":""}"#)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(
            body["detail"]
                .as_str()
                .unwrap()
                .contains("validation failed")
        );
    }
}

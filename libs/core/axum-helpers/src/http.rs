//! HTTP middleware.

use tower_http::cors::CorsLayer;

/// Creates a permissive CORS layer.
///
/// Allows any origin, method, and header. The storefront API is a
/// public read-mostly surface consumed by browser clients on arbitrary
/// hosts, so requests are accepted from anywhere.
pub fn create_permissive_cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}

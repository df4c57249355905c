//! # Axum Helpers
//!
//! Shared utilities for building the storefront's Axum services.
//!
//! ## Modules
//!
//! - **[`errors`]**: `AppError` and the `{detail}` error response shape
//! - **[`extractors`]**: `ValidatedJson` (serde decode + validator checks)
//! - **[`http`]**: CORS layer
//! - **[`server`]**: server startup and graceful shutdown

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

// Re-export error types
pub use errors::{AppError, ErrorResponse, not_found};

// Re-export extractors
pub use extractors::ValidatedJson;

// Re-export HTTP middleware
pub use http::create_permissive_cors_layer;

// Re-export server helpers
pub use server::{create_app, shutdown_signal};

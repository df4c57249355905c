//! Storefront Domain
//!
//! Product catalog reads and contact-message intake for the grosir
//! storefront, backed by the generic document store.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Response shaping, degradation policy
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + MongoDB implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Record shapes, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use database::DocumentStore;
//! use domain_storefront::{handlers, mongodb::MongoStorefrontRepository, service::StorefrontService};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = mongodb::Client::with_uri_str("mongodb://localhost:27017").await?;
//! let store = DocumentStore::connected(client.database("grosir"));
//!
//! let repository = MongoStorefrontRepository::new(store);
//! let service = StorefrontService::new(repository);
//!
//! let router = handlers::router(service);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod seed;
pub mod service;

// Re-export commonly used types
pub use error::{StorefrontError, StorefrontResult};
pub use handlers::ApiDoc;
pub use models::{
    ContactMessage, ContactReceipt, FeaturedQuery, Product, ProductQuery, ProductRecord,
    ProductsResponse, User,
};
pub use self::mongodb::MongoStorefrontRepository;
pub use repository::StorefrontRepository;
pub use service::StorefrontService;

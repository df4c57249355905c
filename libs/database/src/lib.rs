//! Database library providing the MongoDB connector and the generic
//! document-store client used by the storefront domain.
//!
//! # Examples
//!
//! ```ignore
//! use database::mongodb::{self, DocumentStore, MongoConfig};
//! use core_config::FromEnv;
//!
//! let config = MongoConfig::from_env()?;
//! let client = mongodb::connect_from_config(&config).await?;
//! let store = DocumentStore::connected(client.database(config.database()));
//!
//! let id = store
//!     .create_document("product", bson::doc! { "title": "Beras Premium 5kg" })
//!     .await?;
//! ```

pub mod mongodb;

pub use self::mongodb::{DocumentStore, StoreError};

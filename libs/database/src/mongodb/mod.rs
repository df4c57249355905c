//! MongoDB database connector and utilities
//!
//! Provides connection management and the generic [`DocumentStore`]
//! client.

mod config;
mod connector;
mod health;
mod store;

pub use config::MongoConfig;
pub use connector::{MongoError, connect, connect_from_config};
pub use health::{HealthStatus, check_health, check_health_detailed};
pub use store::{DocumentStore, StoreError};

// Re-export MongoDB types for convenience
pub use mongodb::{Client, Collection, Database, bson};

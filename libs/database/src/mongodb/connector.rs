use mongodb::{Client, options::ClientOptions};
use std::time::Duration;
use tracing::info;

use super::MongoConfig;
use super::health::check_health_detailed;

/// Errors raised while establishing the MongoDB connection.
#[derive(Debug, thiserror::Error)]
pub enum MongoError {
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
}

/// Connect with default pool settings.
///
/// Shorthand for [`connect_from_config`] with a default
/// [`MongoConfig`]; mostly useful in tests and one-off tools.
pub async fn connect(url: &str) -> Result<Client, MongoError> {
    let config = MongoConfig::new(url);
    connect_from_config(&config).await
}

/// Connect using a [`MongoConfig`] and verify the server is reachable.
///
/// The verification ping means a bad URL fails here, at startup, rather
/// than on the first request.
pub async fn connect_from_config(config: &MongoConfig) -> Result<Client, MongoError> {
    info!("Attempting to connect to MongoDB at {}", config.url);

    let mut options = ClientOptions::parse(&config.url).await?;
    options.max_pool_size = Some(config.max_pool_size);
    options.min_pool_size = Some(config.min_pool_size);
    options.connect_timeout = Some(Duration::from_secs(config.connect_timeout_secs));
    options.server_selection_timeout =
        Some(Duration::from_secs(config.server_selection_timeout_secs));

    if let Some(ref app_name) = config.app_name {
        options.app_name = Some(app_name.clone());
    }

    let client = Client::with_options(options)?;

    let status = check_health_detailed(&client).await;
    if let Some(message) = status.message {
        return Err(MongoError::ConnectionFailed(message));
    }

    info!(
        "Successfully connected to MongoDB ({}ms)",
        status.response_time_ms
    );
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore] // Requires actual MongoDB
    async fn test_connect() {
        let mongo_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());

        assert!(connect(&mongo_url).await.is_ok());
    }

    #[tokio::test]
    async fn test_connect_reports_unreachable_server() {
        let config = MongoConfig {
            connect_timeout_secs: 1,
            server_selection_timeout_secs: 1,
            ..MongoConfig::with_database("mongodb://localhost:1", "test")
        };
        let result = connect_from_config(&config).await;
        assert!(matches!(result, Err(MongoError::ConnectionFailed(_))));
    }
}

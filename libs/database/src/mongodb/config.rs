use core_config::{ConfigError, FromEnv};

const DEFAULT_MAX_POOL_SIZE: u32 = 100;
const DEFAULT_MIN_POOL_SIZE: u32 = 5;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_SERVER_SELECTION_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the document store.
///
/// Loaded from the environment in deployments (`DATABASE_URL` and
/// `DATABASE_NAME`, matching what the hosting platform injects) or
/// built directly in tests.
#[derive(Clone, Debug)]
pub struct MongoConfig {
    /// Connection string, `mongodb://[user:pass@]host[:port][/...]`
    pub url: String,

    /// Database name
    pub database: String,

    /// Application name reported to the server, shows up in server logs
    pub app_name: Option<String>,

    pub max_pool_size: u32,
    pub min_pool_size: u32,
    pub connect_timeout_secs: u64,
    pub server_selection_timeout_secs: u64,
}

impl MongoConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            database: "default".to_string(),
            app_name: None,
            max_pool_size: DEFAULT_MAX_POOL_SIZE,
            min_pool_size: DEFAULT_MIN_POOL_SIZE,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            server_selection_timeout_secs: DEFAULT_SERVER_SELECTION_TIMEOUT_SECS,
        }
    }

    pub fn with_database(url: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            database: database.into(),
            ..Self::new(url)
        }
    }

    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    pub fn database(&self) -> &str {
        &self.database
    }
}

impl Default for MongoConfig {
    fn default() -> Self {
        Self::new("mongodb://localhost:27017")
    }
}

/// Environment variables:
/// - `DATABASE_URL` (or `MONGODB_URL`) — required connection string
/// - `DATABASE_NAME` (or `MONGODB_DATABASE`) — required database name
/// - `MONGODB_APP_NAME` — optional
/// - `MONGODB_MAX_POOL_SIZE`, `MONGODB_MIN_POOL_SIZE`,
///   `MONGODB_CONNECT_TIMEOUT_SECS`,
///   `MONGODB_SERVER_SELECTION_TIMEOUT_SECS` — optional pool knobs
impl FromEnv for MongoConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let url = env_either("DATABASE_URL", "MONGODB_URL")?;
        let database = env_either("DATABASE_NAME", "MONGODB_DATABASE")?;

        Ok(Self {
            url,
            database,
            app_name: std::env::var("MONGODB_APP_NAME").ok(),
            max_pool_size: parse_env_or("MONGODB_MAX_POOL_SIZE", DEFAULT_MAX_POOL_SIZE)?,
            min_pool_size: parse_env_or("MONGODB_MIN_POOL_SIZE", DEFAULT_MIN_POOL_SIZE)?,
            connect_timeout_secs: parse_env_or(
                "MONGODB_CONNECT_TIMEOUT_SECS",
                DEFAULT_CONNECT_TIMEOUT_SECS,
            )?,
            server_selection_timeout_secs: parse_env_or(
                "MONGODB_SERVER_SELECTION_TIMEOUT_SECS",
                DEFAULT_SERVER_SELECTION_TIMEOUT_SECS,
            )?,
        })
    }
}

fn env_either(primary: &str, fallback: &str) -> Result<String, ConfigError> {
    std::env::var(primary)
        .or_else(|_| std::env::var(fallback))
        .map_err(|_| ConfigError::MissingEnvVar(format!("{} or {}", primary, fallback)))
}

fn parse_env_or<T: std::str::FromStr>(key: &str, default: T) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(value) => value.parse().map_err(|e| ConfigError::ParseError {
            key: key.to_string(),
            details: format!("{}", e),
        }),
        Err(_) => Ok(default),
    }
}

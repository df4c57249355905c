use crate::{ConfigError, FromEnv, env_or_default};

/// HTTP listener configuration.
///
/// `HOST` defaults to 0.0.0.0 and `PORT` to 8000, so a bare container
/// run serves on all interfaces at the conventional port without any
/// environment setup.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn new(host: String, port: u16) -> Self {
        Self { host, port }
    }

    /// Bind address as "host:port".
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl FromEnv for ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let host = env_or_default("HOST", "0.0.0.0");
        let port = env_or_default("PORT", "8000")
            .parse()
            .map_err(|e| ConfigError::ParseError {
                key: "PORT".to_string(),
                details: format!("{}", e),
            })?;

        Ok(Self { host, port })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

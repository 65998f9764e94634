use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;

use crate::error::{ServerError, ServerResult};

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server bind address
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum request body size in KB
    #[serde(default = "default_max_body_size_kb")]
    pub max_body_size_kb: usize,

    /// Enable CORS
    #[serde(default = "default_true")]
    pub enable_cors: bool,

    /// Log level or `EnvFilter` directive
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log output: "json", "pretty" or "compact"
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Start with the bootstrap books instead of an empty store
    #[serde(default = "default_true")]
    pub seed_books: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            port: default_port(),
            timeout_secs: default_timeout_secs(),
            max_body_size_kb: default_max_body_size_kb(),
            enable_cors: default_true(),
            log_level: default_log_level(),
            log_format: default_log_format(),
            seed_books: default_true(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from `.env`, an optional `bookshelf.*` file and
    /// `BOOKSHELF__*` environment variables, in increasing precedence.
    pub fn load() -> anyhow::Result<Self> {
        // A missing .env file is normal outside development.
        let _ = dotenvy::dotenv();

        let builder = config::Config::builder()
            .add_source(config::File::with_name("bookshelf").required(false))
            .add_source(config::Environment::with_prefix("BOOKSHELF").separator("__"));

        let config: ServerConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the server cannot start with.
    pub fn validate(&self) -> ServerResult<()> {
        if self.port == 0 {
            return Err(ServerError::Config("port must be non-zero".into()));
        }
        if self.timeout_secs == 0 {
            return Err(ServerError::Config("timeout_secs must be non-zero".into()));
        }
        if self.max_body_size_kb == 0 {
            return Err(ServerError::Config(
                "max_body_size_kb must be non-zero".into(),
            ));
        }
        match self.log_format.as_str() {
            "json" | "pretty" | "compact" => Ok(()),
            other => Err(ServerError::Config(format!(
                "unknown log_format '{other}', expected json, pretty or compact"
            ))),
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> ServerResult<SocketAddr> {
        let addr_str = format!("{}:{}", self.bind_addr, self.port);
        Ok(addr_str.parse()?)
    }

    /// Get request timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Get max body size in bytes, saturating at `usize::MAX`
    pub fn max_body_size(&self) -> usize {
        self.max_body_size_kb.saturating_mul(1024)
    }
}

fn default_bind_addr() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_body_size_kb() -> usize {
    64
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

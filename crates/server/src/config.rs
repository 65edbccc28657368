use catalog::{Location, LocationCatalog};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;

/// Environment prefix for overrides, e.g. `LOSTFOUND_SERVER__PORT=9000`.
pub const ENV_PREFIX: &str = "LOSTFOUND_SERVER";

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

    /// Maximum request body size in MB
    #[serde(default = "default_max_body_size_mb")]
    pub max_body_size_mb: usize,

    /// Enable CORS
    #[serde(default = "default_true")]
    pub enable_cors: bool,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Metrics endpoint enabled
    #[serde(default = "default_true")]
    pub metrics_enabled: bool,

    /// Load the demo reports at startup
    #[serde(default)]
    pub seed_sample_data: bool,

    /// Hits returned by the matches endpoint when no `limit` is given
    #[serde(default = "default_match_limit")]
    pub default_match_limit: usize,

    /// Report validation policy
    #[serde(default)]
    pub ingest: ingest::IngestConfig,

    /// Match ranking policy
    #[serde(default)]
    pub matcher: matcher::MatchConfig,

    /// Location catalog override
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// `catalog.locations` replaces the built-in campus catalog when present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub locations: Option<Vec<Location>>,
}

impl CatalogConfig {
    pub fn build(&self) -> LocationCatalog {
        match &self.locations {
            Some(locations) => LocationCatalog::with_locations(locations.clone()),
            None => LocationCatalog::default(),
        }
    }

    fn validate(&self) -> anyhow::Result<()> {
        let Some(locations) = &self.locations else {
            return Ok(());
        };
        if let Some(pos) = locations
            .iter()
            .position(|loc| loc.building_name.trim().is_empty())
        {
            anyhow::bail!("catalog.locations[{pos}].building_name must not be empty");
        }
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            port: default_port(),
            timeout_secs: default_timeout_secs(),
            max_body_size_mb: default_max_body_size_mb(),
            enable_cors: default_true(),
            log_level: default_log_level(),
            metrics_enabled: default_true(),
            seed_sample_data: false,
            default_match_limit: default_match_limit(),
            ingest: ingest::IngestConfig::default(),
            matcher: matcher::MatchConfig::default(),
            catalog: CatalogConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from `.env`, an optional `server.{toml,yaml}` file
    /// and `LOSTFOUND_SERVER__*` environment variables, in rising precedence.
    pub fn load() -> anyhow::Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded .env");
        }

        let builder = config::Config::builder()
            // Load from file if exists
            .add_source(config::File::with_name("server").required(false))
            // Override with environment variables
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"));

        let config: ServerConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings the server cannot run with
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.default_match_limit == 0 {
            anyhow::bail!("default_match_limit must be greater than zero");
        }
        if self.max_body_size_mb == 0 {
            anyhow::bail!("max_body_size_mb must be greater than zero");
        }
        self.ingest.validate()?;
        self.matcher.validate()?;
        self.catalog.validate()?;
        Ok(())
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr_str = format!("{}:{}", self.bind_addr, self.port);
        Ok(addr_str.parse()?)
    }

    /// Get request timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Get max body size in bytes
    pub fn max_body_size(&self) -> usize {
        self.max_body_size_mb * 1024 * 1024
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

fn default_max_body_size_mb() -> usize {
    1
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_match_limit() -> usize {
    10
}

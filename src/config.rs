use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::constants::*;
use crate::error::{Result, ServiceError};

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub sources: SourcesConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    pub benefits_url: String,
    pub filters_url: String,
    pub fichas_url: String,
    pub timeout_seconds: u64,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            benefits_url: DEFAULT_BENEFITS_URL.to_string(),
            filters_url: DEFAULT_FILTERS_URL.to_string(),
            fichas_url: DEFAULT_FICHAS_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl SourcesConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

impl Config {
    /// Loads `path`, or `config.toml` when it exists, then applies environment
    /// overrides. An explicit path that cannot be read is an error; a missing
    /// default file just means defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_PATH))?
            }
            None => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            ServiceError::Config(format!("Failed to read config file '{}': {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Applies overrides looked up by environment variable name.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_BENEFITS_URL) {
            self.sources.benefits_url = url;
        }
        if let Some(url) = lookup(ENV_FILTERS_URL) {
            self.sources.filters_url = url;
        }
        if let Some(url) = lookup(ENV_FICHAS_URL) {
            self.sources.fichas_url = url;
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECONDS) {
            self.sources.timeout_seconds = raw.trim().parse().map_err(|e| {
                ServiceError::Config(format!("{ENV_TIMEOUT_SECONDS}='{raw}' is not a number of seconds: {e}"))
            })?;
        }
        if let Some(raw) = lookup(ENV_PORT) {
            self.server.port = raw
                .trim()
                .parse()
                .map_err(|e| ServiceError::Config(format!("{ENV_PORT}='{raw}' is not a valid port: {e}")))?;
        }
        self.validate()
    }

    fn validate(&self) -> Result<()> {
        if self.sources.timeout_seconds == 0 {
            return Err(ServiceError::Config("sources.timeout_seconds must be greater than zero".into()));
        }
        for (name, url) in [
            ("benefits_url", &self.sources.benefits_url),
            ("filters_url", &self.sources.filters_url),
            ("fichas_url", &self.sources.fichas_url),
        ] {
            if url.trim().is_empty() {
                return Err(ServiceError::Config(format!("sources.{name} must not be empty")));
            }
        }
        Ok(())
    }
}

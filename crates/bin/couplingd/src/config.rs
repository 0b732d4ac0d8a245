//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `couplingd.toml` in the working directory (or the path in
//! `COUPLING_CONFIG`). Every field has a default so the file is optional.
//! Environment variables take precedence over file values.

use coupling_domain::coupling::CouplingConfig;
use coupling_domain::error::ValidationError;
use serde::Deserialize;

const DEFAULT_PATH: &str = "couplingd.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Which service drives which.
    pub coupling: CouplingSection,
    /// Event bus settings.
    pub bus: BusConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Virtual bridge demo behaviour.
    pub demo: DemoConfig,
}

/// Initiator and receiver service names, validated by [`Config::coupling`].
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct CouplingSection {
    pub initiator: String,
    pub receiver: String,
}

/// In-process event bus configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct BusConfig {
    /// Broadcast channel capacity.
    pub capacity: usize,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Flip the virtual initiator once at startup.
    pub toggle_on_start: bool,
}

impl Config {
    /// Load configuration from the config file (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("COUPLING_CONFIG").unwrap_or_else(|_| DEFAULT_PATH.to_string());
        let mut config = Self::from_file(&path)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("COUPLING_INITIATOR") {
            self.coupling.initiator = val;
        }
        if let Ok(val) = std::env::var("COUPLING_RECEIVER") {
            self.coupling.receiver = val;
        }
        if let Ok(val) = std::env::var("COUPLING_BUS_CAPACITY")
            && let Ok(capacity) = val.parse()
        {
            self.bus.capacity = capacity;
        }
        if let Ok(val) = std::env::var("COUPLING_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.bus.capacity == 0 {
            return Err(ConfigError::Validation(
                "bus capacity must be non-zero".to_string(),
            ));
        }
        self.coupling()?;
        Ok(())
    }

    /// The validated initiator → receiver pair.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Coupling`] when a name is empty or both are equal.
    pub fn coupling(&self) -> Result<CouplingConfig, ConfigError> {
        Ok(CouplingConfig::new(
            self.coupling.initiator.as_str(),
            self.coupling.receiver.as_str(),
        )?)
    }
}

impl Default for CouplingSection {
    fn default() -> Self {
        Self {
            initiator: "Switch".to_string(),
            receiver: "Lamp".to_string(),
        }
    }
}

impl Default for BusConfig {
    fn default() -> Self {
        Self { capacity: 64 }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "couplingd=info,coupling_app=info,coupling_adapter_virtual=info".to_string(),
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            toggle_on_start: true,
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Invalid coupling pair.
    #[error("invalid coupling")]
    Coupling(#[from] ValidationError),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

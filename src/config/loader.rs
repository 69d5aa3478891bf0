//! Configuration Loader
//!
//! Loads and validates configuration from TOML files matching config/default.toml
//! structure. Every section has working defaults so the scanner also runs
//! without a config file.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::adapters::{dexscreener, geckoterminal};
use crate::application::DEFAULT_MAX_RESULTS;

/// Main configuration structure matching config/default.toml
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scanner: ScannerSection,
    #[serde(default)]
    pub dexscreener: DexscreenerSection,
    #[serde(default)]
    pub geckoterminal: GeckoterminalSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

/// Scanner configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct ScannerSection {
    /// Chain identifier scanned when the CLI does not override it
    pub default_chain: String,
    /// Maximum opportunities returned per scan
    pub max_results: usize,
    /// HTTP timeout applied to every provider request, in seconds
    pub timeout_secs: u64,
}

impl Default for ScannerSection {
    fn default() -> Self {
        Self {
            default_chain: "solana".to_string(),
            max_results: DEFAULT_MAX_RESULTS,
            timeout_secs: 10,
        }
    }
}

impl ScannerSection {
    /// Get chain with environment variable override
    /// Checks MAGPIE_CHAIN env var first, falls back to config value
    pub fn get_chain(&self) -> String {
        std::env::var("MAGPIE_CHAIN").unwrap_or_else(|_| self.default_chain.clone())
    }
}

/// DexScreener provider section
#[derive(Debug, Clone, Deserialize)]
pub struct DexscreenerSection {
    pub base_url: String,
}

impl Default for DexscreenerSection {
    fn default() -> Self {
        Self {
            base_url: dexscreener::DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// GeckoTerminal provider section
#[derive(Debug, Clone, Deserialize)]
pub struct GeckoterminalSection {
    pub base_url: String,
}

impl Default for GeckoterminalSection {
    fn default() -> Self {
        Self {
            base_url: geckoterminal::DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Logging configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSection {
    /// Log level: "trace", "debug", "info", "warn", "error"
    pub level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Load configuration from a TOML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

impl Config {
    /// Validate all configuration parameters
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scanner.default_chain.is_empty() {
            return Err(ConfigError::ValidationError(
                "default_chain cannot be empty".to_string(),
            ));
        }

        if self.scanner.max_results == 0 {
            return Err(ConfigError::ValidationError(format!(
                "max_results must be > 0, got {}",
                self.scanner.max_results
            )));
        }

        if self.scanner.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(format!(
                "timeout_secs must be > 0, got {}",
                self.scanner.timeout_secs
            )));
        }

        if self.dexscreener.base_url.is_empty() {
            return Err(ConfigError::ValidationError(
                "dexscreener base_url cannot be empty".to_string(),
            ));
        }

        if self.geckoterminal.base_url.is_empty() {
            return Err(ConfigError::ValidationError(
                "geckoterminal base_url cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

//! Configuration for the trade evaluator

use crate::error::{EvaluatorError, Result};
use crate::types::ValuationMode;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default value granted per extra asset held by the other side
pub const DEFAULT_UNEVEN_ADJUSTMENT_PER_ASSET: Decimal = Decimal::ONE_HUNDRED;

/// Configuration for the trade evaluator
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluatorConfig {
    /// Catalog source configuration
    pub data: DataConfig,

    /// Valuation parameters
    pub valuation: ValuationConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Path to the value table CSV
    pub catalog_path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValuationConfig {
    /// League format a new session starts in
    pub default_mode: ValuationMode,

    /// Value added per asset of count difference to the side with fewer assets
    pub uneven_adjustment_per_asset: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (json, pretty)
    pub format: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self { catalog_path: PathBuf::from("data/Final_Trade_Data.csv") }
    }
}

impl Default for ValuationConfig {
    fn default() -> Self {
        Self {
            default_mode: ValuationMode::SingleQB,
            uneven_adjustment_per_asset: DEFAULT_UNEVEN_ADJUSTMENT_PER_ASSET,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), format: "pretty".to_string() }
    }
}

impl EvaluatorConfig {
    /// Load configuration: defaults, then an optional TOML file, then environment variables
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::load(None)
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);

        let content = std::fs::read_to_string(path).map_err(|e| {
            EvaluatorError::Config(format!("Failed to read config file {}: {e}", path.display()))
        })?;

        Ok(toml::from_str(&content)?)
    }

    /// Apply `TRADE_*` overrides using the given variable lookup
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup("TRADE_CATALOG_PATH") {
            self.data.catalog_path = PathBuf::from(path);
        }

        if let Some(mode) = lookup("TRADE_DEFAULT_MODE") {
            self.valuation.default_mode = mode.parse().map_err(EvaluatorError::Config)?;
        }

        if let Some(adjustment) = lookup("TRADE_UNEVEN_ADJUSTMENT") {
            self.valuation.uneven_adjustment_per_asset = adjustment.trim().parse().map_err(|_| {
                EvaluatorError::Config(format!("Invalid TRADE_UNEVEN_ADJUSTMENT: {adjustment}"))
            })?;
        }

        if let Some(level) = lookup("TRADE_LOG_LEVEL") {
            self.logging.level = level;
        }

        if let Some(format) = lookup("TRADE_LOG_FORMAT") {
            self.logging.format = format;
        }

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(EvaluatorError::Config(format!(
                    "Invalid log level: {}",
                    self.logging.level
                )))
            }
        }

        match self.logging.format.as_str() {
            "json" | "pretty" => {}
            _ => {
                return Err(EvaluatorError::Config(format!(
                    "Invalid log format: {}",
                    self.logging.format
                )))
            }
        }

        let adjustment = self.valuation.uneven_adjustment_per_asset;
        if adjustment < Decimal::ZERO {
            return Err(EvaluatorError::Config(format!(
                "Invalid uneven adjustment per asset: {adjustment}"
            )));
        }

        Ok(())
    }
}

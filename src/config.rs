//! Runtime options read by stores and the console printer.
//!
//! A [`Config`] is an explicit value handed to constructors through
//! [`FrameOptions`](crate::FrameOptions). When none is given the process-wide
//! default from [`Config::global`] is used; it can be replaced exactly once
//! with [`Config::install`] at startup.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

static GLOBAL_CONFIG: OnceLock<Config> = OnceLock::new();

/// Display and runtime options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Maximum number of rows rendered by `print`
    pub table_max_row: usize,
    /// Maximum number of columns rendered by `print`
    pub table_max_col_in_console: usize,
    /// Number of leading values sampled during dtype inference
    pub dtype_test_lim: usize,
    /// Skip caching the materialized tensor view
    pub low_memory_mode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table_max_row: 10,
            table_max_col_in_console: 10,
            dtype_test_lim: 500,
            low_memory_mode: false,
        }
    }
}

impl Config {
    /// Reject configurations the engine cannot honor
    pub fn validate(&self) -> Result<()> {
        if self.dtype_test_lim == 0 {
            return Err(Error::ConfigError(
                "dtype_test_lim must be positive".to_string(),
            ));
        }
        if self.table_max_row == 0 {
            return Err(Error::ConfigError(
                "table_max_row must be positive".to_string(),
            ));
        }
        if self.table_max_col_in_console == 0 {
            return Err(Error::ConfigError(
                "table_max_col_in_console must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse a (possibly partial) TOML document over the defaults
    ///
    /// ```
    /// use ndframe::Config;
    ///
    /// let config = Config::from_toml_str("table_max_row = 25").unwrap();
    /// assert_eq!(config.table_max_row, 25);
    /// assert_eq!(config.dtype_test_lim, 500);
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Config = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Install the process-wide default. Only the first call succeeds.
    pub fn install(config: Config) -> Result<()> {
        config.validate()?;
        GLOBAL_CONFIG
            .set(config)
            .map_err(|_| Error::ConfigError("global configuration already installed".to_string()))
    }

    /// The process-wide default configuration
    pub fn global() -> &'static Config {
        GLOBAL_CONFIG.get_or_init(Config::default)
    }
}

//! CLI configuration from environment variables.

use std::env;
use std::path::PathBuf;
use thiserror::Error;

/// Default location of the ingredient line golden fixtures.
pub const DEFAULT_FIXTURES_DIR: &str = "pantry-core/tests/fixtures/ingredient_lines";

/// Default scale factor when `--factor` is not given.
pub const DEFAULT_FACTOR: f64 = 1.0;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value:?} (expected a positive number)")]
    InvalidFactor { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct CliConfig {
    /// Root of the golden fixtures (contains `curated/`).
    pub fixtures_dir: PathBuf,
    /// Scale factor used when none is passed on the command line.
    pub default_factor: f64,
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `PANTRY_FIXTURES_DIR`: Fixture root (default: "pantry-core/tests/fixtures/ingredient_lines")
    /// - `PANTRY_DEFAULT_FACTOR`: Scale factor (default: 1.0)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the configuration from any variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let fixtures_dir = lookup("PANTRY_FIXTURES_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_FIXTURES_DIR));

        let default_factor = match lookup("PANTRY_DEFAULT_FACTOR") {
            Some(value) => parse_factor("PANTRY_DEFAULT_FACTOR", &value)?,
            None => DEFAULT_FACTOR,
        };

        Ok(Self {
            fixtures_dir,
            default_factor,
        })
    }
}

/// Parse a scale factor, rejecting zero, negative and non-finite values.
pub fn parse_factor(name: &'static str, value: &str) -> Result<f64, ConfigError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|f| f.is_finite() && *f > 0.0)
        .ok_or_else(|| ConfigError::InvalidFactor {
            name,
            value: value.to_string(),
        })
}

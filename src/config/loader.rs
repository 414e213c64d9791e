//! Configuration loading from files (std only).

use std::fs;
use std::path::Path;

use crate::error::{ConfigError, Error, Result};

use super::ArithConfig;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed or validated.
///
/// # Example
///
/// ```rust,ignore
/// use bounded_arith::load_config;
///
/// let arith = load_config("arith.toml")?.arithmetic()?;
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ArithConfig> {
    let content = fs::read_to_string(path.as_ref())
        .map_err(|e| Error::Config(ConfigError::io(&e.to_string())))?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
///
/// # Errors
///
/// Returns an error if the TOML is invalid or fails validation.
pub fn parse_config(content: &str) -> Result<ArithConfig> {
    let config: ArithConfig =
        toml::from_str(content).map_err(|e| Error::Config(ConfigError::parse(e.message())))?;

    super::validation::validate_config(&config)?;

    Ok(config)
}

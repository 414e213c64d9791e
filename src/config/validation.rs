//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::ArithConfig;

/// Validate an arithmetic configuration.
///
/// Checks:
/// - Bounds are ordered (min <= max)
pub fn validate_config(config: &ArithConfig) -> Result<()> {
    let bounds = config.bounds;
    if !bounds.is_valid() {
        #[cfg(feature = "defmt")]
        defmt::warn!("invalid bounds: min {=i64} > max {=i64}", bounds.min, bounds.max);
        return Err(Error::Config(ConfigError::InvalidBounds {
            min: bounds.min,
            max: bounds.max,
        }));
    }

    Ok(())
}

//! Arithmetic configuration - root configuration structure.

use serde::Deserialize;

use crate::arith::BoundedArithmetic;
use crate::bounds::Bounds;
use crate::error::Result;

/// Root configuration structure from TOML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct ArithConfig {
    /// Accepted operand and result interval. Defaults to `[0, 100]`.
    #[serde(default)]
    pub bounds: Bounds,
}

impl ArithConfig {
    /// Build the arithmetic engine described by this configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidBounds` if the bounds are inverted.
    pub fn arithmetic(&self) -> Result<BoundedArithmetic> {
        BoundedArithmetic::new(self.bounds)
    }
}

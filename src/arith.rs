//! Range-checked, clamped arithmetic.

use crate::bounds::Bounds;
use crate::error::{ConfigError, Result};

/// Arithmetic over a closed interval.
///
/// Both operands must lie within the bounds; the first one that does not is
/// reported as a [`RangeError`](crate::error::RangeError) before anything is
/// computed. Results are clamped into the bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundedArithmetic {
    bounds: Bounds,
}

impl BoundedArithmetic {
    /// Arithmetic over `[0, 100]`.
    pub const PERCENT: Self = Self {
        bounds: Bounds::PERCENT,
    };

    /// Create an engine over the given bounds.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidBounds` if `min > max`.
    pub fn new(bounds: Bounds) -> Result<Self> {
        if !bounds.is_valid() {
            return Err(ConfigError::InvalidBounds {
                min: bounds.min,
                max: bounds.max,
            }
            .into());
        }
        Ok(Self { bounds })
    }

    /// The accepted interval.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// `a + b`, clamped into the bounds.
    ///
    /// # Errors
    ///
    /// Returns a range error if either operand is out of bounds.
    pub fn add(&self, a: i64, b: i64) -> Result<i64> {
        let (a, b) = self.operands(a, b)?;
        Ok(self.bounds.clamp(a.saturating_add(b)))
    }

    /// `a - b`, clamped into the bounds.
    ///
    /// # Errors
    ///
    /// Returns a range error if either operand is out of bounds.
    pub fn subtract(&self, a: i64, b: i64) -> Result<i64> {
        let (a, b) = self.operands(a, b)?;
        Ok(self.bounds.clamp(a.saturating_sub(b)))
    }

    fn operands(&self, a: i64, b: i64) -> Result<(i64, i64)> {
        Ok((self.bounds.check(a)?, self.bounds.check(b)?))
    }
}

impl Default for BoundedArithmetic {
    fn default() -> Self {
        Self::PERCENT
    }
}

/// Add two values in `[0, 100]`; the sum is capped at `100`.
///
/// # Errors
///
/// Fails with a range error ("value must be between 0 and 100") if either
/// argument lies outside `[0, 100]`.
///
/// # Example
///
/// ```
/// assert_eq!(bounded_arith::add(50, 50).unwrap(), 100);
/// assert_eq!(bounded_arith::add(70, 80).unwrap(), 100);
/// assert!(bounded_arith::add(-10, 10).unwrap_err().is_range());
/// ```
pub fn add(a: i64, b: i64) -> Result<i64> {
    BoundedArithmetic::PERCENT.add(a, b)
}

/// Subtract two values in `[0, 100]`; the difference is floored at `0`.
///
/// # Errors
///
/// Same as [`add`].
///
/// # Example
///
/// ```
/// assert_eq!(bounded_arith::subtract(51, 50).unwrap(), 1);
/// assert_eq!(bounded_arith::subtract(70, 80).unwrap(), 0);
/// ```
pub fn subtract(a: i64, b: i64) -> Result<i64> {
    BoundedArithmetic::PERCENT.subtract(a, b)
}

//! Validated value types.
//!
//! [`Percent`] can only hold values in `[0, 100]`, so arithmetic on it never
//! needs a range check, only clamping.

use core::fmt;

use serde::Deserialize;

use crate::bounds::Bounds;
use crate::error::RangeError;

/// Integer in the closed interval `[0, 100]`.
///
/// Validated at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Percent(i64);

impl Percent {
    /// Lower bound.
    pub const MIN: Self = Self(Bounds::PERCENT.min);
    /// Upper bound.
    pub const MAX: Self = Self(Bounds::PERCENT.max);

    /// Create a new Percent value with validation.
    ///
    /// # Errors
    ///
    /// Returns a [`RangeError`] if `value` is outside `[0, 100]`.
    pub fn new(value: i64) -> Result<Self, RangeError> {
        Bounds::PERCENT.check(value).map(Self)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Add, clamping the sum to `100`.
    #[inline]
    pub fn saturating_add(self, rhs: Self) -> Self {
        Self(Bounds::PERCENT.clamp(self.0 + rhs.0))
    }

    /// Subtract, clamping the difference to `0`.
    #[inline]
    pub fn saturating_sub(self, rhs: Self) -> Self {
        Self(Bounds::PERCENT.clamp(self.0 - rhs.0))
    }
}

impl TryFrom<i64> for Percent {
    type Error = RangeError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Percent> for i64 {
    fn from(p: Percent) -> Self {
        p.0
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for Percent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = i64::deserialize(deserializer)?;
        Percent::new(value).map_err(|e| serde::de::Error::custom(e.message()))
    }
}

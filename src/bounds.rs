//! Closed integer intervals.

use serde::Deserialize;

use crate::error::RangeError;

/// Closed interval `[min, max]` of accepted values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub struct Bounds {
    /// Smallest accepted value.
    pub min: i64,
    /// Largest accepted value.
    pub max: i64,
}

impl Bounds {
    /// The `[0, 100]` domain used by [`crate::add`] and [`crate::subtract`].
    pub const PERCENT: Self = Self { min: 0, max: 100 };

    /// Create new bounds. Validity is not checked here; see [`Bounds::is_valid`].
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// Check if bounds are valid (min <= max).
    pub const fn is_valid(&self) -> bool {
        self.min <= self.max
    }

    /// Check if a value lies within the interval.
    pub const fn contains(&self, value: i64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Reject a value outside the interval.
    ///
    /// # Errors
    ///
    /// Returns a [`RangeError`] naming this interval.
    pub fn check(&self, value: i64) -> Result<i64, RangeError> {
        if self.contains(value) {
            Ok(value)
        } else {
            #[cfg(feature = "defmt")]
            defmt::debug!(
                "rejected operand {=i64} outside [{=i64}, {=i64}]",
                value,
                self.min,
                self.max
            );
            Err(self.range_error())
        }
    }

    /// Substitute the nearest bound for a value outside the interval.
    pub fn clamp(&self, value: i64) -> i64 {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }

    /// The error reported for values outside this interval.
    pub fn range_error(&self) -> RangeError {
        RangeError::between(self.min, self.max)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::PERCENT
    }
}

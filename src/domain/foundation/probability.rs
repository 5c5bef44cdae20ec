//! Probability value object (0.0-1.0 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A value between 0.0 and 1.0 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Probability(f64);

impl Probability {
    /// Certainly negative.
    pub const ZERO: Self = Self(0.0);

    /// No information either way.
    pub const NEUTRAL: Self = Self(0.5);

    /// Certainly positive.
    pub const ONE: Self = Self(1.0);

    /// Creates a new Probability, clamping to the valid range.
    ///
    /// Callers must pass a finite value.
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    /// Creates a Probability, returning error if non-finite or out of range.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(ValidationError::out_of_range("probability", 0.0, 1.0, value));
        }
        Ok(Self(value))
    }

    /// Returns the raw value.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns `1 - p`.
    pub fn complement(&self) -> Self {
        Self::new(1.0 - self.0)
    }

    /// Returns the value on a 0-100 scale rounded to two decimals.
    pub fn as_percent(&self) -> f64 {
        (self.0 * 100.0 * 100.0).round() / 100.0
    }
}

impl Default for Probability {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Probability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}", self.0)
    }
}

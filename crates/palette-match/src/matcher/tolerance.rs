//! Tolerance: the largest distance still treated as a match.

use std::fmt;
use std::str::FromStr;

/// Error type for tolerance values.
#[derive(Debug, Clone, PartialEq)]
pub enum ToleranceError {
    /// Tolerance below zero
    Negative(f64),
    /// NaN or infinite tolerance
    NotFinite(f64),
    /// String that is not a number
    Invalid(String),
}

impl fmt::Display for ToleranceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToleranceError::Negative(v) => write!(f, "tolerance must not be negative, got {}", v),
            ToleranceError::NotFinite(v) => write!(f, "tolerance must be finite, got {}", v),
            ToleranceError::Invalid(s) => write!(f, "invalid tolerance '{}'", s),
        }
    }
}

impl std::error::Error for ToleranceError {}

/// A validated, non-negative, finite distance threshold.
///
/// # Example
///
/// ```
/// use palette_match::Tolerance;
///
/// let tolerance: Tolerance = "2.5".parse().unwrap();
/// assert_eq!(tolerance.value(), 2.5);
/// assert!(Tolerance::new(-1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Tolerance(f64);

impl Tolerance {
    /// Zero tolerance: only exact color matches pass.
    pub const ZERO: Tolerance = Tolerance(0.0);

    /// Validate a tolerance value.
    pub fn new(value: f64) -> Result<Self, ToleranceError> {
        if !value.is_finite() {
            return Err(ToleranceError::NotFinite(value));
        }
        if value < 0.0 {
            return Err(ToleranceError::Negative(value));
        }
        Ok(Self(value))
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Inclusive check: a distance equal to the tolerance passes.
    #[inline]
    pub fn admits(self, distance: f64) -> bool {
        distance <= self.0
    }
}

impl FromStr for Tolerance {
    type Err = ToleranceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f64 = s
            .trim()
            .parse()
            .map_err(|_| ToleranceError::Invalid(s.to_string()))?;
        Tolerance::new(value)
    }
}

impl TryFrom<f64> for Tolerance {
    type Error = ToleranceError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Tolerance::new(value)
    }
}

impl fmt::Display for Tolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

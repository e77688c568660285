//! Error handling for ShelfKit
//!
//! The geometry engine itself is total over finite input and never fails.
//! [`ParameterError`] is produced by the validation that runs before the
//! engine is invoked.

use thiserror::Error;

/// Errors related to shelf and sheet parameter validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// A parameter is NaN or infinite.
    #[error("Parameter '{name}' must be a finite number, got {value}")]
    NotFinite {
        /// The parameter name.
        name: String,
        /// The offending value.
        value: f64,
    },

    /// A parameter value is out of the valid range.
    #[error("Parameter '{name}' out of range: {value} (valid: {min}..{max})")]
    OutOfRange {
        name: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A length that must not be negative was negative.
    #[error("Parameter '{name}' must not be negative, got {value}")]
    Negative { name: String, value: f64 },

    /// Dimensions are invalid (zero or negative).
    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),
}

impl ParameterError {
    /// Reject NaN and infinities.
    pub fn check_finite(name: &str, value: f64) -> Result<f64, Self> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(Self::NotFinite {
                name: name.to_string(),
                value,
            })
        }
    }

    /// Reject non-finite and negative values.
    pub fn check_non_negative(name: &str, value: f64) -> Result<f64, Self> {
        let value = Self::check_finite(name, value)?;
        if value < 0.0 {
            return Err(Self::Negative {
                name: name.to_string(),
                value,
            });
        }
        Ok(value)
    }

    /// Reject non-finite values and values `<= 0`.
    pub fn check_positive(name: &str, value: f64) -> Result<f64, Self> {
        let value = Self::check_finite(name, value)?;
        if value <= 0.0 {
            return Err(Self::InvalidDimensions(format!(
                "{} must be greater than zero, got {}",
                name, value
            )));
        }
        Ok(value)
    }

    /// Reject values outside `min..=max`.
    pub fn check_range(name: &str, value: f64, min: f64, max: f64) -> Result<f64, Self> {
        let value = Self::check_finite(name, value)?;
        if value < min || value > max {
            return Err(Self::OutOfRange {
                name: name.to_string(),
                value,
                min,
                max,
            });
        }
        Ok(value)
    }
}

/// Result type alias for parameter validation.
pub type ParameterResult<T> = std::result::Result<T, ParameterError>;

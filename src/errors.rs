//! Validation errors

use crate::float_types::Real;

/// Problems with the numbers an enclosure or primitive is built from.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// (NonPositiveDimension) A length that must be strictly positive is not
    #[error("(NonPositiveDimension) {name} must be positive, got {value}")]
    NonPositiveDimension { name: &'static str, value: Real },
    /// (NegativeDimension) An offset or margin that must be zero or more is not
    #[error("(NegativeDimension) {name} must not be negative, got {value}")]
    NegativeDimension { name: &'static str, value: Real },
    /// (NonFiniteDimension) The value is NaN or infinite
    #[error("(NonFiniteDimension) {name} is NaN or infinite ({value})")]
    NonFiniteDimension { name: &'static str, value: Real },
    /// (TooFewSegments) A round primitive needs at least three segments
    #[error("(TooFewSegments) a cylinder needs at least 3 segments, got {0}")]
    TooFewSegments(usize),
}

/// Check that `value` is finite and strictly positive.
pub fn require_positive(name: &'static str, value: Real) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteDimension { name, value });
    }
    if value <= 0.0 {
        return Err(ValidationError::NonPositiveDimension { name, value });
    }
    Ok(())
}

/// Check that `value` is finite and not negative.
pub fn require_non_negative(name: &'static str, value: Real) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteDimension { name, value });
    }
    if value < 0.0 {
        return Err(ValidationError::NegativeDimension { name, value });
    }
    Ok(())
}

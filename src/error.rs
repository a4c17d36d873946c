//! Error type shared by every settle-rs computation
//!
//! Only invalid inputs are reported. Numerical divergence of the integrator
//! (step too large for the model's timescales) is not an error: NaN or
//! infinite values propagate into the trajectory and the resampled series.

use thiserror::Error;

/// Errors returned by parameter validation and by the computations that
/// validate their inputs before running.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettleError {
    /// A physical or numerical parameter is outside its admissible range
    #[error("Invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        /// Parameter name as it appears in the API (e.g. `"mu"`, `"dt_small"`)
        name: &'static str,
        /// Offending value
        value: f64,
        /// Human readable constraint that was violated
        reason: &'static str,
    },
}

impl SettleError {
    /// Build an `InvalidParameter` error
    pub fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        SettleError::InvalidParameter { name, value, reason }
    }

    /// Name of the parameter that caused the error
    pub fn parameter(&self) -> &'static str {
        match self {
            SettleError::InvalidParameter { name, .. } => name,
        }
    }
}

/// Reject non-finite or non-positive values
pub(crate) fn ensure_positive(name: &'static str, value: f64) -> Result<(), SettleError> {
    if !value.is_finite() {
        return Err(SettleError::invalid(name, value, "must be finite"));
    }
    if value <= 0.0 {
        return Err(SettleError::invalid(name, value, "must be strictly positive"));
    }
    Ok(())
}

/// Reject non-finite or negative values (zero is allowed)
pub(crate) fn ensure_non_negative(name: &'static str, value: f64) -> Result<(), SettleError> {
    if !value.is_finite() {
        return Err(SettleError::invalid(name, value, "must be finite"));
    }
    if value < 0.0 {
        return Err(SettleError::invalid(name, value, "must not be negative"));
    }
    Ok(())
}

/// Reject non-finite values
pub(crate) fn ensure_finite(name: &'static str, value: f64) -> Result<(), SettleError> {
    if !value.is_finite() {
        return Err(SettleError::invalid(name, value, "must be finite"));
    }
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================

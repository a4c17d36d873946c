//! Common utilities for integration tests
#![allow(dead_code)]

pub mod fixtures;
pub mod test_helpers;

// Re-export commonly used items
pub use fixtures::{reference_parameters, stokes_only_model, water_regime};
pub use test_helpers::{assert_series_close, max_abs_error, relative_error};

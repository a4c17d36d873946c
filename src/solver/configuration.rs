//! Integration settings
//!
//! # Design
//!
//! The fine integration step and the horizon are exposed parameters rather
//! than constants. The settings also carry the stability guidance for the
//! explicit scheme: `dt_small` must stay well below the fastest timescale of
//! the model, `min(m/k, 1/β)`. This is a caller obligation; the integrator
//! never rejects or corrects a step for being too large.

use crate::error::{ensure_non_negative, ensure_positive, SettleError};
use crate::physics::MemoryModel;

/// Rounding allowed past the end of a span, in units of `f64::EPSILON · span`
///
/// `0.3 / 0.1` evaluates to `2.9999999999999996` although three steps of 0.1
/// reach 0.3 up to one ulp.
const END_TOLERANCE_ULPS: f64 = 4.0;

/// Ratios at or above this do not fit a `usize` step count
const MAX_INTERVALS: f64 = usize::MAX as f64;

/// Fraction of the fastest timescale above which a step is reported as
/// likely inaccurate
pub const STABILITY_FRACTION: f64 = 0.1;

/// Fine-grid settings of the RK4 integrator
///
/// # Example
///
/// ```rust
/// use settle_rs::solver::IntegrationSettings;
///
/// let settings = IntegrationSettings::new(1e-6, 0.001);
/// assert!(settings.validate().is_ok());
/// assert_eq!(settings.time_steps(), 1000);
/// assert_eq!(settings.points(), 1001);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntegrationSettings {
    /// Fine integration step (s)
    pub dt_small: f64,

    /// Integration horizon (s)
    pub t_max: f64,
}

impl IntegrationSettings {
    /// Create settings (unchecked, call [`validate`](Self::validate))
    pub fn new(dt_small: f64, t_max: f64) -> Self {
        Self { dt_small, t_max }
    }

    /// dt = 1 µs over the first millisecond
    pub fn reference() -> Self {
        Self::new(1e-6, 1e-3)
    }

    /// Builder pattern: set the fine step
    pub fn dt_small(mut self, dt_small: f64) -> Self {
        self.dt_small = dt_small;
        self
    }

    /// Builder pattern: set the horizon
    pub fn t_max(mut self, t_max: f64) -> Self {
        self.t_max = t_max;
        self
    }

    /// `dt_small > 0` and `t_max ≥ 0`, both finite, with a step count that
    /// fits a `usize`
    pub fn validate(&self) -> Result<(), SettleError> {
        ensure_positive("dt_small", self.dt_small)?;
        ensure_non_negative("t_max", self.t_max)?;
        ensure_countable("dt_small", self.t_max, self.dt_small)?;
        Ok(())
    }

    /// Number of RK4 steps: the largest n with `n·dt_small ≤ t_max`
    pub fn time_steps(&self) -> usize {
        whole_intervals(self.t_max, self.dt_small)
    }

    /// Number of trajectory points, both endpoints included
    pub fn points(&self) -> usize {
        self.time_steps().saturating_add(1)
    }

    /// Time of the last trajectory point
    ///
    /// Never beyond `t_max` except by the rounding of `n·dt_small` when the
    /// step divides the horizon.
    pub fn last_time(&self) -> f64 {
        self.time_steps() as f64 * self.dt_small
    }

    /// Largest timescale-based step recommended for `model`
    pub fn stability_limit(model: &MemoryModel) -> f64 {
        STABILITY_FRACTION * model.fastest_timescale()
    }

    /// Whether `dt_small` resolves the model's fastest timescale
    ///
    /// Logs a warning when it does not. The result is advisory only.
    pub fn resolves(&self, model: &MemoryModel) -> bool {
        let limit = Self::stability_limit(model);
        let resolved = self.dt_small <= limit;

        if !resolved {
            log::warn!(
                "dt_small = {:e} s exceeds {:e} s ({} × fastest timescale {:e} s); \
                 RK4 results may be inaccurate or diverge",
                self.dt_small,
                limit,
                STABILITY_FRACTION,
                model.fastest_timescale(),
            );
        }

        resolved
    }
}

/// Number of whole `step` intervals in `span`
///
/// Floors `span / step`, then takes one more interval when its end lies
/// within a few ulps of `span`.
pub(crate) fn whole_intervals(span: f64, step: f64) -> usize {
    let intervals = (span / step).floor();
    let overshoot = (intervals + 1.0) * step - span;

    if overshoot <= END_TOLERANCE_ULPS * f64::EPSILON * span {
        (intervals + 1.0) as usize
    } else {
        intervals as usize
    }
}

/// Reject a `step` so small that `span / step` overflows the interval count
pub(crate) fn ensure_countable(
    name: &'static str,
    span: f64,
    step: f64,
) -> Result<(), SettleError> {
    if span / step >= MAX_INTERVALS {
        return Err(SettleError::invalid(name, step, "too small for the span, step count overflows"));
    }
    Ok(())
}

impl Default for IntegrationSettings {
    fn default() -> Self {
        Self::reference()
    }
}

// =================================================================================================
// Tests
// =================================================================================================

//! Linear resampling of the dense trajectory
//!
//! The integrator works on a fine grid, the report on a coarse one. Values
//! at report times are obtained by piecewise-linear interpolation between the
//! two bracketing fine-grid points. Outside the trajectory span the value is
//! clamped to the nearest endpoint.

use crate::error::{ensure_non_negative, ensure_positive, SettleError};
use crate::solver::{ensure_countable, whole_intervals, Trajectory};

/// Ordered `(t, value)` pairs at report times
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSeries {
    times: Vec<f64>,
    values: Vec<f64>,
}

impl SampleSeries {
    /// Pair sample times with their values
    ///
    /// # Errors
    ///
    /// `InvalidParameter` when the two columns differ in length.
    pub fn new(times: Vec<f64>, values: Vec<f64>) -> Result<Self, SettleError> {
        if times.len() != values.len() {
            return Err(SettleError::invalid(
                "values",
                values.len() as f64,
                "column length must match times",
            ));
        }
        Ok(Self { times, values })
    }

    /// Evaluate `f` at every sample time
    pub fn from_fn<F>(times: &[f64], f: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        Self {
            times: times.to_vec(),
            values: times.iter().map(|&t| f(t)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn times(&self) -> &[f64] {
        &self.times
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Iterate over `(t, value)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.times.iter().copied().zip(self.values.iter().copied())
    }

    /// Split into `(times, values)`
    pub fn into_columns(self) -> (Vec<f64>, Vec<f64>) {
        (self.times, self.values)
    }
}

/// Report grid from 0 to `t_end` inclusive with spacing `step`
///
/// Points are computed from their index, so `sample_grid(0.001, 1e-4)` has
/// exactly 11 points and ends on 0.001. The last point never passes `t_end`
/// by more than rounding.
///
/// ```rust
/// use settle_rs::comparison::sample_grid;
///
/// let grid = sample_grid(0.001, 1e-4)?;
/// assert_eq!(grid.len(), 11);
/// assert_eq!(grid[0], 0.0);
/// assert!((grid[10] - 0.001).abs() < 1e-15);
/// # Ok::<(), settle_rs::SettleError>(())
/// ```
pub fn sample_grid(t_end: f64, step: f64) -> Result<Vec<f64>, SettleError> {
    ensure_non_negative("t_end", t_end)?;
    ensure_positive("step", step)?;
    ensure_countable("step", t_end, step)?;

    let intervals = whole_intervals(t_end, step);
    Ok((0..=intervals).map(|i| i as f64 * step).collect())
}

/// Piecewise-linear interpolation of `(xs, ys)` at `x`
///
/// `xs` must be increasing. Outside `[xs[0], xs[last]]` the nearest endpoint
/// value is returned. An empty grid or a NaN `x` yields NaN.
pub fn interpolate(xs: &[f64], ys: &[f64], x: f64) -> f64 {
    let n = xs.len().min(ys.len());
    if n == 0 || x.is_nan() {
        return f64::NAN;
    }
    if x <= xs[0] {
        return ys[0];
    }
    if x >= xs[n - 1] {
        return ys[n - 1];
    }

    // First index with xs[upper] > x; 1 ≤ upper ≤ n-1 after the clamps above
    let upper = xs[..n].partition_point(|&xi| xi <= x);
    let lower = upper - 1;

    let (x0, x1) = (xs[lower], xs[upper]);
    let (y0, y1) = (ys[lower], ys[upper]);

    y0 + (y1 - y0) * (x - x0) / (x1 - x0)
}

/// Resample the trajectory velocity onto `sample_times`
///
/// ```rust
/// use settle_rs::comparison::resample;
/// use settle_rs::solver::Trajectory;
///
/// let trajectory = Trajectory::from_columns(
///     vec![0.0, 1.0, 2.0],
///     vec![0.0, 2.0, 3.0],
///     vec![0.0, 0.0, 0.0],
/// )?;
///
/// let series = resample(&trajectory, &[0.5, 1.5, 5.0]);
/// assert_eq!(series.values(), &[1.0, 2.5, 3.0]);
/// # Ok::<(), settle_rs::SettleError>(())
/// ```
pub fn resample(trajectory: &Trajectory, sample_times: &[f64]) -> SampleSeries {
    resample_column(trajectory.times(), trajectory.velocity(), sample_times)
}

/// Resample the auxiliary memory state `w` onto `sample_times`
pub fn resample_memory(trajectory: &Trajectory, sample_times: &[f64]) -> SampleSeries {
    resample_column(trajectory.times(), trajectory.memory(), sample_times)
}

fn resample_column(times: &[f64], column: &[f64], sample_times: &[f64]) -> SampleSeries {
    SampleSeries::from_fn(sample_times, |t| interpolate(times, column, t))
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp() -> Trajectory {
        Trajectory::from_columns(
            vec![0.0, 1.0, 2.0, 4.0],
            vec![0.0, 10.0, 20.0, 0.0],
            vec![1.0, 2.0, 3.0, 4.0],
        )
        .unwrap()
    }

    #[test]
    fn test_interpolation_exact_at_nodes() {
        let trajectory = ramp();
        let series = resample(&trajectory, trajectory.times());

        assert_eq!(series.values(), trajectory.velocity());
    }

    #[test]
    fn test_interpolation_between_nodes() {
        let series = resample(&ramp(), &[0.5, 1.25, 3.0]);
        assert_eq!(series.values(), &[5.0, 12.5, 10.0]);
    }

    #[test]
    fn test_interpolation_clamps_outside_span() {
        let series = resample(&ramp(), &[-1.0, 10.0]);
        assert_eq!(series.values(), &[0.0, 0.0]);

        let memory = resample_memory(&ramp(), &[-1.0, 10.0]);
        assert_eq!(memory.values(), &[1.0, 4.0]);
    }

    #[test]
    fn test_single_point_trajectory() {
        let trajectory = Trajectory::from_columns(vec![0.0], vec![3.0], vec![0.0]).unwrap();
        let series = resample(&trajectory, &[0.0, 1.0]);

        assert_eq!(series.values(), &[3.0, 3.0]);
    }

    #[test]
    fn test_interpolate_empty_grid_is_nan() {
        assert!(interpolate(&[], &[], 1.0).is_nan());
    }

    #[test]
    fn test_nan_sample_time_yields_nan() {
        assert!(interpolate(&[0.0, 1.0], &[0.0, 1.0], f64::NAN).is_nan());

        let series = resample(&ramp(), &[0.5, f64::NAN, 3.0]);
        assert_eq!(series.values()[0], 5.0);
        assert!(series.values()[1].is_nan());
        assert_eq!(series.values()[2], 10.0);

        let memory = resample_memory(&ramp(), &[f64::NAN]);
        assert!(memory.values()[0].is_nan());
    }

    #[test]
    fn test_infinite_sample_time_clamps() {
        let series = resample(&ramp(), &[f64::NEG_INFINITY, f64::INFINITY]);
        assert_eq!(series.values(), &[0.0, 0.0]);
    }

    #[test]
    fn test_nan_propagates() {
        let trajectory =
            Trajectory::from_columns(vec![0.0, 1.0], vec![0.0, f64::NAN], vec![0.0, 0.0]).unwrap();
        let series = resample(&trajectory, &[0.5]);

        assert!(series.values()[0].is_nan());
    }

    #[test]
    fn test_sample_grid() {
        let grid = sample_grid(0.001, 1e-4).unwrap();
        assert_eq!(grid.len(), 11);
        assert_eq!(grid[5], 5.0 * 1e-4);

        assert_eq!(sample_grid(0.0, 1e-4).unwrap(), vec![0.0]);
        assert_eq!(sample_grid(1.05, 0.1).unwrap().len(), 11);

        // Never past the end by more than rounding
        let grid = sample_grid(1.0 - 1e-11, 0.1).unwrap();
        assert_eq!(grid.len(), 10);
        assert!(*grid.last().unwrap() <= 1.0 - 1e-11);
        assert_eq!(sample_grid(0.3, 0.1).unwrap().len(), 4);

        assert_eq!(sample_grid(1.0, 1e-300).unwrap_err().parameter(), "step");
        assert!(sample_grid(0.001, 0.0).is_err());
        assert!(sample_grid(-0.001, 1e-4).is_err());
    }

    #[test]
    fn test_sample_series() {
        let series = SampleSeries::new(vec![0.0, 1.0], vec![2.0, 3.0]).unwrap();
        let pairs: Vec<_> = series.iter().collect();
        assert_eq!(pairs, vec![(0.0, 2.0), (1.0, 3.0)]);

        assert!(SampleSeries::new(vec![0.0], vec![]).is_err());
    }
}

//! Report tables
//!
//! Three tabular artifacts, each a set of equal-length numeric columns keyed
//! by their first column:
//!
//! | Table                  | Columns                                   |
//! |------------------------|-------------------------------------------|
//! | [`KinematicsTable`]    | t, v(t), x(t) (analytical, one viscosity) |
//! | [`RegimeComparison`]   | μ, τ, v∞ (one row per viscosity)          |
//! | [`VelocityComparison`] | t, v without memory, v with memory        |
//!
//! Building a table is a pure transformation; rendering is left to the caller.

use crate::comparison::resample::resample;
use crate::physics::{analytical, DragRegime};
use crate::solver::Trajectory;

// =================================================================================================
// Kinematics table
// =================================================================================================

/// Analytical velocity and position over the report grid
#[derive(Debug, Clone, PartialEq)]
pub struct KinematicsTable {
    /// Viscosity the table was computed for (Pa·s)
    pub viscosity: f64,

    /// t (s)
    pub times: Vec<f64>,

    /// v(t) (m/s)
    pub velocity: Vec<f64>,

    /// x(t) (m)
    pub position: Vec<f64>,
}

impl KinematicsTable {
    pub const HEADERS: [&'static str; 3] = ["t (s)", "v(t) (m/s)", "x(t) (m)"];

    /// Evaluate the closed-form solution of `regime` at `times`
    pub fn build(regime: &DragRegime, times: &[f64]) -> Self {
        Self {
            viscosity: regime.viscosity,
            times: times.to_vec(),
            velocity: analytical::velocities(times, regime.v_inf, regime.tau),
            position: analytical::positions(times, regime.v_inf, regime.tau),
        }
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Rows `[t, v, x]`
    pub fn rows(&self) -> impl Iterator<Item = [f64; 3]> + '_ {
        (0..self.len()).map(|i| [self.times[i], self.velocity[i], self.position[i]])
    }
}

// =================================================================================================
// Regime comparison
// =================================================================================================

/// One row of [`RegimeComparison`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegimeRow {
    /// μ (Pa·s)
    pub viscosity: f64,

    /// τ (s)
    pub tau: f64,

    /// v∞ (m/s)
    pub v_inf: f64,
}

impl From<&DragRegime> for RegimeRow {
    fn from(regime: &DragRegime) -> Self {
        Self {
            viscosity: regime.viscosity,
            tau: regime.tau,
            v_inf: regime.v_inf,
        }
    }
}

/// Relaxation time and terminal velocity side by side for several fluids
#[derive(Debug, Clone, PartialEq)]
pub struct RegimeComparison {
    pub rows: Vec<RegimeRow>,
}

impl RegimeComparison {
    pub const HEADERS: [&'static str; 3] = ["μ (Pa·s)", "τ (s)", "v∞ (m/s)"];

    pub fn build(regimes: &[DragRegime]) -> Self {
        Self {
            rows: regimes.iter().map(RegimeRow::from).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Ratios `(τ_a / τ_b, v∞_a / v∞_b)` between rows `a` and `b`
    pub fn ratios(&self, a: usize, b: usize) -> Option<(f64, f64)> {
        let row_a = self.rows.get(a)?;
        let row_b = self.rows.get(b)?;
        Some((row_a.tau / row_b.tau, row_a.v_inf / row_b.v_inf))
    }
}

// =================================================================================================
// Velocity comparison
// =================================================================================================

/// Memoryless (analytical) against memory-model (interpolated RK4) velocity
#[derive(Debug, Clone, PartialEq)]
pub struct VelocityComparison {
    /// t (s)
    pub times: Vec<f64>,

    /// v without memory, exact (m/s)
    pub without_memory: Vec<f64>,

    /// v with memory, interpolated from the dense trajectory (m/s)
    pub with_memory: Vec<f64>,
}

impl VelocityComparison {
    pub const HEADERS: [&'static str; 3] =
        ["t (s)", "v_no_memory (m/s)", "v_with_memory (m/s)"];

    /// Pair the analytical solution of `regime` with `trajectory` at `times`
    pub fn build(regime: &DragRegime, trajectory: &Trajectory, times: &[f64]) -> Self {
        let (_, with_memory) = resample(trajectory, times).into_columns();

        Self {
            times: times.to_vec(),
            without_memory: analytical::velocities(times, regime.v_inf, regime.tau),
            with_memory,
        }
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Rows `[t, v_no_memory, v_with_memory]`
    pub fn rows(&self) -> impl Iterator<Item = [f64; 3]> + '_ {
        (0..self.len()).map(|i| [self.times[i], self.without_memory[i], self.with_memory[i]])
    }

    /// `v_with_memory − v_no_memory` per row
    pub fn difference(&self) -> Vec<f64> {
        self.with_memory
            .iter()
            .zip(&self.without_memory)
            .map(|(with, without)| with - without)
            .collect()
    }

    /// Largest absolute difference between the two models (NaN if any row is NaN)
    pub fn max_abs_difference(&self) -> f64 {
        self.difference()
            .into_iter()
            .map(f64::abs)
            .fold(0.0, |acc, d| if d.is_nan() || acc.is_nan() { f64::NAN } else { acc.max(d) })
    }
}

// =================================================================================================
// Tests
// =================================================================================================

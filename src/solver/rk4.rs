//! Runge-Kutta 4 (RK4) integrator for the memory model
//!
//! # Mathematical Background
//!
//! The classical fourth-order Runge-Kutta method advances dy/dt = f(y) with a
//! weighted average of four slope estimates:
//!
//! ```text
//! k₁ = f(yₙ)
//! k₂ = f(yₙ + dt/2 · k₁)
//! k₃ = f(yₙ + dt/2 · k₂)
//! k₄ = f(yₙ + dt · k₃)
//!
//! yₙ₊₁ = yₙ + dt/6 · (k₁ + 2k₂ + 2k₃ + k₄)
//! ```
//!
//! Here y = `[v, w]` and f is [`memory_rhs`](crate::physics::memory_rhs), so
//! each stage updates v and w together with 2-vector arithmetic.
//!
//! # Characteristics
//!
//! - **Order**: local truncation error O(dt⁵), global error O(dt⁴)
//! - **Cost**: 4 right-hand side evaluations per step
//! - **Step**: fixed, no error control
//!
//! # Stability
//!
//! No stability check is performed. For the linear system here the scheme is
//! stable while dt·λ stays inside the RK4 region (|λ|·dt ≲ 2.78, λ = k/m for
//! the velocity equation). Well below that, see
//! [`IntegrationSettings::resolves`]. A step that is too large produces NaN
//! or infinite values, returned as is.
//!
//! # Example
//!
//! ```rust
//! use settle_rs::physics::{MemoryCoefficients, PhysicalParameters, MU_WATER};
//! use settle_rs::solver::{integrate, IntegrationSettings};
//!
//! let trajectory = integrate(
//!     &PhysicalParameters::reference(),
//!     MU_WATER,
//!     &MemoryCoefficients::reference(),
//!     &IntegrationSettings::new(1e-6, 0.001),
//! )?;
//!
//! assert_eq!(trajectory.len(), 1001);
//! # Ok::<(), settle_rs::SettleError>(())
//! ```

use crate::error::SettleError;
use crate::physics::{MemoryCoefficients, MemoryModel, MemoryState, PhysicalParameters};
use crate::solver::{IntegrationSettings, Trajectory};

// =================================================================================================
// RK4 Integrator
// =================================================================================================

/// Classical fourth-order Runge-Kutta integrator for [`MemoryModel`]
#[derive(Debug, Clone, Copy, Default)]
pub struct RK4Integrator;

impl RK4Integrator {
    /// Create a new RK4 integrator
    ///
    /// ```rust
    /// use settle_rs::solver::RK4Integrator;
    ///
    /// assert_eq!(RK4Integrator::new().name(), "Runge-Kutta 4");
    /// ```
    pub fn new() -> Self {
        Self
    }

    pub fn name(&self) -> &'static str {
        "Runge-Kutta 4"
    }

    /// Integrate `model` from rest over `[0, settings.t_max]`
    ///
    /// Returns every fine-grid point. Time points are computed from the step
    /// index (`tᵢ = i·dt`), never accumulated, so the last point lands on
    /// `t_max` to machine precision when `dt_small` divides it.
    ///
    /// # Errors
    ///
    /// `InvalidParameter` when `dt_small ≤ 0` or `t_max < 0`.
    pub fn integrate(
        &self,
        model: &MemoryModel,
        settings: &IntegrationSettings,
    ) -> Result<Trajectory, SettleError> {
        // ====== Step 1: Validation ======

        settings.validate()?;
        settings.resolves(model);

        // ====== Step 2: Setup ======

        let dt = settings.dt_small;
        let time_steps = settings.time_steps();

        let mut state = model.initial_state();

        // Exact capacity, no reallocation during integration
        let mut time_points = Vec::with_capacity(time_steps + 1);
        let mut states = Vec::with_capacity(time_steps + 1);

        time_points.push(0.0);
        states.push(state);

        // ====== Step 3: Time Integration ======

        for step in 0..time_steps {
            state = rk4_step(model, &state, dt);

            states.push(state);
            time_points.push((step as f64 + 1.0) * dt);
        }

        // ====== Step 4: Build Result ======

        let mut trajectory = Trajectory::from_states(time_points, &states)?;

        trajectory.add_metadata("solver", self.name());
        trajectory.add_metadata("time steps", &time_steps.to_string());
        trajectory.add_metadata("dt", &dt.to_string());
        trajectory.add_metadata("total time", &trajectory.t_max().to_string());
        trajectory.add_metadata("function evaluations", &(4 * time_steps).to_string());

        log::debug!(
            "RK4: {} steps of {:e} s, final v = {:e} m/s, w = {:e}",
            time_steps,
            dt,
            state[0],
            state[1],
        );

        Ok(trajectory)
    }
}

/// Advance `state` by one RK4 step of size `dt`
pub fn rk4_step(model: &MemoryModel, state: &MemoryState, dt: f64) -> MemoryState {
    // Slope at the beginning of the interval
    let k1 = model.rhs(state);

    // Slopes at the midpoint, predicted with k₁ then k₂
    let k2 = model.rhs(&(state + k1 * (dt / 2.0)));
    let k3 = model.rhs(&(state + k2 * (dt / 2.0)));

    // Slope at the end of the interval, predicted with k₃
    let k4 = model.rhs(&(state + k3 * dt));

    // Simpson weights: 1/6 at the ends, 1/3 at the midpoint
    state + (k1 + k2 * 2.0 + k3 * 2.0 + k4) * (dt / 6.0)
}

impl MemoryModel {
    /// Integrate this model with [`RK4Integrator`]
    pub fn integrate(&self, settings: &IntegrationSettings) -> Result<Trajectory, SettleError> {
        RK4Integrator::new().integrate(self, settings)
    }
}

/// Build the memory model and integrate it
///
/// Convenience wrapper over [`MemoryModel::new`] and
/// [`RK4Integrator::integrate`].
///
/// # Errors
///
/// `InvalidParameter` when μ ≤ 0, the parameter set is invalid,
/// `dt_small ≤ 0` or `t_max < 0`.
pub fn integrate(
    params: &PhysicalParameters,
    viscosity: f64,
    coefficients: &MemoryCoefficients,
    settings: &IntegrationSettings,
) -> Result<Trajectory, SettleError> {
    let model = MemoryModel::new(params, viscosity, coefficients)?;
    RK4Integrator::new().integrate(&model, settings)
}

// =================================================================================================
// Tests
// =================================================================================================

//! Settling model with a memory force
//!
//! # Mathematical Background
//!
//! The memoryless drag is extended with a history-dependent force carried by
//! an auxiliary state `w` (a Basset-type approximation):
//!
//! ```text
//! dv/dt = (Cgrav − k·v − α·w) / m
//! dw/dt = v − β·w
//! ```
//!
//! Where:
//! - **Cgrav** = (m − ρf·V)·g : net buoyancy-corrected weight [N]
//! - **k** = 6πμR : Stokes drag coefficient [kg/s]
//! - **α** : memory coupling strength [kg/s²]
//! - **β** : memory relaxation rate [1/s]
//!
//! `w` has no physical sampling requirement; it is kept in the trajectory for
//! inspection.
//!
//! With α = 0 the velocity equation decouples and reduces to plain Stokes
//! drag, whose solution is [`analytical::velocity`](crate::physics::analytical::velocity).
//!
//! # Timescales
//!
//! The fastest timescales of the system are m/k (viscous relaxation, equal to
//! τ) and 1/β. An explicit fixed step must stay well below both. A negative β
//! is accepted but makes w grow without bound; no step size cures that.

use nalgebra::Vector2;

use crate::error::SettleError;
use crate::physics::parameters::{DragRegime, MemoryCoefficients, PhysicalParameters};

/// State of the memory model: `[v, w]`
pub type MemoryState = Vector2<f64>;

/// Coefficients of the coupled (v, w) system for one viscosity
///
/// # Example
///
/// ```rust
/// use settle_rs::physics::{MemoryModel, MemoryCoefficients, PhysicalParameters, MU_WATER};
///
/// let model = MemoryModel::new(
///     &PhysicalParameters::reference(),
///     MU_WATER,
///     &MemoryCoefficients::reference(),
/// ).unwrap();
///
/// // Released from rest: only gravity acts
/// let derivative = model.rhs(&model.initial_state());
/// assert!(derivative[0] > 0.0);
/// assert_eq!(derivative[1], 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MemoryModel {
    /// Particle mass m (kg)
    pub mass: f64,

    /// Net weight Cgrav (N)
    pub net_weight: f64,

    /// Stokes coefficient k (kg/s)
    pub drag_coefficient: f64,

    /// Memory coupling α (kg/s²)
    pub alpha: f64,

    /// Memory relaxation rate β (1/s)
    pub beta: f64,
}

impl MemoryModel {
    /// Assemble the model for viscosity `viscosity`
    ///
    /// # Errors
    ///
    /// `InvalidParameter` when the parameter set is invalid, μ ≤ 0, or a
    /// memory coefficient is not finite.
    pub fn new(
        params: &PhysicalParameters,
        viscosity: f64,
        coefficients: &MemoryCoefficients,
    ) -> Result<Self, SettleError> {
        let regime = DragRegime::new(params, viscosity)?;
        coefficients.validate()?;

        Ok(Self {
            mass: params.derived().mass,
            net_weight: params.net_weight(),
            drag_coefficient: regime.drag_coefficient,
            alpha: coefficients.alpha,
            beta: coefficients.beta,
        })
    }

    /// v(0) = 0, w(0) = 0
    pub fn initial_state(&self) -> MemoryState {
        MemoryState::zeros()
    }

    /// Right-hand side `[dv/dt, dw/dt]` at `state`
    pub fn rhs(&self, state: &MemoryState) -> MemoryState {
        memory_rhs(state, self)
    }

    /// Viscous relaxation time m/k (s)
    pub fn viscous_timescale(&self) -> f64 {
        self.mass / self.drag_coefficient
    }

    /// Memory relaxation time 1/β (s)
    ///
    /// Infinite when β ≤ 0: w then never relaxes. For β < 0 it grows as
    /// exp(|β|·t) and the trajectory itself diverges, whatever the step.
    pub fn memory_timescale(&self) -> f64 {
        if self.beta > 0.0 {
            1.0 / self.beta
        } else {
            f64::INFINITY
        }
    }

    /// Shortest timescale an explicit step must resolve
    pub fn fastest_timescale(&self) -> f64 {
        self.viscous_timescale().min(self.memory_timescale())
    }
}

/// Pure right-hand side of the coupled system
///
/// ```text
/// dv/dt = (Cgrav − k·v − α·w) / m
/// dw/dt = v − β·w
/// ```
pub fn memory_rhs(state: &MemoryState, model: &MemoryModel) -> MemoryState {
    let v = state[0];
    let w = state[1];

    let dv_dt = (model.net_weight - model.drag_coefficient * v - model.alpha * w) / model.mass;
    let dw_dt = v - model.beta * w;

    MemoryState::new(dv_dt, dw_dt)
}

// =================================================================================================
// Tests
// =================================================================================================

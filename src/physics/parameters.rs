//! Physical parameter set
//!
//! Holds the fixed constants of the settling problem and the quantities that
//! derive from them:
//!
//! ```text
//! V  = (4/3)·π·R³                  particle volume
//! m  = ρp·V                        particle mass
//! τ  = (2/9)·ρp·R²/μ               relaxation time
//! v∞ = (2/9)·(ρp − ρf)·R²·g/μ      terminal velocity
//! k  = 6·π·μ·R                     Stokes drag coefficient
//! ```
//!
//! Every value here is a plain immutable struct. Derived quantities are
//! recomputed on demand and never stored alongside their inputs.

use std::f64::consts::PI;

use crate::comparison::SampleSeries;
use crate::error::{ensure_finite, ensure_non_negative, ensure_positive, SettleError};
use crate::physics::analytical;

/// Viscosity of water used in the reference scenario (Pa·s)
pub const MU_WATER: f64 = 1e-3;

/// Viscosity of oil used in the reference scenario (Pa·s)
pub const MU_OIL: f64 = 0.1;

// =================================================================================================
// Physical parameters
// =================================================================================================

/// Particle and fluid constants
///
/// # Invariant
///
/// `radius > 0`, `particle_density > 0`, `fluid_density ≥ 0`, all finite.
/// Checked by [`PhysicalParameters::validate`].
///
/// # Example
///
/// ```rust
/// use settle_rs::physics::PhysicalParameters;
///
/// let params = PhysicalParameters::reference();
/// assert!(params.validate().is_ok());
/// assert_eq!(params.radius, 1e-5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalParameters {
    /// Particle radius R (m)
    pub radius: f64,

    /// Particle density ρp (kg/m³)
    pub particle_density: f64,

    /// Fluid density ρf (kg/m³)
    pub fluid_density: f64,

    /// Gravitational acceleration g (m/s²)
    pub gravity: f64,
}

impl PhysicalParameters {
    /// Create a parameter set (unchecked, call [`validate`](Self::validate))
    pub fn new(radius: f64, particle_density: f64, fluid_density: f64, gravity: f64) -> Self {
        Self {
            radius,
            particle_density,
            fluid_density,
            gravity,
        }
    }

    /// Reference scenario: 10 µm sphere, ρp = 1200 kg/m³ in water-like fluid
    pub fn reference() -> Self {
        Self::new(1e-5, 1200.0, 1000.0, 9.81)
    }

    /// Check the invariant on radius and densities
    pub fn validate(&self) -> Result<(), SettleError> {
        ensure_positive("radius", self.radius)?;
        ensure_positive("particle_density", self.particle_density)?;
        ensure_non_negative("fluid_density", self.fluid_density)?;
        ensure_finite("gravity", self.gravity)?;
        Ok(())
    }

    /// Particle volume and mass
    pub fn derived(&self) -> DerivedQuantities {
        DerivedQuantities::from_parameters(self)
    }

    /// Drag regime for a given viscosity
    pub fn regime(&self, viscosity: f64) -> Result<DragRegime, SettleError> {
        DragRegime::new(self, viscosity)
    }

    /// Net buoyancy-corrected weight Cgrav = (m − ρf·V)·g (N)
    pub fn net_weight(&self) -> f64 {
        let derived = self.derived();
        (derived.mass - self.fluid_density * derived.volume) * self.gravity
    }
}

impl Default for PhysicalParameters {
    fn default() -> Self {
        Self::reference()
    }
}

// =================================================================================================
// Derived quantities
// =================================================================================================

/// Volume and mass of the particle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedQuantities {
    /// V = (4/3)πR³ (m³)
    pub volume: f64,

    /// m = ρp·V (kg)
    pub mass: f64,
}

impl DerivedQuantities {
    /// Compute volume and mass from the parameter set
    pub fn from_parameters(params: &PhysicalParameters) -> Self {
        let volume = 4.0 / 3.0 * PI * params.radius.powi(3);
        Self {
            volume,
            mass: params.particle_density * volume,
        }
    }
}

// =================================================================================================
// Drag regime
// =================================================================================================

/// Stokes drag regime for one viscosity value
///
/// Bundles the viscosity with its relaxation time, terminal velocity and
/// Stokes coefficient. A negative terminal velocity means the particle rises
/// (ρp < ρf) and is kept as is.
///
/// # Example
///
/// ```rust
/// use settle_rs::physics::{PhysicalParameters, MU_WATER};
///
/// let params = PhysicalParameters::reference();
/// let water = params.regime(MU_WATER).unwrap();
///
/// assert!((water.tau - 2.6667e-5).abs() < 1e-8);
/// assert!(water.v_inf > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragRegime {
    /// Dynamic viscosity μ (Pa·s)
    pub viscosity: f64,

    /// Relaxation time τ (s)
    pub tau: f64,

    /// Terminal velocity v∞ (m/s)
    pub v_inf: f64,

    /// Stokes drag coefficient k = 6πμR (kg/s)
    pub drag_coefficient: f64,
}

impl DragRegime {
    /// Build the regime, rejecting μ ≤ 0 and invalid parameter sets
    pub fn new(params: &PhysicalParameters, viscosity: f64) -> Result<Self, SettleError> {
        params.validate()?;
        ensure_positive("mu", viscosity)?;

        Ok(Self {
            viscosity,
            tau: analytical::tau(viscosity, params.particle_density, params.radius),
            v_inf: analytical::v_inf(
                viscosity,
                params.particle_density,
                params.fluid_density,
                params.radius,
                params.gravity,
            ),
            drag_coefficient: stokes_coefficient(viscosity, params.radius),
        })
    }

    /// Analytical velocity v(t)
    pub fn velocity(&self, t: f64) -> f64 {
        analytical::velocity(t, self.v_inf, self.tau)
    }

    /// Analytical position x(t)
    pub fn position(&self, t: f64) -> f64 {
        analytical::position(t, self.v_inf, self.tau)
    }

    /// v(t) at every sample time
    pub fn velocity_series(&self, times: &[f64]) -> SampleSeries {
        SampleSeries::from_fn(times, |t| self.velocity(t))
    }

    /// x(t) at every sample time
    pub fn position_series(&self, times: &[f64]) -> SampleSeries {
        SampleSeries::from_fn(times, |t| self.position(t))
    }
}

/// Stokes drag coefficient k = 6πμR
pub fn stokes_coefficient(viscosity: f64, radius: f64) -> f64 {
    6.0 * PI * viscosity * radius
}

// =================================================================================================
// Memory coefficients
// =================================================================================================

/// Coupling constants of the memory term
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MemoryCoefficients {
    /// Coupling strength α (kg/s²)
    pub alpha: f64,

    /// Memory relaxation rate β (1/s)
    pub beta: f64,
}

impl MemoryCoefficients {
    pub fn new(alpha: f64, beta: f64) -> Self {
        Self { alpha, beta }
    }

    /// α = 1e-7 kg/s², β = 5 s⁻¹
    pub fn reference() -> Self {
        Self::new(1e-7, 5.0)
    }

    /// Memory term switched off: the model reduces to plain Stokes drag
    pub fn disabled(beta: f64) -> Self {
        Self::new(0.0, beta)
    }

    pub fn validate(&self) -> Result<(), SettleError> {
        ensure_finite("alpha", self.alpha)?;
        ensure_finite("beta", self.beta)?;
        Ok(())
    }
}

impl Default for MemoryCoefficients {
    fn default() -> Self {
        Self::reference()
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_parameters_valid() {
        assert!(PhysicalParameters::reference().validate().is_ok());
        assert_eq!(PhysicalParameters::default(), PhysicalParameters::reference());
    }

    #[test]
    fn test_invalid_radius_rejected() {
        let params = PhysicalParameters::new(0.0, 1200.0, 1000.0, 9.81);
        let error = params.validate().unwrap_err();
        assert_eq!(error.parameter(), "radius");

        let params = PhysicalParameters::new(-1e-5, 1200.0, 1000.0, 9.81);
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_invalid_densities_rejected() {
        let params = PhysicalParameters::new(1e-5, 0.0, 1000.0, 9.81);
        assert_eq!(params.validate().unwrap_err().parameter(), "particle_density");

        let params = PhysicalParameters::new(1e-5, 1200.0, -1.0, 9.81);
        assert_eq!(params.validate().unwrap_err().parameter(), "fluid_density");

        // ρf = 0 (settling in vacuum-like medium) is allowed
        let params = PhysicalParameters::new(1e-5, 1200.0, 0.0, 9.81);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_derived_quantities() {
        let derived = PhysicalParameters::reference().derived();

        assert_relative_eq!(derived.volume, 4.0 / 3.0 * PI * 1e-15, max_relative = 1e-12);
        assert_relative_eq!(derived.mass, 1200.0 * derived.volume, max_relative = 1e-12);
    }

    #[test]
    fn test_net_weight_uses_density_difference() {
        let params = PhysicalParameters::reference();
        let derived = params.derived();
        let expected = 200.0 * derived.volume * 9.81;

        assert_relative_eq!(params.net_weight(), expected, max_relative = 1e-12);
    }

    #[test]
    fn test_regime_rejects_non_positive_viscosity() {
        let params = PhysicalParameters::reference();

        assert!(params.regime(0.0).is_err());
        assert!(params.regime(-1e-3).is_err());
        assert_eq!(params.regime(0.0).unwrap_err().parameter(), "mu");
    }

    #[test]
    fn test_regime_reference_values() {
        let water = PhysicalParameters::reference().regime(MU_WATER).unwrap();

        assert_relative_eq!(water.tau, 2.0 / 9.0 * 1200.0 * 1e-10 / 1e-3, max_relative = 1e-12);
        assert_relative_eq!(water.v_inf, 4.36e-5, max_relative = 1e-3);
        assert_relative_eq!(water.drag_coefficient, 6.0 * PI * 1e-3 * 1e-5, max_relative = 1e-12);
    }

    #[test]
    fn test_regime_buoyant_particle_has_negative_terminal_velocity() {
        let params = PhysicalParameters::new(1e-5, 800.0, 1000.0, 9.81);
        let regime = params.regime(MU_WATER).unwrap();

        assert!(regime.v_inf < 0.0);
        assert!(regime.tau > 0.0);
    }

    #[test]
    fn test_regime_series() {
        let water = PhysicalParameters::reference().regime(MU_WATER).unwrap();
        let times = [0.0, water.tau, 10.0 * water.tau];

        let velocity = water.velocity_series(&times);
        let position = water.position_series(&times);

        assert_eq!(velocity.times(), &times);
        assert_eq!(velocity.values()[0], 0.0);
        assert_eq!(position.values()[0], 0.0);
        assert_relative_eq!(velocity.values()[1], water.v_inf * (1.0 - (-1.0f64).exp()), max_relative = 1e-12);
        assert_eq!(position.values()[2], water.position(10.0 * water.tau));
    }

    #[test]
    fn test_memory_coefficients() {
        let reference = MemoryCoefficients::default();
        assert_eq!(reference.alpha, 1e-7);
        assert_eq!(reference.beta, 5.0);

        assert_eq!(MemoryCoefficients::disabled(5.0).alpha, 0.0);
        assert!(MemoryCoefficients::new(f64::NAN, 5.0).validate().is_err());
    }
}

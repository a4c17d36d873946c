//! Complete settling study
//!
//! [`StudyConfiguration`] collects every input of the analysis in one
//! immutable value; [`SettlingReport::build`] runs the pipeline:
//!
//! ```text
//! StudyConfiguration
//!   ├── DragRegime(μ1), DragRegime(μ2)          analytical
//!   ├── integrate(μ1, α, β, dt_small, t_max)    dense RK4 trajectory
//!   └── sample_grid(t_report, step_report)      coarse report times
//!         │
//!         ▼
//!   KinematicsTable, RegimeComparison, VelocityComparison, ReportSummary
//! ```

use crate::comparison::resample::sample_grid;
use crate::comparison::tables::{KinematicsTable, RegimeComparison, VelocityComparison};
use crate::error::{ensure_non_negative, ensure_positive, SettleError};
use crate::physics::{
    DerivedQuantities,
    DragRegime,
    MemoryCoefficients,
    MemoryModel,
    PhysicalParameters,
    MU_OIL,
    MU_WATER,
};
use crate::solver::{IntegrationSettings, RK4Integrator, Trajectory};

// =================================================================================================
// Configuration
// =================================================================================================

/// Inputs of a settling study
///
/// # Fields
///
/// - `parameters`: particle and fluid constants
/// - `primary_viscosity`: μ1, used for every table (default: water)
/// - `secondary_viscosity`: μ2, only compared through τ and v∞ (default: oil)
/// - `memory`: α and β of the memory term
/// - `integration`: fine step and horizon of the RK4 run
/// - `report_end`, `report_step`: coarse report grid
///
/// # Example
///
/// ```rust
/// use settle_rs::comparison::StudyConfiguration;
///
/// let config = StudyConfiguration::default()
///     .secondary_viscosity(0.05)
///     .report_grid(0.002, 2e-4);
///
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StudyConfiguration {
    pub parameters: PhysicalParameters,
    pub primary_viscosity: f64,
    pub secondary_viscosity: f64,
    pub memory: MemoryCoefficients,
    pub integration: IntegrationSettings,
    pub report_end: f64,
    pub report_step: f64,
}

impl StudyConfiguration {
    /// Water (μ1 = 1e-3) versus oil (μ2 = 0.1), α = 1e-7, β = 5,
    /// dt_small = 1 µs, report every 0.1 ms up to 1 ms
    pub fn reference() -> Self {
        Self {
            parameters: PhysicalParameters::reference(),
            primary_viscosity: MU_WATER,
            secondary_viscosity: MU_OIL,
            memory: MemoryCoefficients::reference(),
            integration: IntegrationSettings::reference(),
            report_end: 1e-3,
            report_step: 1e-4,
        }
    }

    /// Builder pattern: set the physical parameters
    pub fn parameters(mut self, parameters: PhysicalParameters) -> Self {
        self.parameters = parameters;
        self
    }

    /// Builder pattern: set μ1
    pub fn primary_viscosity(mut self, viscosity: f64) -> Self {
        self.primary_viscosity = viscosity;
        self
    }

    /// Builder pattern: set μ2
    pub fn secondary_viscosity(mut self, viscosity: f64) -> Self {
        self.secondary_viscosity = viscosity;
        self
    }

    /// Builder pattern: set α and β
    pub fn memory(mut self, memory: MemoryCoefficients) -> Self {
        self.memory = memory;
        self
    }

    /// Builder pattern: set the RK4 settings
    pub fn integration(mut self, integration: IntegrationSettings) -> Self {
        self.integration = integration;
        self
    }

    /// Builder pattern: set the report grid
    pub fn report_grid(mut self, end: f64, step: f64) -> Self {
        self.report_end = end;
        self.report_step = step;
        self
    }

    /// Validate every input
    pub fn validate(&self) -> Result<(), SettleError> {
        self.parameters.validate()?;
        ensure_positive("mu", self.primary_viscosity)?;
        ensure_positive("mu", self.secondary_viscosity)?;
        self.memory.validate()?;
        self.integration.validate()?;
        ensure_non_negative("report_end", self.report_end)?;
        ensure_positive("report_step", self.report_step)?;
        Ok(())
    }
}

impl Default for StudyConfiguration {
    fn default() -> Self {
        Self::reference()
    }
}

// =================================================================================================
// Report
// =================================================================================================

/// Scalar results of the study
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportSummary {
    /// V (m³)
    pub volume: f64,
    /// m (kg)
    pub mass: f64,
    /// τ for μ1 (s)
    pub tau_primary: f64,
    /// v∞ for μ1 (m/s)
    pub v_inf_primary: f64,
    /// τ for μ2 (s)
    pub tau_secondary: f64,
    /// v∞ for μ2 (m/s)
    pub v_inf_secondary: f64,
}

impl ReportSummary {
    fn new(derived: &DerivedQuantities, primary: &DragRegime, secondary: &DragRegime) -> Self {
        Self {
            volume: derived.volume,
            mass: derived.mass,
            tau_primary: primary.tau,
            v_inf_primary: primary.v_inf,
            tau_secondary: secondary.tau,
            v_inf_secondary: secondary.v_inf,
        }
    }
}

/// Every artifact of one settling study
#[derive(Debug, Clone)]
pub struct SettlingReport {
    pub summary: ReportSummary,
    pub primary: DragRegime,
    pub secondary: DragRegime,

    /// Coarse report times
    pub sample_times: Vec<f64>,

    /// t, v(t), x(t) for μ1
    pub kinematics: KinematicsTable,

    /// μ, τ, v∞ for μ1 and μ2
    pub regimes: RegimeComparison,

    /// Analytical against memory-model velocity for μ1
    pub velocities: VelocityComparison,

    /// Dense RK4 trajectory for μ1
    pub trajectory: Trajectory,
}

impl SettlingReport {
    /// Run the whole study
    ///
    /// # Errors
    ///
    /// `InvalidParameter` if any input fails [`StudyConfiguration::validate`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use settle_rs::comparison::{SettlingReport, StudyConfiguration};
    ///
    /// let report = SettlingReport::build(&StudyConfiguration::reference())?;
    ///
    /// assert_eq!(report.kinematics.len(), 11);
    /// assert_eq!(report.regimes.len(), 2);
    /// assert_eq!(report.trajectory.len(), 1001);
    /// # Ok::<(), settle_rs::SettleError>(())
    /// ```
    pub fn build(config: &StudyConfiguration) -> Result<Self, SettleError> {
        config.validate()?;

        let params = &config.parameters;
        let primary = params.regime(config.primary_viscosity)?;
        let secondary = params.regime(config.secondary_viscosity)?;

        let model = MemoryModel::new(params, config.primary_viscosity, &config.memory)?;
        let trajectory = RK4Integrator::new().integrate(&model, &config.integration)?;

        let sample_times = sample_grid(config.report_end, config.report_step)?;
        let horizon = trajectory.t_max() + 1e-6 * config.integration.dt_small;
        if sample_times.last().is_some_and(|&t| t > horizon) {
            log::warn!(
                "report grid ends at {:e} s beyond the integrated horizon {:e} s; \
                 memory-model values are clamped to the last point",
                config.report_end,
                trajectory.t_max(),
            );
        }

        let kinematics = KinematicsTable::build(&primary, &sample_times);
        let regimes = RegimeComparison::build(&[primary, secondary]);
        let velocities = VelocityComparison::build(&primary, &trajectory, &sample_times);

        let summary = ReportSummary::new(&params.derived(), &primary, &secondary);

        log::debug!(
            "settling report: {} report rows, {} trajectory points, max |Δv| = {:e} m/s",
            sample_times.len(),
            trajectory.len(),
            velocities.max_abs_difference(),
        );

        Ok(Self {
            summary,
            primary,
            secondary,
            sample_times,
            kinematics,
            regimes,
            velocities,
            trajectory,
        })
    }
}

// =================================================================================================
// Tests
// =================================================================================================

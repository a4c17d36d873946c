//! settle-rs: Stokes settling with a memory force
//!
//! Computes the motion of a small sphere settling under gravity in a viscous
//! fluid and compares two models:
//!
//! - the memoryless Stokes model, solved in closed form
//! - a model with an extra history-dependent force, integrated with RK4
//!
//! # Architecture
//!
//! settle-rs follows two principles:
//!
//! 1. **Separation of Physics and Numerics**
//!    - Physical models define equations (what to solve)
//!    - The integrator provides the method (how to solve)
//!
//! 2. **Two-stage pipeline**
//!    - Integration produces a dense trajectory on a fine grid
//!    - Resampling maps it onto the coarse report grid
//!
//! # Quick Start
//!
//! ```rust
//! use settle_rs::physics::{MemoryCoefficients, PhysicalParameters, MU_WATER};
//! use settle_rs::solver::{integrate, IntegrationSettings};
//! use settle_rs::comparison::{resample, sample_grid};
//!
//! # fn main() -> Result<(), settle_rs::SettleError> {
//! // 1. Physical constants and the drag regime of water
//! let params = PhysicalParameters::reference();
//! let water = params.regime(MU_WATER)?;
//!
//! // 2. Dense RK4 trajectory of the memory model
//! let trajectory = integrate(
//!     &params,
//!     MU_WATER,
//!     &MemoryCoefficients::reference(),
//!     &IntegrationSettings::new(1e-6, 0.001),
//! )?;
//!
//! // 3. Both models on the report grid
//! let times = sample_grid(0.001, 1e-4)?;
//! let with_memory = resample(&trajectory, &times);
//! let without_memory: Vec<f64> = times.iter().map(|&t| water.velocity(t)).collect();
//!
//! assert_eq!(with_memory.len(), without_memory.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`physics`]: Parameters, analytical solution, memory-model equations
//! - [`solver`]: Fixed-step RK4 integrator and its dense trajectory
//! - [`comparison`]: Resampling and report tables
//!
//! # Logging
//!
//! The crate logs through the [`log`] facade and installs no logger. Warnings
//! flag integration steps that do not resolve the model's fastest timescale;
//! debug records summarize each run.

pub mod comparison;
pub mod error;
pub mod physics;
pub mod solver;

pub use error::SettleError;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use settle_rs::prelude::*;
    //! ```
    pub use crate::comparison::{
        resample,
        sample_grid,
        SampleSeries,
        SettlingReport,
        StudyConfiguration,
    };
    pub use crate::error::SettleError;
    pub use crate::physics::{
        DragRegime,
        MemoryCoefficients,
        MemoryModel,
        PhysicalParameters,
        MU_OIL,
        MU_WATER,
    };
    pub use crate::solver::{integrate, IntegrationSettings, RK4Integrator, Trajectory};
}

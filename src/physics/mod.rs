//! Physical models
//!
//! This module holds the physics of a small sphere settling in a viscous fluid.
//! It defines the equations only; time integration lives in [`crate::solver`].
//!
//! # Core Concepts
//!
//! - **Parameters**: particle/fluid constants, derived volume and mass, one
//!   drag regime per viscosity, memory coupling constants
//! - **Analytical model**: closed-form v(t), x(t) for plain Stokes drag
//! - **Memory model**: right-hand side of the coupled (v, w) system
//!
//! # Example
//!
//! ```rust
//! use settle_rs::physics::{PhysicalParameters, MU_OIL, MU_WATER};
//!
//! let params = PhysicalParameters::reference();
//! let water = params.regime(MU_WATER)?;
//! let oil = params.regime(MU_OIL)?;
//!
//! // A hundred times more viscous: a hundred times faster relaxation
//! // towards a hundred times smaller terminal velocity
//! assert!((water.tau / oil.tau - 100.0).abs() < 1e-9);
//! assert!((water.v_inf / oil.v_inf - 100.0).abs() < 1e-9);
//! # Ok::<(), settle_rs::SettleError>(())
//! ```

pub mod analytical;
pub mod memory;
pub mod parameters;

pub use memory::{memory_rhs, MemoryModel, MemoryState};
pub use parameters::{
    stokes_coefficient,
    DerivedQuantities,
    DragRegime,
    MemoryCoefficients,
    PhysicalParameters,
    MU_OIL,
    MU_WATER,
};

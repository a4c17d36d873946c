//! Numerical integration of the memory model
//!
//! # The Architecture (WHAT vs HOW)
//!
//! 1. **Model** ([`MemoryModel`](crate::physics::MemoryModel)) - WHAT to solve
//!    - right-hand side of the coupled (v, w) system
//!
//! 2. **Settings** ([`IntegrationSettings`]) - HOW to solve
//!    - fine step `dt_small`, horizon `t_max`
//!    - stability guidance for the step
//!
//! 3. **Integrator** ([`RK4Integrator`]) - the numerical method
//!    - fixed-step classical RK4
//!    - returns the dense [`Trajectory`]
//!
//! Resampling the dense trajectory onto report times is a separate stage, see
//! [`crate::comparison`].
//!
//! # Workflow Diagram
//!
//! ```text
//! ┌─────────────────────┐   ┌──────────────────────┐
//! │ PhysicalParameters  │   │ IntegrationSettings  │
//! │ μ, α, β             │   │ dt_small, t_max      │
//! └──────────┬──────────┘   └──────────┬───────────┘
//!            │                         │
//!   ┌────────▼────────┐                │
//!   │  MemoryModel    │                │
//!   └────────┬────────┘                │
//!            │      ┌──────────────────┘
//!   ┌────────▼──────▼───┐
//!   │   RK4Integrator   │
//!   └────────┬──────────┘
//!            │
//!   ┌────────▼────────┐
//!   │   Trajectory    │ ← every fine-grid (t, v, w)
//!   └─────────────────┘
//! ```
//!
//! # Time Step Selection
//!
//! The integrator is explicit and unchecked. Keep `dt_small` well below both
//! m/k (≈ τ) and 1/β; [`IntegrationSettings::resolves`] reports when it is
//! not. For the reference scenario (τ ≈ 2.7e-5 s, 1/β = 0.2 s) a step of
//! 1e-6 s is comfortably inside that bound.
//!
//! # Error Handling
//!
//! All fallible functions return `Result<T, SettleError>`. Only invalid
//! inputs are errors; a diverging integration returns NaN/∞ values.

mod configuration;
mod rk4;
mod trajectory;

pub use configuration::{IntegrationSettings, STABILITY_FRACTION};
pub(crate) use configuration::{ensure_countable, whole_intervals};
pub use rk4::{integrate, rk4_step, RK4Integrator};
pub use trajectory::Trajectory;

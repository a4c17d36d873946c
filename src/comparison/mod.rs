//! Resampling and model comparison
//!
//! This module turns computed results into report artifacts:
//!
//! ```text
//! comparison/
//! ├── mod.rs         ← This file
//! ├── resample.rs    ← report grid, linear interpolation of trajectories
//! ├── tables.rs      ← kinematics, regime and velocity tables
//! └── report.rs      ← study configuration and the full pipeline
//! ```
//!
//! Everything here is a pure transformation of already computed values. No
//! table is rendered and nothing is written to disk; presentation belongs to
//! the caller.
//!
//! # Quick Start
//!
//! ```rust
//! use settle_rs::comparison::{SettlingReport, StudyConfiguration};
//!
//! let report = SettlingReport::build(&StudyConfiguration::reference())?;
//!
//! for [t, v_no_memory, v_with_memory] in report.velocities.rows() {
//!     assert!(t >= 0.0);
//!     assert!(v_no_memory >= 0.0 && v_with_memory >= 0.0);
//! }
//! # Ok::<(), settle_rs::SettleError>(())
//! ```

pub mod report;
pub mod resample;
pub mod tables;

pub use report::{ReportSummary, SettlingReport, StudyConfiguration};
pub use resample::{interpolate, resample, resample_memory, sample_grid, SampleSeries};
pub use tables::{KinematicsTable, RegimeComparison, RegimeRow, VelocityComparison};

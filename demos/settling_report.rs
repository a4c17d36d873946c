//! Example: Stokes settling with and without a memory force
//!
//! A 10 µm particle slightly denser than the fluid is released from rest.
//! The memoryless Stokes model is solved in closed form; the memory model is
//! integrated with RK4 on a 1 µs grid and resampled onto the report grid.
//!
//! **Physical System**:
//! - R = 10 µm, ρp = 1200 kg/m³, ρf = 1000 kg/m³, g = 9.81 m/s²
//! - μ1 = 1e-3 Pa·s (water), μ2 = 0.1 Pa·s (oil)
//! - α = 1e-7, β = 5 s⁻¹ (memory term)
//!
//! Run with `RUST_LOG=debug` to see the integrator summary.

use settle_rs::comparison::{
    KinematicsTable,
    RegimeComparison,
    SettlingReport,
    StudyConfiguration,
    VelocityComparison,
};

use std::time::Instant;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("═══════════════════════════════════════════════════════");
    println!("  Stokes Settling - Memory Force Study");
    println!("═══════════════════════════════════════════════════════\n");

    let config = StudyConfiguration::reference();
    let params = &config.parameters;

    println!("Parameters:");
    println!("  R  (radius)        : {:e} m", params.radius);
    println!("  ρp (particle)      : {} kg/m³", params.particle_density);
    println!("  ρf (fluid)         : {} kg/m³", params.fluid_density);
    println!("  g  (gravity)       : {} m/s²", params.gravity);
    println!("  α, β (memory)      : {:e}, {}", config.memory.alpha, config.memory.beta);
    println!("  dt_small           : {:e} s", config.integration.dt_small);
    println!("  t_max              : {:e} s\n", config.integration.t_max);

    let current_time = Instant::now();
    let report = SettlingReport::build(&config)?;
    let elapsed_time = current_time.elapsed().as_secs_f64();

    let summary = report.summary;
    println!("Derived quantities:");
    println!("  V   : {:.4e} m³", summary.volume);
    println!("  m   : {:.4e} kg", summary.mass);
    println!("  τ1  : {:.4e} s     v∞1 : {:.4e} m/s", summary.tau_primary, summary.v_inf_primary);
    println!("  τ2  : {:.4e} s     v∞2 : {:.4e} m/s", summary.tau_secondary, summary.v_inf_secondary);

    // =============================================================================================
    // Analytical kinematics (μ1)
    // =============================================================================================

    println!("\n═══════════════════════════════════════════════════════");
    println!("  Analytical kinematics, μ = {} Pa·s", report.kinematics.viscosity);
    println!("═══════════════════════════════════════════════════════\n");

    let [t, v, x] = KinematicsTable::HEADERS;
    println!("{:>12} {:>14} {:>14}", t, v, x);
    println!("{:-<42}", "");

    for [t, v, x] in report.kinematics.rows() {
        println!("{:>12.6} {:>14.6e} {:>14.6e}", t, v, x);
    }

    // =============================================================================================
    // Viscosity comparison
    // =============================================================================================

    println!("\n═══════════════════════════════════════════════════════");
    println!("  Viscosity comparison");
    println!("═══════════════════════════════════════════════════════\n");

    let [mu, tau, v_inf] = RegimeComparison::HEADERS;
    println!("{:>12} {:>14} {:>14}", mu, tau, v_inf);
    println!("{:-<42}", "");

    for row in &report.regimes.rows {
        println!("{:>12} {:>14.6e} {:>14.6e}", row.viscosity, row.tau, row.v_inf);
    }

    if let Some((tau_ratio, v_ratio)) = report.regimes.ratios(0, 1) {
        println!("\nτ1/τ2 = {:.2}, v∞1/v∞2 = {:.2}", tau_ratio, v_ratio);
    }

    // =============================================================================================
    // Memory effect
    // =============================================================================================

    println!("\n═══════════════════════════════════════════════════════");
    println!("  Velocity with and without memory");
    println!("═══════════════════════════════════════════════════════\n");

    let [t, without, with] = VelocityComparison::HEADERS;
    println!("{:>12} {:>20} {:>20}", t, without, with);
    println!("{:-<54}", "");

    for [t, without, with] in report.velocities.rows() {
        println!("{:>12.6} {:>20.6e} {:>20.6e}", t, without, with);
    }

    println!("\nmax |Δv|           : {:.4e} m/s", report.velocities.max_abs_difference());
    println!("trajectory points  : {}", report.trajectory.len());
    println!("elapsed            : {:.4} s", elapsed_time);

    Ok(())
}

//! Closed-form solution of the memoryless Stokes settling problem
//!
//! # Mathematical Background
//!
//! Without the memory term the particle obeys
//!
//! ```text
//! m·dv/dt = (m − ρf·V)·g − 6πμR·v
//! ```
//!
//! which, starting from rest, integrates to
//!
//! ```text
//! v(t) = v∞·(1 − exp(−t/τ))
//! x(t) = v∞·(t − τ·(1 − exp(−t/τ)))
//! ```
//!
//! with τ = (2/9)·ρp·R²/μ and v∞ = (2/9)·(ρp − ρf)·R²·g/μ.
//!
//! These free functions take raw scalars and do no validation: μ must be
//! strictly positive. [`DragRegime`](crate::physics::DragRegime) is the
//! checked entry point.

/// Relaxation time τ = (2/9)·ρp·R²/μ
///
/// ```rust
/// use settle_rs::physics::analytical::tau;
///
/// let t1 = tau(1e-3, 1200.0, 1e-5);
/// let t2 = tau(2e-3, 1200.0, 1e-5);
/// assert!((t1 - 2.0 * t2).abs() < 1e-18);
/// ```
pub fn tau(viscosity: f64, particle_density: f64, radius: f64) -> f64 {
    (2.0 / 9.0) * particle_density * radius.powi(2) / viscosity
}

/// Terminal velocity v∞ = (2/9)·(ρp − ρf)·R²·g/μ
///
/// The sign follows ρp − ρf; a negative value is a buoyant rise.
pub fn v_inf(
    viscosity: f64,
    particle_density: f64,
    fluid_density: f64,
    radius: f64,
    gravity: f64,
) -> f64 {
    (2.0 / 9.0) * (particle_density - fluid_density) * radius.powi(2) * gravity / viscosity
}

/// Velocity v(t) = v∞·(1 − exp(−t/τ))
pub fn velocity(t: f64, v_inf: f64, tau: f64) -> f64 {
    // exp_m1 keeps precision for t ≪ τ
    -v_inf * (-t / tau).exp_m1()
}

/// Position x(t) = v∞·(t − τ·(1 − exp(−t/τ)))
pub fn position(t: f64, v_inf: f64, tau: f64) -> f64 {
    v_inf * (t + tau * (-t / tau).exp_m1())
}

/// [`velocity`] evaluated at every sample time
pub fn velocities(times: &[f64], v_inf: f64, tau: f64) -> Vec<f64> {
    times.iter().map(|&t| velocity(t, v_inf, tau)).collect()
}

/// [`position`] evaluated at every sample time
pub fn positions(times: &[f64], v_inf: f64, tau: f64) -> Vec<f64> {
    times.iter().map(|&t| position(t, v_inf, tau)).collect()
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const RHO_P: f64 = 1200.0;
    const RHO_F: f64 = 1000.0;
    const RADIUS: f64 = 1e-5;
    const G: f64 = 9.81;

    #[test]
    fn test_tau_and_v_inf_scale_as_inverse_viscosity() {
        for &mu in &[1e-4, 1e-3, 0.05, 0.1, 1.0] {
            let tau_1 = tau(mu, RHO_P, RADIUS);
            let tau_2 = tau(2.0 * mu, RHO_P, RADIUS);
            let v_1 = v_inf(mu, RHO_P, RHO_F, RADIUS, G);
            let v_2 = v_inf(2.0 * mu, RHO_P, RHO_F, RADIUS, G);

            assert_relative_eq!(tau_1, 2.0 * tau_2, max_relative = 1e-14);
            assert_relative_eq!(v_1, 2.0 * v_2, max_relative = 1e-14);
        }
    }

    #[test]
    fn test_tau_formula() {
        let expected = (2.0 / 9.0) * RHO_P * RADIUS * RADIUS / 1e-3;
        assert_relative_eq!(tau(1e-3, RHO_P, RADIUS), expected, max_relative = 1e-14);
    }

    #[test]
    fn test_v_inf_sign_follows_density_difference() {
        assert!(v_inf(1e-3, 1200.0, 1000.0, RADIUS, G) > 0.0);
        assert!(v_inf(1e-3, 800.0, 1000.0, RADIUS, G) < 0.0);
        assert_eq!(v_inf(1e-3, 1000.0, 1000.0, RADIUS, G), 0.0);
    }

    #[test]
    fn test_initial_conditions() {
        for &(v, t) in &[(4.36e-5, 2.67e-5), (-1.0, 3.0), (10.0, 1e-9)] {
            assert_eq!(velocity(0.0, v, t), 0.0);
            assert_eq!(position(0.0, v, t), 0.0);
        }
    }

    #[test]
    fn test_velocity_reaches_terminal_value() {
        let v = 4.36e-5;
        let t = 2.6667e-5;

        let late = velocity(10.0 * t, v, t);
        assert!(((late - v) / v).abs() < 1e-4);

        // Monotonic approach
        let samples = velocities(&[0.0, t, 2.0 * t, 5.0 * t], v, t);
        assert!(samples.windows(2).all(|w| w[1] > w[0]));
        assert!(samples.iter().all(|&s| s < v));
    }

    #[test]
    fn test_position_derivative_is_velocity() {
        let v = 4.36e-5;
        let t = 2.6667e-5;
        let h = 1e-10;

        for &time in &[1e-6, 1e-5, 5e-5, 1e-4] {
            let slope = (position(time + h, v, t) - position(time - h, v, t)) / (2.0 * h);
            assert_relative_eq!(slope, velocity(time, v, t), max_relative = 1e-5);
        }
    }

    #[test]
    fn test_vectorized_matches_scalar() {
        let times = [0.0, 1e-5, 2e-5, 1e-3];
        let v = velocities(&times, 1.0, 1e-5);
        let x = positions(&times, 1.0, 1e-5);

        assert_eq!(v.len(), times.len());
        assert_eq!(x.len(), times.len());
        for (i, &time) in times.iter().enumerate() {
            assert_eq!(v[i], velocity(time, 1.0, 1e-5));
            assert_eq!(x[i], position(time, 1.0, 1e-5));
        }
    }
}

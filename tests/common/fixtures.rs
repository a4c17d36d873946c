//! Reference inputs shared by the integration tests
//!
//! The reference scenario: R = 10 µm, ρp = 1200 kg/m³, ρf = 1000 kg/m³,
//! g = 9.81 m/s², μ = 1e-3 Pa·s (water).

use settle_rs::physics::{
    DragRegime,
    MemoryCoefficients,
    MemoryModel,
    PhysicalParameters,
    MU_WATER,
};

pub fn reference_parameters() -> PhysicalParameters {
    PhysicalParameters::new(1e-5, 1200.0, 1000.0, 9.81)
}

pub fn water_regime() -> DragRegime {
    reference_parameters().regime(MU_WATER).unwrap()
}

/// Memory model with α = 0: plain Stokes drag, known analytical solution
pub fn stokes_only_model(viscosity: f64) -> MemoryModel {
    MemoryModel::new(
        &reference_parameters(),
        viscosity,
        &MemoryCoefficients::disabled(5.0),
    )
    .unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stokes_only_model_has_no_coupling() {
        let model = stokes_only_model(MU_WATER);
        assert_eq!(model.alpha, 0.0);
        assert!((model.viscous_timescale() - water_regime().tau).abs() < 1e-15);
    }
}

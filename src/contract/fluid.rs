//! Fluid snapshot validation

use super::{check_color, check_finite_scalars, check_finite_vectors, check_len, check_positive};
use crate::error::ContractResult;
use crate::schema::FluidParticles;

/// Confirm a fluid snapshot honours the contract, returning it unchanged.
///
/// Order of checks: per-particle lengths, shared constants, finiteness of
/// per-particle values, then colors.
pub fn validate_fluid_snapshot(data: FluidParticles) -> ContractResult<FluidParticles> {
    let n = data.positions.len();
    check_len("velocities", n, data.velocities.len())?;
    check_len("densities", n, data.densities.len())?;
    check_len("colors", n, data.colors.len())?;
    if let Some(predicted) = &data.predicted_positions {
        check_len("predicted_positions", n, predicted.len())?;
    }

    check_positive("mass", data.mass)?;
    check_positive("radius", data.radius)?;
    check_positive("target_density", data.target_density)?;
    check_positive("pressure_multiplier", data.pressure_multiplier)?;
    check_positive("smoothing_radius", data.smoothing_radius)?;

    check_finite_vectors("positions", &data.positions)?;
    check_finite_vectors("velocities", &data.velocities)?;
    check_finite_scalars("densities", &data.densities)?;
    if let Some(predicted) = &data.predicted_positions {
        check_finite_vectors("predicted_positions", predicted)?;
    }

    for (index, color) in data.colors.iter().enumerate() {
        check_color(index, color)?;
    }

    Ok(data)
}

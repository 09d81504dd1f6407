//! Settings validation before they reach the engine

use crate::config::ContractConfig;
use crate::error::{ContractError, ContractResult};
use crate::schema::{EventSettings, FluidEventSettings, RigidBodyEventSettings, SimulationKind, VisualFilter};

/// Confirm a settings object is well-formed for `kind`, using default bounds
pub fn validate_event_settings(kind: SimulationKind, settings: EventSettings) -> ContractResult<EventSettings> {
    validate_event_settings_with(kind, settings, &ContractConfig::default())
}

/// Settings validation with explicit domain bounds.
///
/// Numeric fields are checked first, then the visual filter code.
pub fn validate_event_settings_with(
    kind: SimulationKind,
    settings: EventSettings,
    config: &ContractConfig,
) -> ContractResult<EventSettings> {
    match (kind, &settings) {
        (SimulationKind::Fluid, EventSettings::Fluid(s)) => check_fluid(s, config)?,
        (SimulationKind::RigidBody, EventSettings::RigidBody(s)) => check_rigid_body(s, config)?,
        _ => {
            return Err(ContractError::KindMismatch {
                kind,
                what: "settings",
            });
        }
    }
    VisualFilter::try_from(settings.visual_filter_code())?;
    Ok(settings)
}

fn check_fluid(s: &FluidEventSettings, config: &ContractConfig) -> ContractResult<()> {
    check_shared(
        config,
        s.collision_restitution,
        s.gravity,
        s.target_density,
        s.mass,
        s.pressure_stiffness,
        s.smoothing_radius,
    )?;
    check_non_negative("viscosity_strength", s.viscosity_strength)
}

fn check_rigid_body(s: &RigidBodyEventSettings, config: &ContractConfig) -> ContractResult<()> {
    check_shared(
        config,
        s.collision_restitution,
        s.gravity,
        s.target_density,
        s.mass,
        s.pressure_stiffness,
        s.smoothing_radius,
    )
}

fn check_shared(
    config: &ContractConfig,
    restitution: f32,
    gravity: f32,
    target_density: f32,
    mass: f32,
    pressure_stiffness: f32,
    smoothing_radius: f32,
) -> ContractResult<()> {
    check_range(
        "collision_restitution",
        restitution,
        config.restitution_min,
        config.restitution_max,
    )?;
    check_range("gravity", gravity, -config.max_gravity, config.max_gravity)?;
    check_strictly_positive("target_density", target_density)?;
    check_strictly_positive("mass", mass)?;
    check_non_negative("pressure_stiffness", pressure_stiffness)?;
    check_strictly_positive("smoothing_radius", smoothing_radius)
}

fn check_range(field: &str, value: f32, min: f32, max: f32) -> ContractResult<()> {
    if value.is_finite() && value >= min && value <= max {
        Ok(())
    } else {
        Err(ContractError::out_of_range(field, f64::from(value), f64::from(min), f64::from(max)))
    }
}

fn check_strictly_positive(field: &str, value: f32) -> ContractResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ContractError::out_of_range(field, f64::from(value), 0.0, f64::INFINITY))
    }
}

fn check_non_negative(field: &str, value: f32) -> ContractResult<()> {
    check_range(field, value, 0.0, f32::MAX)
}

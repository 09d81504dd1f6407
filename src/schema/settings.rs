//! Settings pushed from the UI settings panel to the engine

use serde::{Deserialize, Serialize};

use crate::error::ContractError;

/// Particle coloring mode, sent as a small integer code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisualFilter {
    /// Plain white particles
    #[default]
    Plain,
    /// Colored by speed
    Velocity,
    /// Colored by pressure force
    Pressure,
    /// Colored by density relative to target
    Density,
}

impl VisualFilter {
    pub const ALL: [VisualFilter; 4] = [
        VisualFilter::Plain,
        VisualFilter::Velocity,
        VisualFilter::Pressure,
        VisualFilter::Density,
    ];

    pub fn code(&self) -> u8 {
        match self {
            VisualFilter::Plain => 0,
            VisualFilter::Velocity => 1,
            VisualFilter::Pressure => 2,
            VisualFilter::Density => 3,
        }
    }
}

impl TryFrom<u8> for VisualFilter {
    type Error = ContractError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(VisualFilter::Plain),
            1 => Ok(VisualFilter::Velocity),
            2 => Ok(VisualFilter::Pressure),
            3 => Ok(VisualFilter::Density),
            other => Err(ContractError::UnknownFilterCode(other)),
        }
    }
}

/// Fluid demo settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FluidEventSettings {
    pub collision_restitution: f32,
    pub gravity: f32,
    pub target_density: f32,
    pub mass: f32,
    pub pressure_stiffness: f32,
    pub visual_filter: u8,
    pub smoothing_radius: f32,
    pub viscosity_strength: f32,
    pub interactive_force_mode: bool,
}

impl Default for FluidEventSettings {
    fn default() -> Self {
        Self {
            collision_restitution: 0.95,
            gravity: 0.0,
            target_density: 0.75,
            mass: 50.0,
            pressure_stiffness: 3.5,
            visual_filter: VisualFilter::Plain.code(),
            smoothing_radius: 30.0,
            viscosity_strength: 0.0,
            interactive_force_mode: false,
        }
    }
}

/// Rigid-body demo settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RigidBodyEventSettings {
    pub collision_restitution: f32,
    pub gravity: f32,
    pub target_density: f32,
    pub mass: f32,
    pub pressure_stiffness: f32,
    pub visual_filter: u8,
    pub smoothing_radius: f32,
}

impl Default for RigidBodyEventSettings {
    fn default() -> Self {
        Self {
            collision_restitution: 0.5,
            gravity: 9.81,
            target_density: 1.0,
            mass: 50.0,
            pressure_stiffness: 0.0,
            visual_filter: VisualFilter::Plain.code(),
            smoothing_radius: 30.0,
        }
    }
}

/// Settings object for one demo variant.
///
/// Untagged on the wire: the payload is the bare settings object, and the
/// fluid variant is recognized by its extra fields. The rigid-body variant
/// denies unknown fields, so an incomplete fluid object fails to decode
/// instead of passing as rigid-body settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventSettings {
    Fluid(FluidEventSettings),
    RigidBody(RigidBodyEventSettings),
}

impl EventSettings {
    pub fn visual_filter_code(&self) -> u8 {
        match self {
            EventSettings::Fluid(s) => s.visual_filter,
            EventSettings::RigidBody(s) => s.visual_filter,
        }
    }

    /// Decoded filter, `UnknownFilterCode` when outside the closed set
    pub fn visual_filter(&self) -> Result<VisualFilter, ContractError> {
        VisualFilter::try_from(self.visual_filter_code())
    }
}

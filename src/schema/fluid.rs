//! Fluid demo snapshot (struct-of-arrays)

use serde::{Deserialize, Serialize};

use super::Vector2;

/// Default particle color, opaque white
pub const DEFAULT_PARTICLE_COLOR: &str = "#FFFFFFFF";

/// Whole fluid state for one frame.
///
/// The shared constants apply to every particle; the per-particle
/// sequences are parallel and must all have the same length N.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FluidParticles {
    pub mass: f32,
    pub radius: f32,
    pub target_density: f32,
    pub pressure_multiplier: f32,
    pub smoothing_radius: f32,

    pub positions: Vec<Vector2>,
    pub velocities: Vec<Vector2>,
    pub densities: Vec<f32>,
    pub colors: Vec<String>,
    /// Integrator scratch buffer; some engine builds serialize it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predicted_positions: Option<Vec<Vector2>>,
}

impl FluidParticles {
    /// Empty particle set with the given shared constants
    pub fn new(mass: f32, radius: f32, target_density: f32, pressure_multiplier: f32, smoothing_radius: f32) -> Self {
        Self {
            mass,
            radius,
            target_density,
            pressure_multiplier,
            smoothing_radius,
            positions: Vec::new(),
            velocities: Vec::new(),
            densities: Vec::new(),
            colors: Vec::new(),
            predicted_positions: None,
        }
    }

    /// Particle count N (length of `positions`)
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Append a particle at rest, keeping every sequence in step
    pub fn push(&mut self, position: Vector2) {
        self.positions.push(position);
        self.velocities.push(Vector2::ZERO);
        self.densities.push(0.0);
        self.colors.push(DEFAULT_PARTICLE_COLOR.to_string());
        if let Some(predicted) = self.predicted_positions.as_mut() {
            predicted.push(position);
        }
    }
}

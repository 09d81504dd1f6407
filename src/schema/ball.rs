//! Bouncing-ball demo snapshot types

use serde::{Deserialize, Serialize};

use super::Vector2;

/// One bouncing-ball body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub position: Vector2,
    pub velocity: Vector2,
    pub radius: f32,
    pub mass: f32,
    /// Hex display color (`#RRGGBB` or `#RRGGBBAA`)
    pub color: String,
}

impl Ball {
    pub fn new(position: Vector2, velocity: Vector2, radius: f32, mass: f32, color: impl Into<String>) -> Self {
        Self {
            position,
            velocity,
            radius,
            mass,
            color: color.into(),
        }
    }
}

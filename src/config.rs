//! Contract tolerances and domain bounds
//!
//! Loaded from an optional JSON file; absent fields keep their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ContractError, ContractResult};

/// Upper bound on retained frames (ten minutes at 60 fps)
pub const MAX_HISTORY_FRAMES: usize = 36_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContractConfig {
    /// Relative tolerance for `invMass == 1/mass` and `invInertia == 1/inertia`
    pub mass_tolerance: f32,
    /// Allowed collision restitution range
    pub restitution_min: f32,
    pub restitution_max: f32,
    /// Largest accepted gravity magnitude in settings
    pub max_gravity: f32,
    /// Seconds of accepted frames kept in history
    pub history_seconds: f32,
    pub frames_per_second: f32,
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            mass_tolerance: 1e-4,
            restitution_min: 0.0,
            restitution_max: 1.0,
            max_gravity: 1000.0,
            history_seconds: 2.0,
            frames_per_second: 60.0,
        }
    }
}

impl ContractConfig {
    /// Read a JSON config file
    pub fn load(path: impl AsRef<Path>) -> ContractResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded contract config from {}", path.display());
        Ok(config)
    }

    /// Parse and check a JSON config
    pub fn from_json(json: &str) -> ContractResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject tolerances and bounds no validator can work with
    pub fn validate(&self) -> ContractResult<()> {
        let tolerance = f64::from(self.mass_tolerance);
        if !self.mass_tolerance.is_finite() || self.mass_tolerance < 0.0 {
            return Err(ContractError::out_of_range("mass_tolerance", tolerance, 0.0, f64::MAX));
        }
        for (field, value) in [("restitution_min", self.restitution_min), ("restitution_max", self.restitution_max)] {
            if !value.is_finite() {
                return Err(ContractError::out_of_range(field, f64::from(value), f64::MIN, f64::MAX));
            }
        }
        if self.restitution_min > self.restitution_max {
            return Err(ContractError::out_of_range(
                "restitution_min",
                f64::from(self.restitution_min),
                f64::MIN,
                f64::from(self.restitution_max),
            ));
        }
        if !self.max_gravity.is_finite() || self.max_gravity <= 0.0 {
            return Err(ContractError::out_of_range("max_gravity", f64::from(self.max_gravity), 0.0, f64::MAX));
        }
        if !self.frames_per_second.is_finite() || self.frames_per_second <= 0.0 {
            return Err(ContractError::out_of_range(
                "frames_per_second",
                f64::from(self.frames_per_second),
                0.0,
                f64::MAX,
            ));
        }
        let max_seconds = MAX_HISTORY_FRAMES as f64 / f64::from(self.frames_per_second);
        let seconds = f64::from(self.history_seconds);
        if !self.history_seconds.is_finite() || seconds < 0.0 || seconds > max_seconds {
            return Err(ContractError::out_of_range("history_seconds", seconds, 0.0, max_seconds));
        }
        Ok(())
    }

    /// Number of frames the history keeps, never above [`MAX_HISTORY_FRAMES`]
    pub fn history_capacity(&self) -> usize {
        let frames = f64::from(self.history_seconds) * f64::from(self.frames_per_second);
        if frames.is_finite() && frames > 0.0 {
            (frames as usize).min(MAX_HISTORY_FRAMES)
        } else {
            0
        }
    }
}

//! Pure validation of values crossing the engine/renderer boundary
//!
//! Every validator takes the value by ownership and hands it back unchanged
//! on success. No mutation, no I/O, no logging; the caller decides what a
//! failure means (see `boundary`).

pub mod color;
pub mod fluid;
pub mod frames;
pub mod rigid_body;
pub mod settings;

pub use color::is_hex_color;
pub use fluid::validate_fluid_snapshot;
pub use frames::{validate_balls, validate_renderer_data, validate_renderer_data_with, validate_starter_data};
pub use rigid_body::{validate_light_bodies, validate_rigid_body_workspace, validate_rigid_body_workspace_with};
pub use settings::{validate_event_settings, validate_event_settings_with};

use crate::error::{ContractError, ContractResult};
use crate::schema::Vector2;

pub(crate) fn check_len(field: &'static str, expected: usize, actual: usize) -> ContractResult<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(ContractError::ShapeMismatch { field, expected, actual })
    }
}

/// Finite and strictly positive
pub(crate) fn check_positive(field: &str, value: f32) -> ContractResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ContractError::scalar(field, value))
    }
}

pub(crate) fn check_finite_vectors(field: &str, values: &[Vector2]) -> ContractResult<()> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(ContractError::NonFinite {
            field: field.to_string(),
            index,
        }),
        None => Ok(()),
    }
}

pub(crate) fn check_finite_scalars(field: &str, values: &[f32]) -> ContractResult<()> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(ContractError::NonFinite {
            field: field.to_string(),
            index,
        }),
        None => Ok(()),
    }
}

pub(crate) fn check_color(index: usize, color: &str) -> ContractResult<()> {
    if is_hex_color(color) {
        Ok(())
    } else {
        Err(ContractError::InvalidColor {
            index,
            value: color.to_string(),
        })
    }
}

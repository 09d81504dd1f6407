//! JSON decoding of frames, settings and engine events
//!
//! Every decode is followed by contract validation, so a value that leaves
//! this module is both well-typed and well-formed.

use serde::Serialize;

use crate::config::ContractConfig;
use crate::contract::{validate_event_settings_with, validate_renderer_data_with, validate_starter_data};
use crate::error::{ContractError, ContractResult};
use crate::schema::{
    BouncingBallsFrame, EventSettings, FluidEventSettings, FluidFrame, RendererData, RigidBodyEventSettings,
    RigidBodyFrame, SimulationKind, StarterData, Vector2,
};

/// Event names understood by the engine
pub mod events {
    pub const SET_SETTINGS: &str = "set_settings";
    pub const INTERACTIVE_FORCE_TOGGLE: &str = "interactive_force_toggle";
    /// Spelling used by older UI builds
    pub const INTERACTIVE_FORCE_TOGGLE_LEGACY: &str = "interractive_force_toggle";
    pub const INTERACTIVE_FORCE_POSITION: &str = "interactive_force_position";
}

/// A decoded UI -> engine event
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    SetSettings(EventSettings),
    InteractiveForceToggle(bool),
    /// Also switches the interactive force on
    InteractiveForcePosition(Vector2),
}

impl EngineEvent {
    pub fn name(&self) -> &'static str {
        match self {
            EngineEvent::SetSettings(_) => events::SET_SETTINGS,
            EngineEvent::InteractiveForceToggle(_) => events::INTERACTIVE_FORCE_TOGGLE,
            EngineEvent::InteractiveForcePosition(_) => events::INTERACTIVE_FORCE_POSITION,
        }
    }
}

/// Decode and validate one renderer frame for `kind`
pub fn decode_frame(kind: SimulationKind, json: &str) -> ContractResult<RendererData> {
    decode_frame_with(kind, json, &ContractConfig::default())
}

pub fn decode_frame_with(kind: SimulationKind, json: &str, config: &ContractConfig) -> ContractResult<RendererData> {
    let data = match kind {
        SimulationKind::BouncingBalls => RendererData::BouncingBalls(serde_json::from_str::<BouncingBallsFrame>(json)?),
        SimulationKind::Fluid => RendererData::Fluid(serde_json::from_str::<FluidFrame>(json)?),
        SimulationKind::RigidBody => RendererData::RigidBody(serde_json::from_str::<RigidBodyFrame>(json)?),
    };
    validate_renderer_data_with(kind, data, config)
}

/// Decode and validate a settings object for `kind`
pub fn decode_settings(kind: SimulationKind, json: &str) -> ContractResult<EventSettings> {
    decode_settings_with(kind, json, &ContractConfig::default())
}

pub fn decode_settings_with(kind: SimulationKind, json: &str, config: &ContractConfig) -> ContractResult<EventSettings> {
    // Decode into the variant the demo expects rather than letting the
    // untagged enum guess.
    let settings = match kind {
        SimulationKind::Fluid => EventSettings::Fluid(serde_json::from_str::<FluidEventSettings>(json)?),
        SimulationKind::RigidBody => EventSettings::RigidBody(serde_json::from_str::<RigidBodyEventSettings>(json)?),
        SimulationKind::BouncingBalls => {
            return Err(ContractError::KindMismatch {
                kind,
                what: "settings",
            });
        }
    };
    validate_event_settings_with(kind, settings, config)
}

/// Decode a named event with its optional JSON payload
pub fn decode_event(kind: SimulationKind, name: &str, data: Option<&str>) -> ContractResult<EngineEvent> {
    decode_event_with(kind, name, data, &ContractConfig::default())
}

pub fn decode_event_with(
    kind: SimulationKind,
    name: &str,
    data: Option<&str>,
    config: &ContractConfig,
) -> ContractResult<EngineEvent> {
    let known = matches!(
        name,
        events::SET_SETTINGS
            | events::INTERACTIVE_FORCE_TOGGLE
            | events::INTERACTIVE_FORCE_TOGGLE_LEGACY
            | events::INTERACTIVE_FORCE_POSITION
    );
    if !known {
        return Err(ContractError::UnknownEvent(name.to_string()));
    }
    let payload = data.ok_or_else(|| ContractError::MissingPayload(name.to_string()))?;

    match name {
        events::SET_SETTINGS => Ok(EngineEvent::SetSettings(decode_settings_with(kind, payload, config)?)),
        events::INTERACTIVE_FORCE_TOGGLE | events::INTERACTIVE_FORCE_TOGGLE_LEGACY => {
            Ok(EngineEvent::InteractiveForceToggle(serde_json::from_str(payload)?))
        }
        _ => {
            let position: Vector2 = serde_json::from_str(payload)?;
            if !position.is_finite() {
                return Err(ContractError::NonFinite {
                    field: "interactive_force_position".to_string(),
                    index: 0,
                });
            }
            Ok(EngineEvent::InteractiveForcePosition(position))
        }
    }
}

/// Decode and validate the start-up payload
pub fn decode_starter_data(json: &str) -> ContractResult<StarterData> {
    validate_starter_data(serde_json::from_str(json)?)
}

/// Serialize any contract value to compact JSON
pub fn encode<T: Serialize>(value: &T) -> ContractResult<String> {
    Ok(serde_json::to_string(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_event() {
        let err = decode_event(SimulationKind::Fluid, "explode", Some("{}")).unwrap_err();
        assert!(matches!(err, ContractError::UnknownEvent(ref name) if name == "explode"));
    }

    #[test]
    fn test_missing_payload() {
        let err = decode_event(SimulationKind::Fluid, events::SET_SETTINGS, None).unwrap_err();
        assert_eq!(err.code(), "MissingPayload");
    }

    #[test]
    fn test_force_toggle_both_spellings() {
        for name in [events::INTERACTIVE_FORCE_TOGGLE, events::INTERACTIVE_FORCE_TOGGLE_LEGACY] {
            let event = decode_event(SimulationKind::Fluid, name, Some("true")).unwrap();
            assert_eq!(event, EngineEvent::InteractiveForceToggle(true));
        }
    }

    #[test]
    fn test_force_position() {
        let event = decode_event(
            SimulationKind::Fluid,
            events::INTERACTIVE_FORCE_POSITION,
            Some(r#"{"x": 12.0, "y": 30.5}"#),
        )
        .unwrap();
        assert_eq!(event, EngineEvent::InteractiveForcePosition(Vector2::new(12.0, 30.5)));
        assert_eq!(event.name(), events::INTERACTIVE_FORCE_POSITION);
    }

    #[test]
    fn test_set_settings_event_validates() {
        let mut json = serde_json::to_value(FluidEventSettings::default()).unwrap();
        json["visual_filter"] = serde_json::json!(99);
        let err = decode_event(SimulationKind::Fluid, events::SET_SETTINGS, Some(&json.to_string())).unwrap_err();
        assert!(matches!(err, ContractError::UnknownFilterCode(99)));
    }

    #[test]
    fn test_settings_wrong_shape_is_decode_error() {
        let rigid = encode(&RigidBodyEventSettings::default()).unwrap();
        let err = decode_settings(SimulationKind::Fluid, &rigid).unwrap_err();
        assert_eq!(err.code(), "Decode");
    }

    #[test]
    fn test_bouncing_balls_have_no_settings() {
        let err = decode_settings(SimulationKind::BouncingBalls, "{}").unwrap_err();
        assert_eq!(err.code(), "KindMismatch");
    }

    #[test]
    fn test_starter_data() {
        let data = decode_starter_data(r#"{"positions": [{"x": 1.0, "y": 2.0}]}"#).unwrap();
        assert_eq!(data.positions, vec![Vector2::new(1.0, 2.0)]);
    }

    #[test]
    fn test_frame_with_foreign_key_rejected() {
        let json = r#"{"balls": [], "fluid_particles": null}"#;
        let err = decode_frame(SimulationKind::BouncingBalls, json).unwrap_err();
        assert_eq!(err.code(), "Decode");
    }
}

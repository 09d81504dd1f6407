//! JSON scenarios as the engine and UI actually send them

use serde_json::json;

use sim_contract::boundary::{FrameGate, SettingsPanel};
use sim_contract::codec::{self, EngineEvent, events};
use sim_contract::schema::{EventSettings, RendererData, RigidBodies, SimulationKind};

fn fluid_frame(positions: usize, velocities: usize) -> String {
    let v = json!({"x": 0.0, "y": 0.0});
    json!({
        "fluid_particles": {
            "mass": 16.6,
            "radius": 5.0,
            "target_density": 0.75,
            "pressure_multiplier": 3.5,
            "smoothing_radius": 30.0,
            "positions": vec![v.clone(); positions],
            "velocities": vec![v; velocities],
            "densities": vec![0.5; positions],
            "colors": vec!["#FFFFFFFF"; positions],
        }
    })
    .to_string()
}

fn rigid_frame(body_count: usize, bodies: usize, contact_pair: serde_json::Value) -> String {
    let body = |i: usize| {
        json!({
            "position": {"x": 10.0 * i as f32, "y": 10.0},
            "linearVelocity": {"x": 0.0, "y": 0.0},
            "force": {"x": 0.0, "y": 0.0},
            "angle": 0.0,
            "angularVelocity": 0.0,
            "mass": 2.0,
            "invMass": 0.5,
            "density": 1.0,
            "area": 2.0,
            "restitution": 0.5,
            "isStatic": false,
            "inertia": 4.0,
            "invInertia": 0.25,
            "shape": "Circle",
            "radius": 1.0,
            "width": 0.0,
            "height": 0.0,
            "vertices": [],
            "transformedVertices": [],
            "triangles": [],
            "aabb": {"min": {"x": -1.0, "y": 9.0}, "max": {"x": 1.0, "y": 11.0}},
            "tfvRequired": false,
            "aabbUpdate": false,
            "index": i
        })
    };
    json!({
        "bodies": {
            "mnBs": 0.0001,
            "mxBs": 4096.0,
            "mnD": 0.5,
            "mxD": 21.4,
            "minIter": 1,
            "maxIter": 128,
            "bodyList": (0..bodies).map(body).collect::<Vec<_>>(),
            "gravity": {"x": 0.0, "y": 9.81},
            "bodyCount": body_count,
            "contactPair": contact_pair
        }
    })
    .to_string()
}

#[test]
fn fluid_frame_round_trips() {
    let json = fluid_frame(3, 3);
    let frame = codec::decode_frame(SimulationKind::Fluid, &json).unwrap();
    let again = codec::decode_frame(SimulationKind::Fluid, &codec::encode(&frame).unwrap()).unwrap();
    assert_eq!(frame, again);
}

#[test]
fn fluid_velocity_shortfall_is_shape_mismatch() {
    let err = codec::decode_frame(SimulationKind::Fluid, &fluid_frame(3, 2)).unwrap_err();
    assert_eq!(err.code(), "ShapeMismatch");
}

#[test]
fn workspace_frame_is_accepted() {
    let frame = codec::decode_frame(SimulationKind::RigidBody, &rigid_frame(4, 4, json!([[0, 1], [2, 3]]))).unwrap();
    let RendererData::RigidBody(frame) = frame else {
        panic!("expected rigid-body frame");
    };
    assert!(matches!(frame.bodies, RigidBodies::Full(ref ws) if ws.body_count == 4));
}

#[test]
fn workspace_body_count_mismatch() {
    let err = codec::decode_frame(SimulationKind::RigidBody, &rigid_frame(5, 4, json!([]))).unwrap_err();
    assert_eq!(err.code(), "CountMismatch");
}

#[test]
fn workspace_self_pair() {
    let err = codec::decode_frame(SimulationKind::RigidBody, &rigid_frame(4, 4, json!([[2, 2]]))).unwrap_err();
    assert_eq!(err.code(), "SelfPair");
}

#[test]
fn light_bodies_frame() {
    let json = json!({
        "bodies": [
            {"position": {"x": 1.0, "y": 1.0}, "rotation": 0.3, "radius": 4.0, "width": 0.0, "height": 0.0, "shape": false},
            {"position": {"x": 5.0, "y": 1.0}, "rotation": 0.0, "radius": 0.0, "width": 2.0, "height": 3.0, "shape": true}
        ]
    });
    let frame = codec::decode_frame(SimulationKind::RigidBody, &json.to_string()).unwrap();
    assert_eq!(frame.kind(), SimulationKind::RigidBody);

    let bad = json!({
        "bodies": [
            {"position": {"x": 1.0, "y": 1.0}, "rotation": 0.0, "radius": 0.0, "width": 2.0, "height": 3.0, "shape": false}
        ]
    });
    let err = codec::decode_frame(SimulationKind::RigidBody, &bad.to_string()).unwrap_err();
    assert_eq!(err.code(), "InvalidScalar");
}

#[test]
fn settings_with_unknown_filter_rejected() {
    let json = json!({
        "collision_restitution": 0.95,
        "gravity": 0.0,
        "target_density": 0.75,
        "mass": 50.0,
        "pressure_stiffness": 3.5,
        "visual_filter": 99,
        "smoothing_radius": 30.0,
        "viscosity_strength": 0.1,
        "interactive_force_mode": false
    });
    let err = codec::decode_settings(SimulationKind::Fluid, &json.to_string()).unwrap_err();
    assert_eq!(err.code(), "UnknownFilterCode");
}

#[test]
fn set_settings_event_through_panel() {
    let json = json!({
        "collision_restitution": 0.3,
        "gravity": 9.81,
        "target_density": 1.0,
        "mass": 10.0,
        "pressure_stiffness": 0.0,
        "visual_filter": 1,
        "smoothing_radius": 20.0
    });
    let event = codec::decode_event(SimulationKind::RigidBody, events::SET_SETTINGS, Some(&json.to_string())).unwrap();
    let EngineEvent::SetSettings(settings) = event else {
        panic!("expected settings event");
    };

    let mut panel = SettingsPanel::new(SimulationKind::RigidBody).unwrap();
    panel.propose(settings.clone()).unwrap();
    assert_eq!(panel.current(), &settings);
    assert!(matches!(panel.current(), EventSettings::RigidBody(s) if s.visual_filter == 1));
}

#[test]
fn gate_skips_bad_frames_and_keeps_going() {
    let mut gate = FrameGate::new(SimulationKind::Fluid);
    assert!(gate.accept_json(&fluid_frame(2, 2)).is_some());
    assert!(gate.accept_json(&fluid_frame(3, 2)).is_none());
    assert!(gate.accept_json(&fluid_frame(4, 4)).is_some());

    let stats = gate.stats();
    assert_eq!((stats.accepted, stats.dropped), (2, 1));
    assert_eq!(gate.history().len(), 2);
}

//! Per-demo snapshot handed to the renderer

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, de};

use super::{Ball, FluidParticles, LightRigidBody, Vector2, WorkSpace};

/// Which demo a value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimulationKind {
    BouncingBalls,
    Fluid,
    RigidBody,
}

impl SimulationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SimulationKind::BouncingBalls => "bouncing_balls",
            SimulationKind::Fluid => "fluid",
            SimulationKind::RigidBody => "rigid_body",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "bouncing_balls" | "balls" | "bouncing_ball" => Some(SimulationKind::BouncingBalls),
            "fluid" => Some(SimulationKind::Fluid),
            "rigid_body" | "rigidbody" | "rigid" => Some(SimulationKind::RigidBody),
            _ => None,
        }
    }
}

impl fmt::Display for SimulationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rigid-body frame payload: the render projection or the full workspace
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RigidBodies {
    Light(Vec<LightRigidBody>),
    Full(WorkSpace),
}

/// An array is the light projection and an object is a workspace, so decode
/// errors come from the matching variant.
impl<'de> Deserialize<'de> for RigidBodies {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match serde_json::Value::deserialize(deserializer)? {
            value @ serde_json::Value::Array(_) => serde_json::from_value(value)
                .map(RigidBodies::Light)
                .map_err(|e| de::Error::custom(format!("light bodies: {e}"))),
            value @ serde_json::Value::Object(_) => serde_json::from_value(value)
                .map(RigidBodies::Full)
                .map_err(|e| de::Error::custom(format!("workspace: {e}"))),
            other => Err(de::Error::invalid_type(
                unexpected(&other),
                &"an array of light bodies or a workspace object",
            )),
        }
    }
}

fn unexpected(value: &serde_json::Value) -> de::Unexpected<'_> {
    use serde_json::Value;
    match value {
        Value::Null => de::Unexpected::Unit,
        Value::Bool(b) => de::Unexpected::Bool(*b),
        Value::Number(n) => match n.as_f64() {
            Some(f) => de::Unexpected::Float(f),
            None => de::Unexpected::Other("number"),
        },
        Value::String(s) => de::Unexpected::Str(s.as_str()),
        Value::Array(_) => de::Unexpected::Seq,
        Value::Object(_) => de::Unexpected::Map,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BouncingBallsFrame {
    pub balls: Vec<Ball>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FluidFrame {
    pub fluid_particles: FluidParticles,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RigidBodyFrame {
    pub bodies: RigidBodies,
}

/// Exactly one demo's snapshot; never a union of several
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RendererData {
    BouncingBalls(BouncingBallsFrame),
    Fluid(FluidFrame),
    RigidBody(RigidBodyFrame),
}

impl RendererData {
    pub fn kind(&self) -> SimulationKind {
        match self {
            RendererData::BouncingBalls(_) => SimulationKind::BouncingBalls,
            RendererData::Fluid(_) => SimulationKind::Fluid,
            RendererData::RigidBody(_) => SimulationKind::RigidBody,
        }
    }
}

impl From<FluidParticles> for RendererData {
    fn from(fluid_particles: FluidParticles) -> Self {
        RendererData::Fluid(FluidFrame { fluid_particles })
    }
}

impl From<Vec<Ball>> for RendererData {
    fn from(balls: Vec<Ball>) -> Self {
        RendererData::BouncingBalls(BouncingBallsFrame { balls })
    }
}

impl From<WorkSpace> for RendererData {
    fn from(ws: WorkSpace) -> Self {
        RendererData::RigidBody(RigidBodyFrame {
            bodies: RigidBodies::Full(ws),
        })
    }
}

impl From<Vec<LightRigidBody>> for RendererData {
    fn from(bodies: Vec<LightRigidBody>) -> Self {
        RendererData::RigidBody(RigidBodyFrame {
            bodies: RigidBodies::Light(bodies),
        })
    }
}

/// Initial positions pushed by the UI when a demo starts
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StarterData {
    pub positions: Vec<Vector2>,
}

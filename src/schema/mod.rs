//! Wire schema shared by the engine and the renderer
//!
//! Plain value types only. Every snapshot is created fresh by the engine,
//! read by the renderer, and dropped after the frame.

pub mod ball;
pub mod fluid;
pub mod renderer;
pub mod rigid_body;
pub mod settings;
pub mod vector2;

pub use ball::Ball;
pub use fluid::{DEFAULT_PARTICLE_COLOR, FluidParticles};
pub use renderer::{
    BouncingBallsFrame, FluidFrame, RendererData, RigidBodies, RigidBodyFrame, SimulationKind, StarterData,
};
pub use rigid_body::{Aabb, ContactPair, LightRigidBody, RigidBody, ShapeType, WorkSpace};
pub use settings::{EventSettings, FluidEventSettings, RigidBodyEventSettings, VisualFilter};
pub use vector2::Vector2;

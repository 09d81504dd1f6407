//! Simulation state contract
//!
//! Typed schema and validation for the values exchanged between a physics
//! engine and the browser renderer of its demos (bouncing balls, fluid,
//! rigid bodies).
//!
//! Core modules:
//! - `schema`: Wire types for frames, settings and start-up data
//! - `contract`: Pure validation of those types
//! - `codec`: JSON decode/encode with validation
//! - `boundary`: Drop-frame and keep-previous-settings policy
//! - `config`: Tolerances and domain bounds
//! - `sample`: Seeded valid snapshots

pub mod boundary;
pub mod codec;
pub mod config;
pub mod contract;
pub mod error;
pub mod sample;
pub mod schema;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use boundary::{FrameGate, FrameHistory, SettingsPanel};
pub use codec::{EngineEvent, decode_event, decode_frame, decode_settings};
pub use config::ContractConfig;
pub use contract::{validate_event_settings, validate_fluid_snapshot, validate_rigid_body_workspace};
pub use error::{ContractError, ContractResult};
pub use schema::{EventSettings, FluidParticles, RendererData, SimulationKind, Vector2, WorkSpace};

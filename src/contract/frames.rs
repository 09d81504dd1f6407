//! Whole-frame validation dispatched by demo

use super::{check_color, check_finite_vectors, check_positive, validate_fluid_snapshot};
use super::{validate_light_bodies, validate_rigid_body_workspace_with};
use crate::config::ContractConfig;
use crate::error::{ContractError, ContractResult};
use crate::schema::{
    Ball, BouncingBallsFrame, FluidFrame, RendererData, RigidBodies, RigidBodyFrame, SimulationKind, StarterData,
};

/// Confirm every ball has positive radius and mass and a hex color
pub fn validate_balls(balls: Vec<Ball>) -> ContractResult<Vec<Ball>> {
    for (i, ball) in balls.iter().enumerate() {
        check_finite_vectors(&format!("balls[{i}].position"), std::slice::from_ref(&ball.position))?;
        check_finite_vectors(&format!("balls[{i}].velocity"), std::slice::from_ref(&ball.velocity))?;
        check_positive(&format!("balls[{i}].radius"), ball.radius)?;
        check_positive(&format!("balls[{i}].mass"), ball.mass)?;
        check_color(i, &ball.color)?;
    }
    Ok(balls)
}

pub fn validate_renderer_data(kind: SimulationKind, data: RendererData) -> ContractResult<RendererData> {
    validate_renderer_data_with(kind, data, &ContractConfig::default())
}

/// Validate a snapshot that must belong to `kind`
pub fn validate_renderer_data_with(
    kind: SimulationKind,
    data: RendererData,
    config: &ContractConfig,
) -> ContractResult<RendererData> {
    if data.kind() != kind {
        return Err(ContractError::KindMismatch {
            kind,
            what: "renderer data",
        });
    }

    Ok(match data {
        RendererData::BouncingBalls(frame) => RendererData::BouncingBalls(BouncingBallsFrame {
            balls: validate_balls(frame.balls)?,
        }),
        RendererData::Fluid(frame) => RendererData::Fluid(FluidFrame {
            fluid_particles: validate_fluid_snapshot(frame.fluid_particles)?,
        }),
        RendererData::RigidBody(frame) => {
            let bodies = match frame.bodies {
                RigidBodies::Light(bodies) => RigidBodies::Light(validate_light_bodies(bodies)?),
                RigidBodies::Full(ws) => RigidBodies::Full(validate_rigid_body_workspace_with(ws, config)?),
            };
            RendererData::RigidBody(RigidBodyFrame { bodies })
        }
    })
}

/// Starting positions must all be finite
pub fn validate_starter_data(data: StarterData) -> ContractResult<StarterData> {
    check_finite_vectors("positions", &data.positions)?;
    Ok(data)
}

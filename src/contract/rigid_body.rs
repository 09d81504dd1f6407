//! Rigid-body workspace and render-body validation

use super::{check_finite_vectors, check_positive};
use crate::config::ContractConfig;
use crate::error::{ContractError, ContractResult};
use crate::schema::{LightRigidBody, RigidBody, ShapeType, WorkSpace};

/// Confirm a rigid-body workspace honours the contract, using default tolerances
pub fn validate_rigid_body_workspace(ws: WorkSpace) -> ContractResult<WorkSpace> {
    validate_rigid_body_workspace_with(ws, &ContractConfig::default())
}

/// Workspace validation with explicit tolerances.
///
/// Checks body count, solver bounds, contact pairs, then each body in
/// list order; the first failure is reported.
pub fn validate_rigid_body_workspace_with(ws: WorkSpace, config: &ContractConfig) -> ContractResult<WorkSpace> {
    if ws.body_count != ws.body_list.len() {
        return Err(ContractError::CountMismatch {
            declared: ws.body_count,
            actual: ws.body_list.len(),
        });
    }

    check_bounds("mnBs", ws.mn_bs, "mxBs", ws.mx_bs)?;
    check_bounds("mnD", ws.mn_d, "mxD", ws.mx_d)?;
    if ws.min_iter < 1 || ws.min_iter > ws.max_iter {
        return Err(ContractError::out_of_range(
            "minIter",
            f64::from(ws.min_iter),
            1.0,
            f64::from(ws.max_iter),
        ));
    }
    if !ws.gravity.is_finite() {
        return Err(ContractError::NonFinite {
            field: "gravity".to_string(),
            index: 0,
        });
    }

    let len = ws.body_list.len();
    for (pair, contact) in ws.contact_pair.iter().enumerate() {
        for index in [contact.0, contact.1] {
            if index < 0 || index as usize >= len {
                return Err(ContractError::IndexOutOfRange {
                    field: format!("contactPair[{pair}]"),
                    index,
                    len,
                });
            }
        }
        if contact.0 == contact.1 {
            return Err(ContractError::SelfPair { pair, body: contact.0 });
        }
    }

    for (position, body) in ws.body_list.iter().enumerate() {
        validate_body(position, body, config)?;
    }

    Ok(ws)
}

fn check_bounds(min_field: &str, min: f32, max_field: &str, max: f32) -> ContractResult<()> {
    check_positive(min_field, min)?;
    check_positive(max_field, max)?;
    if min > max {
        return Err(ContractError::out_of_range(min_field, f64::from(min), 0.0, f64::from(max)));
    }
    Ok(())
}

fn validate_body(position: usize, body: &RigidBody, config: &ContractConfig) -> ContractResult<()> {
    let field = |name: &str| format!("bodyList[{position}].{name}");

    if body.index != position as i64 {
        return Err(ContractError::BodyIndexMismatch {
            position,
            index: body.index,
        });
    }

    check_finite_vectors(&field("position"), std::slice::from_ref(&body.position))?;
    check_finite_vectors(&field("linearVelocity"), std::slice::from_ref(&body.linear_velocity))?;
    check_finite_vectors(&field("force"), std::slice::from_ref(&body.force))?;
    for (name, value) in [("angle", body.angle), ("angularVelocity", body.angular_velocity)] {
        if !value.is_finite() {
            return Err(ContractError::scalar(field(name), value));
        }
    }

    match body.shape {
        ShapeType::Circle => check_positive(&field("radius"), body.radius)?,
        ShapeType::Box => {
            check_positive(&field("width"), body.width)?;
            check_positive(&field("height"), body.height)?;
        }
    }

    check_inverses(position, body, config)?;

    if !(body.aabb.min.is_finite() && body.aabb.max.is_finite()) || !body.aabb.is_well_formed() {
        return Err(ContractError::InvalidAabb {
            body: position,
            min: (body.aabb.min.x, body.aabb.min.y),
            max: (body.aabb.max.x, body.aabb.max.y),
        });
    }

    check_finite_vectors(&field("vertices"), &body.vertices)?;
    check_finite_vectors(&field("transformedVertices"), &body.transformed_vertices)?;
    let vertex_count = body.vertices.len();
    for &triangle in &body.triangles {
        if triangle as usize >= vertex_count {
            return Err(ContractError::IndexOutOfRange {
                field: field("triangles"),
                index: i64::from(triangle),
                len: vertex_count,
            });
        }
    }

    Ok(())
}

/// `isStatic` bodies have zero inverse mass and inertia; dynamic bodies
/// carry the reciprocals of positive mass and inertia.
fn check_inverses(position: usize, body: &RigidBody, config: &ContractConfig) -> ContractResult<()> {
    if body.is_static {
        for (name, actual) in [("invMass", body.inv_mass), ("invInertia", body.inv_inertia)] {
            if actual != 0.0 {
                return Err(ContractError::InertiaMismatch {
                    body: position,
                    field: name,
                    expected: 0.0,
                    actual: f64::from(actual),
                });
            }
        }
        return Ok(());
    }

    check_positive(&format!("bodyList[{position}].mass"), body.mass)?;
    check_positive(&format!("bodyList[{position}].inertia"), body.inertia)?;

    for (name, value, inverse) in [
        ("invMass", body.mass, body.inv_mass),
        ("invInertia", body.inertia, body.inv_inertia),
    ] {
        if !reciprocal_matches(value, inverse, config.mass_tolerance) {
            return Err(ContractError::InertiaMismatch {
                body: position,
                field: name,
                expected: 1.0 / f64::from(value),
                actual: f64::from(inverse),
            });
        }
    }
    Ok(())
}

#[inline]
fn reciprocal_matches(value: f32, inverse: f32, tolerance: f32) -> bool {
    inverse.is_finite() && (f64::from(value) * f64::from(inverse) - 1.0).abs() <= f64::from(tolerance)
}

/// Confirm every render body has geometry for its shape flag
pub fn validate_light_bodies(bodies: Vec<LightRigidBody>) -> ContractResult<Vec<LightRigidBody>> {
    for (i, body) in bodies.iter().enumerate() {
        check_finite_vectors(&format!("bodies[{i}].position"), std::slice::from_ref(&body.position))?;
        if !body.rotation.is_finite() {
            return Err(ContractError::scalar(format!("bodies[{i}].rotation"), body.rotation));
        }
        match body.shape_type() {
            ShapeType::Circle => check_positive(&format!("bodies[{i}].radius"), body.radius)?,
            ShapeType::Box => {
                check_positive(&format!("bodies[{i}].width"), body.width)?;
                check_positive(&format!("bodies[{i}].height"), body.height)?;
            }
        }
    }
    Ok(bodies)
}

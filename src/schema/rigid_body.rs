//! Rigid-body demo snapshot types
//!
//! Field names on the full body and workspace are camelCase on the wire;
//! the light render body keeps the engine's plain names.

use std::f32::consts::PI;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::Vector2;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vector2,
    pub max: Vector2,
}

impl Aabb {
    pub fn new(min: Vector2, max: Vector2) -> Self {
        Self { min, max }
    }

    /// Box enclosing a circle
    pub fn from_circle(center: Vector2, radius: f32) -> Self {
        Self {
            min: Vector2::new(center.x - radius, center.y - radius),
            max: Vector2::new(center.x + radius, center.y + radius),
        }
    }

    /// Tightest box around a point set, `None` when empty
    pub fn from_points(points: &[Vector2]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut min = Vec2::from(*first);
        let mut max = min;
        for p in rest {
            let p = Vec2::from(*p);
            min = min.min(p);
            max = max.max(p);
        }
        Some(Self::new(min.into(), max.into()))
    }

    /// `min <= max` on both axes
    pub fn is_well_formed(&self) -> bool {
        self.min.le(&self.max)
    }

    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x && other.min.x <= self.max.x && self.min.y <= other.max.y && other.min.y <= self.max.y
    }

    pub fn contains(&self, point: Vector2) -> bool {
        self.min.le(&point) && point.le(&self.max)
    }
}

/// Collision shape of a full rigid body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeType {
    Circle,
    Box,
}

impl ShapeType {
    /// Engine shape code: circle 0, box 1
    pub fn code(&self) -> u8 {
        match self {
            ShapeType::Circle => 0,
            ShapeType::Box => 1,
        }
    }
}

/// Simplified body sent to the renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightRigidBody {
    pub position: Vector2,
    /// Radians
    pub rotation: f32,
    pub radius: f32,
    pub width: f32,
    pub height: f32,
    /// `false` = circle, `true` = box (engine shape code as a flag)
    pub shape: bool,
}

impl LightRigidBody {
    pub fn shape_type(&self) -> ShapeType {
        if self.shape { ShapeType::Box } else { ShapeType::Circle }
    }
}

impl From<&RigidBody> for LightRigidBody {
    fn from(body: &RigidBody) -> Self {
        Self {
            position: body.position,
            rotation: body.angle,
            radius: body.radius,
            width: body.width,
            height: body.height,
            shape: body.shape == ShapeType::Box,
        }
    }
}

/// Full physics body state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RigidBody {
    pub position: Vector2,
    pub linear_velocity: Vector2,
    pub force: Vector2,
    /// Radians
    pub angle: f32,
    pub angular_velocity: f32,

    pub mass: f32,
    pub inv_mass: f32,
    pub density: f32,
    pub area: f32,
    pub restitution: f32,
    pub is_static: bool,
    pub inertia: f32,
    pub inv_inertia: f32,

    pub shape: ShapeType,
    pub radius: f32,
    pub width: f32,
    pub height: f32,

    /// Local-space outline (box corners; empty for circles)
    pub vertices: Vec<Vector2>,
    /// World-space outline, valid unless `tfv_required`
    pub transformed_vertices: Vec<Vector2>,
    /// Render tessellation, indices into `vertices`
    pub triangles: Vec<u32>,
    pub aabb: Aabb,

    pub tfv_required: bool,
    pub aabb_update: bool,
    /// Position within the owning workspace's body list
    pub index: i64,
}

impl RigidBody {
    /// Circle body with mass derived from area and density
    pub fn circle(position: Vector2, radius: f32, density: f32, restitution: f32, is_static: bool) -> Self {
        let area = PI * radius * radius;
        let mass = area * density;
        let inertia = 0.5 * mass * radius * radius;
        let mut body = Self::base(position, ShapeType::Circle, density, restitution, is_static, area, mass, inertia);
        body.radius = radius;
        body.aabb = Aabb::from_circle(position, radius);
        body
    }

    /// Box body centered on `position`
    pub fn boxed(position: Vector2, width: f32, height: f32, density: f32, restitution: f32, is_static: bool) -> Self {
        let area = width * height;
        let mass = area * density;
        let inertia = mass * (width * width + height * height) / 12.0;
        let mut body = Self::base(position, ShapeType::Box, density, restitution, is_static, area, mass, inertia);
        body.width = width;
        body.height = height;

        let (hw, hh) = (width / 2.0, height / 2.0);
        body.vertices = vec![
            Vector2::new(-hw, hh),
            Vector2::new(hw, hh),
            Vector2::new(hw, -hh),
            Vector2::new(-hw, -hh),
        ];
        body.triangles = vec![0, 1, 2, 0, 2, 3];
        body.transformed_vertices = body.world_vertices();
        body.aabb = Aabb::from_points(&body.transformed_vertices).unwrap_or_default();
        body
    }

    #[allow(clippy::too_many_arguments)]
    fn base(
        position: Vector2,
        shape: ShapeType,
        density: f32,
        restitution: f32,
        is_static: bool,
        area: f32,
        mass: f32,
        inertia: f32,
    ) -> Self {
        let (inv_mass, inv_inertia) = if is_static { (0.0, 0.0) } else { (1.0 / mass, 1.0 / inertia) };
        Self {
            position,
            linear_velocity: Vector2::ZERO,
            force: Vector2::ZERO,
            angle: 0.0,
            angular_velocity: 0.0,
            mass,
            inv_mass,
            density,
            area,
            restitution,
            is_static,
            inertia,
            inv_inertia,
            shape,
            radius: 0.0,
            width: 0.0,
            height: 0.0,
            vertices: Vec::new(),
            transformed_vertices: Vec::new(),
            triangles: Vec::new(),
            aabb: Aabb::default(),
            tfv_required: false,
            aabb_update: false,
            index: -1,
        }
    }

    /// Local vertices rotated by `angle` and moved to `position`
    pub fn world_vertices(&self) -> Vec<Vector2> {
        let rot = Vec2::from_angle(self.angle);
        let origin = Vec2::from(self.position);
        self.vertices
            .iter()
            .map(|v| (origin + rot.rotate(Vec2::from(*v))).into())
            .collect()
    }
}

/// Pair of body-list indices for a candidate or active collision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPair(pub i64, pub i64);

/// Whole rigid-body simulation state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkSpace {
    /// Broad-phase iteration bounds
    pub mn_bs: f32,
    pub mx_bs: f32,
    /// Depth bounds
    pub mn_d: f32,
    pub mx_d: f32,
    /// Solver iteration bounds
    pub min_iter: u32,
    pub max_iter: u32,
    pub body_list: Vec<RigidBody>,
    pub gravity: Vector2,
    pub body_count: usize,
    pub contact_pair: Vec<ContactPair>,
}

impl Default for WorkSpace {
    fn default() -> Self {
        Self {
            mn_bs: 0.01 * 0.01,
            mx_bs: 64.0 * 64.0,
            mn_d: 0.5,
            mx_d: 21.4,
            min_iter: 1,
            max_iter: 128,
            body_list: Vec::new(),
            gravity: Vector2::new(0.0, 9.81),
            body_count: 0,
            contact_pair: Vec::new(),
        }
    }
}

impl WorkSpace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a body, assigning its index and keeping `body_count` in step
    pub fn push_body(&mut self, mut body: RigidBody) -> usize {
        let index = self.body_list.len();
        body.index = index as i64;
        self.body_list.push(body);
        self.body_count = self.body_list.len();
        index
    }

    /// Render projection of every body
    pub fn light_bodies(&self) -> Vec<LightRigidBody> {
        self.body_list.iter().map(LightRigidBody::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_from_points() {
        let points = [Vector2::new(1.0, -2.0), Vector2::new(-3.0, 4.0), Vector2::new(0.0, 0.0)];
        let aabb = Aabb::from_points(&points).unwrap();
        assert_eq!(aabb.min, Vector2::new(-3.0, -2.0));
        assert_eq!(aabb.max, Vector2::new(1.0, 4.0));
        assert!(aabb.is_well_formed());
        assert!(Aabb::from_points(&[]).is_none());
    }

    #[test]
    fn test_aabb_overlap_and_contains() {
        let a = Aabb::from_circle(Vector2::ZERO, 1.0);
        let b = Aabb::from_circle(Vector2::new(1.5, 0.0), 1.0);
        let c = Aabb::from_circle(Vector2::new(5.0, 0.0), 1.0);
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
        assert!(a.contains(Vector2::new(0.5, -0.5)));
        assert!(!a.contains(Vector2::new(2.0, 0.0)));
    }

    #[test]
    fn test_static_body_has_zero_inverses() {
        let body = RigidBody::boxed(Vector2::new(10.0, 10.0), 4.0, 2.0, 1.0, 0.5, true);
        assert_eq!(body.inv_mass, 0.0);
        assert_eq!(body.inv_inertia, 0.0);
        assert_eq!(body.vertices.len(), 4);
        assert_eq!(body.aabb.min, Vector2::new(8.0, 9.0));
        assert_eq!(body.aabb.max, Vector2::new(12.0, 11.0));
    }

    #[test]
    fn test_dynamic_circle_inverses() {
        let body = RigidBody::circle(Vector2::ZERO, 2.0, 1.5, 0.5, false);
        assert!((body.inv_mass * body.mass - 1.0).abs() < 1e-6);
        assert!((body.inv_inertia * body.inertia - 1.0).abs() < 1e-6);
        assert_eq!(body.shape.code(), 0);
    }

    #[test]
    fn test_push_body_assigns_index() {
        let mut ws = WorkSpace::new();
        ws.push_body(RigidBody::circle(Vector2::ZERO, 1.0, 1.0, 0.5, false));
        let i = ws.push_body(RigidBody::circle(Vector2::ZERO, 1.0, 1.0, 0.5, false));
        assert_eq!(i, 1);
        assert_eq!(ws.body_count, 2);
        assert_eq!(ws.body_list[1].index, 1);
    }

    #[test]
    fn test_camel_case_wire_names() {
        let mut ws = WorkSpace::new();
        ws.push_body(RigidBody::circle(Vector2::ZERO, 1.0, 1.0, 0.5, true));
        ws.contact_pair.push(ContactPair(0, 1));
        let json = serde_json::to_value(&ws).unwrap();
        assert!(json.get("bodyList").is_some());
        assert!(json.get("mnBs").is_some());
        assert_eq!(json["contactPair"][0], serde_json::json!([0, 1]));
        assert_eq!(json["bodyList"][0]["isStatic"], serde_json::json!(true));
        assert_eq!(json["bodyList"][0]["shape"], serde_json::json!("Circle"));
    }

    #[test]
    fn test_light_projection_shape_flag() {
        let body = RigidBody::boxed(Vector2::ZERO, 2.0, 2.0, 1.0, 0.5, false);
        let light = LightRigidBody::from(&body);
        assert!(light.shape);
        assert_eq!(light.shape_type(), ShapeType::Box);
    }
}

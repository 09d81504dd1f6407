//! Seeded sample snapshots
//!
//! Deterministic producers of contract-valid values, for exercising a
//! renderer or a validator without a running engine.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::schema::{Ball, ContactPair, FluidParticles, LightRigidBody, RigidBody, Vector2, WorkSpace};

/// Sample arena size, matching the engine's default renderer bounds
pub const ARENA: Vector2 = Vector2::new(800.0, 600.0);

const PALETTE: [&str; 6] = ["#E63946", "#F1FAEE", "#A8DADC", "#457B9D", "#1D3557", "#FFB703"];

fn point(rng: &mut Pcg32) -> Vector2 {
    Vector2::new(rng.random_range(0.0..ARENA.x), rng.random_range(0.0..ARENA.y))
}

fn velocity(rng: &mut Pcg32, max: f32) -> Vector2 {
    Vector2::new(rng.random_range(-max..max), rng.random_range(-max..max))
}

/// `n` bouncing balls; radius and mass are equal, as in the demo
pub fn balls(seed: u64, n: usize) -> Vec<Ball> {
    let mut rng = Pcg32::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let radius = rng.random_range(4.0..20.0);
            let color = PALETTE[rng.random_range(0..PALETTE.len())];
            Ball::new(point(&mut rng), velocity(&mut rng, 200.0), radius, radius, color)
        })
        .collect()
}

/// Fluid snapshot of `n` particles with the engine's default constants
pub fn fluid(seed: u64, n: usize) -> FluidParticles {
    let mut rng = Pcg32::seed_from_u64(seed);
    let mass = 50.0 / n.max(1) as f32;
    let mut particles = FluidParticles::new(mass, 5.0, 0.75, 3.5, 30.0);
    for _ in 0..n {
        particles.push(point(&mut rng));
    }
    for (v, d) in particles.velocities.iter_mut().zip(particles.densities.iter_mut()) {
        *v = velocity(&mut rng, 50.0);
        *d = rng.random_range(0.0..2.0);
    }
    particles
}

/// Workspace with four static walls plus `n` dynamic bodies, and a contact
/// pair between each dynamic body and the floor
pub fn workspace(seed: u64, n: usize) -> WorkSpace {
    let mut rng = Pcg32::seed_from_u64(seed);
    let mut ws = WorkSpace::new();
    let (w, h) = (ARENA.x, ARENA.y);

    ws.push_body(RigidBody::boxed(Vector2::new(w / 2.0, h), w - 2.0, 2.0, 5.0, 0.0, true));
    ws.push_body(RigidBody::boxed(Vector2::new(w / 2.0, 0.0), w - 2.0, 2.0, 5.0, 0.0, true));
    ws.push_body(RigidBody::boxed(Vector2::new(0.0, h / 2.0), 2.0, h - 2.0, 5.0, 0.0, true));
    ws.push_body(RigidBody::boxed(Vector2::new(w, h / 2.0), 2.0, h - 2.0, 5.0, 0.0, true));
    let floor = 0;

    for _ in 0..n {
        let position = point(&mut rng);
        let restitution = rng.random_range(0.0..1.0);
        let mut body = if rng.random_bool(0.5) {
            RigidBody::circle(position, rng.random_range(5.0..25.0), 1.0, restitution, false)
        } else {
            let mut b = RigidBody::boxed(
                position,
                rng.random_range(10.0..40.0),
                rng.random_range(10.0..40.0),
                1.0,
                restitution,
                false,
            );
            b.angle = rng.random_range(0.0..std::f32::consts::TAU);
            b.transformed_vertices = b.world_vertices();
            if let Some(aabb) = crate::schema::Aabb::from_points(&b.transformed_vertices) {
                b.aabb = aabb;
            }
            b
        };
        body.linear_velocity = velocity(&mut rng, 100.0);
        let index = ws.push_body(body);
        ws.contact_pair.push(ContactPair(floor, index as i64));
    }
    ws
}

/// Render projection of [`workspace`]
pub fn light_bodies(seed: u64, n: usize) -> Vec<LightRigidBody> {
    workspace(seed, n).light_bodies()
}

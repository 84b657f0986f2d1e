//! Scene setup helpers shared by the physics benchmarks.

use clash2d::physics::scan::find_contacts;
use clash2d::{Body, Contact, PhysicsConfig, PhysicsWorld};
use glam::Vec2;

// ---------------------------------------------------------------------------
// Layouts
// ---------------------------------------------------------------------------

/// Grid position of the `i`-th body, `columns` per row, `spacing` apart.
pub fn grid_position(i: usize, columns: usize, spacing: f32) -> Vec2 {
    let columns = columns.max(1);
    Vec2::new(
        (i % columns) as f32 * spacing,
        (i / columns) as f32 * spacing,
    )
}

fn columns_for(n: usize) -> usize {
    (n as f32).sqrt().ceil() as usize
}

/// Deterministic velocity in `[-1, 1]^2` for body `i`.
fn velocity_for(i: usize) -> Vec2 {
    let a = (i as f32 * 0.618_034).fract() * 2.0 - 1.0;
    let b = (i as f32 * 0.414_213).fract() * 2.0 - 1.0;
    Vec2::new(a, b)
}

// ---------------------------------------------------------------------------
// Body sets
// ---------------------------------------------------------------------------

/// `n` balls of radius 10 packed so that neighbours overlap by 2.
pub fn setup_ball_bodies(n: usize) -> Vec<Body> {
    let columns = columns_for(n);
    (0..n)
        .map(|i| {
            Body::new_ball(grid_position(i, columns, 18.0), 10.0, 1.0)
                .with_velocity(velocity_for(i))
        })
        .collect()
}

/// `n` balls far apart: the scan finds nothing.
pub fn setup_sparse_bodies(n: usize) -> Vec<Body> {
    let columns = columns_for(n);
    (0..n)
        .map(|i| Body::new_ball(grid_position(i, columns, 100.0), 10.0, 1.0))
        .collect()
}

/// `n` bodies cycling through every movable kind, tightly packed.
pub fn setup_mixed_bodies(n: usize) -> Vec<Body> {
    let columns = columns_for(n);
    (0..n)
        .map(|i| {
            let p = grid_position(i, columns, 30.0);
            let body = match i % 4 {
                0 => Body::new_ball(p, 16.0, 2.0),
                1 => Body::new_box(p, p + Vec2::new(30.0, 0.0), 20.0, 3.0),
                2 => Body::new_capsule(p, p + Vec2::new(20.0, 10.0), 8.0, 2.0),
                _ => Body::new_star(p, 18.0, 1.0),
            };
            body.with_velocity(velocity_for(i))
                .with_angular_velocity(0.01 * (i % 5) as f32)
        })
        .collect()
}

/// Box of four walls enclosing `[0, size]^2`.
pub fn arena_walls(size: f32) -> Vec<Body> {
    let corners = [
        Vec2::new(-size * 0.1, -size * 0.1),
        Vec2::new(size * 1.1, -size * 0.1),
        Vec2::new(size * 1.1, size * 1.1),
        Vec2::new(-size * 0.1, size * 1.1),
    ];
    (0..4)
        .map(|i| Body::new_wall(corners[i], corners[(i + 1) % 4]))
        .collect()
}

// ---------------------------------------------------------------------------
// Worlds
// ---------------------------------------------------------------------------

/// Mixed bodies inside an arena, ready to step.
pub fn setup_world(n: usize) -> PhysicsWorld {
    let mut world = PhysicsWorld::new(PhysicsConfig::default());
    let extent = columns_for(n) as f32 * 30.0;
    for wall in arena_walls(extent) {
        world.add_body(wall);
    }
    for body in setup_mixed_bodies(n) {
        world.add_body(body);
    }
    world
}

/// Overlapping balls plus the contacts the scan finds between them.
pub fn setup_contacts(n: usize) -> (Vec<Body>, Vec<Contact>) {
    let bodies = setup_ball_bodies(n);
    let contacts = find_contacts(&bodies);
    (bodies, contacts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ball_grid_overlaps() {
        let (_, contacts) = setup_contacts(16);
        // 4x4 grid: 12 horizontal + 12 vertical neighbour pairs
        assert_eq!(contacts.len(), 24);
    }

    #[test]
    fn test_sparse_bodies_do_not_touch() {
        assert!(find_contacts(&setup_sparse_bodies(25)).is_empty());
    }

    #[test]
    fn test_world_size() {
        let world = setup_world(10);
        assert_eq!(world.len(), 14);
    }
}

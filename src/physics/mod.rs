//! 2D rigid-body physics with SAT collision detection and impulse response.
//!
//! # Architecture
//!
//! Each call to [`PhysicsWorld::step`] advances the world by one frame:
//!
//! 1. Apply control input to player bodies
//! 2. Integrate velocities and positions, re-sync composite shapes
//! 3. Pairwise collision scan (SAT, deepest shape pair per body pair)
//! 4. Resolve contacts in scan order (positional correction, then impulse)

pub mod contact;
pub mod narrowphase;
pub mod rigid_body;
pub mod scan;
pub mod shape;
pub mod solver;

use glam::Vec2;

use crate::control::ControlInput;
use crate::error::{PhysicsError, Result};

use self::contact::Contact;
use self::rigid_body::{Body, BodyId};

/// Configuration for the physics simulation.
#[derive(Debug, Clone)]
pub struct PhysicsConfig {
    /// Fraction of linear velocity removed every frame. Default: 0.0.
    pub linear_damping: f32,
    /// Angular velocity (radians per frame) set by left/right input on
    /// steerable bodies. Default: 0.1.
    pub turn_rate: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            linear_damping: 0.0,
            turn_rate: 0.1,
        }
    }
}

/// Owns every body and runs the step pipeline.
#[derive(Debug, Default)]
pub struct PhysicsWorld {
    config: PhysicsConfig,
    bodies: Vec<Body>,
    contacts: Vec<Contact>,
}

impl PhysicsWorld {
    /// Create an empty physics world with the given configuration.
    pub fn new(config: PhysicsConfig) -> Self {
        Self {
            config,
            bodies: Vec::new(),
            contacts: Vec::new(),
        }
    }

    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    /// Add a body. Ids are handed out in ascending order and double as the
    /// scan order.
    pub fn add_body(&mut self, body: Body) -> BodyId {
        let id = BodyId(self.bodies.len());
        self.bodies.push(body);
        id
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id.0)
    }

    pub fn body_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.get_mut(id.0)
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Mark a body as driven (or no longer driven) by [`ControlInput`].
    pub fn set_player(&mut self, id: BodyId, player: bool) -> Result<()> {
        let body = self
            .bodies
            .get_mut(id.0)
            .ok_or(PhysicsError::UnknownBody(id))?;
        body.player = player;
        Ok(())
    }

    /// Contacts found (and resolved) by the most recent step.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Sum of `mass * velocity` over all bodies.
    pub fn total_momentum(&self) -> Vec2 {
        self.bodies.iter().map(Body::momentum).sum()
    }

    /// Sum of linear and angular kinetic energy over all bodies.
    pub fn kinetic_energy(&self) -> f32 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }

    /// Advance the simulation by one frame.
    pub fn step(&mut self, input: ControlInput) {
        // 1. Control input
        for body in self.bodies.iter_mut().filter(|b| b.player) {
            body.apply_control(&input, self.config.turn_rate);
        }

        // 2. Integrate
        for body in &mut self.bodies {
            body.integrate(self.config.linear_damping);
        }

        // 3. Collision scan
        self.contacts = scan::find_contacts(&self.bodies);

        // 4. Resolve contacts
        solver::solve_contacts(&self.contacts, &mut self.bodies);

        tracing::debug!(
            bodies = self.bodies.len(),
            contacts = self.contacts.len(),
            "physics step"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn test_physics_config_default() {
        let config = PhysicsConfig::default();
        assert_eq!(config.linear_damping, 0.0);
        assert!((config.turn_rate - 0.1).abs() < 1e-7);
    }

    #[test]
    fn test_head_on_balls_swap_velocities() {
        let mut world = PhysicsWorld::default();
        let a = world.add_body(
            Body::new_ball(Vec2::new(0.0, 0.0), 10.0, 5.0).with_velocity(Vec2::new(2.0, 0.0)),
        );
        let b = world.add_body(Body::new_ball(Vec2::new(15.0, 0.0), 10.0, 5.0));

        world.step(ControlInput::NONE);

        let contacts = world.contacts();
        assert_eq!(contacts.len(), 1);
        assert_eq!((contacts[0].body_a, contacts[0].body_b), (a, b));
        assert!(
            (contacts[0].penetration - 7.0).abs() < EPS,
            "depth = {}",
            contacts[0].penetration
        );
        assert!((contacts[0].normal - Vec2::X).length() < EPS);

        let va = world.body(a).unwrap().linear_velocity;
        let vb = world.body(b).unwrap().linear_velocity;
        assert!(va.length() < EPS, "A velocity = {va}");
        assert!((vb - Vec2::new(2.0, 0.0)).length() < EPS, "B velocity = {vb}");
    }

    #[test]
    fn test_distant_balls_only_move() {
        let mut world = PhysicsWorld::default();
        let a = world.add_body(
            Body::new_ball(Vec2::new(0.0, 0.0), 10.0, 5.0).with_velocity(Vec2::new(2.0, 0.0)),
        );
        world.add_body(Body::new_ball(Vec2::new(25.0, 0.0), 10.0, 5.0));

        world.step(ControlInput::NONE);

        assert!(world.contacts().is_empty());
        let body = world.body(a).unwrap();
        assert!((body.position() - Vec2::new(2.0, 0.0)).length() < EPS);
        assert!((body.linear_velocity - Vec2::new(2.0, 0.0)).length() < EPS);
    }

    #[test]
    fn test_ball_bounces_off_wall() {
        let mut world = PhysicsWorld::default();
        let wall = world.add_body(Body::new_wall(Vec2::new(-100.0, 30.0), Vec2::new(100.0, 30.0)));
        let ball = world.add_body(
            Body::new_ball(Vec2::ZERO, 10.0, 10.0).with_velocity(Vec2::new(0.0, 3.0)),
        );
        let energy = world.kinetic_energy();

        for _ in 0..20 {
            world.step(ControlInput::NONE);
        }

        let body = world.body(ball).unwrap();
        assert!((body.linear_velocity - Vec2::new(0.0, -3.0)).length() < EPS);
        assert!(body.position().y < 20.0, "y = {}", body.position().y);
        assert!((world.kinetic_energy() - energy).abs() < 1e-3);
        assert_eq!(world.body(wall).unwrap().position(), Vec2::new(0.0, 30.0));
    }

    #[test]
    fn test_momentum_conserved_across_steps() {
        let mut world = PhysicsWorld::default();
        world.add_body(Body::new_ball(Vec2::new(0.0, 0.0), 8.0, 2.0).with_velocity(Vec2::new(1.5, 0.2)));
        world.add_body(Body::new_ball(Vec2::new(30.0, 3.0), 6.0, 4.0).with_velocity(Vec2::new(-1.0, 0.0)));
        world.add_body(Body::new_ball(Vec2::new(15.0, 40.0), 5.0, 1.0).with_velocity(Vec2::new(0.0, -2.0)));
        let momentum = world.total_momentum();

        for _ in 0..60 {
            world.step(ControlInput::NONE);
            assert!((world.total_momentum() - momentum).length() < 1e-3);
        }
    }

    #[test]
    fn test_control_only_moves_players() {
        let mut world = PhysicsWorld::default();
        let player = world.add_body(Body::new_ball(Vec2::ZERO, 5.0, 1.0));
        let idle = world.add_body(Body::new_ball(Vec2::new(100.0, 0.0), 5.0, 1.0));
        world.set_player(player, true).unwrap();

        world.step(ControlInput::right());

        let body = world.body(player).unwrap();
        assert!((body.linear_velocity - Vec2::new(1.0, 0.0)).length() < EPS);
        assert!((body.position() - Vec2::new(1.0, 0.0)).length() < EPS);
        assert_eq!(world.body(idle).unwrap().linear_velocity, Vec2::ZERO);

        world.step(ControlInput::left().with(ControlInput::down()));
        let body = world.body(player).unwrap();
        assert!((body.acceleration - Vec2::new(-1.0, 1.0).normalize()).length() < EPS);
        assert_eq!(world.body(idle).unwrap().acceleration, Vec2::ZERO);
    }

    #[test]
    fn test_turn_rate_from_config() {
        let mut world = PhysicsWorld::new(PhysicsConfig {
            turn_rate: 0.25,
            ..Default::default()
        });
        let id = world.add_body(Body::new_box(Vec2::ZERO, Vec2::new(20.0, 0.0), 10.0, 1.0));
        world.set_player(id, true).unwrap();

        world.step(ControlInput::right());

        let body = world.body(id).unwrap();
        assert!((body.angular_velocity - 0.25).abs() < EPS);
        assert!((body.angle() - 0.25).abs() < EPS);
    }

    #[test]
    fn test_linear_damping() {
        let mut world = PhysicsWorld::new(PhysicsConfig {
            linear_damping: 0.5,
            ..Default::default()
        });
        let id = world.add_body(Body::new_ball(Vec2::ZERO, 5.0, 1.0).with_velocity(Vec2::new(10.0, 0.0)));

        world.step(ControlInput::NONE);

        let body = world.body(id).unwrap();
        assert!((body.linear_velocity - Vec2::new(5.0, 0.0)).length() < EPS);
        assert!((body.position() - Vec2::new(5.0, 0.0)).length() < EPS);
    }

    #[test]
    fn test_set_player_unknown_body() {
        let mut world = PhysicsWorld::default();
        assert!(world.is_empty());
        assert_eq!(
            world.set_player(BodyId(0), true),
            Err(PhysicsError::UnknownBody(BodyId(0)))
        );

        let id = world.add_body(Body::new_wall(Vec2::ZERO, Vec2::new(1.0, 0.0)));
        assert_eq!(id, BodyId(0));
        assert_eq!(world.len(), 1);
        assert!(world.body(BodyId(1)).is_none());
        assert!(world.body_mut(id).is_some());
    }

    #[test]
    fn test_crossing_walls_are_skipped() {
        let mut world = PhysicsWorld::default();
        world.add_body(Body::new_wall(Vec2::new(-10.0, 0.0), Vec2::new(10.0, 0.0)));
        world.add_body(Body::new_wall(Vec2::new(0.0, -10.0), Vec2::new(0.0, 10.0)));

        world.step(ControlInput::NONE);

        assert_eq!(world.contacts().len(), 1);
        for body in world.bodies() {
            assert!(body.position().is_finite());
        }
        assert_eq!(world.body(BodyId(0)).unwrap().position(), Vec2::ZERO);
    }
}

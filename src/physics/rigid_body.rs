//! Rigid bodies: composite shapes plus mass properties and motion state.

use std::fmt;

use glam::Vec2;

use crate::control::ControlInput;
use crate::math::{normal, unit};

use super::shape::{Polygon, Shape};

/// Index of a body inside a [`PhysicsWorld`](super::PhysicsWorld).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BodyId(pub usize);

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "body #{}", self.0)
    }
}

/// Body archetype. Decides how the shapes are laid out, how inertia is
/// computed and how control input is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    /// Single circle.
    Ball,
    /// Single rectangle.
    Box,
    /// Rectangle with a circle cap at each end.
    Capsule,
    /// Two overlapping triangles sharing a centre.
    Star,
    /// Immovable line segment.
    Wall,
}

/// Rigid body.
///
/// `shapes[0]` is the primary shape: its position and angle are the body's
/// position and angle, and every other shape is re-derived from it by
/// [`Body::sync_shapes`].
#[derive(Debug, Clone)]
pub struct Body {
    pub kind: BodyKind,
    pub shapes: Vec<Shape>,
    pub mass: f32,
    pub inv_mass: f32,
    pub inertia: f32,
    pub inv_inertia: f32,
    /// Coefficient of restitution (0.0 - 1.0).
    pub elasticity: f32,
    pub linear_velocity: Vec2,
    /// Acceleration requested for the next integration. Normalized and
    /// scaled by `thrust` when applied.
    pub acceleration: Vec2,
    /// Magnitude of any non-zero acceleration (default: 1.0).
    pub thrust: f32,
    pub angular_velocity: f32,
    /// Whether this body reacts to [`ControlInput`].
    pub player: bool,
}

impl Body {
    fn from_parts(kind: BodyKind, shapes: Vec<Shape>, mass: f32, inertia: f32) -> Self {
        let (inv_mass, inv_inertia) = if mass == 0.0 {
            (0.0, 0.0)
        } else {
            (1.0 / mass, 1.0 / inertia)
        };

        let mut body = Self {
            kind,
            shapes,
            mass,
            inv_mass,
            inertia,
            inv_inertia,
            elasticity: 1.0,
            linear_velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            thrust: 1.0,
            angular_velocity: 0.0,
            player: false,
        };
        body.sync_shapes();
        body
    }

    /// Create a ball. A mass of `0.0` makes it immovable.
    pub fn new_ball(center: Vec2, radius: f32, mass: f32) -> Self {
        let inertia = mass * radius * radius / 2.0;
        Self::from_parts(
            BodyKind::Ball,
            vec![Shape::circle(center, radius)],
            mass,
            inertia,
        )
    }

    /// Create a box from one edge `start -> end` and a width.
    pub fn new_box(start: Vec2, end: Vec2, width: f32, mass: f32) -> Self {
        let length = (end - start).length();
        let inertia = mass * (width * width + (length + 2.0 * width).powi(2)) / 12.0;
        Self::from_parts(
            BodyKind::Box,
            vec![Shape::rectangle(start, end, width)],
            mass,
            inertia,
        )
    }

    /// Create a capsule whose cap circles are centred on `start` and `end`.
    pub fn new_capsule(start: Vec2, end: Vec2, radius: f32, mass: f32) -> Self {
        let offset = normal(unit(end - start)) * radius;
        let rect = Shape::rectangle(end + offset, start + offset, 2.0 * radius);

        let length = (end - start).length();
        let width = 2.0 * radius;
        let inertia = mass * ((2.0 * width).powi(2) + (length + 2.0 * width).powi(2)) / 12.0;

        Self::from_parts(
            BodyKind::Capsule,
            vec![
                rect,
                Shape::circle(start, radius),
                Shape::circle(end, radius),
            ],
            mass,
            inertia,
        )
    }

    /// Create a six-pointed star: two equilateral triangles with
    /// circumradius `radius`, one pointing up and one pointing down.
    pub fn new_star(center: Vec2, radius: f32, mass: f32) -> Self {
        let up = Vec2::new(0.0, -1.0);
        let side = normal(up) * (radius * 3.0f32.sqrt() / 2.0);

        let upward = Shape::triangle(
            center + up * radius,
            center - up * (radius / 2.0) - side,
            center - up * (radius / 2.0) + side,
        );
        let downward = Shape::triangle(
            center - up * radius,
            center + up * (radius / 2.0) - side,
            center + up * (radius / 2.0) + side,
        );

        let inertia = mass * (2.0 * radius).powi(2) / 12.0;
        Self::from_parts(BodyKind::Star, vec![upward, downward], mass, inertia)
    }

    /// Create an immovable wall segment.
    pub fn new_wall(start: Vec2, end: Vec2) -> Self {
        Self::from_parts(BodyKind::Wall, vec![Shape::segment(start, end)], 0.0, 0.0)
    }

    pub fn with_elasticity(mut self, elasticity: f32) -> Self {
        self.elasticity = elasticity;
        self
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.linear_velocity = velocity;
        self
    }

    pub fn with_angular_velocity(mut self, angular_velocity: f32) -> Self {
        self.angular_velocity = angular_velocity;
        self
    }

    /// Reference point of the body (position of the primary shape).
    #[inline]
    pub fn position(&self) -> Vec2 {
        self.shapes[0].pos()
    }

    #[inline]
    pub fn angle(&self) -> f32 {
        self.shapes[0].angle()
    }

    /// Whether no impulse or correction can move or rotate this body.
    #[inline]
    pub fn is_immovable(&self) -> bool {
        self.inv_mass == 0.0 && self.inv_inertia == 0.0
    }

    /// Move the primary shape. Secondary shapes follow on the next sync.
    #[inline]
    pub fn translate(&mut self, offset: Vec2) {
        self.shapes[0].translate(offset);
    }

    /// Velocity of the material point at `point` (world space).
    #[inline]
    pub fn velocity_at(&self, point: Vec2) -> Vec2 {
        let lever = point - self.position();
        self.linear_velocity + lever.perp() * self.angular_velocity
    }

    #[inline]
    pub fn momentum(&self) -> Vec2 {
        self.linear_velocity * self.mass
    }

    #[inline]
    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.mass * self.linear_velocity.length_squared()
            + 0.5 * self.inertia * self.angular_velocity * self.angular_velocity
    }

    /// Translate control input into `acceleration` / `angular_velocity`.
    pub fn apply_control(&mut self, input: &ControlInput, turn_rate: f32) {
        match self.kind {
            BodyKind::Wall => {}
            BodyKind::Ball => {
                if input.up {
                    self.acceleration.y = -self.thrust;
                }
                if input.left {
                    self.acceleration.x = -self.thrust;
                }
                if input.down {
                    self.acceleration.y = self.thrust;
                }
                if input.right {
                    self.acceleration.x = self.thrust;
                }
                if !input.up && !input.down {
                    self.acceleration.y = 0.0;
                }
                if !input.left && !input.right {
                    self.acceleration.x = 0.0;
                }
            }
            BodyKind::Box | BodyKind::Capsule | BodyKind::Star => {
                let dir = self.shapes[0].dir();
                if input.up {
                    self.acceleration = dir * -self.thrust;
                }
                if input.down {
                    self.acceleration = dir * self.thrust;
                }
                if input.left {
                    self.angular_velocity = -turn_rate;
                }
                if input.right {
                    self.angular_velocity = turn_rate;
                }
                if !input.up && !input.down {
                    self.acceleration = Vec2::ZERO;
                }
            }
        }
    }

    /// Advance one frame: v += a, p += v, angle += w, then re-sync shapes.
    pub fn integrate(&mut self, linear_damping: f32) {
        if self.kind == BodyKind::Wall {
            return;
        }

        self.acceleration = unit(self.acceleration) * self.thrust;
        self.linear_velocity =
            (self.linear_velocity + self.acceleration) * (1.0 - linear_damping);

        let velocity = self.linear_velocity;
        let spin = self.angular_velocity;
        self.shapes[0].translate(velocity);
        self.shapes[0].rotate_by(spin);
        self.sync_shapes();
    }

    /// Refresh the primary shape's vertices and re-attach secondary shapes.
    pub fn sync_shapes(&mut self) {
        self.shapes[0].refresh_vertices();

        match self.kind {
            BodyKind::Capsule => {
                if let Shape::Polygon(Polygon::Rectangle(rect)) = self.shapes[0] {
                    let half = rect.dir * (rect.length() * 0.5);
                    self.shapes[1].set_pos(rect.pos - half);
                    self.shapes[2].set_pos(rect.pos + half);
                }
            }
            BodyKind::Star => {
                let (pos, angle) = (self.shapes[0].pos(), self.shapes[0].angle());
                self.shapes[1].set_pos(pos);
                self.shapes[1].set_angle(angle);
            }
            BodyKind::Ball | BodyKind::Box | BodyKind::Wall => {}
        }

        for shape in &mut self.shapes[1..] {
            shape.refresh_vertices();
        }
    }
}

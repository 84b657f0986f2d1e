//! clash2d
//!
//! A small 2D rigid-body engine: separating-axis collision detection between
//! circles, segments and convex polygons, resolved with positional correction
//! and a single restitution impulse per contact.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! 1. **math** - Vector helpers on top of glam (unit, normal, cross, rotation)
//! 2. **control** - Directional input snapshot for player-driven bodies
//! 3. **physics** - Shapes, bodies, SAT narrowphase, pair scan, solver and the
//!    [`PhysicsWorld`] that ties them into one step
//! 4. **error** - [`PhysicsError`]

pub mod control;
pub mod error;
pub mod math;
pub mod physics;

// Re-export commonly used types
pub use control::ControlInput;
pub use error::PhysicsError;
pub use physics::contact::Contact;
pub use physics::rigid_body::{Body, BodyId, BodyKind};
pub use physics::shape::Shape;
pub use physics::{PhysicsConfig, PhysicsWorld};

// Re-export glam for convenience
pub use glam;

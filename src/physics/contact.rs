//! Contact data structures for collision response.

use glam::Vec2;

use super::rigid_body::BodyId;

/// Result of a shape-vs-shape overlap test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactInfo {
    /// Contact normal (from shape A to shape B).
    pub normal: Vec2,
    /// Penetration depth.
    pub penetration: f32,
    /// Contact point in world space (a vertex of one of the two shapes).
    pub point: Vec2,
}

/// The deepest contact between two bodies in the current step.
///
/// Rebuilt from scratch every step and dropped after resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub body_a: BodyId,
    pub body_b: BodyId,
    /// Unit normal pointing from `body_a` toward `body_b`.
    pub normal: Vec2,
    pub penetration: f32,
    pub point: Vec2,
}

impl Contact {
    pub fn new(body_a: BodyId, body_b: BodyId, info: ContactInfo) -> Self {
        Self {
            body_a,
            body_b,
            normal: info.normal,
            penetration: info.penetration,
            point: info.point,
        }
    }
}

//! 2D vector helpers on top of `glam`.
//!
//! `glam::Vec2` already provides add, subtract, scale, dot and magnitude.
//! The helpers here pin down the conventions the collision code relies on:
//! the zero vector has a zero unit vector, normals are the +90° rotation,
//! and orientations are rebuilt from an absolute angle rather than rotated
//! incrementally.

use glam::{Mat2, Vec2};

/// Unit vector in the direction of `v`, or `Vec2::ZERO` when `v` has zero length.
#[inline]
pub fn unit(v: Vec2) -> Vec2 {
    v.normalize_or_zero()
}

/// Perpendicular of `v` rotated +90° (`(-y, x)`), normalized.
#[inline]
pub fn normal(v: Vec2) -> Vec2 {
    v.perp().normalize_or_zero()
}

/// Scalar 2D cross product `a.x * b.y - a.y * b.x`.
#[inline]
pub fn cross(a: Vec2, b: Vec2) -> f32 {
    a.perp_dot(b)
}

/// 2x2 rotation matrix `[[cos, -sin], [sin, cos]]` for `angle` radians.
#[inline]
pub fn rotation(angle: f32) -> Mat2 {
    Mat2::from_angle(angle)
}

/// Rotate a fixed reference vector by an absolute angle.
#[inline]
pub fn rotate(reference: Vec2, angle: f32) -> Vec2 {
    rotation(angle) * reference
}

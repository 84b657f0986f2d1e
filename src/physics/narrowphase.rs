//! Narrowphase collision detection: separating axis test between two shapes.
//!
//! Candidate axes come from both shapes, first shape first:
//!
//! | Shape     | Axes                                                     |
//! |-----------|----------------------------------------------------------|
//! | Circle    | centre to the other shape's closest vertex               |
//! | Line      | segment normal                                           |
//! | Rectangle | edge normal, edge direction                              |
//! | Triangle  | the three edge normals                                   |
//!
//! Two circles use the single axis between their centres. The axis order
//! decides which shape supplies the contact vertex, so it must not change.

use glam::Vec2;

use crate::math::{normal, unit};

use super::contact::ContactInfo;
use super::shape::{Polygon, Shape};

/// Interval covered by a shape projected onto an axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub min: f32,
    pub max: f32,
    /// First vertex whose projection equals `min`.
    pub min_vertex: Vec2,
}

impl Projection {
    /// Length shared by both intervals. Negative when they are disjoint.
    #[inline]
    pub fn overlap(&self, other: &Projection) -> f32 {
        self.max.min(other.max) - self.min.max(other.min)
    }

    /// Whether one interval lies strictly inside the other.
    #[inline]
    pub fn is_nested(&self, other: &Projection) -> bool {
        (self.max > other.max && self.min < other.min)
            || (self.max < other.max && self.min > other.min)
    }
}

/// Project a shape onto `axis`. Circles are projected through their support
/// pair along that same axis, so their interval is exact.
pub fn project(shape: &Shape, axis: Vec2) -> Projection {
    match shape {
        Shape::Circle(circle) => project_vertices(&circle.support_pair(axis), axis),
        _ => project_vertices(shape.vertices(), axis),
    }
}

fn project_vertices(vertices: &[Vec2], axis: Vec2) -> Projection {
    let mut min_vertex = vertices[0];
    let mut min = axis.dot(min_vertex);
    let mut max = min;

    for &vertex in &vertices[1..] {
        let p = axis.dot(vertex);
        if p < min {
            min = p;
            min_vertex = vertex;
        }
        if p > max {
            max = p;
        }
    }

    Projection {
        min,
        max,
        min_vertex,
    }
}

/// Number of axes a shape contributes to the candidate list.
#[inline]
pub fn axis_count(shape: &Shape) -> usize {
    match shape {
        Shape::Circle(_) | Shape::Line(_) => 1,
        Shape::Polygon(Polygon::Rectangle(_)) => 2,
        Shape::Polygon(Polygon::Triangle(_)) => 3,
    }
}

/// Vertex of `shape` nearest to `point`. Circles have no vertices.
pub fn closest_vertex(shape: &Shape, point: Vec2) -> Option<Vec2> {
    let mut best: Option<(Vec2, f32)> = None;
    for &vertex in shape.vertices() {
        let dist = (point - vertex).length();
        if best.map_or(true, |(_, min)| dist < min) {
            best = Some((vertex, dist));
        }
    }
    best.map(|(vertex, _)| vertex)
}

fn push_axes(shape: &Shape, other: &Shape, axes: &mut Vec<Vec2>) {
    match shape {
        Shape::Circle(circle) => {
            let target = closest_vertex(other, circle.pos).unwrap_or_else(|| other.pos());
            axes.push(unit(target - circle.pos));
        }
        Shape::Line(segment) => axes.push(normal(segment.dir)),
        Shape::Polygon(Polygon::Rectangle(rect)) => {
            axes.push(normal(rect.dir));
            axes.push(rect.dir);
        }
        Shape::Polygon(Polygon::Triangle(tri)) => {
            let [a, b, c] = tri.vertices;
            axes.push(normal(b - a));
            axes.push(normal(c - b));
            axes.push(normal(a - c));
        }
    }
}

/// Candidate separating axes for a shape pair, `shape_a`'s axes first.
pub fn candidate_axes(shape_a: &Shape, shape_b: &Shape) -> Vec<Vec2> {
    if let (Shape::Circle(a), Shape::Circle(b)) = (shape_a, shape_b) {
        return vec![unit(b.pos - a.pos)];
    }

    let mut axes = Vec::with_capacity(axis_count(shape_a) + axis_count(shape_b));
    push_axes(shape_a, shape_b, &mut axes);
    push_axes(shape_b, shape_a, &mut axes);
    axes
}

/// Separating axis test between two shapes.
///
/// Returns `None` as soon as an axis separates the projections. Otherwise
/// returns the axis of least overlap as the contact normal (pointing from
/// `shape_a` toward `shape_b`), that overlap as the penetration depth, and
/// a single contact vertex. When the winning axis belongs to `shape_a`,
/// `shape_b` supplies the vertex, and vice versa.
///
/// Projections that nest inside each other have their overlap widened by
/// the nearer boundary gap, and the axis turned toward that boundary. This
/// only biases axis selection; separation is decided on the raw overlap.
pub fn detect_collision(shape_a: &Shape, shape_b: &Shape) -> Option<ContactInfo> {
    let axes = candidate_axes(shape_a, shape_b);
    let first_count = axis_count(shape_a);

    // (overlap, axis pointing from b toward a, vertex taken from b)
    let mut best: Option<(f32, Vec2, bool)> = None;

    for (i, &candidate) in axes.iter().enumerate() {
        let proj_a = project(shape_a, candidate);
        let proj_b = project(shape_b, candidate);

        let mut overlap = proj_a.overlap(&proj_b);
        if overlap < 0.0 {
            return None;
        }

        let mut axis = candidate;
        if proj_a.is_nested(&proj_b) {
            let mins = (proj_a.min - proj_b.min).abs();
            let maxs = (proj_a.max - proj_b.max).abs();
            if mins < maxs {
                overlap += mins;
            } else {
                overlap += maxs;
                axis = -axis;
            }
        }

        if best.map_or(true, |(min, _, _)| overlap < min) {
            let from_b = i < first_count;
            let flip = if from_b {
                proj_a.max > proj_b.max
            } else {
                proj_a.max < proj_b.max
            };
            best = Some((overlap, if flip { -axis } else { axis }, from_b));
        }
    }

    let (penetration, axis, from_b) = best?;
    let vertex_shape = if from_b { shape_b } else { shape_a };
    let point = project(vertex_shape, axis).min_vertex;

    Some(ContactInfo {
        normal: if from_b { axis } else { -axis },
        penetration,
        point,
    })
}

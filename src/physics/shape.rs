//! Shape primitives: line segments, circles and convex polygons.
//!
//! Shapes keep a fixed local geometry plus a position and an absolute
//! angle. Vertices are derived from those by [`Shape::refresh_vertices`]
//! and go stale as soon as `pos` or `angle` is changed, until the next
//! refresh.

use glam::Vec2;

use crate::math::{normal, rotate, rotation, unit};

/// Discriminant of [`Shape`], used for dispatch tables and renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Line,
    Circle,
    Polygon,
}

/// Line segment, rotated about its midpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub vertices: [Vec2; 2],
    pub pos: Vec2,
    pub dir: Vec2,
    pub angle: f32,
    ref_dir: Vec2,
    length: f32,
}

impl Segment {
    pub fn new(start: Vec2, end: Vec2) -> Self {
        let dir = unit(end - start);
        Self {
            vertices: [start, end],
            pos: (start + end) * 0.5,
            dir,
            angle: 0.0,
            ref_dir: dir,
            length: (end - start).length(),
        }
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.length
    }

    pub fn refresh_vertices(&mut self) {
        self.dir = rotate(self.ref_dir, self.angle);
        let half = self.dir * (self.length * 0.5);
        self.vertices = [self.pos - half, self.pos + half];
    }
}

/// Circle. Has no boundary vertices of its own; collision code asks for a
/// support pair along whichever axis is being tested.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub pos: Vec2,
    pub radius: f32,
    pub dir: Vec2,
    pub angle: f32,
}

impl Circle {
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self {
            pos,
            radius,
            dir: Vec2::X,
            angle: 0.0,
        }
    }

    /// The two points of the circle that are extreme along `axis`,
    /// `[pos - r * axis, pos + r * axis]`.
    #[inline]
    pub fn support_pair(&self, axis: Vec2) -> [Vec2; 2] {
        [self.pos - axis * self.radius, self.pos + axis * self.radius]
    }

    pub fn refresh_vertices(&mut self) {
        self.dir = rotate(Vec2::X, self.angle);
    }
}

/// Rectangle of `length` along `dir` and `width` along `normal(dir)`,
/// centred on `pos`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub vertices: [Vec2; 4],
    pub pos: Vec2,
    pub dir: Vec2,
    pub angle: f32,
    ref_dir: Vec2,
    length: f32,
    width: f32,
}

impl Rectangle {
    /// Build from one edge `start -> end` and the width extending to the
    /// left of that edge.
    pub fn new(start: Vec2, end: Vec2, width: f32) -> Self {
        let dir = unit(end - start);
        let length = (end - start).length();
        let pos = start + dir * (length * 0.5) + normal(dir) * (width * 0.5);
        let mut rect = Self {
            vertices: [Vec2::ZERO; 4],
            pos,
            dir,
            angle: 0.0,
            ref_dir: dir,
            length,
            width,
        };
        rect.refresh_vertices();
        rect
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.length
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn refresh_vertices(&mut self) {
        self.dir = rotate(self.ref_dir, self.angle);
        let along = self.dir * (self.length * 0.5);
        let across = normal(self.dir) * (self.width * 0.5);
        self.vertices = [
            self.pos - along + across,
            self.pos - along - across,
            self.pos + along - across,
            self.pos + along + across,
        ];
    }
}

/// Triangle stored as three offsets from its centroid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub vertices: [Vec2; 3],
    pub pos: Vec2,
    pub dir: Vec2,
    pub angle: f32,
    ref_dir: Vec2,
    offsets: [Vec2; 3],
}

impl Triangle {
    pub fn new(a: Vec2, b: Vec2, c: Vec2) -> Self {
        let pos = (a + b + c) / 3.0;
        let dir = unit(a - pos);
        Self {
            vertices: [a, b, c],
            pos,
            dir,
            angle: 0.0,
            ref_dir: dir,
            offsets: [a - pos, b - pos, c - pos],
        }
    }

    pub fn refresh_vertices(&mut self) {
        let rot = rotation(self.angle);
        self.dir = rot * self.ref_dir;
        for (vertex, offset) in self.vertices.iter_mut().zip(self.offsets) {
            *vertex = self.pos + rot * offset;
        }
    }
}

/// Convex polygon specializations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Polygon {
    Rectangle(Rectangle),
    Triangle(Triangle),
}

/// A shape owned by a body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Line(Segment),
    Circle(Circle),
    Polygon(Polygon),
}

impl Shape {
    pub fn segment(start: Vec2, end: Vec2) -> Self {
        Shape::Line(Segment::new(start, end))
    }

    pub fn circle(pos: Vec2, radius: f32) -> Self {
        Shape::Circle(Circle::new(pos, radius))
    }

    pub fn rectangle(start: Vec2, end: Vec2, width: f32) -> Self {
        Shape::Polygon(Polygon::Rectangle(Rectangle::new(start, end, width)))
    }

    pub fn triangle(a: Vec2, b: Vec2, c: Vec2) -> Self {
        Shape::Polygon(Polygon::Triangle(Triangle::new(a, b, c)))
    }

    #[inline]
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Line(_) => ShapeKind::Line,
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Polygon(_) => ShapeKind::Polygon,
        }
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        match self {
            Shape::Line(s) => s.pos,
            Shape::Circle(c) => c.pos,
            Shape::Polygon(Polygon::Rectangle(r)) => r.pos,
            Shape::Polygon(Polygon::Triangle(t)) => t.pos,
        }
    }

    #[inline]
    pub fn set_pos(&mut self, pos: Vec2) {
        match self {
            Shape::Line(s) => s.pos = pos,
            Shape::Circle(c) => c.pos = pos,
            Shape::Polygon(Polygon::Rectangle(r)) => r.pos = pos,
            Shape::Polygon(Polygon::Triangle(t)) => t.pos = pos,
        }
    }

    #[inline]
    pub fn translate(&mut self, offset: Vec2) {
        let pos = self.pos();
        self.set_pos(pos + offset);
    }

    #[inline]
    pub fn angle(&self) -> f32 {
        match self {
            Shape::Line(s) => s.angle,
            Shape::Circle(c) => c.angle,
            Shape::Polygon(Polygon::Rectangle(r)) => r.angle,
            Shape::Polygon(Polygon::Triangle(t)) => t.angle,
        }
    }

    #[inline]
    pub fn set_angle(&mut self, angle: f32) {
        match self {
            Shape::Line(s) => s.angle = angle,
            Shape::Circle(c) => c.angle = angle,
            Shape::Polygon(Polygon::Rectangle(r)) => r.angle = angle,
            Shape::Polygon(Polygon::Triangle(t)) => t.angle = angle,
        }
    }

    #[inline]
    pub fn rotate_by(&mut self, delta: f32) {
        let angle = self.angle();
        self.set_angle(angle + delta);
    }

    /// Current orientation unit vector, as of the last refresh.
    #[inline]
    pub fn dir(&self) -> Vec2 {
        match self {
            Shape::Line(s) => s.dir,
            Shape::Circle(c) => c.dir,
            Shape::Polygon(Polygon::Rectangle(r)) => r.dir,
            Shape::Polygon(Polygon::Triangle(t)) => t.dir,
        }
    }

    /// Radius for circles.
    #[inline]
    pub fn radius(&self) -> Option<f32> {
        match self {
            Shape::Circle(c) => Some(c.radius),
            _ => None,
        }
    }

    /// Boundary vertices in winding order. Empty for circles.
    #[inline]
    pub fn vertices(&self) -> &[Vec2] {
        match self {
            Shape::Line(s) => &s.vertices,
            Shape::Circle(_) => &[],
            Shape::Polygon(Polygon::Rectangle(r)) => &r.vertices,
            Shape::Polygon(Polygon::Triangle(t)) => &t.vertices,
        }
    }

    /// Rebuild `dir` and vertices from `pos`, `angle` and the local geometry.
    pub fn refresh_vertices(&mut self) {
        match self {
            Shape::Line(s) => s.refresh_vertices(),
            Shape::Circle(c) => c.refresh_vertices(),
            Shape::Polygon(Polygon::Rectangle(r)) => r.refresh_vertices(),
            Shape::Polygon(Polygon::Triangle(t)) => t.refresh_vertices(),
        }
    }
}

//! Straight-edged shapes - Line, Ray, Polyline, WireBox
//!
//! These emit their input points more or less directly; the box is the
//! only one that does any math, mapping unit-cube corners through a
//! transform.

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

use super::traits::Wireframe;
use crate::geometry::{Segment, Transform};

/// A line segment from `start` to `end`
///
/// Zero-length lines are valid and produce a zero-length segment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub start: Point3<f32>,
    pub end: Point3<f32>,
}

impl Line {
    /// Create a new line from `start` to `end`
    pub fn new(start: Point3<f32>, end: Point3<f32>) -> Self {
        Self { start, end }
    }
}

impl Wireframe for Line {
    fn for_each_segment(&self, emit: &mut dyn FnMut(Segment)) {
        emit(Segment::new(self.start, self.end));
    }

    fn name(&self) -> &str {
        "Line"
    }

    fn segment_count(&self) -> usize {
        1
    }
}

/// A ray from `origin` along `direction`, scaled by `distance`
///
/// ## Parametric Equation
/// ```text
/// end = origin + direction * distance
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    pub origin: Point3<f32>,
    pub direction: Vector3<f32>,
    #[serde(default = "default_distance")]
    pub distance: f32,
}

fn default_distance() -> f32 {
    1.0
}

impl Ray {
    /// Ray whose end is `origin + direction`
    pub fn new(origin: Point3<f32>, direction: Vector3<f32>) -> Self {
        Self::with_distance(origin, direction, default_distance())
    }

    /// Ray whose end is `origin + direction * distance`
    pub fn with_distance(origin: Point3<f32>, direction: Vector3<f32>, distance: f32) -> Self {
        Self {
            origin,
            direction,
            distance,
        }
    }

    /// Resolved end point
    pub fn end(&self) -> Point3<f32> {
        self.origin + self.direction * self.distance
    }
}

impl Wireframe for Ray {
    fn for_each_segment(&self, emit: &mut dyn FnMut(Segment)) {
        emit(Segment::new(self.origin, self.end()));
    }

    fn name(&self) -> &str {
        "Ray"
    }

    fn segment_count(&self) -> usize {
        1
    }
}

/// An open chain of points, connected in order
///
/// `n` points give `n - 1` segments; fewer than two points give none.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    pub points: Vec<Point3<f32>>,
}

impl Polyline {
    /// Create a polyline through `points`
    pub fn new(points: Vec<Point3<f32>>) -> Self {
        Self { points }
    }
}

impl Wireframe for Polyline {
    fn for_each_segment(&self, emit: &mut dyn FnMut(Segment)) {
        for pair in self.points.windows(2) {
            emit(Segment::new(pair[0], pair[1]));
        }
    }

    fn name(&self) -> &str {
        "Polyline"
    }

    fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }
}

/// Local corners of the unit cube, in corner-number order
///
/// Bottom face (y = -0.5) first, then the top face in the same order.
pub const UNIT_CUBE_CORNERS: [[f32; 3]; 8] = [
    [-0.5, -0.5, 0.5],
    [0.5, -0.5, 0.5],
    [0.5, -0.5, -0.5],
    [-0.5, -0.5, -0.5],
    [-0.5, 0.5, 0.5],
    [0.5, 0.5, 0.5],
    [0.5, 0.5, -0.5],
    [-0.5, 0.5, -0.5],
];

/// Box edges as corner-index pairs, in emission order
pub const BOX_EDGES: [(usize, usize); 12] = [
    // Bottom face
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 0),
    // Top face
    (4, 5),
    (5, 6),
    (6, 7),
    (7, 4),
    // Vertical edges
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
];

/// A unit cube mapped through a position/rotation/scale transform
///
/// Emits the 12 edges listed in `BOX_EDGES`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WireBox {
    #[serde(flatten)]
    pub transform: Transform,
}

impl WireBox {
    /// Create a box from a transform
    pub fn new(transform: Transform) -> Self {
        Self { transform }
    }

    /// Axis-aligned box with the given center and full size
    pub fn axis_aligned(center: Point3<f32>, size: Vector3<f32>) -> Self {
        Self::new(Transform::from_position(center).with_scale(size))
    }

    /// World-space corners, in corner-number order
    pub fn corners(&self) -> [Point3<f32>; 8] {
        UNIT_CUBE_CORNERS.map(|[x, y, z]| self.transform.transform_point(&Point3::new(x, y, z)))
    }
}

impl Wireframe for WireBox {
    fn for_each_segment(&self, emit: &mut dyn FnMut(Segment)) {
        let corners = self.corners();
        for &(a, b) in &BOX_EDGES {
            emit(Segment::new(corners[a], corners[b]));
        }
    }

    fn name(&self) -> &str {
        "Box"
    }

    fn segment_count(&self) -> usize {
        BOX_EDGES.len()
    }
}

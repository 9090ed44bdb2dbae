//! Wire circle - a closed loop around an arbitrary normal
//!
//! ## Parametric Equation
//! ```text
//! p(θ) = origin + left * r cos θ + up * r sin θ,   θ = 2π i / n
//! ```
//! where `(left, up)` is the perpendicular basis of `direction * radius`.

use std::f32::consts::TAU;

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

use super::traits::Wireframe;
use crate::geometry::{perpendicular_basis, Segment};

/// Segments per circle or arc when not specified
pub const DEFAULT_SEGMENTS: u32 = 32;

pub(crate) fn default_segments() -> u32 {
    DEFAULT_SEGMENTS
}

pub(crate) fn default_radius() -> f32 {
    1.0
}

/// A circle of `radius` around `origin`, facing `direction`
///
/// Emits `segments` segments; the last one ends exactly where the first
/// one starts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WireCircle {
    pub origin: Point3<f32>,
    /// Circle normal
    pub direction: Vector3<f32>,
    #[serde(default = "default_radius")]
    pub radius: f32,
    #[serde(default = "default_segments")]
    pub segments: u32,
}

impl WireCircle {
    /// Circle with the default 32 segments
    pub fn new(origin: Point3<f32>, direction: Vector3<f32>, radius: f32) -> Self {
        Self::with_segments(origin, direction, radius, DEFAULT_SEGMENTS)
    }

    /// Circle with a custom segment count
    pub fn with_segments(
        origin: Point3<f32>,
        direction: Vector3<f32>,
        radius: f32,
        segments: u32,
    ) -> Self {
        Self {
            origin,
            direction,
            radius,
            segments,
        }
    }

    fn count(&self) -> u32 {
        self.segments.max(1)
    }
}

impl Wireframe for WireCircle {
    fn for_each_segment(&self, emit: &mut dyn FnMut(Segment)) {
        let (left, up) = perpendicular_basis(&(self.direction * self.radius));
        let n = self.count();

        let point = |index: u32| {
            let theta = TAU * index as f32 / n as f32;
            let (sin, cos) = theta.sin_cos();
            self.origin + left * (self.radius * cos) + up * (self.radius * sin)
        };

        for index in 0..n {
            // Wrap the final index so the loop closes on the exact start point
            emit(Segment::new(point(index), point((index + 1) % n)));
        }
    }

    fn name(&self) -> &str {
        "Circle"
    }

    fn segment_count(&self) -> usize {
        self.count() as usize
    }
}

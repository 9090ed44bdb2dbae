//! Geometry primitives shared by every shape
//!
//! Points and vectors are plain `nalgebra` types. This module adds the
//! two value types the decomposition works with (`Segment` and
//! `Transform`) and the perpendicular basis helper used by circles and
//! arrows.
//!
//! ## Coordinate System
//!
//! Right-handed, Y up:
//! - X: Right
//! - Y: Up
//! - Z: Towards viewer

use nalgebra::{Matrix4, Point3, Quaternion, UnitQuaternion, Vector3};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Length below which a basis vector is treated as zero
pub const BASIS_EPSILON: f32 = 1.0e-6;

/// One drawable line, from `start` to `end`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point3<f32>,
    pub end: Point3<f32>,
}

impl Segment {
    /// Create a segment between two points
    pub fn new(start: Point3<f32>, end: Point3<f32>) -> Self {
        Self { start, end }
    }

    /// Length of the segment
    pub fn length(&self) -> f32 {
        (self.end - self.start).norm()
    }

    /// Whether start and end coincide
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// Whether both endpoints are finite
    pub fn is_finite(&self) -> bool {
        self.start.coords.iter().chain(self.end.coords.iter()).all(|c| c.is_finite())
    }
}

/// Position, rotation and per-axis scale
///
/// Applied as translate · rotate · scale, so a point is scaled first,
/// then rotated, then moved to `position`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transform {
    pub position: Point3<f32>,
    /// Stored as `[i, j, k, w]`; any non-zero quaternion is normalized on load
    #[serde(deserialize_with = "deserialize_rotation")]
    pub rotation: UnitQuaternion<f32>,
    pub scale: Vector3<f32>,
}

fn deserialize_rotation<'de, D>(deserializer: D) -> Result<UnitQuaternion<f32>, D::Error>
where
    D: Deserializer<'de>,
{
    let quaternion = Quaternion::<f32>::deserialize(deserializer)?;
    UnitQuaternion::try_new(quaternion, BASIS_EPSILON)
        .ok_or_else(|| D::Error::custom("rotation quaternion has zero length"))
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Point3::origin(),
            rotation: UnitQuaternion::identity(),
            scale: Vector3::repeat(1.0),
        }
    }
}

impl Transform {
    /// Create a transform from its three parts
    pub fn new(position: Point3<f32>, rotation: UnitQuaternion<f32>, scale: Vector3<f32>) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    /// Unrotated, unscaled transform at `position`
    pub fn from_position(position: Point3<f32>) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Set the rotation (builder pattern)
    pub fn with_rotation(mut self, rotation: UnitQuaternion<f32>) -> Self {
        self.rotation = rotation;
        self
    }

    /// Set the scale (builder pattern)
    pub fn with_scale(mut self, scale: Vector3<f32>) -> Self {
        self.scale = scale;
        self
    }

    /// Homogeneous TRS matrix
    pub fn matrix(&self) -> Matrix4<f32> {
        Matrix4::new_translation(&self.position.coords)
            * self.rotation.to_homogeneous()
            * Matrix4::new_nonuniform_scaling(&self.scale)
    }

    /// Map a local point into world space
    pub fn transform_point(&self, point: &Point3<f32>) -> Point3<f32> {
        self.position + self.rotation * point.coords.component_mul(&self.scale)
    }
}

/// Two unit vectors spanning the plane perpendicular to `direction`
///
/// Returns `(left, up)` where `left = normalize(direction × Y)` and
/// `up = normalize(left × direction)`. When `direction` is zero or
/// parallel to world up the cross product vanishes; the fixed basis
/// `(-X, +Z)` is returned instead so callers never see NaN.
pub fn perpendicular_basis(direction: &Vector3<f32>) -> (Vector3<f32>, Vector3<f32>) {
    let fallback = (-Vector3::x(), Vector3::z());

    let Some(left) = direction.cross(&Vector3::y()).try_normalize(BASIS_EPSILON) else {
        log::trace!("degenerate basis for direction {:?}, using fallback", direction);
        return fallback;
    };

    match left.cross(direction).try_normalize(BASIS_EPSILON) {
        Some(up) => (left, up),
        None => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn close(a: &Point3<f32>, b: &Point3<f32>) -> bool {
        (a - b).norm() < 1.0e-5
    }

    #[test]
    fn test_identity_transform() {
        let t = Transform::default();
        let p = Point3::new(0.5, -0.5, 0.5);
        assert!(close(&t.transform_point(&p), &p));
    }

    #[test]
    fn test_transform_matches_matrix() {
        let t = Transform::new(
            Point3::new(1.0, 2.0, 3.0),
            UnitQuaternion::from_euler_angles(0.3, 0.7, -1.1),
            Vector3::new(2.0, 0.5, 3.0),
        );
        let p = Point3::new(-0.5, 0.5, 0.5);
        let via_matrix = t.matrix().transform_point(&p);
        assert!(close(&t.transform_point(&p), &via_matrix));
    }

    #[test]
    fn test_transform_order_scale_then_rotate() {
        // Scale X by 2, then rotate 90° about Y: local +X ends up on -Z
        let t = Transform::default()
            .with_scale(Vector3::new(2.0, 1.0, 1.0))
            .with_rotation(UnitQuaternion::from_axis_angle(&Vector3::y_axis(), FRAC_PI_2));
        let p = t.transform_point(&Point3::new(1.0, 0.0, 0.0));
        assert!(close(&p, &Point3::new(0.0, 0.0, -2.0)));
    }

    #[test]
    fn test_rotation_normalized_on_load() {
        let t: Transform = serde_json::from_str(r#"{ "rotation": [0.0, 2.0, 0.0, 2.0] }"#).unwrap();
        assert!((t.rotation.quaternion().norm() - 1.0).abs() < 1.0e-6);

        let p = t.transform_point(&Point3::new(-0.5, -0.5, 0.5));
        assert!(close(&p, &Point3::new(0.5, -0.5, 0.5)));
    }

    #[test]
    fn test_zero_rotation_rejected() {
        let result = serde_json::from_str::<Transform>(r#"{ "rotation": [0.0, 0.0, 0.0, 0.0] }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_basis_is_orthonormal() {
        let dir = Vector3::new(1.0, 2.0, -0.5);
        let (left, up) = perpendicular_basis(&dir);
        assert!((left.norm() - 1.0).abs() < 1.0e-5);
        assert!((up.norm() - 1.0).abs() < 1.0e-5);
        assert!(left.dot(&up).abs() < 1.0e-5);
        assert!(left.dot(&dir).abs() < 1.0e-5);
        assert!(up.dot(&dir).abs() < 1.0e-5);
    }

    #[test]
    fn test_basis_fallback() {
        for dir in [Vector3::y(), -Vector3::y() * 3.0, Vector3::zeros()] {
            let (left, up) = perpendicular_basis(&dir);
            assert_eq!(left, -Vector3::x());
            assert_eq!(up, Vector3::z());
        }
    }

    #[test]
    fn test_segment_helpers() {
        let s = Segment::new(Point3::origin(), Point3::new(3.0, 4.0, 0.0));
        assert!((s.length() - 5.0).abs() < 1.0e-6);
        assert!(!s.is_degenerate());
        assert!(s.is_finite());
        assert!(Segment::new(Point3::origin(), Point3::origin()).is_degenerate());
    }
}

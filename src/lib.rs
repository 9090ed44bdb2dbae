//! wire-gizmo - debug wireframe gizmos
//!
//! Turns debug shapes (lines, rays, boxes, wire spheres, circles, arcs,
//! arrows) into ordered line segments and hands them, one at a time, to
//! an immediate-mode line renderer.
//!
//! ## Layout
//! - `geometry`: `Segment`, `Transform` and the perpendicular basis helper
//! - `shapes`: the `Wireframe` trait and every shape
//! - `sink`: the `LineSink` trait plus collecting, timed and logging sinks
//!
//! ## Example
//!
//! ```
//! use nalgebra::{Point3, Vector3};
//! use wire_gizmo::shapes::{WireCircle, Wireframe};
//! use wire_gizmo::sink::{Color, LineList, LineStyle};
//!
//! let mut lines = LineList::new();
//! let circle = WireCircle::new(Point3::origin(), Vector3::y(), 2.0);
//! circle.draw(&mut lines, &LineStyle::new(Color::YELLOW));
//!
//! assert_eq!(lines.len(), 32);
//! ```

pub mod geometry;
pub mod shapes;
pub mod sink;

pub use geometry::{Segment, Transform};
pub use shapes::{decompose, draw, ShapeParams, Wireframe};
pub use sink::{Color, LineSink, LineStyle};

//! Sink module - where decomposed segments go
//!
//! This module provides:
//! - `LineSink` trait, the one seam between shapes and a renderer
//! - `LineStyle` and `Color`, the per-call presentation parameters
//! - Collecting sinks: `Vec<Segment>`, `LineList`
//! - `DebugLines` timed store and its thread-safe handle `SharedLines`
//! - `LogSink` and the `Gated` wrapper for debug-only drawing

mod buffer;
mod lines;

pub use buffer::SharedLines;
pub use lines::{DebugLine, DebugLines, LineList};

use serde::{Deserialize, Serialize};

use crate::geometry::Segment;

/// RGBA color, each channel in [0, 1]
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    #[serde(default = "opaque")]
    pub a: f32,
}

fn opaque() -> f32 {
    1.0
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const YELLOW: Color = Color::rgb(1.0, 0.92, 0.016);
    pub const CYAN: Color = Color::rgb(0.0, 1.0, 1.0);
    pub const MAGENTA: Color = Color::rgb(1.0, 0.0, 1.0);

    /// Opaque color
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Color with explicit alpha
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Channels as 8-bit values (clamped)
    pub fn to_rgba8(&self) -> [u8; 4] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// How a segment should be presented
///
/// The core never interprets these fields; they are handed to the sink
/// untouched alongside every segment.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineStyle {
    /// Line color
    pub color: Color,
    /// Lifetime in seconds (0 = a single frame)
    pub duration: f32,
    /// Whether the line is hidden behind closer geometry
    pub depth_test: bool,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            duration: 0.0,
            depth_test: true,
        }
    }
}

impl LineStyle {
    /// Single-frame, depth-tested line of the given color
    pub fn new(color: Color) -> Self {
        Self {
            color,
            ..Default::default()
        }
    }

    /// Set the lifetime (builder pattern)
    pub fn with_duration(mut self, duration: f32) -> Self {
        self.duration = duration;
        self
    }

    /// Set depth testing (builder pattern)
    pub fn with_depth_test(mut self, depth_test: bool) -> Self {
        self.depth_test = depth_test;
        self
    }
}

/// Receiver of decomposed line segments
///
/// Shapes call `draw_line` once per segment, in decomposition order.
/// Presentation (color, lifetime, depth testing) is entirely up to the
/// implementor.
pub trait LineSink {
    /// Accept one segment
    fn draw_line(&mut self, segment: Segment, style: &LineStyle);
}

impl<S: LineSink + ?Sized> LineSink for &mut S {
    fn draw_line(&mut self, segment: Segment, style: &LineStyle) {
        (**self).draw_line(segment, style);
    }
}

impl<S: LineSink + ?Sized> LineSink for Box<S> {
    fn draw_line(&mut self, segment: Segment, style: &LineStyle) {
        (**self).draw_line(segment, style);
    }
}

/// Plain segment collector; style is dropped
impl LineSink for Vec<Segment> {
    fn draw_line(&mut self, segment: Segment, _style: &LineStyle) {
        self.push(segment);
    }
}

/// Sink that writes every segment to the `log` facade at debug level
#[derive(Clone, Debug)]
pub struct LogSink {
    target: String,
    count: usize,
}

impl LogSink {
    /// Create a log sink writing under the given log target
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            count: 0,
        }
    }

    /// Number of segments logged so far
    pub fn count(&self) -> usize {
        self.count
    }
}

impl Default for LogSink {
    fn default() -> Self {
        Self::new("wire_gizmo::lines")
    }
}

impl LineSink for LogSink {
    fn draw_line(&mut self, segment: Segment, style: &LineStyle) {
        self.count += 1;
        log::debug!(
            target: self.target.as_str(),
            "line ({:.3}, {:.3}, {:.3}) -> ({:.3}, {:.3}, {:.3}) color={:?} duration={} depth_test={}",
            segment.start.x,
            segment.start.y,
            segment.start.z,
            segment.end.x,
            segment.end.y,
            segment.end.z,
            style.color.to_rgba8(),
            style.duration,
            style.depth_test
        );
    }
}

/// Sink wrapper that only forwards while enabled
///
/// `Gated::new` follows `debug_assertions`: release builds drop every line.
pub struct Gated<S> {
    inner: S,
    enabled: bool,
}

impl<S: LineSink> Gated<S> {
    /// Wrap a sink, enabled in debug builds only
    pub fn new(inner: S) -> Self {
        Self::with_enabled(inner, cfg!(debug_assertions))
    }

    /// Wrap a sink with an explicit enabled state
    pub fn with_enabled(inner: S, enabled: bool) -> Self {
        Self { inner, enabled }
    }

    /// Whether lines are currently forwarded
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Toggle forwarding
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Get a reference to the wrapped sink
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Unwrap the inner sink
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: LineSink> LineSink for Gated<S> {
    fn draw_line(&mut self, segment: Segment, style: &LineStyle) {
        if self.enabled {
            self.inner.draw_line(segment, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    fn unit_x() -> Segment {
        Segment::new(Point3::origin(), Point3::new(1.0, 0.0, 0.0))
    }

    #[test]
    fn test_vec_sink_collects_in_order() {
        let mut sink: Vec<Segment> = Vec::new();
        let style = LineStyle::default();
        sink.draw_line(unit_x(), &style);
        sink.draw_line(Segment::new(Point3::new(1.0, 0.0, 0.0), Point3::origin()), &style);

        assert_eq!(sink.len(), 2);
        assert_eq!(sink[0], unit_x());
    }

    #[test]
    fn test_gated_drops_when_disabled() {
        let mut gated = Gated::with_enabled(Vec::<Segment>::new(), false);
        gated.draw_line(unit_x(), &LineStyle::default());
        assert!(gated.inner().is_empty());

        gated.set_enabled(true);
        gated.draw_line(unit_x(), &LineStyle::default());
        assert_eq!(gated.into_inner().len(), 1);
    }

    #[test]
    fn test_gated_default_follows_build() {
        let gated = Gated::new(Vec::<Segment>::new());
        assert_eq!(gated.is_enabled(), cfg!(debug_assertions));
    }

    #[test]
    fn test_log_sink_counts() {
        let mut sink = LogSink::default();
        sink.draw_line(unit_x(), &LineStyle::new(Color::RED));
        sink.draw_line(unit_x(), &LineStyle::new(Color::GREEN));
        assert_eq!(sink.count(), 2);
    }

    #[test]
    fn test_color_to_rgba8() {
        assert_eq!(Color::RED.to_rgba8(), [255, 0, 0, 255]);
        assert_eq!(Color::rgba(2.0, -1.0, 0.5, 0.0).to_rgba8(), [255, 0, 128, 0]);
    }

    #[test]
    fn test_color_alpha_defaults_to_opaque() {
        let color: Color = serde_json::from_str(r#"{ "r": 1.0, "g": 0.0, "b": 1.0 }"#).unwrap();
        assert_eq!(color, Color::MAGENTA);
    }

    #[test]
    fn test_style_builders() {
        let style = LineStyle::new(Color::CYAN).with_duration(2.5).with_depth_test(false);
        assert_eq!(style.color, Color::CYAN);
        assert_eq!(style.duration, 2.5);
        assert!(!style.depth_test);
    }
}

//! Line stores - collecting and timed sinks
//!
//! `LineList` keeps every segment it receives together with its style.
//! `DebugLines` does the same but treats `LineStyle::duration` as a
//! lifetime, the way an engine's immediate debug-line facility does:
//! lines survive until `advance` has consumed their duration, and a
//! zero-duration line is presented for exactly one frame.

use std::collections::VecDeque;

use super::{LineSink, LineStyle};
use crate::geometry::Segment;

/// A segment together with its presentation style
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DebugLine {
    pub segment: Segment,
    pub style: LineStyle,
}

/// Collects styled segments in submission order
#[derive(Clone, Debug, Default)]
pub struct LineList {
    lines: Vec<DebugLine>,
}

impl LineList {
    /// Create an empty list
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Number of collected lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if nothing was collected
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Collected lines in submission order
    pub fn lines(&self) -> &[DebugLine] {
        &self.lines
    }

    /// Segments only, in submission order
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.lines.iter().map(|line| line.segment)
    }

    /// Remove all lines
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl LineSink for LineList {
    fn draw_line(&mut self, segment: Segment, style: &LineStyle) {
        self.lines.push(DebugLine {
            segment,
            style: *style,
        });
    }
}

/// A stored line and the lifetime it has left
#[derive(Clone, Copy, Debug)]
struct TimedLine {
    line: DebugLine,
    /// Seconds left before expiry
    remaining: f32,
}

/// Timed line store
///
/// Lines are added through `LineSink` and stay visible until their
/// duration has elapsed. Call `advance` once per frame, after presenting.
///
/// ## Example
///
/// ```
/// use wire_gizmo::sink::{DebugLines, LineSink, LineStyle};
/// use wire_gizmo::geometry::Segment;
/// use nalgebra::Point3;
///
/// let mut lines = DebugLines::new();
/// let seg = Segment::new(Point3::origin(), Point3::new(1.0, 0.0, 0.0));
/// lines.draw_line(seg, &LineStyle::default().with_duration(0.5));
///
/// lines.advance(0.25);
/// assert_eq!(lines.len(), 1);
/// lines.advance(0.25);
/// assert!(lines.is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct DebugLines {
    lines: VecDeque<TimedLine>,
    /// Upper bound on stored lines; oldest are dropped first
    capacity: usize,
}

impl Default for DebugLines {
    fn default() -> Self {
        Self::new()
    }
}

impl DebugLines {
    /// Default upper bound on stored lines
    pub const DEFAULT_CAPACITY: usize = 65_536;

    /// Create an empty store with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Create an empty store holding at most `capacity` lines
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            lines: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    /// Number of live lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if no line is live
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Live lines, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &DebugLine> {
        self.lines.iter().map(|timed| &timed.line)
    }

    /// Copy of the live lines, oldest first
    pub fn snapshot(&self) -> Vec<DebugLine> {
        self.iter().copied().collect()
    }

    /// Age every line by `dt` seconds and drop the expired ones
    ///
    /// A line whose remaining lifetime reaches zero is removed, so a
    /// zero-duration line survives until the first `advance` after it was
    /// drawn.
    pub fn advance(&mut self, dt: f32) {
        let dt = dt.max(0.0);
        self.lines.retain_mut(|timed| {
            timed.remaining -= dt;
            timed.remaining > 0.0
        });
    }

    /// Remove all lines
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl LineSink for DebugLines {
    fn draw_line(&mut self, segment: Segment, style: &LineStyle) {
        if !segment.is_finite() {
            log::warn!("dropping non-finite line {:?}", segment);
            return;
        }

        self.lines.push_back(TimedLine {
            line: DebugLine {
                segment,
                style: *style,
            },
            remaining: style.duration.max(0.0),
        });

        while self.lines.len() > self.capacity {
            self.lines.pop_front();
        }
    }
}

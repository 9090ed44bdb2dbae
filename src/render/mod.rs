//! Render module - UI components for presenting debug lines
//!
//! This module provides:
//! - Orbit camera with near-plane clipping
//! - 3D viewport widget drawing debug lines with egui

mod camera;
mod viewport;

pub use viewport::Viewport;

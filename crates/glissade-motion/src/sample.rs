//! Timestamped drag samples.
//!
//! One sample is produced per gesture-update event and never mutated; all
//! derived kinematics are computed from pairs of consecutive samples.

use glissade_ui_graphics::Point;

/// A 1D drag sample: translation along the control's axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSample1D {
    /// Event timestamp in milliseconds.
    pub time_ms: u64,
    /// Raw translation since the gesture started.
    pub translation: f32,
    /// Where the gesture started, along the same axis.
    pub start_location: f32,
}

/// A 2D drag sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSample2D {
    /// Event timestamp in milliseconds.
    pub time_ms: u64,
    /// Raw translation since the gesture started.
    pub translation: Point,
    /// Where the gesture started.
    pub start_location: Point,
}

//! Finite-difference kinematics over drag samples.
//!
//! Velocity is `Δtranslation/Δt` between consecutive samples, acceleration
//! `Δvelocity/Δt`, both in units per second. A gesture's first sample has
//! no derivative: with no previous state the estimators return zero. The
//! same defined-zero policy applies when two events carry identical
//! timestamps, so no code path ever divides by a zero Δt.

use crate::{DragSample1D, DragSample2D};
use glissade_ui_graphics::Point;

/// Derived state of a 1D drag at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KinematicState1D {
    pub time_ms: u64,
    pub translation: f32,
    pub start_location: f32,
    /// Units per second.
    pub velocity: f32,
}

/// Derived state of a 2D drag at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KinematicState2D {
    pub time_ms: u64,
    pub translation: Point,
    pub start_location: Point,
    /// Units per second, per axis.
    pub velocity: Point,
    /// Units per second squared, per axis.
    pub acceleration: Point,
}

fn delta_seconds(prev_time_ms: u64, time_ms: u64) -> Option<f32> {
    let dt_ms = time_ms.saturating_sub(prev_time_ms);
    if dt_ms == 0 {
        None
    } else {
        Some(dt_ms as f32 / 1000.0)
    }
}

/// Instantaneous 1D velocity from the previous derived state and a new
/// sample. Zero when there is no previous state or Δt is zero.
pub fn estimate_velocity_1d(prev: Option<&KinematicState1D>, sample: &DragSample1D) -> f32 {
    let Some(prev) = prev else { return 0.0 };
    match delta_seconds(prev.time_ms, sample.time_ms) {
        Some(dt) => (sample.translation - prev.translation) / dt,
        None => 0.0,
    }
}

/// Instantaneous 2D velocity. Zero vector when there is no previous state
/// or Δt is zero.
pub fn estimate_velocity_2d(prev: Option<&KinematicState2D>, sample: &DragSample2D) -> Point {
    let Some(prev) = prev else { return Point::ZERO };
    match delta_seconds(prev.time_ms, sample.time_ms) {
        Some(dt) => Point::new(
            (sample.translation.x - prev.translation.x) / dt,
            (sample.translation.y - prev.translation.y) / dt,
        ),
        None => Point::ZERO,
    }
}

/// Instantaneous 2D acceleration from the previous derived state and a
/// freshly estimated velocity.
pub fn estimate_acceleration_2d(
    prev: Option<&KinematicState2D>,
    velocity: Point,
    time_ms: u64,
) -> Point {
    let Some(prev) = prev else { return Point::ZERO };
    match delta_seconds(prev.time_ms, time_ms) {
        Some(dt) => Point::new(
            (velocity.x - prev.velocity.x) / dt,
            (velocity.y - prev.velocity.y) / dt,
        ),
        None => Point::ZERO,
    }
}

impl KinematicState1D {
    /// Derives the full state for a new sample given the previous state of
    /// the same gesture, recomputed whole on every event.
    pub fn derive(prev: Option<&KinematicState1D>, sample: DragSample1D) -> Self {
        Self {
            time_ms: sample.time_ms,
            translation: sample.translation,
            start_location: sample.start_location,
            velocity: estimate_velocity_1d(prev, &sample),
        }
    }
}

impl KinematicState2D {
    pub fn derive(prev: Option<&KinematicState2D>, sample: DragSample2D) -> Self {
        let velocity = estimate_velocity_2d(prev, &sample);
        Self {
            time_ms: sample.time_ms,
            translation: sample.translation,
            start_location: sample.start_location,
            velocity,
            acceleration: estimate_acceleration_2d(prev, velocity, sample.time_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_sample_has_zero_derivatives() {
        let state = KinematicState2D::derive(
            None,
            DragSample2D {
                time_ms: 100,
                translation: Point::new(40.0, -12.0),
                start_location: Point::ZERO,
            },
        );
        assert_eq!(state.velocity, Point::ZERO);
        assert_eq!(state.acceleration, Point::ZERO);
    }

    #[test]
    fn test_constant_velocity_1d() {
        let first = KinematicState1D::derive(
            None,
            DragSample1D {
                time_ms: 0,
                translation: 0.0,
                start_location: 10.0,
            },
        );
        let second = KinematicState1D::derive(
            Some(&first),
            DragSample1D {
                time_ms: 10,
                translation: 1.0,
                start_location: 10.0,
            },
        );
        // 1 unit per 10ms = 100 units/sec.
        assert!((second.velocity - 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_zero_dt_yields_zero_velocity() {
        let first = KinematicState1D::derive(
            None,
            DragSample1D {
                time_ms: 50,
                translation: 0.0,
                start_location: 0.0,
            },
        );
        let second = KinematicState1D::derive(
            Some(&first),
            DragSample1D {
                time_ms: 50,
                translation: 999.0,
                start_location: 0.0,
            },
        );
        assert_eq!(second.velocity, 0.0);
    }

    #[test]
    fn test_acceleration_tracks_velocity_change() {
        let first = KinematicState2D::derive(
            None,
            DragSample2D {
                time_ms: 0,
                translation: Point::ZERO,
                start_location: Point::ZERO,
            },
        );
        let second = KinematicState2D::derive(
            Some(&first),
            DragSample2D {
                time_ms: 100,
                translation: Point::new(10.0, 0.0),
                start_location: Point::ZERO,
            },
        );
        let third = KinematicState2D::derive(
            Some(&second),
            DragSample2D {
                time_ms: 200,
                translation: Point::new(30.0, 0.0),
                start_location: Point::ZERO,
            },
        );
        // Velocity went 100 -> 200 units/sec over 0.1s.
        assert!((third.velocity.x - 200.0).abs() < 1e-3);
        assert!((third.acceleration.x - 1000.0).abs() < 1e-2);
    }
}

//! Inertial coasting for overflow-style tracks.
//!
//! An overflow slider has a fixed frame, a draggable thumb, and a movable
//! track behind it. Both gestures feed one shared velocity accumulator: a
//! thrown track transfers its trailing velocity as an impulse, and a thumb
//! held past its displacement bounds pumps velocity in proportion to the
//! overshoot. A fixed-period tick then displaces the track by the current
//! velocity, decays it toward rest, and republishes the bound value.

use crate::motion_constants::{TICK_PERIOD_MS, VELOCITY_DECAY, VELOCITY_REST_THRESHOLD};
use crate::BoundedValue;
use log::trace;

/// Physical layout of an overflow slider, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoastingGeometry {
    /// Width of the control's fixed frame.
    pub frame_width: f32,
    /// Width of the thumb; the thumb's travel is `frame_width - thumb_width`.
    pub thumb_width: f32,
}

impl CoastingGeometry {
    pub fn travel(&self) -> f32 {
        self.frame_width - self.thumb_width
    }

    /// The window the track's resting offset may occupy, so the visible
    /// content cannot coast arbitrarily far from the value range's span.
    pub fn offset_window(&self, min: f64, max: f64) -> (f32, f32) {
        let half = self.frame_width / 2.0;
        (-(max as f32) + half, -(min as f32) + half)
    }
}

/// State owned by the inertial coasting engine.
///
/// Created with the widget, mutated only by the tick and the drag
/// callbacks, never reset: it decays asymptotically to rest.
#[derive(Clone, Copy, Debug)]
pub struct CoastingTrack {
    /// Committed thumb position as a fraction of its travel, in `[0, 1]`.
    thumb_offset: f32,
    /// In-progress thumb drag, same units; zero while the thumb is idle.
    thumb_drag_delta: f32,
    /// Committed track displacement in pixels.
    track_offset: f32,
    /// In-progress track drag in pixels.
    track_drag_delta: f32,
    /// Trailing velocity of the active track gesture, transferred as an
    /// impulse on release.
    track_drag_velocity: f32,
    track_dragging: bool,
    /// The shared flywheel, in pixels per second.
    velocity: f32,
}

impl Default for CoastingTrack {
    fn default() -> Self {
        Self::new()
    }
}

impl CoastingTrack {
    pub fn new() -> Self {
        Self {
            thumb_offset: 0.5,
            thumb_drag_delta: 0.0,
            track_offset: 0.0,
            track_drag_delta: 0.0,
            track_drag_velocity: 0.0,
            track_dragging: false,
            velocity: 0.0,
        }
    }

    /// Thumb position including any in-progress drag, unclamped. Values
    /// outside `[0, 1]` are overshoot and feed the velocity accumulator.
    pub fn thumb_position(&self) -> f32 {
        self.thumb_offset + self.thumb_drag_delta
    }

    /// Thumb position clamped for display.
    pub fn thumb_fraction(&self) -> f32 {
        self.thumb_position().clamp(0.0, 1.0)
    }

    pub fn thumb_is_active(&self) -> bool {
        self.thumb_drag_delta != 0.0
    }

    pub fn thumb_at_limit(&self) -> bool {
        let pos = self.thumb_position();
        pos <= 0.0 || pos >= 1.0
    }

    pub fn track_is_active(&self) -> bool {
        self.track_dragging
    }

    pub fn track_at_limit(&self, geometry: &CoastingGeometry, min: f64, max: f64) -> bool {
        let (low, high) = geometry.offset_window(min, max);
        let offset = self.track_drag_delta + self.track_offset;
        offset <= low || offset >= high
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Track displacement to render at, clamped into the legal window.
    pub fn track_display_offset(&self, geometry: &CoastingGeometry, min: f64, max: f64) -> f32 {
        let (low, high) = geometry.offset_window(min, max);
        (self.track_drag_delta + self.track_offset).clamp(low, high)
    }

    /// Positions the committed offsets so the combined thumb/track state
    /// reproduces `value`. Called once when the widget learns its geometry.
    pub fn align_to_value(&mut self, value: f64, geometry: &CoastingGeometry) {
        self.track_offset = -(value as f32 - geometry.travel() * self.thumb_position());
    }

    /// A thumb gesture moved; `delta_fraction` is the translation divided
    /// by the frame width.
    pub fn thumb_drag_changed(&mut self, delta_fraction: f32) {
        self.thumb_drag_delta = delta_fraction;
    }

    /// The thumb was released: commit the in-progress delta, clamped.
    pub fn thumb_drag_ended(&mut self) {
        self.thumb_offset = (self.thumb_offset + self.thumb_drag_delta).clamp(0.0, 1.0);
        self.thumb_drag_delta = 0.0;
    }

    /// A track gesture moved; translation in pixels, trailing velocity in
    /// pixels per second.
    pub fn track_drag_changed(&mut self, translation: f32, velocity: f32) {
        self.track_dragging = true;
        self.track_drag_delta = translation;
        self.track_drag_velocity = velocity;
    }

    /// The track was released: impulse-transfer the gesture velocity into
    /// the flywheel and commit the offset into the legal window.
    ///
    /// The flywheel's positive direction raises the value, so a throw that
    /// raised the value while dragging (negative translation) transfers as
    /// a positive impulse.
    pub fn track_drag_ended(&mut self, geometry: &CoastingGeometry, min: f64, max: f64) {
        self.velocity -= self.track_drag_velocity;
        self.track_offset += self.track_drag_delta;
        let (low, high) = geometry.offset_window(min, max);
        self.track_offset = self.track_offset.clamp(low, high);
        self.track_drag_delta = 0.0;
        self.track_drag_velocity = 0.0;
        self.track_dragging = false;
        trace!("track released, flywheel velocity {}", self.velocity);
    }

    /// One fixed-period tick: read the current state once, write each field
    /// once, republish the value.
    pub fn tick(&mut self, geometry: &CoastingGeometry, value: &mut BoundedValue) {
        // Freeze at the range bounds and below the rest threshold; decay
        // alone never reaches zero.
        if value.at_bound() || self.velocity.abs() < VELOCITY_REST_THRESHOLD {
            self.velocity = 0.0;
        }

        // Velocity displaces the track only while no finger holds it.
        if !self.track_dragging {
            self.track_offset -= self.velocity * (TICK_PERIOD_MS as f32 / 1000.0);
        }

        // Thumb overshoot pumps the flywheel; otherwise it decays.
        let position = self.thumb_position();
        if self.thumb_drag_delta != 0.0 {
            if position > 1.0 {
                self.velocity += position;
            } else if position < 0.0 {
                self.velocity -= 1.0 - position;
            } else {
                self.velocity *= VELOCITY_DECAY;
            }
        } else {
            self.velocity *= VELOCITY_DECAY;
        }

        let raw =
            -(self.track_drag_delta + self.track_offset) + geometry.travel() * position;
        value.set(raw as f64);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mid_slider() -> (CoastingTrack, CoastingGeometry, BoundedValue) {
        let geometry = CoastingGeometry {
            frame_width: 100.0,
            thumb_width: 20.0,
        };
        let mut track = CoastingTrack::new();
        let mut value = BoundedValue::new(500.0, 0.0, 1000.0);
        track.align_to_value(value.current(), &geometry);
        track.tick(&geometry, &mut value);
        assert_eq!(value.current(), 500.0);
        (track, geometry, value)
    }

    #[test]
    fn test_decay_converges_and_freezes() {
        let (mut track, geometry, mut value) = mid_slider();
        track.velocity = 100.0;

        let mut ticks_to_rest = None;
        for i in 0..400 {
            track.tick(&geometry, &mut value);
            if track.velocity() == 0.0 {
                ticks_to_rest = Some(i + 1);
                break;
            }
        }
        let ticks = ticks_to_rest.expect("velocity never froze");
        // ln(100)/ln(1/0.97) is about 152 ticks.
        assert!((140..=170).contains(&ticks), "froze after {} ticks", ticks);
        assert_eq!(track.velocity(), 0.0);
    }

    #[test]
    fn test_thumb_overshoot_pumps_velocity() {
        let (mut track, geometry, mut value) = mid_slider();
        track.thumb_drag_changed(0.7); // position 1.2, pinned past the end

        let mut samples = Vec::new();
        for _ in 0..5 {
            track.tick(&geometry, &mut value);
            samples.push(track.velocity());
        }
        for pair in samples.windows(2) {
            assert!(
                pair[1] > pair[0],
                "velocity should grow every tick: {:?}",
                samples
            );
        }
        assert!((samples[0] - 1.2).abs() < 1e-3);
    }

    #[test]
    fn test_negative_overshoot_pumps_backwards() {
        let (mut track, geometry, mut value) = mid_slider();
        track.thumb_drag_changed(-0.8); // position -0.3
        track.tick(&geometry, &mut value);
        assert!(track.velocity() < 0.0);
    }

    #[test]
    fn test_velocity_freezes_at_range_bound() {
        let geometry = CoastingGeometry {
            frame_width: 100.0,
            thumb_width: 20.0,
        };
        let mut track = CoastingTrack::new();
        let mut value = BoundedValue::new(0.0, 0.0, 1000.0);
        track.velocity = 500.0;
        track.tick(&geometry, &mut value);
        assert_eq!(track.velocity(), 0.0);
    }

    #[test]
    fn test_track_release_transfers_impulse_and_clamps_offset() {
        let (mut track, geometry, _value) = mid_slider();
        track.track_drag_changed(1e6, 250.0);
        assert!(track.track_is_active());

        track.track_drag_ended(&geometry, 0.0, 1000.0);
        assert!(!track.track_is_active());
        assert_eq!(track.velocity(), -250.0);
        let (low, high) = geometry.offset_window(0.0, 1000.0);
        assert!(track.track_offset >= low && track.track_offset <= high);
    }

    #[test]
    fn test_coasting_continues_the_throw() {
        let (mut track, geometry, mut value) = mid_slider();
        // A leftward throw raised the value while dragging.
        track.track_drag_changed(-20.0, -200.0);
        track.track_drag_ended(&geometry, 0.0, 1000.0);
        assert_eq!(track.velocity(), 200.0);

        let before = value.current();
        track.tick(&geometry, &mut value);
        assert!(value.current() > before);
    }

    #[test]
    fn test_thumb_release_commits_clamped() {
        let (mut track, _geometry, _value) = mid_slider();
        track.thumb_drag_changed(4.0);
        track.thumb_drag_ended();
        assert_eq!(track.thumb_position(), 1.0);
        track.thumb_drag_changed(-9.0);
        track.thumb_drag_ended();
        assert_eq!(track.thumb_position(), 0.0);
    }

    #[test]
    fn test_tick_is_inert_at_rest() {
        let (mut track, geometry, mut value) = mid_slider();
        for _ in 0..10 {
            track.tick(&geometry, &mut value);
        }
        assert_eq!(value.current(), 500.0);
        assert_eq!(track.velocity(), 0.0);
    }
}

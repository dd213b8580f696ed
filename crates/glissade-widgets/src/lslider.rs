//! Linear slider at an arbitrary orientation.

use std::rc::Rc;

use glissade_motion::{percent_for_value, value_for_percent, LimitNotifier};
use glissade_ui_graphics::{
    line_rect_intersection, segment_parameter, Angle, Color, Point, Rect, Size, Visual,
};

use crate::{Binding, DragEvent, Haptics, NoHaptics};

/// Half-length of the synthetic track line used to intersect the frame.
/// Large enough that the track always crosses any reasonable frame.
const TRACK_HALF_LENGTH: f32 = 5e7;

/// Snapshot handed to the style each time the slider needs drawing.
#[derive(Clone, Copy, Debug)]
pub struct LSliderConfiguration {
    pub is_disabled: bool,
    pub is_active: bool,
    /// Fraction of the track between the lower endpoint and the thumb.
    pub pct_fill: f64,
    pub value: f64,
    pub angle: Angle,
    pub min: f64,
    pub max: f64,
}

/// Turns an [`LSliderConfiguration`] into drawable elements.
pub trait LSliderStyle {
    type Element;

    fn make_track(&self, configuration: &LSliderConfiguration) -> Self::Element;
    fn make_thumb(&self, configuration: &LSliderConfiguration) -> Self::Element;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultLSliderStyle;

impl LSliderStyle for DefaultLSliderStyle {
    type Element = Visual;

    fn make_track(&self, configuration: &LSliderConfiguration) -> Visual {
        Visual::Line {
            angle: configuration.angle,
            trim: configuration.pct_fill as f32,
            stroke: Color::GRAY.with_alpha(0.4),
            line_width: 8.0,
        }
    }

    fn make_thumb(&self, configuration: &LSliderConfiguration) -> Visual {
        Visual::Circle {
            radius: Some(20.0),
            fill: if configuration.is_active {
                Color::YELLOW
            } else {
                Color::WHITE
            },
        }
    }
}

/// A slider whose track runs through the center of its frame at a fixed
/// angle. The drag location is projected onto the track segment; travel
/// perpendicular to the track never changes the value.
pub struct LSlider<E> {
    style: Box<dyn LSliderStyle<Element = E>>,
    haptics: Rc<dyn Haptics>,
    value: Binding<f64>,
    min: f64,
    max: f64,
    angle: Angle,
    is_disabled: bool,
    frame: Size,
    is_active: bool,
    at_limit: LimitNotifier,
}

impl LSlider<Visual> {
    pub fn new(value: Binding<f64>, min: f64, max: f64, angle: Angle) -> Self {
        Self::styled(value, min, max, angle, Box::new(DefaultLSliderStyle))
    }
}

impl<E> LSlider<E> {
    pub fn styled(
        value: Binding<f64>,
        min: f64,
        max: f64,
        angle: Angle,
        style: Box<dyn LSliderStyle<Element = E>>,
    ) -> Self {
        Self {
            style,
            haptics: Rc::new(NoHaptics),
            value,
            min,
            max,
            angle,
            is_disabled: false,
            frame: Size::ZERO,
            is_active: false,
            at_limit: LimitNotifier::new(),
        }
    }

    pub fn with_haptics(mut self, haptics: Rc<dyn Haptics>) -> Self {
        self.haptics = haptics;
        self
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.is_disabled = disabled;
    }

    /// The host reports the slider's laid-out frame before forwarding
    /// gestures or asking for offsets.
    pub fn set_frame(&mut self, frame: Size) {
        self.frame = frame;
    }

    /// The track segment: the fixed-angle line through the frame center,
    /// clipped to the frame. Both points are zero when the line misses the
    /// frame (a degenerate frame).
    pub fn endpoints(&self) -> (Point, Point) {
        let center = self.frame.center();
        let along = Point::new(self.angle.cos(), self.angle.sin()) * TRACK_HALF_LENGTH;
        let hits = line_rect_intersection(center - along, center + along, Rect::from_size(self.frame));
        if hits.len() < 2 {
            return (Point::ZERO, Point::ZERO);
        }
        (hits[0], hits[1])
    }

    pub fn on_drag_event(&mut self, event: DragEvent) {
        if self.is_disabled {
            return;
        }
        let (start, end) = self.endpoints();
        let t = segment_parameter(start, end, event.location) as f64;
        if self.at_limit.check(t == 0.0 || t == 1.0) {
            self.haptics.impact_occurred();
        }
        self.value.set(value_for_percent(t, self.min, self.max));
        self.is_active = !event.phase.is_end();
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Thumb center relative to the frame center.
    pub fn thumb_offset(&self) -> Point {
        let (start, end) = self.endpoints();
        let pct = percent_for_value(self.value.get(), self.min, self.max) as f32;
        start.lerp(end, pct) - self.frame.center()
    }

    pub fn configuration(&self) -> LSliderConfiguration {
        let value = self.value.get();
        LSliderConfiguration {
            is_disabled: self.is_disabled,
            is_active: self.is_active,
            pct_fill: percent_for_value(value, self.min, self.max),
            value,
            angle: self.angle,
            min: self.min,
            max: self.max,
        }
    }

    pub fn track(&self) -> E {
        self.style.make_track(&self.configuration())
    }

    pub fn thumb(&self) -> E {
        self.style.make_thumb(&self.configuration())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Binding, CountingHaptics, DragPhase};

    fn drag_to(x: f32, y: f32, phase: DragPhase) -> DragEvent {
        DragEvent {
            phase,
            location: Point::new(x, y),
            translation: Point::ZERO,
            time_ms: 0,
        }
    }

    fn horizontal_slider() -> LSlider<Visual> {
        let mut slider = LSlider::new(Binding::new(0.0), 0.0, 100.0, Angle::ZERO);
        slider.set_frame(Size::new(100.0, 100.0));
        slider
    }

    #[test]
    fn test_horizontal_endpoints_span_frame() {
        let slider = horizontal_slider();
        let (start, end) = slider.endpoints();
        assert_eq!(start, Point::new(0.0, 50.0));
        assert_eq!(end, Point::new(100.0, 50.0));
    }

    #[test]
    fn test_projection_ignores_cross_axis_travel() {
        let mut slider = horizontal_slider();
        let value = Binding::new(0.0);
        slider.value = value.clone();
        slider.on_drag_event(drag_to(25.0, 80.0, DragPhase::Moved));
        assert!((value.get() - 25.0).abs() < 1e-4);
        assert!(slider.is_active());
    }

    #[test]
    fn test_overshoot_clamps_and_fires_haptic_once() {
        let haptics = CountingHaptics::new();
        let value = Binding::new(0.0);
        let mut slider = LSlider::new(value.clone(), 0.0, 100.0, Angle::ZERO)
            .with_haptics(haptics.clone());
        slider.set_frame(Size::new(100.0, 100.0));

        slider.on_drag_event(drag_to(150.0, 50.0, DragPhase::Moved));
        slider.on_drag_event(drag_to(170.0, 50.0, DragPhase::Moved));
        assert_eq!(value.get(), 100.0);
        assert_eq!(haptics.impacts.get(), 1);

        // Leaving the limit re-arms the notifier.
        slider.on_drag_event(drag_to(50.0, 50.0, DragPhase::Moved));
        slider.on_drag_event(drag_to(-10.0, 50.0, DragPhase::Moved));
        assert_eq!(value.get(), 0.0);
        assert_eq!(haptics.impacts.get(), 2);
    }

    #[test]
    fn test_end_deactivates() {
        let mut slider = horizontal_slider();
        slider.on_drag_event(drag_to(25.0, 50.0, DragPhase::Moved));
        assert!(slider.is_active());
        slider.on_drag_event(drag_to(40.0, 50.0, DragPhase::Ended));
        assert!(!slider.is_active());
    }

    #[test]
    fn test_cancel_commits_last_location() {
        let value = Binding::new(0.0);
        let mut slider = LSlider::new(value.clone(), 0.0, 100.0, Angle::ZERO);
        slider.set_frame(Size::new(100.0, 100.0));
        slider.on_drag_event(drag_to(60.0, 50.0, DragPhase::Cancelled));
        assert!((value.get() - 60.0).abs() < 1e-4);
        assert!(!slider.is_active());
    }

    #[test]
    fn test_thumb_offset_tracks_value() {
        let value = Binding::new(75.0);
        let mut slider = LSlider::new(value, 0.0, 100.0, Angle::ZERO);
        slider.set_frame(Size::new(100.0, 100.0));
        let offset = slider.thumb_offset();
        assert!((offset.x - 25.0).abs() < 1e-3);
        assert!(offset.y.abs() < 1e-3);
    }

    #[test]
    fn test_vertical_orientation() {
        let value = Binding::new(0.0);
        let mut slider = LSlider::new(value.clone(), 0.0, 1.0, Angle::from_degrees(90.0));
        slider.set_frame(Size::new(100.0, 200.0));
        let (start, end) = slider.endpoints();
        // cos(pi/2) is not exactly zero in f32, so the chord x is only
        // approximately centered.
        assert!((start.x - 50.0).abs() < 1e-3 && start.y == 0.0);
        assert!((end.x - 50.0).abs() < 1e-3 && end.y == 200.0);
        slider.on_drag_event(drag_to(50.0, 150.0, DragPhase::Moved));
        assert!((value.get() - 0.75).abs() < 1e-4);
    }

    #[test]
    fn test_disabled_ignores_events() {
        let value = Binding::new(10.0);
        let mut slider = LSlider::new(value.clone(), 0.0, 100.0, Angle::ZERO);
        slider.set_frame(Size::new(100.0, 100.0));
        slider.set_disabled(true);
        slider.on_drag_event(drag_to(90.0, 50.0, DragPhase::Moved));
        assert_eq!(value.get(), 10.0);
        assert!(!slider.is_active());
    }
}

//! Cartesian two-axis pad.

use std::rc::Rc;

use glissade_motion::{percent_for_value, value_for_percent, LimitNotifier};
use glissade_ui_graphics::{Color, Point, Size, Visual};

use crate::{Binding, DragEvent, Haptics, NoHaptics};

#[derive(Clone, Copy, Debug)]
pub struct TrackPadConfiguration {
    pub is_disabled: bool,
    pub is_active: bool,
    /// Per-axis thumb position as fractions of the pad.
    pub pct_x: f64,
    pub pct_y: f64,
    pub value: Point,
}

pub trait TrackPadStyle {
    type Element;

    fn make_track(&self, configuration: &TrackPadConfiguration) -> Self::Element;
    fn make_thumb(&self, configuration: &TrackPadConfiguration) -> Self::Element;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultTrackPadStyle;

impl TrackPadStyle for DefaultTrackPadStyle {
    type Element = Visual;

    fn make_track(&self, _configuration: &TrackPadConfiguration) -> Visual {
        Visual::RoundedRect {
            corner_radius: 10.0,
            fill: Color::GRAY.with_alpha(0.4),
            size: None,
        }
    }

    fn make_thumb(&self, configuration: &TrackPadConfiguration) -> Visual {
        Visual::Circle {
            radius: Some(20.0),
            fill: if configuration.is_active {
                Color::YELLOW
            } else {
                Color::BLACK
            },
        }
    }
}

/// Binds a 2D value to drags across a rectangular pad: each axis is an
/// independent linear mapping from the pad extent to its own range. Both
/// components are published in a single write.
pub struct TrackPad<E> {
    style: Box<dyn TrackPadStyle<Element = E>>,
    haptics: Rc<dyn Haptics>,
    value: Binding<Point>,
    range_x: (f64, f64),
    range_y: (f64, f64),
    is_disabled: bool,
    frame: Size,
    is_active: bool,
    at_limit_x: LimitNotifier,
    at_limit_y: LimitNotifier,
}

impl TrackPad<Visual> {
    pub fn new(value: Binding<Point>, range_x: (f64, f64), range_y: (f64, f64)) -> Self {
        Self::styled(value, range_x, range_y, Box::new(DefaultTrackPadStyle))
    }
}

impl<E> TrackPad<E> {
    pub fn styled(
        value: Binding<Point>,
        range_x: (f64, f64),
        range_y: (f64, f64),
        style: Box<dyn TrackPadStyle<Element = E>>,
    ) -> Self {
        Self {
            style,
            haptics: Rc::new(NoHaptics),
            value,
            range_x,
            range_y,
            is_disabled: false,
            frame: Size::ZERO,
            is_active: false,
            at_limit_x: LimitNotifier::new(),
            at_limit_y: LimitNotifier::new(),
        }
    }

    pub fn with_haptics(mut self, haptics: Rc<dyn Haptics>) -> Self {
        self.haptics = haptics;
        self
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.is_disabled = disabled;
    }

    pub fn set_frame(&mut self, frame: Size) {
        self.frame = frame;
    }

    fn axis_percent(location: f32, extent: f32) -> f64 {
        if extent <= 0.0 {
            return 0.0;
        }
        (location / extent).clamp(0.0, 1.0) as f64
    }

    pub fn on_drag_event(&mut self, event: DragEvent) {
        if self.is_disabled {
            return;
        }
        let px = Self::axis_percent(event.location.x, self.frame.width);
        let py = Self::axis_percent(event.location.y, self.frame.height);

        // Each axis fires independently on entering its own edge.
        if self.at_limit_x.check(px == 0.0 || px == 1.0) {
            self.haptics.impact_occurred();
        }
        if self.at_limit_y.check(py == 0.0 || py == 1.0) {
            self.haptics.impact_occurred();
        }

        let nx = value_for_percent(px, self.range_x.0, self.range_x.1);
        let ny = value_for_percent(py, self.range_y.0, self.range_y.1);
        self.value.set(Point::new(nx as f32, ny as f32));
        self.is_active = !event.phase.is_end();
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    fn percents(&self) -> (f64, f64) {
        let value = self.value.get();
        (
            percent_for_value(value.x as f64, self.range_x.0, self.range_x.1),
            percent_for_value(value.y as f64, self.range_y.0, self.range_y.1),
        )
    }

    /// Thumb center relative to the frame center.
    pub fn thumb_offset(&self) -> Point {
        let (px, py) = self.percents();
        Point::new(
            self.frame.width * (px as f32 - 0.5),
            self.frame.height * (py as f32 - 0.5),
        )
    }

    pub fn configuration(&self) -> TrackPadConfiguration {
        let (px, py) = self.percents();
        TrackPadConfiguration {
            is_disabled: self.is_disabled,
            is_active: self.is_active,
            pct_x: px,
            pct_y: py,
            value: self.value.get(),
        }
    }

    pub fn track(&self) -> E {
        self.style.make_track(&self.configuration())
    }

    pub fn thumb(&self) -> E {
        self.style.make_thumb(&self.configuration())
    }
}

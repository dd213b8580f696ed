//! Radial (circular-track) slider.

use glissade_motion::{percent_for_value, value_for_percent};
use glissade_ui_graphics::{Angle, Color, Point, Size, Visual};

use crate::{Binding, DragEvent};

#[derive(Clone, Copy, Debug)]
pub struct RSliderConfiguration {
    pub is_disabled: bool,
    pub is_active: bool,
    /// Fraction of a full turn from the zero heading to the thumb.
    pub pct_fill: f64,
    pub value: f64,
    /// Thumb heading around the ring.
    pub angle: Angle,
    pub min: f64,
    pub max: f64,
}

pub trait RSliderStyle {
    type Element;

    fn make_track(&self, configuration: &RSliderConfiguration) -> Self::Element;
    fn make_thumb(&self, configuration: &RSliderConfiguration) -> Self::Element;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultRSliderStyle;

impl RSliderStyle for DefaultRSliderStyle {
    type Element = Visual;

    fn make_track(&self, configuration: &RSliderConfiguration) -> Visual {
        Visual::Ring {
            trim: configuration.pct_fill as f32,
            stroke: Color::PURPLE,
            line_width: 10.0,
        }
    }

    fn make_thumb(&self, configuration: &RSliderConfiguration) -> Visual {
        Visual::Circle {
            radius: Some(15.0),
            fill: if configuration.is_active {
                Color::YELLOW
            } else {
                Color::WHITE
            },
        }
    }
}

/// Maps the drag location's bearing from the frame center onto the bound
/// range. Only direction matters; distance from the center is ignored, so
/// the thumb never leaves the ring.
pub struct RSlider<E> {
    style: Box<dyn RSliderStyle<Element = E>>,
    value: Binding<f64>,
    min: f64,
    max: f64,
    is_disabled: bool,
    frame: Size,
    is_active: bool,
}

impl RSlider<Visual> {
    pub fn new(value: Binding<f64>, min: f64, max: f64) -> Self {
        Self::styled(value, min, max, Box::new(DefaultRSliderStyle))
    }
}

impl<E> RSlider<E> {
    pub fn styled(
        value: Binding<f64>,
        min: f64,
        max: f64,
        style: Box<dyn RSliderStyle<Element = E>>,
    ) -> Self {
        Self {
            style,
            value,
            min,
            max,
            is_disabled: false,
            frame: Size::ZERO,
            is_active: false,
        }
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.is_disabled = disabled;
    }

    pub fn set_frame(&mut self, frame: Size) {
        self.frame = frame;
    }

    pub fn on_drag_event(&mut self, event: DragEvent) {
        if self.is_disabled {
            return;
        }
        let heading = Angle::direction(self.frame.center(), event.location);
        let t = heading.fraction_of_turn() as f64;
        self.value.set(value_for_percent(t, self.min, self.max));
        self.is_active = !event.phase.is_end();
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Thumb center relative to the frame center, on the largest ring that
    /// fits the frame.
    pub fn thumb_offset(&self) -> Point {
        let radius = self.frame.min_radius();
        let angle = self.thumb_angle();
        Point::new(radius * angle.cos(), radius * angle.sin())
    }

    fn thumb_angle(&self) -> Angle {
        let pct = percent_for_value(self.value.get(), self.min, self.max);
        Angle::from_fraction(pct as f32)
    }

    pub fn configuration(&self) -> RSliderConfiguration {
        let value = self.value.get();
        let pct = percent_for_value(value, self.min, self.max);
        RSliderConfiguration {
            is_disabled: self.is_disabled,
            is_active: self.is_active,
            pct_fill: pct,
            value,
            angle: Angle::from_fraction(pct as f32),
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

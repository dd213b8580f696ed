//! Slider with an inertial, coasting track.

use glissade_motion::{
    motion_constants::TICK_PERIOD_MS, BoundedValue, CoastingGeometry, CoastingTrack,
    DragSample1D, DragState, FixedTicker, KinematicState1D,
};
use glissade_ui_graphics::{Color, Size, Visual};

use crate::{Binding, DragEvent, DragPhase};

#[derive(Clone, Copy, Debug)]
pub struct OverflowSliderConfiguration {
    pub is_disabled: bool,
    pub thumb_is_active: bool,
    pub thumb_is_at_limit: bool,
    pub track_is_active: bool,
    pub track_is_at_limit: bool,
    pub value: f64,
    pub min: f64,
    pub max: f64,
    /// Pixel spacing between the track's tick marks.
    pub tick_spacing: f32,
}

pub trait OverflowSliderStyle {
    type Element;

    fn make_track(&self, configuration: &OverflowSliderConfiguration) -> Self::Element;
    fn make_thumb(&self, configuration: &OverflowSliderConfiguration) -> Self::Element;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultOverflowSliderStyle;

impl OverflowSliderStyle for DefaultOverflowSliderStyle {
    type Element = Visual;

    fn make_track(&self, configuration: &OverflowSliderConfiguration) -> Visual {
        let span = (configuration.max - configuration.min) as f32;
        let ticks = if configuration.tick_spacing > 0.0 {
            (span / configuration.tick_spacing) as u32 + 1
        } else {
            0
        };
        Visual::TickMarks {
            spacing: configuration.tick_spacing,
            ticks,
            stroke: Color::GRAY,
        }
    }

    fn make_thumb(&self, configuration: &OverflowSliderConfiguration) -> Visual {
        Visual::RoundedRect {
            corner_radius: 5.0,
            fill: if configuration.thumb_is_active {
                Color::ORANGE
            } else {
                Color::BLUE.with_alpha(0.5)
            },
            size: Some(Size::new(20.0, 50.0)),
        }
    }
}

/// A horizontal slider whose range scrolls behind a fixed frame. The
/// thumb and the track are dragged independently but share one flywheel:
/// throwing the track coasts it, and holding the thumb past its travel
/// pumps the same velocity until the thumb returns or the value hits a
/// range bound. The host drives the physics by calling
/// [`OverflowSlider::advance`] with wall-clock elapsed time.
pub struct OverflowSlider<E> {
    style: Box<dyn OverflowSliderStyle<Element = E>>,
    value: Binding<f64>,
    min: f64,
    max: f64,
    tick_spacing: f32,
    is_disabled: bool,
    geometry: CoastingGeometry,
    coasting: CoastingTrack,
    track_state: DragState<KinematicState1D>,
    ticker: FixedTicker,
}

impl OverflowSlider<Visual> {
    pub fn new(
        value: Binding<f64>,
        min: f64,
        max: f64,
        geometry: CoastingGeometry,
    ) -> Self {
        Self::styled(value, min, max, geometry, Box::new(DefaultOverflowSliderStyle))
    }
}

impl<E> OverflowSlider<E> {
    pub fn styled(
        value: Binding<f64>,
        min: f64,
        max: f64,
        geometry: CoastingGeometry,
        style: Box<dyn OverflowSliderStyle<Element = E>>,
    ) -> Self {
        let mut coasting = CoastingTrack::new();
        coasting.align_to_value(value.get(), &geometry);
        Self {
            style,
            value,
            min,
            max,
            tick_spacing: 10.0,
            is_disabled: false,
            geometry,
            coasting,
            track_state: DragState::Inactive,
            ticker: FixedTicker::new(TICK_PERIOD_MS),
        }
    }

    pub fn with_tick_spacing(mut self, spacing: f32) -> Self {
        self.tick_spacing = spacing;
        self
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.is_disabled = disabled;
    }

    pub fn geometry(&self) -> &CoastingGeometry {
        &self.geometry
    }

    /// A drag on the thumb itself; translation is measured from the
    /// gesture start.
    pub fn on_thumb_drag(&mut self, event: DragEvent) {
        if self.is_disabled {
            return;
        }
        match event.phase {
            DragPhase::Started | DragPhase::Moved => {
                let delta = event.translation.x / self.geometry.frame_width;
                self.coasting.thumb_drag_changed(delta);
            }
            DragPhase::Ended | DragPhase::Cancelled => {
                self.coasting.thumb_drag_ended();
            }
        }
    }

    /// A drag anywhere on the scrolling track.
    pub fn on_track_drag(&mut self, event: DragEvent) {
        if self.is_disabled {
            return;
        }
        match event.phase {
            DragPhase::Started | DragPhase::Moved => {
                let sample = DragSample1D {
                    time_ms: event.time_ms,
                    translation: event.translation.x,
                    start_location: event.location.x - event.translation.x,
                };
                let kinematics =
                    KinematicState1D::derive(self.track_state.kinematics(), sample);
                self.coasting
                    .track_drag_changed(kinematics.translation, kinematics.velocity);
                self.track_state = DragState::Dragging(kinematics);
            }
            DragPhase::Ended | DragPhase::Cancelled => {
                self.coasting.track_drag_ended(&self.geometry, self.min, self.max);
                self.track_state = DragState::Inactive;
            }
        }
    }

    /// Advances the physics by `elapsed_ms` of wall-clock time, running as
    /// many whole fixed-period ticks as fit. The binding is read once
    /// before the ticks and written once after.
    pub fn advance(&mut self, elapsed_ms: u64) {
        let ticks = self.ticker.advance(elapsed_ms);
        if ticks == 0 {
            return;
        }
        let mut bounded = BoundedValue::new(self.value.get(), self.min, self.max);
        for _ in 0..ticks {
            self.coasting.tick(&self.geometry, &mut bounded);
        }
        self.value.set(bounded.current());
    }

    /// Thumb position as a display fraction of its travel.
    pub fn thumb_fraction(&self) -> f32 {
        self.coasting.thumb_fraction()
    }

    /// Track displacement to render at, clamped to the legal window.
    pub fn track_offset(&self) -> f32 {
        self.coasting
            .track_display_offset(&self.geometry, self.min, self.max)
    }

    pub fn velocity(&self) -> f32 {
        self.coasting.velocity()
    }

    pub fn configuration(&self) -> OverflowSliderConfiguration {
        OverflowSliderConfiguration {
            is_disabled: self.is_disabled,
            thumb_is_active: self.coasting.thumb_is_active(),
            thumb_is_at_limit: self.coasting.thumb_at_limit(),
            track_is_active: self.coasting.track_is_active(),
            track_is_at_limit: self
                .coasting
                .track_at_limit(&self.geometry, self.min, self.max),
            value: self.value.get(),
            min: self.min,
            max: self.max,
            tick_spacing: self.tick_spacing,
        }
    }

    pub fn track(&self) -> E {
        self.style.make_track(&self.configuration())
    }

    pub fn thumb(&self) -> E {
        self.style.make_thumb(&self.configuration())
    }
}

//! Tick-marked slider with a coasting track.

use glissade_motion::{
    motion_constants::TICK_PERIOD_MS, BoundedValue, CoastingGeometry, CoastingTrack,
    DragSample1D, DragState, FixedTicker, KinematicState1D,
};
use glissade_ui_graphics::{Color, Size, Visual};

use crate::{Binding, DragEvent, DragPhase};

#[derive(Clone, Copy, Debug)]
pub struct SegmentedSliderConfiguration {
    pub is_disabled: bool,
    pub thumb_is_active: bool,
    pub thumb_is_dragging: bool,
    pub thumb_is_at_limit: bool,
    pub track_is_active: bool,
    pub track_is_at_limit: bool,
    pub value: f64,
    pub min: f64,
    pub max: f64,
    /// Pixel distance between adjacent segment boundaries.
    pub tick_spacing: f32,
}

pub trait SegmentedSliderStyle {
    type Element;

    fn make_track(&self, configuration: &SegmentedSliderConfiguration) -> Self::Element;
    fn make_thumb(&self, configuration: &SegmentedSliderConfiguration) -> Self::Element;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultSegmentedSliderStyle;

impl SegmentedSliderStyle for DefaultSegmentedSliderStyle {
    type Element = Visual;

    fn make_track(&self, configuration: &SegmentedSliderConfiguration) -> Visual {
        let span = (configuration.max - configuration.min) as f32;
        let ticks = if configuration.tick_spacing > 0.0 {
            (span / configuration.tick_spacing) as u32
        } else {
            0
        };
        Visual::TickMarks {
            spacing: configuration.tick_spacing,
            ticks,
            stroke: Color::GRAY,
        }
    }

    fn make_thumb(&self, configuration: &SegmentedSliderConfiguration) -> Visual {
        let fill = if configuration.thumb_is_active {
            Color::ORANGE
        } else {
            Color::BLUE
        };
        Visual::RoundedRect {
            corner_radius: 5.0,
            fill: fill.with_alpha(0.5),
            size: Some(Size::new(20.0, 50.0)),
        }
    }
}

/// An overflow-style slider whose track is divided into fixed-width
/// segments by tick marks. The motion model is the shared flywheel: the
/// thumb and track gestures feed one velocity accumulator and a fixed
/// tick displaces the track and republishes the value.
pub struct SegmentedSlider<E> {
    style: Box<dyn SegmentedSliderStyle<Element = E>>,
    value: Binding<f64>,
    min: f64,
    max: f64,
    spacing: f32,
    is_disabled: bool,
    geometry: CoastingGeometry,
    coasting: CoastingTrack,
    track_state: DragState<KinematicState1D>,
    ticker: FixedTicker,
}

impl SegmentedSlider<Visual> {
    pub fn new(
        value: Binding<f64>,
        min: f64,
        max: f64,
        spacing: f32,
        geometry: CoastingGeometry,
    ) -> Self {
        Self::styled(
            value,
            min,
            max,
            spacing,
            geometry,
            Box::new(DefaultSegmentedSliderStyle),
        )
    }
}

impl<E> SegmentedSlider<E> {
    pub fn styled(
        value: Binding<f64>,
        min: f64,
        max: f64,
        spacing: f32,
        geometry: CoastingGeometry,
        style: Box<dyn SegmentedSliderStyle<Element = E>>,
    ) -> Self {
        let mut coasting = CoastingTrack::new();
        coasting.align_to_value(value.get(), &geometry);
        Self {
            style,
            value,
            min,
            max,
            spacing,
            is_disabled: false,
            geometry,
            coasting,
            track_state: DragState::Inactive,
            ticker: FixedTicker::new(TICK_PERIOD_MS),
        }
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.is_disabled = disabled;
    }

    /// Value span covered by one segment.
    pub fn segment_span(&self) -> f64 {
        self.spacing as f64
    }

    /// Index of the segment the current value falls in.
    pub fn segment_index(&self) -> u32 {
        if self.spacing <= 0.0 {
            return 0;
        }
        ((self.value.get() - self.min) / self.spacing as f64).floor() as u32
    }

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

    /// See [`crate::OverflowSlider::advance`]; the physics is shared.
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

    pub fn thumb_fraction(&self) -> f32 {
        self.coasting.thumb_fraction()
    }

    pub fn track_offset(&self) -> f32 {
        self.coasting
            .track_display_offset(&self.geometry, self.min, self.max)
    }

    pub fn velocity(&self) -> f32 {
        self.coasting.velocity()
    }

    pub fn configuration(&self) -> SegmentedSliderConfiguration {
        let thumb_is_active = self.coasting.thumb_is_active();
        SegmentedSliderConfiguration {
            is_disabled: self.is_disabled,
            thumb_is_active,
            thumb_is_dragging: thumb_is_active,
            thumb_is_at_limit: self.coasting.thumb_at_limit(),
            track_is_active: self.coasting.track_is_active(),
            track_is_at_limit: self
                .coasting
                .track_at_limit(&self.geometry, self.min, self.max),
            value: self.value.get(),
            min: self.min,
            max: self.max,
            tick_spacing: self.spacing,
        }
    }

    pub fn track(&self) -> E {
        self.style.make_track(&self.configuration())
    }

    pub fn thumb(&self) -> E {
        self.style.make_thumb(&self.configuration())
    }
}

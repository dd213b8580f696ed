//! Path-constrained slider.

use glissade_motion::{
    percent_for_value, value_for_percent, DragSample2D, DragState, KinematicState2D,
};
use glissade_ui_graphics::{Angle, Color, PathLookupTable, Point, Visual};

use crate::{Binding, DragEvent, DragPhase};

#[derive(Clone, Copy, Debug)]
pub struct PSliderConfiguration {
    pub is_disabled: bool,
    pub is_active: bool,
    /// Arc-length fraction of the path covered so far.
    pub pct_fill: f64,
    pub value: f64,
    /// Path tangent at the thumb.
    pub angle: Angle,
    pub min: f64,
    pub max: f64,
}

pub trait PSliderStyle {
    type Element;

    fn make_track(&self, configuration: &PSliderConfiguration) -> Self::Element;
    fn make_thumb(&self, configuration: &PSliderConfiguration) -> Self::Element;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultPSliderStyle;

impl PSliderStyle for DefaultPSliderStyle {
    type Element = Visual;

    fn make_track(&self, configuration: &PSliderConfiguration) -> Visual {
        Visual::Ring {
            trim: configuration.pct_fill as f32,
            stroke: Color::PURPLE,
            line_width: 6.0,
        }
    }

    fn make_thumb(&self, configuration: &PSliderConfiguration) -> Visual {
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

/// A slider whose thumb is constrained to an arbitrary sampled path. The
/// drag location is snapped to the nearest path sample and the thumb's
/// arc-length fraction along the path drives the bound value.
pub struct PSlider<E> {
    style: Box<dyn PSliderStyle<Element = E>>,
    table: PathLookupTable,
    value: Binding<f64>,
    min: f64,
    max: f64,
    is_disabled: bool,
    /// Committed thumb position on the path, from the last ended gesture.
    position: Point,
    drag_state: DragState<KinematicState2D>,
}

impl PSlider<Visual> {
    pub fn new(table: PathLookupTable, value: Binding<f64>, min: f64, max: f64) -> Self {
        Self::styled(table, value, min, max, Box::new(DefaultPSliderStyle))
    }
}

impl<E> PSlider<E> {
    pub fn styled(
        table: PathLookupTable,
        value: Binding<f64>,
        min: f64,
        max: f64,
        style: Box<dyn PSliderStyle<Element = E>>,
    ) -> Self {
        let pct = percent_for_value(value.get(), min, max);
        let position = table.point_at_percent(pct as f32);
        Self {
            style,
            table,
            value,
            min,
            max,
            is_disabled: false,
            position,
            drag_state: DragState::Inactive,
        }
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.is_disabled = disabled;
    }

    pub fn on_drag_event(&mut self, event: DragEvent) {
        if self.is_disabled {
            return;
        }
        let closest = self.table.nearest_point(event.location);
        let displacement = closest - self.position;
        match event.phase {
            DragPhase::Started | DragPhase::Moved => {
                let sample = DragSample2D {
                    time_ms: event.time_ms,
                    translation: displacement,
                    start_location: self.position,
                };
                let kinematics =
                    KinematicState2D::derive(self.drag_state.kinematics(), sample);
                self.drag_state = DragState::Dragging(kinematics);
                let pct = self.table.percent_along(closest) as f64;
                self.value.set(value_for_percent(pct, self.min, self.max));
            }
            DragPhase::Ended | DragPhase::Cancelled => {
                self.position = self.position + displacement;
                let pct = self.table.percent_along(self.position) as f64;
                self.value.set(value_for_percent(pct, self.min, self.max));
                self.drag_state = DragState::Inactive;
            }
        }
    }

    pub fn is_active(&self) -> bool {
        self.drag_state.is_active()
    }

    pub fn drag_state(&self) -> &DragState<KinematicState2D> {
        &self.drag_state
    }

    /// Current thumb location on the path, in the path's coordinates.
    pub fn thumb_position(&self) -> Point {
        self.position + self.drag_state.translation()
    }

    /// Path tangent at the thumb. Zero for paths too sparse to orient.
    pub fn angle(&self) -> Angle {
        let pct = self.table.percent_along(self.thumb_position());
        self.table.direction_at_percent(pct)
    }

    pub fn configuration(&self) -> PSliderConfiguration {
        let value = self.value.get();
        PSliderConfiguration {
            is_disabled: self.is_disabled,
            is_active: self.drag_state.is_active(),
            pct_fill: percent_for_value(value, self.min, self.max),
            value,
            angle: self.angle(),
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

    fn drag_to(x: f32, y: f32, phase: DragPhase, time_ms: u64) -> DragEvent {
        DragEvent {
            phase,
            location: Point::new(x, y),
            translation: Point::ZERO,
            time_ms,
        }
    }

    fn segment_slider() -> (PSlider<Visual>, Binding<f64>) {
        let table = PathLookupTable::from_segment(Point::ZERO, Point::new(100.0, 0.0), 100);
        let value = Binding::new(0.0);
        let slider = PSlider::new(table, value.clone(), 0.0, 100.0);
        (slider, value)
    }

    #[test]
    fn test_initial_position_matches_value() {
        let table = PathLookupTable::from_segment(Point::ZERO, Point::new(100.0, 0.0), 100);
        let slider = PSlider::new(table, Binding::new(50.0), 0.0, 100.0);
        assert!((slider.thumb_position().x - 50.0).abs() < 1.0);
    }

    #[test]
    fn test_off_path_location_snaps_to_nearest_sample() {
        let (mut slider, value) = segment_slider();
        slider.on_drag_event(drag_to(30.0, 45.0, DragPhase::Moved, 0));
        assert!((value.get() - 30.0).abs() < 1.0);
    }

    #[test]
    fn test_velocity_along_path() {
        let (mut slider, _) = segment_slider();
        slider.on_drag_event(drag_to(10.0, 0.0, DragPhase::Started, 0));
        slider.on_drag_event(drag_to(30.0, 0.0, DragPhase::Moved, 100));
        // 20 units along the path in 100 ms.
        assert!((slider.drag_state().velocity().x - 200.0).abs() < 1.0);
    }

    #[test]
    fn test_end_commits_position() {
        let (mut slider, value) = segment_slider();
        slider.on_drag_event(drag_to(70.0, 0.0, DragPhase::Moved, 0));
        slider.on_drag_event(drag_to(70.0, 0.0, DragPhase::Ended, 50));
        assert!(!slider.is_active());
        assert!((value.get() - 70.0).abs() < 1.0);
        assert!((slider.thumb_position().x - 70.0).abs() < 1.0);

        // The next gesture resumes from the committed position.
        slider.on_drag_event(drag_to(80.0, 0.0, DragPhase::Started, 100));
        assert!((value.get() - 80.0).abs() < 1.0);
    }

    #[test]
    fn test_tangent_on_circle() {
        let table = PathLookupTable::from_circle(Point::new(50.0, 50.0), 40.0, 256);
        let value = Binding::new(0.0);
        let slider = PSlider::new(table, value, 0.0, 1.0);
        // At the start of the circle the tangent is vertical.
        let tangent = slider.angle();
        assert!((tangent.radians().rem_euclid(std::f32::consts::PI)
            - std::f32::consts::FRAC_PI_2)
            .abs()
            < 0.1);
    }
}

//! Polar two-degree pad: offset plus angle.

use glissade_ui_graphics::{Angle, Color, Point, Size, Visual};

use crate::{Binding, DragEvent};

#[derive(Clone, Copy, Debug)]
pub struct RadialPadConfiguration {
    pub is_disabled: bool,
    pub is_active: bool,
    /// Thumb distance from the center as a fraction of the pad radius.
    pub offset: f64,
    pub angle: Angle,
    /// Whether the thumb is pinned to the pad rim.
    pub is_at_limit: bool,
}

pub trait RadialPadStyle {
    type Element;

    fn make_track(&self, configuration: &RadialPadConfiguration) -> Self::Element;
    fn make_thumb(&self, configuration: &RadialPadConfiguration) -> Self::Element;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultRadialPadStyle;

impl RadialPadStyle for DefaultRadialPadStyle {
    type Element = Visual;

    fn make_track(&self, _configuration: &RadialPadConfiguration) -> Visual {
        Visual::Circle {
            radius: None,
            fill: Color::GRAY.with_alpha(0.4),
        }
    }

    fn make_thumb(&self, configuration: &RadialPadConfiguration) -> Visual {
        Visual::Circle {
            radius: Some(22.5),
            fill: if configuration.is_active {
                Color::YELLOW
            } else {
                Color::BLUE
            },
        }
    }
}

/// Reports the drag location in polar form: a normalized offset in
/// `[0, 1]` from the pad center and the bearing toward the pointer. The
/// two components are bound independently so hosts can consume either one
/// alone.
pub struct RadialPad<E> {
    style: Box<dyn RadialPadStyle<Element = E>>,
    offset: Binding<f64>,
    angle: Binding<Angle>,
    is_disabled: bool,
    frame: Size,
    is_active: bool,
}

impl RadialPad<Visual> {
    pub fn new(offset: Binding<f64>, angle: Binding<Angle>) -> Self {
        Self::styled(offset, angle, Box::new(DefaultRadialPadStyle))
    }
}

impl<E> RadialPad<E> {
    pub fn styled(
        offset: Binding<f64>,
        angle: Binding<Angle>,
        style: Box<dyn RadialPadStyle<Element = E>>,
    ) -> Self {
        Self {
            style,
            offset,
            angle,
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

    /// Pad radius: the largest circle that fits the frame.
    pub fn radius(&self) -> f32 {
        self.frame.min_radius()
    }

    pub fn on_drag_event(&mut self, event: DragEvent) {
        if self.is_disabled {
            return;
        }
        let center = self.frame.center();
        let radius = self.radius();
        let distance = center.distance(event.location);
        let normalized = if radius > 0.0 {
            (distance.min(radius) / radius) as f64
        } else {
            0.0
        };
        let heading = Angle::direction(center, event.location);
        self.offset.set(normalized);
        self.angle
            .set(Angle::from_fraction(heading.fraction_of_turn()));
        self.is_active = !event.phase.is_end();
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn is_at_limit(&self) -> bool {
        self.offset.get() == 1.0
    }

    /// Thumb center relative to the frame center.
    pub fn thumb_offset(&self) -> Point {
        let distance = self.radius() * self.offset.get() as f32;
        let angle = self.angle.get();
        Point::new(distance * angle.cos(), distance * angle.sin())
    }

    pub fn configuration(&self) -> RadialPadConfiguration {
        let offset = self.offset.get();
        RadialPadConfiguration {
            is_disabled: self.is_disabled,
            is_active: self.is_active,
            offset,
            angle: self.angle.get(),
            is_at_limit: offset == 1.0,
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
    use crate::{Binding, DragPhase};

    fn drag_to(x: f32, y: f32, phase: DragPhase) -> DragEvent {
        DragEvent {
            phase,
            location: Point::new(x, y),
            translation: Point::ZERO,
            time_ms: 0,
        }
    }

    fn pad() -> (RadialPad<Visual>, Binding<f64>, Binding<Angle>) {
        let offset = Binding::new(0.0);
        let angle = Binding::new(Angle::ZERO);
        let mut pad = RadialPad::new(offset.clone(), angle.clone());
        pad.set_frame(Size::new(100.0, 100.0));
        (pad, offset, angle)
    }

    #[test]
    fn test_halfway_offset() {
        let (mut pad, offset, angle) = pad();
        pad.on_drag_event(drag_to(75.0, 50.0, DragPhase::Moved));
        assert!((offset.get() - 0.5).abs() < 1e-4);
        assert!(angle.get().radians().abs() < 1e-4);
    }

    #[test]
    fn test_offset_clamps_at_rim() {
        let (mut pad, offset, _) = pad();
        pad.on_drag_event(drag_to(150.0, 50.0, DragPhase::Moved));
        assert_eq!(offset.get(), 1.0);
        assert!(pad.is_at_limit());
    }

    #[test]
    fn test_angle_wraps_positive() {
        let (mut pad, _, angle) = pad();
        pad.on_drag_event(drag_to(50.0, 10.0, DragPhase::Moved));
        assert!((angle.get().fraction_of_turn() - 0.75).abs() < 1e-4);
    }

    #[test]
    fn test_thumb_offset_polar() {
        let (mut pad, _, _) = pad();
        pad.on_drag_event(drag_to(50.0, 75.0, DragPhase::Moved));
        let thumb = pad.thumb_offset();
        assert!(thumb.x.abs() < 1e-3);
        assert!((thumb.y - 25.0).abs() < 1e-3);
    }

    #[test]
    fn test_end_deactivates_without_resetting() {
        let (mut pad, offset, _) = pad();
        pad.on_drag_event(drag_to(75.0, 50.0, DragPhase::Moved));
        pad.on_drag_event(drag_to(75.0, 50.0, DragPhase::Ended));
        assert!(!pad.is_active());
        assert!((offset.get() - 0.5).abs() < 1e-4);
    }
}

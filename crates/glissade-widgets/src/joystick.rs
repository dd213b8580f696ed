//! Joystick with an optional lock region.

use std::rc::Rc;

use glissade_motion::{DragSample2D, DragState, KinematicState2D, LimitNotifier};
use glissade_ui_graphics::{Angle, Color, Point, Rect, Size, Visual};

use crate::{Binding, DragEvent, DragPhase, Haptics, NoHaptics};

/// Vertical gap between the stick's travel circle and the lock box.
const LOCK_OFFSET: f32 = 50.0;

#[derive(Clone, Copy, Debug)]
pub struct JoystickConfiguration {
    pub is_disabled: bool,
    pub is_active: bool,
    /// Whether the stick is pinned to its travel rim.
    pub is_at_limit: bool,
    pub is_locked: bool,
    /// Stick heading from the anchor.
    pub angle: Angle,
    /// Stick displacement from the anchor, at most the joystick radius.
    pub radial_offset: f32,
}

pub trait JoystickStyle {
    type Element;

    fn make_hit_box(&self, configuration: &JoystickConfiguration) -> Self::Element;
    fn make_lock_box(&self, configuration: &JoystickConfiguration) -> Self::Element;
    fn make_track(&self, configuration: &JoystickConfiguration) -> Self::Element;
    fn make_thumb(&self, configuration: &JoystickConfiguration) -> Self::Element;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultJoystickStyle;

impl JoystickStyle for DefaultJoystickStyle {
    type Element = Visual;

    fn make_hit_box(&self, _configuration: &JoystickConfiguration) -> Visual {
        Visual::RoundedRect {
            corner_radius: 5.0,
            fill: Color::WHITE.with_alpha(0.05),
            size: None,
        }
    }

    fn make_lock_box(&self, configuration: &JoystickConfiguration) -> Visual {
        Visual::Stack(vec![
            Visual::Circle {
                radius: Some(12.5),
                fill: Color::BLACK,
            },
            Visual::Circle {
                radius: Some(8.75),
                fill: if configuration.is_locked {
                    Color::YELLOW
                } else {
                    Color::GRAY
                },
            },
        ])
    }

    fn make_track(&self, _configuration: &JoystickConfiguration) -> Visual {
        Visual::Circle {
            radius: None,
            fill: Color::GRAY.with_alpha(0.4),
        }
    }

    fn make_thumb(&self, configuration: &JoystickConfiguration) -> Visual {
        Visual::Circle {
            radius: Some(22.5),
            fill: if configuration.is_locked {
                Color::YELLOW
            } else {
                Color::BLUE
            },
        }
    }
}

/// A self-centering stick confined to a circle, with full kinematic state
/// exposed through a shared binding. When locking is enabled, releasing
/// the stick inside the lock region above the travel circle freezes it in
/// place until [`Joystick::unlock`] is called.
pub struct Joystick<E> {
    style: Box<dyn JoystickStyle<Element = E>>,
    haptics: Rc<dyn Haptics>,
    state: Binding<DragState<KinematicState2D>>,
    radius: f32,
    can_lock: bool,
    is_disabled: bool,
    lock_box_size: Size,
    inside_lock_box: LimitNotifier,
    /// Gesture start location of the most recently ended gesture, so the
    /// next gesture can anchor the lock region where the stick sat.
    last_placement: Point,
}

impl Joystick<Visual> {
    pub fn new(state: Binding<DragState<KinematicState2D>>, radius: f32) -> Self {
        Self::styled(state, radius, Box::new(DefaultJoystickStyle))
    }
}

impl<E> Joystick<E> {
    pub fn styled(
        state: Binding<DragState<KinematicState2D>>,
        radius: f32,
        style: Box<dyn JoystickStyle<Element = E>>,
    ) -> Self {
        Self {
            style,
            haptics: Rc::new(NoHaptics),
            state,
            radius,
            can_lock: false,
            is_disabled: false,
            lock_box_size: Size::new(25.0, 25.0),
            inside_lock_box: LimitNotifier::new(),
            last_placement: Point::ZERO,
        }
    }

    pub fn with_haptics(mut self, haptics: Rc<dyn Haptics>) -> Self {
        self.haptics = haptics;
        self
    }

    pub fn with_locking(mut self) -> Self {
        self.can_lock = true;
        self
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.is_disabled = disabled;
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// The lock region, centered above `anchor` just outside the travel
    /// circle.
    pub fn lock_region(&self, anchor: Point) -> Rect {
        let center = anchor + Point::new(0.0, -(self.radius + LOCK_OFFSET));
        Rect::centered_at(center, self.lock_box_size)
    }

    /// Scales a translation back onto the travel circle when the drag has
    /// pulled past the radius.
    fn limit_translation(&self, translation: Point) -> Point {
        let magnitude_squared = translation.magnitude_squared();
        if magnitude_squared < self.radius * self.radius {
            return translation;
        }
        let magnitude = magnitude_squared.sqrt();
        if magnitude == 0.0 {
            return Point::ZERO;
        }
        translation * (self.radius / magnitude)
    }

    pub fn on_drag_event(&mut self, event: DragEvent) {
        if self.is_disabled {
            return;
        }
        if self.state.get().is_locked() {
            // A locked stick ignores input until unlocked.
            return;
        }
        match event.phase {
            DragPhase::Started | DragPhase::Moved => {
                self.last_placement = Point::ZERO;
                let translation = self.limit_translation(event.translation);
                let start_location = event.start_location();
                let sample = DragSample2D {
                    time_ms: event.time_ms,
                    translation,
                    start_location,
                };
                let previous = self.state.get();
                let kinematics = KinematicState2D::derive(previous.kinematics(), sample);
                self.state.set(DragState::Dragging(kinematics));
                if self.can_lock {
                    let inside = self.lock_region(start_location).contains(event.location);
                    if self.inside_lock_box.check(inside) {
                        self.haptics.impact_occurred();
                    }
                }
            }
            DragPhase::Ended | DragPhase::Cancelled => {
                let start = event.start_location();
                self.last_placement = start;
                self.inside_lock_box.reset();
                if self.can_lock && self.lock_region(start).contains(event.location) {
                    self.state.set(DragState::Locked);
                    self.haptics.lock_engaged();
                    log::debug!("joystick locked at {:?}", event.location);
                } else {
                    self.state.set(DragState::Inactive);
                }
            }
        }
    }

    /// Releases a locked stick back to rest.
    pub fn unlock(&mut self) {
        if self.state.get().is_locked() {
            self.state.set(DragState::Inactive);
        }
    }

    pub fn last_placement(&self) -> Point {
        self.last_placement
    }

    pub fn configuration(&self) -> JoystickConfiguration {
        let state = self.state.get();
        let radial_offset = state.radial_offset().min(self.radius);
        JoystickConfiguration {
            is_disabled: self.is_disabled,
            is_active: state.is_active(),
            is_at_limit: radial_offset == self.radius,
            is_locked: state.is_locked(),
            angle: state.angle(),
            radial_offset,
        }
    }

    pub fn hit_box(&self) -> E {
        self.style.make_hit_box(&self.configuration())
    }

    pub fn lock_box(&self) -> E {
        self.style.make_lock_box(&self.configuration())
    }

    pub fn track(&self) -> E {
        self.style.make_track(&self.configuration())
    }

    pub fn thumb(&self) -> E {
        self.style.make_thumb(&self.configuration())
    }
}

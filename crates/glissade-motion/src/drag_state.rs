//! The drag state machine shared by every control.

use crate::{KinematicState1D, KinematicState2D};
use glissade_ui_graphics::{Angle, Point};

/// State of a single gesture region.
///
/// `Inactive` is the initial state. A pointer-down (or the first update)
/// moves to `Dragging`, which carries the full derived kinematic state and
/// is recomputed whole on every gesture update. On release a control either
/// returns to `Inactive` or, for lockable controls whose release predicate
/// holds, moves to `Locked`; only an explicit unlock leaves `Locked`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragState<K> {
    Inactive,
    Locked,
    Dragging(K),
}

impl<K> Default for DragState<K> {
    fn default() -> Self {
        DragState::Inactive
    }
}

impl<K> DragState<K> {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging(_))
    }

    pub fn is_locked(&self) -> bool {
        matches!(self, DragState::Locked)
    }

    /// Active means "not inactive": dragging or locked.
    pub fn is_active(&self) -> bool {
        !matches!(self, DragState::Inactive)
    }

    pub fn kinematics(&self) -> Option<&K> {
        match self {
            DragState::Dragging(k) => Some(k),
            _ => None,
        }
    }
}

impl DragState<KinematicState1D> {
    pub fn time_ms(&self) -> Option<u64> {
        self.kinematics().map(|k| k.time_ms)
    }

    pub fn translation(&self) -> f32 {
        self.kinematics().map(|k| k.translation).unwrap_or(0.0)
    }

    pub fn start_location(&self) -> Option<f32> {
        self.kinematics().map(|k| k.start_location)
    }

    pub fn velocity(&self) -> f32 {
        self.kinematics().map(|k| k.velocity).unwrap_or(0.0)
    }
}

impl DragState<KinematicState2D> {
    pub fn time_ms(&self) -> Option<u64> {
        self.kinematics().map(|k| k.time_ms)
    }

    pub fn translation(&self) -> Point {
        self.kinematics().map(|k| k.translation).unwrap_or(Point::ZERO)
    }

    pub fn start_location(&self) -> Option<Point> {
        self.kinematics().map(|k| k.start_location)
    }

    pub fn velocity(&self) -> Point {
        self.kinematics().map(|k| k.velocity).unwrap_or(Point::ZERO)
    }

    pub fn acceleration(&self) -> Point {
        self.kinematics()
            .map(|k| k.acceleration)
            .unwrap_or(Point::ZERO)
    }

    /// Direction of the current translation from the gesture origin.
    pub fn angle(&self) -> Angle {
        match self.kinematics() {
            Some(k) => Angle::direction(Point::ZERO, k.translation),
            None => Angle::ZERO,
        }
    }

    /// Distance the thumb has been displaced from the gesture origin.
    pub fn radial_offset(&self) -> f32 {
        self.kinematics()
            .map(|k| k.translation.magnitude())
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DragSample2D;

    #[test]
    fn test_default_is_inactive() {
        let state: DragState<KinematicState2D> = DragState::default();
        assert!(!state.is_active());
        assert_eq!(state.translation(), Point::ZERO);
        assert_eq!(state.velocity(), Point::ZERO);
        assert!(state.start_location().is_none());
    }

    #[test]
    fn test_locked_is_active_but_not_dragging() {
        let state: DragState<KinematicState2D> = DragState::Locked;
        assert!(state.is_active());
        assert!(state.is_locked());
        assert!(!state.is_dragging());
        assert_eq!(state.radial_offset(), 0.0);
    }

    #[test]
    fn test_dragging_exposes_kinematics() {
        let k = KinematicState2D::derive(
            None,
            DragSample2D {
                time_ms: 5,
                translation: Point::new(3.0, 4.0),
                start_location: Point::new(1.0, 1.0),
            },
        );
        let state = DragState::Dragging(k);
        assert!(state.is_dragging());
        assert_eq!(state.radial_offset(), 5.0);
        assert_eq!(state.start_location(), Some(Point::new(1.0, 1.0)));
    }
}

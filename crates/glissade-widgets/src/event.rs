//! The host-input interface.
//!
//! Widgets are agnostic to how a drag stream is produced; the host adapts
//! its platform's pointer events into [`DragEvent`]s and feeds them in
//! delivery order. A cancelled gesture is handled as a normal end at the
//! last known location: the value it mapped to is committed, matching what
//! the user last saw.

use glissade_ui_graphics::Point;
use web_time::Instant;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragPhase {
    Started,
    Moved,
    Ended,
    Cancelled,
}

impl DragPhase {
    /// Whether this phase terminates the gesture.
    pub fn is_end(&self) -> bool {
        matches!(self, DragPhase::Ended | DragPhase::Cancelled)
    }
}

/// One pointer-drag update, in the widget's local coordinate space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragEvent {
    pub phase: DragPhase,
    /// Current pointer location.
    pub location: Point,
    /// Total translation since the gesture started.
    pub translation: Point,
    /// Event timestamp in milliseconds, monotonic per gesture.
    pub time_ms: u64,
}

impl DragEvent {
    /// Where the gesture started.
    pub fn start_location(&self) -> Point {
        self.location - self.translation
    }
}

/// Stamps gesture events with monotonic milliseconds.
///
/// Hosts that do not already carry event timestamps can create one clock
/// per input source and stamp events as they arrive.
#[derive(Clone, Debug)]
pub struct GestureClock {
    epoch: Instant,
}

impl Default for GestureClock {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureClock {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }

    pub fn timestamp_ms(&self) -> u64 {
        self.epoch.elapsed().as_millis() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_location() {
        let event = DragEvent {
            phase: DragPhase::Moved,
            location: Point::new(30.0, 40.0),
            translation: Point::new(10.0, 15.0),
            time_ms: 0,
        };
        assert_eq!(event.start_location(), Point::new(20.0, 25.0));
    }

    #[test]
    fn test_end_phases() {
        assert!(DragPhase::Ended.is_end());
        assert!(DragPhase::Cancelled.is_end());
        assert!(!DragPhase::Moved.is_end());
        assert!(!DragPhase::Started.is_end());
    }
}

//! The haptic collaborator.

/// Fire-and-forget haptic notifications.
///
/// Widgets call these only on edge transitions (first frame at a limit,
/// lock engagement), never every frame a condition holds. The default
/// implementations do nothing, so hosts without haptic hardware implement
/// nothing.
pub trait Haptics {
    /// A generic impact: the thumb reached a limit or entered a lock
    /// region.
    fn impact_occurred(&self) {}

    /// A joystick lock engaged successfully.
    fn lock_engaged(&self) {}
}

/// Haptics sink for hosts without feedback hardware.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoHaptics;

impl Haptics for NoHaptics {}

#[cfg(test)]
pub(crate) struct CountingHaptics {
    pub impacts: std::cell::Cell<usize>,
    pub locks: std::cell::Cell<usize>,
}

#[cfg(test)]
impl CountingHaptics {
    pub fn new() -> std::rc::Rc<Self> {
        std::rc::Rc::new(Self {
            impacts: std::cell::Cell::new(0),
            locks: std::cell::Cell::new(0),
        })
    }
}

#[cfg(test)]
impl Haptics for CountingHaptics {
    fn impact_occurred(&self) {
        self.impacts.set(self.impacts.get() + 1);
    }

    fn lock_engaged(&self) {
        self.locks.set(self.locks.get() + 1);
    }
}

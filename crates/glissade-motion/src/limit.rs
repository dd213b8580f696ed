//! Edge-triggered limit notification.

/// Detects the false→true edge of an "at limit" predicate.
///
/// Limits are evaluated every update, but feedback (a haptic tap, say) must
/// fire exactly once per limit entry, not every frame the pointer rests on
/// the edge. One notifier instance tracks one boundary; a trackpad's x and
/// y limits are two independent notifiers.
#[derive(Clone, Copy, Debug, Default)]
pub struct LimitNotifier {
    was_at_limit: bool,
}

impl LimitNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds the current predicate value; returns whether to fire.
    ///
    /// Fires iff the predicate is true now and was false on the previous
    /// call. The new value is always stored.
    pub fn check(&mut self, at_limit_now: bool) -> bool {
        let fire = at_limit_now && !self.was_at_limit;
        self.was_at_limit = at_limit_now;
        fire
    }

    pub fn is_at_limit(&self) -> bool {
        self.was_at_limit
    }

    pub fn reset(&mut self) {
        self.was_at_limit = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_per_entry() {
        let mut notifier = LimitNotifier::new();
        let inputs = [false, true, true, true, false, true];
        let fired: Vec<bool> = inputs.iter().map(|&b| notifier.check(b)).collect();
        assert_eq!(fired, [false, true, false, false, false, true]);
        assert_eq!(fired.iter().filter(|&&f| f).count(), 2);
    }

    #[test]
    fn test_reset_allows_refire() {
        let mut notifier = LimitNotifier::new();
        assert!(notifier.check(true));
        assert!(!notifier.check(true));
        notifier.reset();
        assert!(notifier.check(true));
    }
}

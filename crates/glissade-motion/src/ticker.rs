//! Fixed-period tick accumulation.

/// Converts arbitrary elapsed-time reports into a whole number of
/// fixed-period ticks, carrying the remainder.
///
/// The coasting physics are written against a fixed 10ms tick. Hosts drive
/// this from whatever timer or frame callback they have; a late callback
/// simply yields several ticks at once, keeping the physics independent of
/// the render loop. The ticker dies with the widget that owns it — there is
/// no background task to cancel.
#[derive(Clone, Copy, Debug)]
pub struct FixedTicker {
    period_ms: u64,
    carry_ms: u64,
}

impl FixedTicker {
    pub fn new(period_ms: u64) -> Self {
        Self {
            period_ms: period_ms.max(1),
            carry_ms: 0,
        }
    }

    pub fn period_ms(&self) -> u64 {
        self.period_ms
    }

    /// Reports `elapsed_ms` more milliseconds; returns how many whole
    /// ticks that makes, remembering any remainder for the next call.
    pub fn advance(&mut self, elapsed_ms: u64) -> u64 {
        self.carry_ms += elapsed_ms;
        let ticks = self.carry_ms / self.period_ms;
        self.carry_ms %= self.period_ms;
        ticks
    }
}

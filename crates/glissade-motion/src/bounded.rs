//! Bounded values and range mapping.
//!
//! Every control ultimately publishes a `f64` inside a closed range. The
//! mappers here clamp explicitly on every write; raw gesture input is never
//! trusted to be pre-bounded.

/// Clamps `value` into `[min, max]`.
pub fn clamp_to_range(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// `(value - min) / (max - min)`, clamped to `[0, 1]`.
///
/// A degenerate range (`min == max`) has no meaningful percentage; it is
/// defined as 0.0 so callers never see NaN.
pub fn percent_for_value(value: f64, min: f64, max: f64) -> f64 {
    if max <= min {
        return 0.0;
    }
    ((value - min) / (max - min)).clamp(0.0, 1.0)
}

/// `min + t * (max - min)` with `t` clamped to `[0, 1]` first.
pub fn value_for_percent(t: f64, min: f64, max: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    min + t * (max - min)
}

/// A current value carried together with its closed range.
///
/// The invariant `min <= current <= max` holds at all observable times;
/// every mutation clamps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundedValue {
    current: f64,
    min: f64,
    max: f64,
}

impl BoundedValue {
    pub fn new(current: f64, min: f64, max: f64) -> Self {
        Self {
            current: clamp_to_range(current, min, max),
            min,
            max,
        }
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn set(&mut self, value: f64) {
        self.current = clamp_to_range(value, self.min, self.max);
    }

    pub fn set_percent(&mut self, t: f64) {
        self.current = value_for_percent(t, self.min, self.max);
    }

    pub fn percent(&self) -> f64 {
        percent_for_value(self.current, self.min, self.max)
    }

    /// Whether the value sits exactly on either range bound.
    pub fn at_bound(&self) -> bool {
        self.current == self.min || self.current == self.max
    }
}

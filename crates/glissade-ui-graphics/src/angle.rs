//! Angle math for radial controls.

use crate::Point;
use std::f32::consts::TAU;
use std::ops::{Add, Sub};

/// An angle stored in radians, measured from the vector pointing in the
/// trailing (+x) direction, growing clockwise in screen coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Angle {
    radians: f32,
}

impl Angle {
    pub const ZERO: Angle = Angle { radians: 0.0 };

    pub const fn from_radians(radians: f32) -> Self {
        Self { radians }
    }

    pub fn from_degrees(degrees: f32) -> Self {
        Self {
            radians: degrees.to_radians(),
        }
    }

    /// Fraction of a full turn in `[0, 1)`.
    pub fn from_fraction(fraction: f32) -> Self {
        Self {
            radians: fraction * TAU,
        }
    }

    pub fn radians(&self) -> f32 {
        self.radians
    }

    pub fn degrees(&self) -> f32 {
        self.radians.to_degrees()
    }

    /// The direction from `from` to `to`. `Angle::ZERO` when both points
    /// coincide.
    pub fn direction(from: Point, to: Point) -> Angle {
        let d = to - from;
        if d == Point::ZERO {
            return Angle::ZERO;
        }
        Angle::from_radians(d.y.atan2(d.x))
    }

    /// This angle as a fraction of a full turn, normalized into `[0, 1)`.
    ///
    /// `atan2` hands back `(-pi, pi]`; radial sliders want the positive
    /// branch so that a clockwise sweep maps monotonically onto the value
    /// range.
    pub fn fraction_of_turn(&self) -> f32 {
        let mut turn = self.radians.rem_euclid(TAU) / TAU;
        if turn >= 1.0 {
            turn -= 1.0;
        }
        turn
    }

    pub fn cos(&self) -> f32 {
        self.radians.cos()
    }

    pub fn sin(&self) -> f32 {
        self.radians.sin()
    }
}

impl Add for Angle {
    type Output = Angle;
    fn add(self, rhs: Angle) -> Angle {
        Angle::from_radians(self.radians + rhs.radians)
    }
}

impl Sub for Angle {
    type Output = Angle;
    fn sub(self, rhs: Angle) -> Angle {
        Angle::from_radians(self.radians - rhs.radians)
    }
}

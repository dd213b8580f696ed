//! Declarative visual descriptions produced by the default control styles.
//!
//! The control cores never inspect these; a host renderer interprets them
//! however it likes. Custom styles are free to use their own element type
//! instead and ignore this module entirely.

use crate::{Angle, Color, Size};

/// A themeable element of a control: a thumb, a track, a hit region.
#[derive(Clone, Debug, PartialEq)]
pub enum Visual {
    /// A filled circle. `radius: None` means "fill the available space".
    Circle { radius: Option<f32>, fill: Color },
    /// A circular ring stroked from 0 to `trim` of a full turn.
    Ring {
        trim: f32,
        stroke: Color,
        line_width: f32,
    },
    /// A filled rounded rectangle of an optional fixed size.
    RoundedRect {
        corner_radius: f32,
        fill: Color,
        size: Option<Size>,
    },
    /// A straight line at `angle`, filled from 0 to `trim` of its length.
    Line {
        angle: Angle,
        trim: f32,
        stroke: Color,
        line_width: f32,
    },
    /// Evenly spaced tick marks along the track.
    TickMarks {
        spacing: f32,
        ticks: u32,
        stroke: Color,
    },
    /// Several visuals stacked back-to-front.
    Stack(Vec<Visual>),
}

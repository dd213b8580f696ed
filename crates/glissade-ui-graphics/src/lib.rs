//! Pure math/data for Glissade controls
//!
//! This crate contains the geometry primitives, angle math, path lookup
//! tables and the small declarative `Visual` vocabulary that the control
//! widgets and their default styles are built from. Nothing in here talks
//! to a renderer or an input system.

mod angle;
mod color;
mod geometry;
mod intersect;
mod path;
mod visual;

pub use angle::*;
pub use color::*;
pub use geometry::*;
pub use intersect::*;
pub use path::*;
pub use visual::*;

pub mod prelude {
    pub use crate::angle::Angle;
    pub use crate::color::Color;
    pub use crate::geometry::{Point, Rect, Size};
    pub use crate::path::PathLookupTable;
    pub use crate::visual::Visual;
}

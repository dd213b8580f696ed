//! Gesture-to-value kinematics and inertial motion engine.
//!
//! Everything the Glissade controls share lives here: timestamped drag
//! samples and their finite-difference kinematics, the drag state machine,
//! bounded value mapping, the inertial coasting engine for overflowing
//! tracks, and edge-triggered limit notification. All of it is plain
//! synchronous arithmetic; the host delivers pointer events and drives the
//! fixed-period tick.

mod bounded;
mod coasting;
mod drag_state;
mod kinematics;
mod limit;
pub mod motion_constants;
mod sample;
mod ticker;

pub use bounded::*;
pub use coasting::*;
pub use drag_state::*;
pub use kinematics::*;
pub use limit::*;
pub use sample::*;
pub use ticker::*;

//! Gesture-driven control widgets.
//!
//! Each widget here binds a continuous or angular value to pointer-drag
//! gestures: the host feeds it [`DragEvent`]s, the widget maps them onto
//! its bound value through the kinematics in `glissade-motion`, and a
//! pluggable style turns the widget's configuration snapshot into whatever
//! visual elements the host renders. Styles are injected through the
//! constructor; there is no ambient style environment.

mod binding;
mod event;
mod haptics;

mod joystick;
mod lslider;
mod overflow_slider;
mod pslider;
mod radial_pad;
mod rslider;
mod segmented_slider;
mod track_pad;

pub use binding::*;
pub use event::*;
pub use haptics::*;

pub use joystick::*;
pub use lslider::*;
pub use overflow_slider::*;
pub use pslider::*;
pub use radial_pad::*;
pub use rslider::*;
pub use segmented_slider::*;
pub use track_pad::*;

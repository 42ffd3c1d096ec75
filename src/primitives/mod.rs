//! Value primitives shared by the transform engine
//!
//! Each primitive renders its own CSS fragment; nothing here touches the DOM.

#[macro_use]
pub mod bounded;
pub mod angle;
pub mod animation;
pub mod hue;
pub mod opacity;
pub mod percent;
pub mod position;
pub mod scale;

pub use angle::{Angle, Axis};
pub use animation::AnimationTiming;
pub use hue::{Hsl, Hue};
pub use opacity::Opacity;
pub use percent::Percent;
pub use position::{Point, Rect};
pub use scale::Scale;

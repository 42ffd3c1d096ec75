//! Transform - what the engine writes to an element
//!
//! A `Transform` is rendered into `style.transform`, a `Background`
//! into `style.background`. Both are plain values so the engine can be
//! tested by comparing them, and the DOM layer only ever sees CSS text.

pub mod background;
pub mod pose;

pub use background::{Background, Rgba};
pub use pose::Transform;

//! Surface - the narrow slice of an element the engine is allowed to touch
//!
//! Geometry in, styles and classes out. Methods take `&self`: the browser
//! owns the element and every write goes through interior mutability on
//! its side, so a surface handle can be cloned into any number of callbacks.

pub mod dom;
#[cfg(test)]
pub mod memory;

use crate::error::SurfaceError;
use crate::primitives::Rect;
use crate::transform::{Background, Transform};

pub use dom::{DomSurface, WindowViewport};
#[cfg(test)]
pub use memory::{FixedViewport, MemorySurface};

pub trait Surface {
    /// Current geometry. Never cached: the element may have reflowed.
    fn bounding_box(&self) -> Rect;

    fn set_style(&self, property: &str, value: &str) -> Result<(), SurfaceError>;

    /// Drops an inline style, handing the property back to the stylesheet
    fn clear_style(&self, property: &str) -> Result<(), SurfaceError>;

    fn add_class(&self, class: &str) -> Result<(), SurfaceError>;

    fn remove_class(&self, class: &str) -> Result<(), SurfaceError>;

    fn has_class(&self, class: &str) -> bool;

    fn set_transform(&self, transform: &Transform) -> Result<(), SurfaceError> {
        self.set_style("transform", &transform.to_css())
    }

    fn set_background(&self, background: &Background) -> Result<(), SurfaceError> {
        self.set_style("background", &background.to_css())
    }
}

/// Source of the current viewport width
pub trait Viewport {
    fn width(&self) -> f32;
}

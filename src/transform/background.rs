//! Background - the fills the engine writes to `style.background`

use crate::primitives::{Hsl, Opacity, Point};

/// `rgba()` color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: Opacity,
}

impl Rgba {
    pub const fn white(a: Opacity) -> Self {
        Self { r: 255, g: 255, b: 255, a }
    }

    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Background {
    Flat(Rgba),
    /// Circular gradient centered at a point local to the element
    Radial { at: Point, inner: Rgba, outer: Rgba },
    /// Two-stop linear gradient along `angle` degrees
    Linear { angle: f32, from: Hsl, to: Hsl },
}

impl Background {
    pub fn to_css(&self) -> String {
        match self {
            Self::Flat(color) => color.to_css(),
            Self::Radial { at, inner, outer } => format!(
                "radial-gradient(circle at {}px {}px, {}, {})",
                at.x,
                at.y,
                inner.to_css(),
                outer.to_css(),
            ),
            Self::Linear { angle, from, to } => {
                format!("linear-gradient({angle}deg, {}, {})", from.to_css(), to.to_css())
            }
        }
    }
}

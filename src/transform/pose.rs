//! Transform - an ordered CSS transform chain
//!
//! Functions are emitted in a fixed order: anchor, perspective, lift,
//! translate, rotateX, rotateY, rotateZ, scale. Absent parts are skipped.

use crate::primitives::{Angle, Axis, Point, Scale};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Transform {
    /// `translate(-50%, -50%)`, for elements positioned by their center
    pub anchor_centered: bool,
    pub perspective: Option<f32>,
    /// Constant vertical offset applied before any pointer-driven translation
    pub lift: Option<f32>,
    pub translate: Option<Point>,
    pub rotate_x: Option<Angle>,
    pub rotate_y: Option<Angle>,
    pub rotate_z: Option<Angle>,
    pub scale: Option<Scale>,
}

impl Transform {
    pub fn identity() -> Self {
        Self::default()
    }

    pub fn with_anchor_centered(mut self) -> Self {
        self.anchor_centered = true;
        self
    }

    pub fn with_perspective(mut self, px: f32) -> Self {
        self.perspective = Some(px);
        self
    }

    pub fn with_lift(mut self, px: f32) -> Self {
        self.lift = Some(px);
        self
    }

    pub fn with_translate(mut self, by: Point) -> Self {
        self.translate = Some(by);
        self
    }

    pub fn with_rotation(mut self, x: Angle, y: Angle) -> Self {
        self.rotate_x = Some(x);
        self.rotate_y = Some(y);
        self
    }

    pub fn with_rotate_z(mut self, z: Angle) -> Self {
        self.rotate_z = Some(z);
        self
    }

    pub fn with_scale(mut self, scale: Scale) -> Self {
        self.scale = Some(scale);
        self
    }

    pub fn to_css(&self) -> String {
        let mut parts = Vec::new();
        if self.anchor_centered {
            parts.push("translate(-50%, -50%)".to_string());
        }
        if let Some(px) = self.perspective {
            parts.push(format!("perspective({px}px)"));
        }
        if let Some(px) = self.lift {
            parts.push(format!("translateY({px}px)"));
        }
        if let Some(by) = self.translate {
            parts.push(format!("translate({}px, {}px)", by.x, by.y));
        }
        if let Some(a) = self.rotate_x {
            parts.push(a.to_css(Axis::X));
        }
        if let Some(a) = self.rotate_y {
            parts.push(a.to_css(Axis::Y));
        }
        if let Some(a) = self.rotate_z {
            parts.push(a.to_css(Axis::Z));
        }
        if let Some(s) = self.scale {
            parts.push(s.to_css());
        }

        if parts.is_empty() {
            return "none".to_string();
        }
        parts.join(" ")
    }
}

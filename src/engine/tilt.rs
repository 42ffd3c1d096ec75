//! Pointer-to-transform mapping for tiltable surfaces
//!
//! Every response is a pure function of the pointer and the bounding box
//! read for that event. Nothing carries over between events.

use crate::config::TiltConfig;
use crate::primitives::{Angle, Opacity, Point, Rect};
use crate::transform::{Background, Rgba, Transform};

#[derive(Debug, Clone, PartialEq)]
pub enum TiltEngine {
    /// 3D card tilt under a fixed perspective
    Card { divisor: f32, perspective: f32 },
    /// Translation toward the pointer on top of a constant lift
    Parallax { divisor: f32, lift: f32 },
    /// Radial highlight following the pointer
    Glow { inner: Opacity, outer: Opacity, rest: Opacity },
}

/// What a tiltable surface should write
#[derive(Debug, Clone, PartialEq)]
pub enum TiltResponse {
    Transform(Transform),
    Background(Background),
}

/// `(rotateX, rotateY)` for a pointer at `local` within a box of half-extents `half`
pub fn card_rotation(local: Point, half: Point, divisor: f32) -> (Angle, Angle) {
    let rotate_y = Angle::new((local.x - half.x) / divisor);
    let rotate_x = Angle::new((half.y - local.y) / divisor);
    (rotate_x, rotate_y)
}

/// Translation for a pointer at `local` within a box of half-extents `half`
pub fn parallax_offset(local: Point, half: Point, divisor: f32) -> Point {
    Point::new((local.x - half.x) / divisor, (local.y - half.y) / divisor)
}

impl TiltEngine {
    pub fn card(config: &TiltConfig) -> Self {
        Self::Card {
            divisor: config.card_divisor,
            perspective: config.perspective_px,
        }
    }

    pub fn parallax(config: &TiltConfig) -> Self {
        Self::Parallax {
            divisor: config.parallax_divisor,
            lift: config.lift_px,
        }
    }

    pub fn glow(config: &TiltConfig) -> Self {
        Self::Glow {
            inner: config.glow_inner,
            outer: config.glow_outer,
            rest: config.glow_rest,
        }
    }

    /// Response to a pointer at client position `pointer` over `rect`
    pub fn respond(&self, pointer: Point, rect: Rect) -> TiltResponse {
        let local = rect.local(pointer);
        let half = rect.half_extents();
        match *self {
            Self::Card { divisor, perspective } => {
                let (x, y) = card_rotation(local, half, divisor);
                TiltResponse::Transform(
                    Transform::identity().with_perspective(perspective).with_rotation(x, y),
                )
            }
            Self::Parallax { divisor, lift } => TiltResponse::Transform(
                Transform::identity()
                    .with_lift(lift)
                    .with_translate(parallax_offset(local, half, divisor)),
            ),
            Self::Glow { inner, outer, .. } => TiltResponse::Background(Background::Radial {
                at: local,
                inner: Rgba::white(inner),
                outer: Rgba::white(outer),
            }),
        }
    }

    /// Fixed response for pointer-leave
    pub fn rest(&self) -> TiltResponse {
        match *self {
            Self::Card { perspective, .. } => TiltResponse::Transform(
                Transform::identity()
                    .with_perspective(perspective)
                    .with_rotation(Angle::ZERO, Angle::ZERO),
            ),
            Self::Parallax { lift, .. } => {
                TiltResponse::Transform(Transform::identity().with_lift(lift))
            }
            Self::Glow { rest, .. } => TiltResponse::Background(Background::Flat(Rgba::white(rest))),
        }
    }
}

impl TiltResponse {
    #[cfg(test)]
    pub fn to_css(&self) -> String {
        match self {
            Self::Transform(t) => t.to_css(),
            Self::Background(b) => b.to_css(),
        }
    }
}

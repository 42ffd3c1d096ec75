//! Auto-rotation with pointer override for the focal 3D element

use crate::config::RotationConfig;
use crate::primitives::{Angle, Point, Rect};
use crate::transform::Transform;

/// X and Y wrap at two full turns, where Z (half of X) completes one,
/// so every axis stays continuous.
const WINDING: f32 = 720.0;

/// Accumulated auto-rotation angles
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RotationAccumulator {
    pub x: Angle,
    pub y: Angle,
}

impl RotationAccumulator {
    pub fn advance(&mut self, ticks: u32, step: Angle) {
        let by = step.scaled(ticks as f32).wrapped(WINDING);
        self.x = self.x.rotate(by).wrapped(WINDING);
        self.y = self.y.rotate(by).wrapped(WINDING);
    }

    /// Z follows X at half speed
    pub fn z(&self) -> Angle {
        self.x.scaled(0.5)
    }

    pub fn pose(&self) -> Transform {
        Transform::identity()
            .with_rotation(self.x, self.y)
            .with_rotate_z(self.z())
    }
}

#[derive(Debug, Clone)]
pub struct RotationDriver {
    accumulator: RotationAccumulator,
    step: Angle,
    pointer_gain: f32,
    hovered: bool,
}

impl RotationDriver {
    pub fn new(config: &RotationConfig) -> Self {
        Self {
            accumulator: RotationAccumulator::default(),
            step: Angle::new(config.step_deg),
            pointer_gain: config.pointer_gain,
            hovered: false,
        }
    }

    #[cfg(test)]
    pub fn accumulator(&self) -> RotationAccumulator {
        self.accumulator
    }

    pub fn tick(&mut self) -> Option<Transform> {
        self.advance(1)
    }

    /// Advances the accumulator. Returns the auto pose to apply, or `None`
    /// while the pointer override holds the element.
    pub fn advance(&mut self, ticks: u32) -> Option<Transform> {
        self.accumulator.advance(ticks, self.step);
        (!self.hovered).then(|| self.accumulator.pose())
    }

    /// Tilt toward the pointer; linear in the offset from the element center
    pub fn pointer_move(&mut self, pointer: Point, rect: Rect) -> Transform {
        self.hovered = true;
        let offset = pointer.offset_from(rect.center());
        let rotate_y = Angle::new(offset.x * self.pointer_gain);
        let rotate_x = Angle::new(-offset.y * self.pointer_gain);
        Transform::identity().with_rotation(rotate_x, rotate_y)
    }

    pub fn pointer_leave(&mut self) -> Transform {
        self.hovered = false;
        Self::rest_pose()
    }

    pub fn rest_pose() -> Transform {
        Transform::identity().with_rotation(Angle::ZERO, Angle::ZERO)
    }
}

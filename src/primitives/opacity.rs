//! Opacity - alpha channel for translucent fills

use super::bounded::bounded_f32;

bounded_f32!(Opacity, 0.0, 1.0);

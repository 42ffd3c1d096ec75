//! Animation timing - per-element overrides for stylesheet keyframes
//!
//! The keyframes themselves live in CSS; this only shifts and stretches
//! them per element so a group of identical elements falls out of step.

/// `animation-delay` / `animation-duration` pair, in seconds
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnimationTiming {
    pub delay: f32,
    pub duration: Option<f32>,
}

impl AnimationTiming {
    pub const fn delayed(delay: f32) -> Self {
        Self { delay, duration: None }
    }

    pub const fn new(delay: f32, duration: f32) -> Self {
        Self { delay, duration: Some(duration) }
    }

    /// `(property, value)` pairs ready for `style.setProperty`
    pub fn style_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("animation-delay", format!("{}s", self.delay))];
        if let Some(duration) = self.duration {
            pairs.push(("animation-duration", format!("{duration}s")));
        }
        pairs
    }
}

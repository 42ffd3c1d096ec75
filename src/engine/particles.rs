//! Particle sampling - one-time randomized visual parameters

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::config::{ParticleConfig, Span};
use crate::primitives::{AnimationTiming, Percent};

/// Visual parameters of one decorative particle, fixed once assigned
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub left: Percent,
    pub top: Percent,
    pub size_px: f32,
    pub timing: AnimationTiming,
}

impl Particle {
    /// `(property, value)` pairs ready for `style.setProperty`
    pub fn style_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = self.timing.style_pairs();
        pairs.push(("width", format!("{}px", self.size_px)));
        pairs.push(("height", format!("{}px", self.size_px)));
        pairs.push(("left", self.left.to_css()));
        pairs.push(("top", self.top.to_css()));
        pairs
    }
}

/// Draws particles from the configured uniform ranges
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleSampler {
    config: ParticleConfig,
}

impl ParticleSampler {
    pub fn new(config: &ParticleConfig) -> Self {
        Self { config: config.clone() }
    }

    pub fn sample<R: Rng>(&self, rng: &mut R) -> Particle {
        let delay = Self::uniform(rng, self.config.delay_s);
        let duration = Self::uniform(rng, self.config.duration_s);
        let size_px = Self::uniform(rng, self.config.size_px);
        let left = Percent::clamped(rng.random_range(0.0..100.0));
        let top = Percent::clamped(rng.random_range(0.0..100.0));

        Particle {
            left,
            top,
            size_px,
            timing: AnimationTiming::new(delay, duration),
        }
    }

    /// `min + U[0,1) * (max - min)`; an empty span yields `min`
    fn uniform<R: Rng>(rng: &mut R, span: Span) -> f32 {
        if span.max <= span.min {
            return span.min;
        }
        rng.random_range(span.min..span.max)
    }
}

/// RNG seeded from the platform entropy source
pub fn fresh_rng() -> SmallRng {
    let mut seed = [0u8; 32];
    if let Err(err) = getrandom::fill(&mut seed) {
        tracing::warn!(%err, "no entropy source, particle layout falls back to a fixed seed");
    }
    SmallRng::from_seed(seed)
}

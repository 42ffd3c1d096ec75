//! Hue cycle driving a two-stop gradient

use crate::config::ColorConfig;
use crate::primitives::{Hsl, Hue};
use crate::transform::Background;

#[derive(Debug, Clone, PartialEq)]
pub struct HueCycle {
    hue: Hue,
    step: u16,
    spread: u16,
    saturation: u8,
    lightness: u8,
    angle: f32,
}

impl HueCycle {
    pub fn new(config: &ColorConfig) -> Self {
        Self {
            hue: Hue::RED,
            step: config.step,
            spread: config.spread,
            saturation: config.saturation,
            lightness: config.lightness,
            angle: config.angle_deg,
        }
    }

    pub fn hue(&self) -> Hue {
        self.hue
    }

    /// Hue of the second gradient stop
    pub fn secondary(&self) -> Hue {
        self.hue.advance(u64::from(self.spread))
    }

    pub fn tick(&mut self) -> Background {
        self.advance(1)
    }

    pub fn advance(&mut self, ticks: u64) -> Background {
        self.hue = self.hue.advance(ticks.wrapping_mul(u64::from(self.step)));
        self.gradient()
    }

    pub fn gradient(&self) -> Background {
        Background::Linear {
            angle: self.angle,
            from: self.color(self.hue),
            to: self.color(self.secondary()),
        }
    }

    fn color(&self, hue: Hue) -> Hsl {
        Hsl {
            hue,
            saturation: self.saturation,
            lightness: self.lightness,
        }
    }
}

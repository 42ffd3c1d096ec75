//! Hue - position on the color wheel, always in [0, 360)

/// Hue in whole degrees
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Hue(u16);

impl Hue {
    pub const RED: Self = Self(0);

    #[cfg(test)]
    pub const fn new(degrees: u16) -> Self {
        Self(degrees % 360)
    }

    pub const fn degrees(&self) -> u16 {
        self.0
    }

    /// Wrapping advance; `by` may exceed a full turn
    pub fn advance(&self, by: u64) -> Self {
        Self(((u64::from(self.0) + by % 360) % 360) as u16)
    }
}

/// `hsl()` color with fixed saturation and lightness percentages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsl {
    pub hue: Hue,
    pub saturation: u8,
    pub lightness: u8,
}

impl Hsl {
    pub fn to_css(&self) -> String {
        format!("hsl({}, {}%, {}%)", self.hue.degrees(), self.saturation, self.lightness)
    }
}

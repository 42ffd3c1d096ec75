//! Angle - rotation in degrees with CSS transform output

/// Angle in degrees. Not normalized unless asked to with `wrapped`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Angle(f32);

/// Rotation axis for `rotateX` / `rotateY` / `rotateZ`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    fn css_fn(&self) -> &'static str {
        match self {
            Self::X => "rotateX",
            Self::Y => "rotateY",
            Self::Z => "rotateZ",
        }
    }
}

impl Angle {
    pub const ZERO: Self = Self(0.0);

    pub const fn new(degrees: f32) -> Self {
        Self(degrees)
    }

    pub const fn degrees(&self) -> f32 {
        self.0
    }

    pub fn rotate(&self, by: Self) -> Self {
        Self(self.0 + by.0)
    }

    pub fn scaled(&self, factor: f32) -> Self {
        Self(self.0 * factor)
    }

    /// Into `[0, period)`
    pub fn wrapped(&self, period: f32) -> Self {
        Self(self.0.rem_euclid(period))
    }

    /// Always emits the function, even at zero: a reset pose must overwrite
    /// whatever rotation was applied before.
    pub fn to_css(&self, axis: Axis) -> String {
        // + 0.0 folds -0 into 0
        format!("{}({}deg)", axis.css_fn(), self.0 + 0.0)
    }
}

//! Percent - lengths relative to the containing block

use super::bounded::bounded_f32;

bounded_f32!(Percent, 0.0, 100.0);

impl Percent {
    pub const EMPTY: Self = Self::new(0.0);
    pub const FULL: Self = Self::new(100.0);

    pub fn to_css(&self) -> String {
        format!("{}%", self.0)
    }
}

//! Bounded - macro for creating range-constrained numeric types
//!
//! Generates types with compile-time validation for const contexts.
//! Runtime values coming from the DOM or from config go through `clamped`.

/// Creates a bounded f32 type with min/max constraints.
///
/// # Example
/// ```ignore
/// bounded_f32!(Opacity, 0.0, 1.0);
/// let o = Opacity::new(0.5);
/// let o2 = Opacity::clamped(1.7);  // Opacity(1.0)
/// ```
macro_rules! bounded_f32 {
    ($name:ident, $min:expr, $max:expr) => {
        #[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
        pub struct $name(f32);

        impl $name {
            pub const MIN: f32 = $min;
            pub const MAX: f32 = $max;

            #[track_caller]
            pub const fn new(value: f32) -> Self {
                if value < Self::MIN || value > Self::MAX {
                    panic!(concat!(
                        stringify!($name),
                        " value out of bounds [",
                        stringify!($min),
                        ", ",
                        stringify!($max),
                        "]"
                    ));
                }
                Self(value)
            }

            /// NaN collapses to the minimum.
            pub fn clamped(value: f32) -> Self {
                if value.is_nan() {
                    return Self(Self::MIN);
                }
                Self(value.clamp(Self::MIN, Self::MAX))
            }

            pub const fn value(&self) -> f32 {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self(Self::MIN)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = f32::deserialize(deserializer)?;
                if raw < Self::MIN || raw > Self::MAX || raw.is_nan() {
                    return Err(serde::de::Error::custom(format!(
                        "{} must be within [{}, {}], got {}",
                        stringify!($name),
                        Self::MIN,
                        Self::MAX,
                        raw
                    )));
                }
                Ok(Self(raw))
            }
        }
    };
}

pub(crate) use bounded_f32;

#[cfg(test)]
mod tests {
    use super::*;

    bounded_f32!(TestPercent, 0.0, 100.0);

    const FIFTY: TestPercent = TestPercent::new(50.0);

    #[test]
    fn bounded_const_valid() {
        assert_eq!(FIFTY.value(), 50.0);
        assert_eq!(FIFTY.to_string(), "50");
    }

    #[test]
    fn bounded_clamps_out_of_range() {
        assert_eq!(TestPercent::clamped(120.0).value(), 100.0);
        assert_eq!(TestPercent::clamped(-3.0).value(), 0.0);
        assert_eq!(TestPercent::clamped(f32::NAN).value(), 0.0);
    }

    #[test]
    fn bounded_deserialize_rejects_out_of_range() {
        assert!(serde_json::from_str::<TestPercent>("42.5").is_ok());
        assert!(serde_json::from_str::<TestPercent>("101").is_err());
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn bounded_rejects_invalid() {
        let _ = TestPercent::new(101.0);
    }
}

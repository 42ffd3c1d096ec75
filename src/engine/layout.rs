//! Viewport width → discrete button layout
//!
//! Both classifiers are pure and total over any width, NaN included
//! (NaN compares false everywhere and lands in the widest layout).

use crate::config::Breakpoints;

/// Layout of the general `.btn` groups
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonLayout {
    /// Icon-only, small buttons
    CompactIcons,
    Full,
}

impl ButtonLayout {
    pub fn classify(width: f32, breakpoints: &Breakpoints) -> Self {
        if width < breakpoints.compact_below {
            Self::CompactIcons
        } else {
            Self::Full
        }
    }
}

/// Layout of the trip-view action bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripLayout {
    /// Vertical stack, sync label hidden
    Stacked,
    /// Horizontal wrapping row
    Wrapped { sync_label: bool },
    Full,
}

impl TripLayout {
    pub fn classify(width: f32, breakpoints: &Breakpoints) -> Self {
        if width < breakpoints.stack_below {
            Self::Stacked
        } else if width < breakpoints.wrap_below {
            Self::Wrapped {
                sync_label: width >= breakpoints.sync_label_below,
            }
        } else {
            Self::Full
        }
    }

    pub fn shows_sync_label(&self) -> bool {
        match self {
            Self::Stacked => false,
            Self::Wrapped { sync_label } => *sync_label,
            Self::Full => true,
        }
    }
}

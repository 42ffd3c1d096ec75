//! Viewport-driven button layouts
//!
//! `apply` writes the whole layout for a width every time, so applying
//! the same width twice leaves the elements exactly as one apply did.

use std::cell::Cell;

use super::{Component, write_or_warn};
use crate::config::Breakpoints;
use crate::engine::{ButtonLayout, TripLayout};
use crate::surface::{Surface, Viewport};

pub const SMALL_BUTTON_CLASS: &str = "btn-sm";
pub const STACK_CLASS: &str = "flex-column";
pub const WRAP_CLASS: &str = "flex-wrap";

/// Labels carrying one of these already follow the breakpoints through
/// the stylesheet
pub const RESPONSIVE_LABEL_CLASSES: [&str; 3] = ["d-sm-inline", "d-md-inline", "d-lg-inline"];

/// Every `.btn` on the page: small and icon-only on narrow screens
pub struct ResponsiveButtons<S, V> {
    buttons: Vec<S>,
    labels: Vec<S>,
    viewport: V,
    breakpoints: Breakpoints,
    running: Cell<bool>,
}

impl<S: Surface, V: Viewport> ResponsiveButtons<S, V> {
    pub fn new(buttons: Vec<S>, labels: Vec<S>, viewport: V, breakpoints: &Breakpoints) -> Self {
        Self {
            buttons,
            labels,
            viewport,
            breakpoints: breakpoints.clone(),
            running: Cell::new(false),
        }
    }

    pub fn apply(&self, width: f32) -> ButtonLayout {
        let layout = ButtonLayout::classify(width, &self.breakpoints);
        let compact = layout == ButtonLayout::CompactIcons;

        for button in &self.buttons {
            let result = if compact {
                button.add_class(SMALL_BUTTON_CLASS)
            } else {
                button.remove_class(SMALL_BUTTON_CLASS)
            };
            write_or_warn("responsive-buttons", result);
        }
        for label in &self.labels {
            if RESPONSIVE_LABEL_CLASSES.iter().any(|c| label.has_class(c)) {
                continue;
            }
            let result = if compact {
                label.set_style("display", "none")
            } else {
                label.clear_style("display")
            };
            write_or_warn("responsive-buttons", result);
        }
        layout
    }

    pub fn on_resize(&self) {
        if self.running.get() {
            self.apply(self.viewport.width());
        }
    }
}

impl<S: Surface, V: Viewport> Component for ResponsiveButtons<S, V> {
    fn name(&self) -> &'static str {
        "responsive-buttons"
    }

    fn start(&self) {
        if !self.running.replace(true) {
            let layout = self.apply(self.viewport.width());
            tracing::debug!(?layout, "button layout applied");
        }
    }

    fn stop(&self) {
        self.running.set(false);
    }

    fn is_running(&self) -> bool {
        self.running.get()
    }
}

/// The trip-view action bar: stacked, wrapped or full-width
pub struct TripViewButtons<S, V> {
    group: S,
    sync_label: Option<S>,
    viewport: V,
    breakpoints: Breakpoints,
    running: Cell<bool>,
}

impl<S: Surface, V: Viewport> TripViewButtons<S, V> {
    pub fn new(group: S, sync_label: Option<S>, viewport: V, breakpoints: &Breakpoints) -> Self {
        Self {
            group,
            sync_label,
            viewport,
            breakpoints: breakpoints.clone(),
            running: Cell::new(false),
        }
    }

    pub fn apply(&self, width: f32) -> TripLayout {
        let layout = TripLayout::classify(width, &self.breakpoints);
        let (stack, wrap) = match layout {
            TripLayout::Stacked => (true, false),
            TripLayout::Wrapped { .. } => (false, true),
            TripLayout::Full => (false, false),
        };
        self.toggle(STACK_CLASS, stack);
        self.toggle(WRAP_CLASS, wrap);

        if let Some(label) = &self.sync_label {
            let result = if layout.shows_sync_label() {
                label.clear_style("display")
            } else {
                label.set_style("display", "none")
            };
            write_or_warn("trip-view-buttons", result);
        }
        layout
    }

    pub fn on_resize(&self) {
        if self.running.get() {
            self.apply(self.viewport.width());
        }
    }

    fn toggle(&self, class: &str, on: bool) {
        let result = if on {
            self.group.add_class(class)
        } else {
            self.group.remove_class(class)
        };
        write_or_warn("trip-view-buttons", result);
    }
}

impl<S: Surface, V: Viewport> Component for TripViewButtons<S, V> {
    fn name(&self) -> &'static str {
        "trip-view-buttons"
    }

    fn start(&self) {
        if !self.running.replace(true) {
            let layout = self.apply(self.viewport.width());
            tracing::debug!(?layout, "trip-view layout applied");
        }
    }

    fn stop(&self) {
        self.running.set(false);
    }

    fn is_running(&self) -> bool {
        self.running.get()
    }
}

//! In-memory surfaces for exercising components without a browser

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use super::{Surface, Viewport};
use crate::error::SurfaceError;
use crate::primitives::Rect;

#[derive(Debug, Default)]
struct MemoryState {
    rect: Rect,
    styles: BTreeMap<String, String>,
    classes: BTreeSet<String>,
    writes: usize,
    rejecting: bool,
}

/// Records every write. Clones share state, so a test keeps one handle
/// and gives the other to the component under test.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    state: Rc<RefCell<MemoryState>>,
}

impl MemorySurface {
    pub fn new(rect: Rect) -> Self {
        let surface = Self::default();
        surface.set_rect(rect);
        surface
    }

    pub fn with_classes(self, classes: &[&str]) -> Self {
        self.state
            .borrow_mut()
            .classes
            .extend(classes.iter().map(|c| c.to_string()));
        self
    }

    /// Simulates a reflow
    pub fn set_rect(&self, rect: Rect) {
        self.state.borrow_mut().rect = rect;
    }

    pub fn style(&self, property: &str) -> Option<String> {
        self.state.borrow().styles.get(property).cloned()
    }

    pub fn classes(&self) -> Vec<String> {
        self.state.borrow().classes.iter().cloned().collect()
    }

    /// Successful style and class writes so far
    pub fn writes(&self) -> usize {
        self.state.borrow().writes
    }

    /// Makes every subsequent write fail
    pub fn reject_writes(&self) {
        self.state.borrow_mut().rejecting = true;
    }

    fn write(&self, apply: impl FnOnce(&mut MemoryState)) -> Result<(), String> {
        let mut state = self.state.borrow_mut();
        if state.rejecting {
            return Err("surface detached".to_string());
        }
        apply(&mut state);
        state.writes += 1;
        Ok(())
    }
}

impl Surface for MemorySurface {
    fn bounding_box(&self) -> Rect {
        self.state.borrow().rect
    }

    fn set_style(&self, property: &str, value: &str) -> Result<(), SurfaceError> {
        self.write(|s| {
            s.styles.insert(property.to_string(), value.to_string());
        })
        .map_err(|message| SurfaceError::Style {
            property: property.to_string(),
            message,
        })
    }

    fn clear_style(&self, property: &str) -> Result<(), SurfaceError> {
        self.write(|s| {
            s.styles.remove(property);
        })
        .map_err(|message| SurfaceError::Style {
            property: property.to_string(),
            message,
        })
    }

    fn add_class(&self, class: &str) -> Result<(), SurfaceError> {
        self.write(|s| {
            s.classes.insert(class.to_string());
        })
        .map_err(|message| SurfaceError::ClassList {
            class: class.to_string(),
            message,
        })
    }

    fn remove_class(&self, class: &str) -> Result<(), SurfaceError> {
        self.write(|s| {
            s.classes.remove(class);
        })
        .map_err(|message| SurfaceError::ClassList {
            class: class.to_string(),
            message,
        })
    }

    fn has_class(&self, class: &str) -> bool {
        self.state.borrow().classes.contains(class)
    }
}

/// Viewport whose width a test sets directly
#[derive(Debug, Clone, Default)]
pub struct FixedViewport {
    width: Rc<Cell<f32>>,
}

impl FixedViewport {
    pub fn new(width: f32) -> Self {
        Self {
            width: Rc::new(Cell::new(width)),
        }
    }

    pub fn set_width(&self, width: f32) {
        self.width.set(width);
    }
}

impl Viewport for FixedViewport {
    fn width(&self) -> f32 {
        self.width.get()
    }
}

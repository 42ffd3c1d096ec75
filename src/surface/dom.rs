//! DOM-backed surfaces

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, NodeList, Window};

use super::{Surface, Viewport};
use crate::error::SurfaceError;
use crate::primitives::Rect;

/// A live page element
#[derive(Debug, Clone, PartialEq)]
pub struct DomSurface {
    element: HtmlElement,
}

impl DomSurface {
    pub fn new(element: HtmlElement) -> Self {
        Self { element }
    }

    pub fn element(&self) -> &HtmlElement {
        &self.element
    }

    /// First match for `selector`; an invalid selector counts as no match
    pub fn select(document: &Document, selector: &str) -> Option<Self> {
        let found = document.query_selector(selector).unwrap_or_else(|err| {
            tracing::debug!(selector, err = ?err, "selector rejected");
            None
        })?;
        found.dyn_into::<HtmlElement>().ok().map(Self::new)
    }

    pub fn select_all(document: &Document, selector: &str) -> Vec<Self> {
        match document.query_selector_all(selector) {
            Ok(nodes) => Self::collect(&nodes),
            Err(err) => {
                tracing::debug!(selector, err = ?err, "selector rejected");
                Vec::new()
            }
        }
    }

    /// First descendant of this element matching `selector`
    pub fn select_within(&self, selector: &str) -> Option<Self> {
        let found = self.element.query_selector(selector).ok()??;
        found.dyn_into::<HtmlElement>().ok().map(Self::new)
    }

    fn collect(nodes: &NodeList) -> Vec<Self> {
        (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .map(Self::new)
            .collect()
    }
}

fn js_message(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

impl Surface for DomSurface {
    fn bounding_box(&self) -> Rect {
        let r = self.element.get_bounding_client_rect();
        Rect::new(r.left() as f32, r.top() as f32, r.width() as f32, r.height() as f32)
    }

    fn set_style(&self, property: &str, value: &str) -> Result<(), SurfaceError> {
        self.element
            .style()
            .set_property(property, value)
            .map_err(|err| SurfaceError::Style {
                property: property.to_string(),
                message: js_message(&err),
            })
    }

    fn clear_style(&self, property: &str) -> Result<(), SurfaceError> {
        self.element
            .style()
            .remove_property(property)
            .map(|_| ())
            .map_err(|err| SurfaceError::Style {
                property: property.to_string(),
                message: js_message(&err),
            })
    }

    fn add_class(&self, class: &str) -> Result<(), SurfaceError> {
        self.element
            .class_list()
            .add_1(class)
            .map_err(|err| SurfaceError::ClassList {
                class: class.to_string(),
                message: js_message(&err),
            })
    }

    fn remove_class(&self, class: &str) -> Result<(), SurfaceError> {
        self.element
            .class_list()
            .remove_1(class)
            .map_err(|err| SurfaceError::ClassList {
                class: class.to_string(),
                message: js_message(&err),
            })
    }

    fn has_class(&self, class: &str) -> bool {
        self.element.class_list().contains(class)
    }
}

/// Browser window as a width source
#[derive(Debug, Clone)]
pub struct WindowViewport {
    window: Window,
}

impl WindowViewport {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Viewport for WindowViewport {
    fn width(&self) -> f32 {
        self.window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0) as f32
    }
}

//! Page binding - finds the decorated elements and wires events to components
//!
//! Binding runs once per mounted page. A component whose elements are
//! missing is simply not created; nothing here fails because markup is
//! absent.

use std::rc::Rc;

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, EventTarget, MouseEvent, Window};

use crate::config::FxConfig;
use crate::engine::TiltEngine;
use crate::error::FxError;
use crate::fx::{
    ColorCycle, Component, ParticleField, ProgressTracker, ResponsiveButtons, Rotator, TiltGroup,
    TripViewButtons,
};
use crate::primitives::Point;
use crate::schedule::BrowserScheduler;
use crate::surface::{DomSurface, WindowViewport};

/// Class names and ids the markup carries
pub mod selectors {
    pub const ROTATOR: &str = ".expense-cube";
    pub const PARTICLE: &str = ".particle";
    pub const HOLOGRAPHIC_CARD: &str = ".holographic-card";
    pub const FLOATING_CARD: &str = ".floating-card";
    pub const GLOW_BUTTON: &str = ".glow-button";
    pub const MORPH_CIRCLE: &str = ".morph-circle";
    pub const TRACKER_FILL: &str = "#trackerProgress";
    pub const TRACKER_MARKER: &str = ".tracker-marker";
    pub const BUTTON: &str = ".btn";
    pub const BUTTON_LABEL: &str = ".btn span";
    pub const TRIP_VIEW: &str = ".trip-view-buttons";
    pub const TRIP_GROUP: &str = ".btn-group";
    pub const SYNC_LABEL: &str = "form button span";
}

/// `<body>` attribute holding a JSON `FxConfig` override
pub const CONFIG_ATTRIBUTE: &str = "data-fx-config";

/// Every component bound to the current document, with the listeners
/// feeding them. Dropping the page stops all timers and removes all
/// listeners.
pub struct Page {
    components: Vec<Rc<dyn Component>>,
    listeners: Vec<EventListener>,
}

impl Page {
    /// Binds against the current document, reading config from `<body>`
    pub fn ready() -> Result<Self, FxError> {
        let window = web_sys::window().ok_or(FxError::NoWindow)?;
        let document = window.document().ok_or(FxError::NoDocument)?;
        let config = load_config(&document);
        Ok(Self::bind(&window, &document, &config))
    }

    pub fn bind(window: &Window, document: &Document, config: &FxConfig) -> Self {
        let mut page = Self {
            components: Vec::new(),
            listeners: Vec::new(),
        };

        page.bind_rotator(document, config);
        page.bind_tilt(
            document,
            "holographic-cards",
            selectors::HOLOGRAPHIC_CARD,
            TiltEngine::card(&config.tilt),
            None,
        );
        page.bind_tilt(
            document,
            "floating-cards",
            selectors::FLOATING_CARD,
            TiltEngine::parallax(&config.tilt),
            Some(config.tilt.float_stagger_s),
        );
        page.bind_tilt(
            document,
            "glow-buttons",
            selectors::GLOW_BUTTON,
            TiltEngine::glow(&config.tilt),
            None,
        );
        page.bind_particles(document, config);
        page.bind_color(document, config);
        page.bind_progress(document, config);
        page.bind_buttons(window, document, config);
        page.bind_trip_view(window, document, config);

        page.start();
        tracing::info!(
            components = page.components.len(),
            listeners = page.listeners.len(),
            "interactions ready"
        );
        page
    }

    pub fn start(&self) {
        for component in &self.components {
            component.start();
        }
    }

    pub fn stop(&self) {
        for component in &self.components {
            component.stop();
        }
    }

    fn push(&mut self, component: Rc<dyn Component>, elements: usize) {
        tracing::debug!(component = component.name(), elements, "bound");
        self.components.push(component);
    }

    fn listen(
        &mut self,
        target: &EventTarget,
        event: &'static str,
        callback: impl FnMut(&Event) + 'static,
    ) {
        self.listeners.push(EventListener::new(target, event, callback));
    }

    fn bind_rotator(&mut self, document: &Document, config: &FxConfig) {
        let cube = DomSurface::select(document, selectors::ROTATOR);
        let Some(rotator) = Rotator::new(cube.clone(), BrowserScheduler, &config.rotation) else {
            return;
        };
        let rotator = Rc::new(rotator);
        let Some(cube) = cube else {
            return;
        };

        let r = Rc::clone(&rotator);
        self.listen(cube.element(), "mousemove", move |event| {
            if let Some(pointer) = client_point(event) {
                r.on_pointer_move(pointer);
            }
        });
        let r = Rc::clone(&rotator);
        self.listen(cube.element(), "mouseleave", move |_| r.on_pointer_leave());

        self.push(rotator, 1);
    }

    fn bind_tilt(
        &mut self,
        document: &Document,
        name: &'static str,
        selector: &str,
        engine: TiltEngine,
        stagger_s: Option<f32>,
    ) {
        let surfaces = DomSurface::select_all(document, selector);
        if surfaces.is_empty() {
            return;
        }
        let mut group = TiltGroup::new(name, engine, surfaces.clone());
        if let Some(step) = stagger_s {
            group = group.with_stagger(step);
        }
        let group = Rc::new(group);

        for (index, surface) in surfaces.iter().enumerate() {
            let g = Rc::clone(&group);
            self.listen(surface.element(), "mousemove", move |event| {
                if let Some(pointer) = client_point(event) {
                    g.on_pointer_move(index, pointer);
                }
            });
            let g = Rc::clone(&group);
            self.listen(surface.element(), "mouseleave", move |_| g.on_pointer_leave(index));
        }

        self.push(group, surfaces.len());
    }

    fn bind_particles(&mut self, document: &Document, config: &FxConfig) {
        let surfaces = DomSurface::select_all(document, selectors::PARTICLE);
        if surfaces.is_empty() {
            return;
        }
        let count = surfaces.len();
        self.push(Rc::new(ParticleField::new(surfaces, &config.particles)), count);
    }

    fn bind_color(&mut self, document: &Document, config: &FxConfig) {
        let surfaces = DomSurface::select_all(document, selectors::MORPH_CIRCLE);
        let count = surfaces.len();
        if let Some(cycle) = ColorCycle::new(surfaces, BrowserScheduler, &config.color) {
            self.push(Rc::new(cycle), count);
        }
    }

    fn bind_progress(&mut self, document: &Document, config: &FxConfig) {
        let Some(fill) = DomSurface::select(document, selectors::TRACKER_FILL) else {
            return;
        };
        let markers = DomSurface::select_all(document, selectors::TRACKER_MARKER);
        let Some(tracker) =
            ProgressTracker::new(fill, markers.clone(), BrowserScheduler, &config.progress)
        else {
            return;
        };
        let tracker = Rc::new(tracker);

        for (index, marker) in markers.iter().enumerate() {
            let t = Rc::clone(&tracker);
            self.listen(marker.element(), "mouseenter", move |_| t.on_marker_enter(index));
            let t = Rc::clone(&tracker);
            self.listen(marker.element(), "mouseleave", move |_| t.on_marker_leave(index));
        }

        self.push(tracker, markers.len() + 1);
    }

    fn bind_buttons(&mut self, window: &Window, document: &Document, config: &FxConfig) {
        let buttons = DomSurface::select_all(document, selectors::BUTTON);
        if buttons.is_empty() {
            return;
        }
        let labels = DomSurface::select_all(document, selectors::BUTTON_LABEL);
        let count = buttons.len();
        let adapter = Rc::new(ResponsiveButtons::new(
            buttons,
            labels,
            WindowViewport::new(window.clone()),
            &config.layout,
        ));

        let a = Rc::clone(&adapter);
        self.listen(window, "resize", move |_| a.on_resize());
        self.push(adapter, count);
    }

    fn bind_trip_view(&mut self, window: &Window, document: &Document, config: &FxConfig) {
        let Some(container) = DomSurface::select(document, selectors::TRIP_VIEW) else {
            return;
        };
        let Some(group) = container.select_within(selectors::TRIP_GROUP) else {
            return;
        };
        let sync_label = container.select_within(selectors::SYNC_LABEL);
        let count = 1 + usize::from(sync_label.is_some());
        let adapter = Rc::new(TripViewButtons::new(
            group,
            sync_label,
            WindowViewport::new(window.clone()),
            &config.layout,
        ));

        let a = Rc::clone(&adapter);
        self.listen(window, "resize", move |_| a.on_resize());
        self.push(adapter, count);
    }
}

impl Drop for Page {
    fn drop(&mut self) {
        self.stop();
        tracing::debug!(components = self.components.len(), "interactions torn down");
    }
}

fn client_point(event: &Event) -> Option<Point> {
    let event = event.dyn_ref::<MouseEvent>()?;
    Some(Point::new(event.client_x() as f32, event.client_y() as f32))
}

/// Defaults, overridden by the `<body>` config attribute when it parses
pub fn load_config(document: &Document) -> FxConfig {
    let Some(raw) = document
        .body()
        .and_then(|body| body.get_attribute(CONFIG_ATTRIBUTE))
    else {
        return FxConfig::default();
    };
    FxConfig::from_json(&raw).unwrap_or_else(|err| {
        tracing::warn!(%err, "ignoring fx config override");
        FxConfig::default()
    })
}

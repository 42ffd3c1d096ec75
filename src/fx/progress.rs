use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::{Component, write_or_warn};
use crate::config::ProgressConfig;
use crate::engine::{ProgressReveal, marker_pose};
use crate::primitives::{Percent, Scale};
use crate::schedule::Scheduler;
use crate::surface::Surface;

const NAME: &str = "progress";

/// Class carried by the marker the reveal lands on
pub const ACTIVE_CLASS: &str = "active";

/// Progress bar that fills once after a delay, with hoverable markers
pub struct ProgressTracker<S, C: Scheduler> {
    fill: S,
    markers: Vec<S>,
    state: Rc<RefCell<ProgressReveal>>,
    scheduler: C,
    delay_ms: u32,
    hover_scale: Scale,
    timer: RefCell<Option<C::Timer>>,
    running: Cell<bool>,
}

impl<S, C> ProgressTracker<S, C>
where
    S: Surface + Clone + 'static,
    C: Scheduler,
{
    /// `None` without markers; there is nothing to track
    pub fn new(fill: S, markers: Vec<S>, scheduler: C, config: &ProgressConfig) -> Option<Self> {
        let state = ProgressReveal::new(markers.len())?;
        Some(Self {
            fill,
            markers,
            state: Rc::new(RefCell::new(state)),
            scheduler,
            delay_ms: config.reveal_delay_ms,
            hover_scale: config.hover_scale,
            timer: RefCell::new(None),
            running: Cell::new(false),
        })
    }

    pub fn is_revealed(&self) -> bool {
        self.state.borrow().is_revealed()
    }

    pub fn fill(&self) -> Percent {
        self.state.borrow().fill()
    }

    pub fn on_marker_enter(&self, index: usize) {
        self.pose_marker(index, true);
    }

    pub fn on_marker_leave(&self, index: usize) {
        self.pose_marker(index, false);
    }

    fn pose_marker(&self, index: usize, hovered: bool) {
        if !self.running.get() {
            return;
        }
        if let Some(marker) = self.markers.get(index) {
            write_or_warn(NAME, marker.set_transform(&marker_pose(hovered, self.hover_scale)));
        }
    }
}

impl<S, C> Component for ProgressTracker<S, C>
where
    S: Surface + Clone + 'static,
    C: Scheduler,
{
    fn name(&self) -> &'static str {
        NAME
    }

    fn start(&self) {
        if self.running.replace(true) || self.is_revealed() {
            return;
        }
        write_or_warn(NAME, self.fill.set_style("width", &self.fill().to_css()));

        let fill = self.fill.clone();
        let markers = self.markers.clone();
        let state = Rc::clone(&self.state);
        let timer = self.scheduler.after(self.delay_ms, move || {
            let Some(reveal) = state.borrow_mut().reveal() else {
                return;
            };
            write_or_warn(NAME, fill.set_style("width", &reveal.fill.to_css()));
            if let Some(marker) = markers.get(reveal.active_marker) {
                write_or_warn(NAME, marker.add_class(ACTIVE_CLASS));
            }
            tracing::debug!(marker = reveal.active_marker, "progress revealed");
        });
        *self.timer.borrow_mut() = Some(timer);
    }

    /// A pending reveal is cancelled; the next start waits the full delay
    fn stop(&self) {
        self.running.set(false);
        let timer = self.timer.borrow_mut().take();
        drop(timer);
    }

    fn is_running(&self) -> bool {
        self.running.get()
    }
}

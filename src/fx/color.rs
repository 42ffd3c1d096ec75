use std::cell::RefCell;
use std::rc::Rc;

use super::{Component, write_or_warn};
use crate::config::ColorConfig;
use crate::engine::HueCycle;
use crate::schedule::Scheduler;
use crate::surface::Surface;

const NAME: &str = "color-cycle";

/// Morphing circles whose gradient walks around the hue wheel
pub struct ColorCycle<S, C: Scheduler> {
    surfaces: Rc<Vec<S>>,
    cycle: Rc<RefCell<HueCycle>>,
    scheduler: C,
    period_ms: u32,
    timer: RefCell<Option<C::Timer>>,
}

impl<S, C> ColorCycle<S, C>
where
    S: Surface + 'static,
    C: Scheduler,
{
    /// `None` without circles; nothing is scheduled
    pub fn new(surfaces: Vec<S>, scheduler: C, config: &ColorConfig) -> Option<Self> {
        if surfaces.is_empty() {
            return None;
        }
        Some(Self {
            surfaces: Rc::new(surfaces),
            cycle: Rc::new(RefCell::new(HueCycle::new(config))),
            scheduler,
            period_ms: config.period_ms,
            timer: RefCell::new(None),
        })
    }

    #[cfg(test)]
    pub fn hue(&self) -> crate::primitives::Hue {
        self.cycle.borrow().hue()
    }
}

impl<S, C> Component for ColorCycle<S, C>
where
    S: Surface + 'static,
    C: Scheduler,
{
    fn name(&self) -> &'static str {
        NAME
    }

    fn start(&self) {
        if self.is_running() {
            return;
        }
        let surfaces = Rc::clone(&self.surfaces);
        let cycle = Rc::clone(&self.cycle);
        let timer = self.scheduler.every(self.period_ms, move || {
            let background = cycle.borrow_mut().tick();
            for surface in surfaces.iter() {
                write_or_warn(NAME, surface.set_background(&background));
            }
        });
        *self.timer.borrow_mut() = Some(timer);
    }

    fn stop(&self) {
        let timer = self.timer.borrow_mut().take();
        drop(timer);
    }

    fn is_running(&self) -> bool {
        self.timer.borrow().is_some()
    }
}

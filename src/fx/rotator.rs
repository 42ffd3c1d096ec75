use std::cell::RefCell;
use std::rc::Rc;

use super::{Component, write_or_warn};
use crate::config::RotationConfig;
use crate::engine::RotationDriver;
use crate::primitives::Point;
use crate::schedule::Scheduler;
use crate::surface::Surface;

const NAME: &str = "rotator";

/// Auto-rotating focal element with pointer tilt
pub struct Rotator<S, C: Scheduler> {
    surface: S,
    driver: Rc<RefCell<RotationDriver>>,
    scheduler: C,
    period_ms: u32,
    timer: RefCell<Option<C::Timer>>,
}

impl<S, C> Rotator<S, C>
where
    S: Surface + Clone + 'static,
    C: Scheduler,
{
    /// `None` when the focal element is absent; nothing is scheduled
    pub fn new(surface: Option<S>, scheduler: C, config: &RotationConfig) -> Option<Self> {
        Some(Self {
            surface: surface?,
            driver: Rc::new(RefCell::new(RotationDriver::new(config))),
            scheduler,
            period_ms: config.period_ms,
            timer: RefCell::new(None),
        })
    }

    #[cfg(test)]
    pub fn accumulator(&self) -> crate::engine::rotation::RotationAccumulator {
        self.driver.borrow().accumulator()
    }

    pub fn on_pointer_move(&self, pointer: Point) {
        if !self.is_running() {
            return;
        }
        let rect = self.surface.bounding_box();
        let pose = self.driver.borrow_mut().pointer_move(pointer, rect);
        write_or_warn(NAME, self.surface.set_transform(&pose));
    }

    pub fn on_pointer_leave(&self) {
        if !self.is_running() {
            return;
        }
        let pose = self.driver.borrow_mut().pointer_leave();
        write_or_warn(NAME, self.surface.set_transform(&pose));
    }
}

impl<S, C> Component for Rotator<S, C>
where
    S: Surface + Clone + 'static,
    C: Scheduler,
{
    fn name(&self) -> &'static str {
        NAME
    }

    fn start(&self) {
        if self.is_running() {
            return;
        }
        let surface = self.surface.clone();
        let driver = Rc::clone(&self.driver);
        let timer = self.scheduler.every(self.period_ms, move || {
            let pose = driver.borrow_mut().tick();
            if let Some(pose) = pose {
                write_or_warn(NAME, surface.set_transform(&pose));
            }
        });
        *self.timer.borrow_mut() = Some(timer);
    }

    /// A held pointer override is released with the timer, so the next
    /// start resumes auto-rotation.
    fn stop(&self) {
        let Some(timer) = self.timer.borrow_mut().take() else {
            return;
        };
        drop(timer);
        let rest = self.driver.borrow_mut().pointer_leave();
        write_or_warn(NAME, self.surface.set_transform(&rest));
    }

    fn is_running(&self) -> bool {
        self.timer.borrow().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{Angle, Rect};
    use crate::schedule::ManualClock;
    use crate::surface::MemorySurface;

    fn setup() -> (Rotator<MemorySurface, ManualClock>, MemorySurface, ManualClock) {
        let surface = MemorySurface::new(Rect::new(0.0, 0.0, 200.0, 200.0));
        let clock = ManualClock::new();
        let rotator =
            Rotator::new(Some(surface.clone()), clock.clone(), &RotationConfig::default()).unwrap();
        (rotator, surface, clock)
    }

    #[test]
    fn ticks_every_fifty_ms() {
        let (rotator, surface, clock) = setup();
        rotator.start();
        clock.advance(49);
        assert_eq!(surface.style("transform"), None);
        clock.advance(151);
        assert_eq!(
            surface.style("transform").as_deref(),
            Some("rotateX(2deg) rotateY(2deg) rotateZ(1deg)")
        );
    }

    #[test]
    fn hover_overrides_until_leave() {
        let (rotator, surface, clock) = setup();
        rotator.start();
        clock.advance(500);

        // 30px right of and 10px below the center (100, 100)
        rotator.on_pointer_move(Point::new(130.0, 110.0));
        let tilted = surface.style("transform");
        assert_eq!(tilted.as_deref(), Some("rotateX(-1deg) rotateY(3deg)"));

        clock.advance(200);
        assert_eq!(surface.style("transform"), tilted);
        assert_eq!(rotator.accumulator().x, Angle::new(7.0));

        rotator.on_pointer_leave();
        assert_eq!(surface.style("transform").as_deref(), Some("rotateX(0deg) rotateY(0deg)"));

        clock.advance(50);
        assert_eq!(
            surface.style("transform").as_deref(),
            Some("rotateX(7.5deg) rotateY(7.5deg) rotateZ(3.75deg)")
        );
    }

    #[test]
    fn geometry_is_read_per_event() {
        let (rotator, surface, _clock) = setup();
        rotator.start();
        rotator.on_pointer_move(Point::new(100.0, 100.0));
        assert_eq!(surface.style("transform").as_deref(), Some("rotateX(0deg) rotateY(0deg)"));

        surface.set_rect(Rect::new(50.0, 0.0, 200.0, 200.0));
        rotator.on_pointer_move(Point::new(100.0, 100.0));
        assert_eq!(surface.style("transform").as_deref(), Some("rotateX(0deg) rotateY(-5deg)"));
    }

    #[test]
    fn stop_halts_ticks_and_start_resumes() {
        let (rotator, surface, clock) = setup();
        rotator.start();
        rotator.start();
        assert_eq!(clock.pending(), 1);

        clock.advance(100);
        rotator.stop();
        assert!(!rotator.is_running());
        assert_eq!(surface.style("transform").as_deref(), Some("rotateX(0deg) rotateY(0deg)"));
        let writes = surface.writes();
        clock.advance(1000);
        rotator.on_pointer_move(Point::new(0.0, 0.0));
        assert_eq!(surface.writes(), writes);

        rotator.start();
        clock.advance(50);
        assert_eq!(rotator.accumulator().x, Angle::new(1.5));
    }

    #[test]
    fn stop_while_hovered_does_not_freeze_restart() {
        let (rotator, surface, clock) = setup();
        rotator.start();
        rotator.on_pointer_move(Point::new(130.0, 110.0));
        rotator.stop();
        // the leave arrives while stopped and is dropped
        rotator.on_pointer_leave();

        rotator.start();
        clock.advance(50);
        assert_eq!(
            surface.style("transform").as_deref(),
            Some("rotateX(0.5deg) rotateY(0.5deg) rotateZ(0.25deg)")
        );
    }

    #[test]
    fn absent_element_schedules_nothing() {
        let clock = ManualClock::new();
        let rotator = Rotator::<MemorySurface, _>::new(None, clock.clone(), &RotationConfig::default());
        assert!(rotator.is_none());
        assert_eq!(clock.pending(), 0);
    }
}

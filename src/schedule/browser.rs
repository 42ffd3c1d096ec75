use gloo_timers::callback::{Interval, Timeout};

use super::Scheduler;

/// Timers on the browser event loop (`setInterval` / `setTimeout`)
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

/// Handle to a live browser timer
#[derive(Debug)]
pub enum BrowserTimer {
    Interval(Interval),
    Timeout(Timeout),
}

impl Scheduler for BrowserScheduler {
    type Timer = BrowserTimer;

    fn every(&self, period_ms: u32, tick: impl FnMut() + 'static) -> Self::Timer {
        BrowserTimer::Interval(Interval::new(period_ms, tick))
    }

    fn after(&self, delay_ms: u32, fire: impl FnOnce() + 'static) -> Self::Timer {
        BrowserTimer::Timeout(Timeout::new(delay_ms, fire))
    }
}

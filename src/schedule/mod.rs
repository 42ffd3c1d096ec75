//! Scheduler - recurring and one-shot timers behind one seam
//!
//! A timer lives exactly as long as its handle. Dropping the handle
//! cancels it, the same contract as `gloo_timers::callback`.

pub mod browser;
#[cfg(test)]
pub mod manual;

pub use browser::BrowserScheduler;
#[cfg(test)]
pub use manual::ManualClock;

pub trait Scheduler {
    /// Cancels the timer on drop
    type Timer: 'static;

    /// Runs `tick` every `period_ms` until the handle is dropped
    fn every(&self, period_ms: u32, tick: impl FnMut() + 'static) -> Self::Timer;

    /// Runs `fire` once after `delay_ms` unless the handle is dropped first
    fn after(&self, delay_ms: u32, fire: impl FnOnce() + 'static) -> Self::Timer;
}

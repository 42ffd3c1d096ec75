//! Manual clock - virtual time that only moves when a test says so

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use super::Scheduler;

enum Callback {
    Repeating(Box<dyn FnMut()>),
    Once(Box<dyn FnOnce()>),
}

struct Entry {
    due_ms: u64,
    period_ms: u64,
    /// Taken out while the callback runs
    callback: Option<Callback>,
}

#[derive(Default)]
struct ClockState {
    now_ms: u64,
    next_id: u64,
    timers: BTreeMap<u64, Entry>,
}

impl ClockState {
    fn insert(&mut self, delay_ms: u32, period_ms: u64, callback: Callback) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.timers.insert(
            id,
            Entry {
                due_ms: self.now_ms + u64::from(delay_ms),
                period_ms,
                callback: Some(callback),
            },
        );
        id
    }

    /// Earliest timer due at or before `until`; ties fire in registration order
    fn next_due(&self, until: u64) -> Option<(u64, u64)> {
        self.timers
            .iter()
            .filter(|(_, e)| e.callback.is_some() && e.due_ms <= until)
            .map(|(id, e)| (e.due_ms, *id))
            .min()
    }
}

/// Deterministic `Scheduler`. Clones share one timeline.
#[derive(Clone, Default)]
pub struct ManualClock {
    state: Rc<RefCell<ClockState>>,
}

pub struct ManualTimer {
    id: u64,
    clock: Weak<RefCell<ClockState>>,
}

impl Drop for ManualTimer {
    fn drop(&mut self) {
        if let Some(state) = self.clock.upgrade() {
            // released before the callback drops, it may own timers too
            let removed = state.borrow_mut().timers.remove(&self.id);
            drop(removed);
        }
    }
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.state.borrow().now_ms
    }

    /// Live timers, cancelled and fired one-shots excluded
    pub fn pending(&self) -> usize {
        self.state.borrow().timers.len()
    }

    /// Moves time forward, firing every timer that comes due on the way.
    /// No borrow is held while a callback runs, so callbacks may register
    /// or cancel timers.
    pub fn advance(&self, ms: u64) {
        let until = self.now_ms() + ms;
        loop {
            let next = {
                let mut state = self.state.borrow_mut();
                let Some((due_ms, id)) = state.next_due(until) else {
                    break;
                };
                state.now_ms = due_ms;
                state
                    .timers
                    .get_mut(&id)
                    .and_then(|e| e.callback.take())
                    .map(|callback| (id, callback))
            };
            let Some((id, callback)) = next else {
                continue;
            };

            match callback {
                Callback::Once(fire) => {
                    fire();
                    self.state.borrow_mut().timers.remove(&id);
                }
                Callback::Repeating(mut tick) => {
                    tick();
                    let mut state = self.state.borrow_mut();
                    if let Some(entry) = state.timers.get_mut(&id) {
                        entry.due_ms += entry.period_ms;
                        entry.callback = Some(Callback::Repeating(tick));
                    }
                }
            }
        }
        self.state.borrow_mut().now_ms = until;
    }

    fn register(&self, delay_ms: u32, period_ms: u64, callback: Callback) -> ManualTimer {
        let id = self.state.borrow_mut().insert(delay_ms, period_ms, callback);
        ManualTimer {
            id,
            clock: Rc::downgrade(&self.state),
        }
    }
}

impl Scheduler for ManualClock {
    type Timer = ManualTimer;

    fn every(&self, period_ms: u32, tick: impl FnMut() + 'static) -> Self::Timer {
        // a zero period would fire forever within one advance
        let period_ms = period_ms.max(1);
        self.register(period_ms, u64::from(period_ms), Callback::Repeating(Box::new(tick)))
    }

    fn after(&self, delay_ms: u32, fire: impl FnOnce() + 'static) -> Self::Timer {
        self.register(delay_ms, 0, Callback::Once(Box::new(fire)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn interval_fires_per_period() {
        let clock = ManualClock::new();
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        let _timer = clock.every(50, move || c.set(c.get() + 1));

        clock.advance(49);
        assert_eq!(count.get(), 0);
        clock.advance(1);
        assert_eq!(count.get(), 1);
        clock.advance(1000);
        assert_eq!(count.get(), 21);
        assert_eq!(clock.now_ms(), 1050);
    }

    #[test]
    fn timeout_fires_once_at_deadline() {
        let clock = ManualClock::new();
        let fired = Rc::new(Cell::new(0));
        let f = fired.clone();
        let _timer = clock.after(1000, move || f.set(f.get() + 1));

        clock.advance(999);
        assert_eq!(fired.get(), 0);
        clock.advance(1);
        assert_eq!(fired.get(), 1);
        clock.advance(10_000);
        assert_eq!(fired.get(), 1);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn dropping_handle_cancels() {
        let clock = ManualClock::new();
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        let timer = clock.every(10, move || c.set(c.get() + 1));
        clock.advance(30);
        drop(timer);
        clock.advance(100);
        assert_eq!(count.get(), 3);
        assert_eq!(clock.pending(), 0);
    }

    #[test]
    fn interleaved_timers_fire_in_time_order() {
        let clock = ManualClock::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        let (a, b) = (log.clone(), log.clone());
        let _fast = clock.every(20, move || a.borrow_mut().push("fast"));
        let _slow = clock.every(30, move || b.borrow_mut().push("slow"));
        clock.advance(60);
        assert_eq!(*log.borrow(), vec!["fast", "slow", "fast", "fast", "slow"]);
    }

    #[test]
    fn callback_can_register_timers() {
        let clock = ManualClock::new();
        let hits = Rc::new(Cell::new(0));
        let inner_clock = clock.clone();
        let h = hits.clone();
        let keep = Rc::new(RefCell::new(Vec::new()));
        let k = keep.clone();
        let _outer = clock.after(10, move || {
            let h = h.clone();
            k.borrow_mut().push(inner_clock.after(5, move || h.set(h.get() + 1)));
        });
        clock.advance(20);
        assert_eq!(hits.get(), 1);
    }
}

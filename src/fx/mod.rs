//! Bound components - engine state wired to surfaces and timers
//!
//! Every component is generic over `Surface` (and `Scheduler` when it
//! ticks), so the same code drives live DOM elements in the browser and
//! in-memory surfaces under test. Event delivery is the caller's job: the
//! page binder forwards pointer and resize events to the `on_*` methods.

pub mod color;
pub mod particles;
pub mod progress;
pub mod responsive;
pub mod rotator;
pub mod tilt;

pub use color::ColorCycle;
pub use particles::ParticleField;
pub use progress::ProgressTracker;
pub use responsive::{ResponsiveButtons, TripViewButtons};
pub use rotator::Rotator;
pub use tilt::TiltGroup;

use crate::error::SurfaceError;

/// A schedulable unit with an explicit lifecycle.
///
/// `start` on a running component and `stop` on a stopped one are no-ops.
pub trait Component {
    fn name(&self) -> &'static str;
    fn start(&self);
    fn stop(&self);
    fn is_running(&self) -> bool;
}

/// Surface writes never abort a component; a rejected write leaves the
/// element as it was.
pub(crate) fn write_or_warn(component: &'static str, result: Result<(), SurfaceError>) {
    if let Err(err) = result {
        tracing::warn!(component, %err, "surface write rejected");
    }
}

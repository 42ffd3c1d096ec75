//! Engine - the state and math behind every effect
//!
//! Nothing in here knows about the DOM, timers or events. Each type takes
//! geometry or a tick count in and hands back a `Transform`, `Background`
//! or layout decision for the `fx` layer to write.

pub mod color;
pub mod layout;
pub mod particles;
pub mod progress;
pub mod rotation;
pub mod tilt;

pub use color::HueCycle;
pub use layout::{ButtonLayout, TripLayout};
pub use particles::{Particle, ParticleSampler, fresh_rng};
pub use progress::{ProgressReveal, marker_pose};
pub use rotation::RotationDriver;
pub use tilt::{TiltEngine, TiltResponse};

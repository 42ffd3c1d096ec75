use std::cell::{Cell, RefCell};

use rand::Rng;

use super::{Component, write_or_warn};
use crate::config::ParticleConfig;
use crate::engine::{Particle, ParticleSampler, fresh_rng};
use crate::surface::Surface;

const NAME: &str = "particles";

/// Marks an element whose particle parameters are already assigned
pub const SEEDED_CLASS: &str = "particle-seeded";

/// Decorative particles, each seeded once with random timing, size and
/// placement. The stylesheet animates them from there.
pub struct ParticleField<S> {
    surfaces: Vec<S>,
    sampler: ParticleSampler,
    assigned: RefCell<Vec<Option<Particle>>>,
    running: Cell<bool>,
}

impl<S: Surface> ParticleField<S> {
    pub fn new(surfaces: Vec<S>, config: &ParticleConfig) -> Self {
        let assigned = RefCell::new(vec![None; surfaces.len()]);
        Self {
            surfaces,
            sampler: ParticleSampler::new(config),
            assigned,
            running: Cell::new(false),
        }
    }

    /// Parameters this field assigned to `index`, if it did
    #[cfg(test)]
    pub fn assigned(&self, index: usize) -> Option<Particle> {
        self.assigned.borrow().get(index).copied().flatten()
    }

    /// Seeds every element not yet carrying `SEEDED_CLASS`. Returns how
    /// many were seeded.
    pub fn seed_with<R: Rng>(&self, rng: &mut R) -> usize {
        let mut assigned = self.assigned.borrow_mut();
        let mut seeded = 0;
        for (index, surface) in self.surfaces.iter().enumerate() {
            if surface.has_class(SEEDED_CLASS) {
                continue;
            }
            let particle = self.sampler.sample(rng);
            for (property, value) in particle.style_pairs() {
                write_or_warn(NAME, surface.set_style(property, &value));
            }
            write_or_warn(NAME, surface.add_class(SEEDED_CLASS));
            assigned[index] = Some(particle);
            seeded += 1;
        }
        seeded
    }
}

impl<S: Surface> Component for ParticleField<S> {
    fn name(&self) -> &'static str {
        NAME
    }

    fn start(&self) {
        if self.running.replace(true) {
            return;
        }
        let seeded = self.seed_with(&mut fresh_rng());
        tracing::debug!(seeded, total = self.surfaces.len(), "particles seeded");
    }

    /// Assigned parameters stay on the elements
    fn stop(&self) {
        self.running.set(false);
    }

    fn is_running(&self) -> bool {
        self.running.get()
    }
}

use std::cell::Cell;

use super::{Component, write_or_warn};
use crate::engine::{TiltEngine, TiltResponse};
use crate::primitives::{AnimationTiming, Point};
use crate::surface::Surface;

/// A set of surfaces sharing one tilt engine.
///
/// Each surface reacts independently: a pointer event addresses one index
/// and its response depends only on that surface's current geometry.
pub struct TiltGroup<S> {
    name: &'static str,
    engine: TiltEngine,
    surfaces: Vec<S>,
    /// Seconds of `animation-delay` per index, applied on start
    stagger_s: Option<f32>,
    armed: Cell<bool>,
}

impl<S: Surface> TiltGroup<S> {
    pub fn new(name: &'static str, engine: TiltEngine, surfaces: Vec<S>) -> Self {
        Self {
            name,
            engine,
            surfaces,
            stagger_s: None,
            armed: Cell::new(false),
        }
    }

    /// Offsets each surface's keyframe animation by `index * step_s`
    pub fn with_stagger(mut self, step_s: f32) -> Self {
        self.stagger_s = Some(step_s);
        self
    }

    pub fn on_pointer_move(&self, index: usize, pointer: Point) {
        if !self.armed.get() {
            return;
        }
        if let Some(surface) = self.surfaces.get(index) {
            let response = self.engine.respond(pointer, surface.bounding_box());
            self.write(surface, &response);
        }
    }

    pub fn on_pointer_leave(&self, index: usize) {
        if !self.armed.get() {
            return;
        }
        if let Some(surface) = self.surfaces.get(index) {
            self.write(surface, &self.engine.rest());
        }
    }

    fn write(&self, surface: &S, response: &TiltResponse) {
        let result = match response {
            TiltResponse::Transform(t) => surface.set_transform(t),
            TiltResponse::Background(b) => surface.set_background(b),
        };
        write_or_warn(self.name, result);
    }
}

impl<S: Surface> Component for TiltGroup<S> {
    fn name(&self) -> &'static str {
        self.name
    }

    fn start(&self) {
        if self.armed.replace(true) {
            return;
        }
        let Some(step) = self.stagger_s else {
            return;
        };
        for (index, surface) in self.surfaces.iter().enumerate() {
            let timing = AnimationTiming::delayed(index as f32 * step);
            for (property, value) in timing.style_pairs() {
                write_or_warn(self.name, surface.set_style(property, &value));
            }
        }
    }

    /// Disarms and settles every surface on its rest pose
    fn stop(&self) {
        if !self.armed.replace(false) {
            return;
        }
        let rest = self.engine.rest();
        for surface in &self.surfaces {
            self.write(surface, &rest);
        }
    }

    fn is_running(&self) -> bool {
        self.armed.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TiltConfig;
    use crate::primitives::Rect;
    use crate::surface::MemorySurface;

    fn cards(n: usize) -> Vec<MemorySurface> {
        (0..n)
            .map(|i| MemorySurface::new(Rect::new(i as f32 * 300.0, 0.0, 200.0, 100.0)))
            .collect()
    }

    #[test]
    fn each_card_tilts_independently() {
        let surfaces = cards(2);
        let group = TiltGroup::new("cards", TiltEngine::card(&TiltConfig::default()), surfaces.clone());
        group.start();

        // 50 right of the second card's center
        group.on_pointer_move(1, Point::new(450.0, 50.0));
        assert_eq!(
            surfaces[1].style("transform").as_deref(),
            Some("perspective(1000px) rotateX(0deg) rotateY(2deg)")
        );
        assert_eq!(surfaces[0].style("transform"), None);

        group.on_pointer_leave(1);
        assert_eq!(
            surfaces[1].style("transform").as_deref(),
            Some("perspective(1000px) rotateX(0deg) rotateY(0deg)")
        );
    }

    #[test]
    fn glow_writes_background() {
        let surfaces = cards(1);
        let group = TiltGroup::new("glow", TiltEngine::glow(&TiltConfig::default()), surfaces.clone());
        group.start();
        group.on_pointer_move(0, Point::new(10.0, 20.0));
        assert_eq!(
            surfaces[0].style("background").as_deref(),
            Some("radial-gradient(circle at 10px 20px, rgba(255, 255, 255, 0.2), rgba(255, 255, 255, 0.05))")
        );
        group.on_pointer_leave(0);
        assert_eq!(surfaces[0].style("background").as_deref(), Some("rgba(255, 255, 255, 0.1)"));
    }

    #[test]
    fn stagger_applies_once_on_start() {
        let surfaces = cards(3);
        let group = TiltGroup::new(
            "floating",
            TiltEngine::parallax(&TiltConfig::default()),
            surfaces.clone(),
        )
        .with_stagger(0.2);
        group.start();
        group.start();

        let delays: Vec<_> = surfaces.iter().map(|s| s.style("animation-delay")).collect();
        assert_eq!(
            delays,
            vec![Some("0s".to_string()), Some("0.2s".to_string()), Some("0.4s".to_string())]
        );
        assert!(surfaces.iter().all(|s| s.writes() == 1));
    }

    #[test]
    fn out_of_range_index_is_ignored() {
        let surfaces = cards(1);
        let group = TiltGroup::new("cards", TiltEngine::card(&TiltConfig::default()), surfaces.clone());
        group.start();
        group.on_pointer_move(5, Point::ORIGIN);
        group.on_pointer_leave(5);
        assert_eq!(surfaces[0].writes(), 0);
    }

    #[test]
    fn stop_rests_and_disarms() {
        let surfaces = cards(2);
        let group = TiltGroup::new(
            "floating",
            TiltEngine::parallax(&TiltConfig::default()),
            surfaces.clone(),
        );
        group.start();
        group.on_pointer_move(0, Point::new(140.0, 10.0));
        group.stop();
        assert!(surfaces.iter().all(|s| s.style("transform").as_deref() == Some("translateY(-10px)")));

        let writes = surfaces[0].writes();
        group.on_pointer_move(0, Point::new(0.0, 0.0));
        assert_eq!(surfaces[0].writes(), writes);
    }

    #[test]
    fn rejected_write_keeps_group_alive() {
        let surfaces = cards(2);
        let group = TiltGroup::new("cards", TiltEngine::card(&TiltConfig::default()), surfaces.clone());
        group.start();
        surfaces[0].reject_writes();
        group.on_pointer_move(0, Point::new(10.0, 10.0));
        group.on_pointer_move(1, Point::new(400.0, 50.0));
        assert_eq!(surfaces[0].style("transform"), None);
        assert!(surfaces[1].style("transform").is_some());
    }
}

//! One-shot progress reveal with per-marker hover scaling

use crate::primitives::{Percent, Scale};
use crate::transform::Transform;

/// The single state change a reveal produces
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reveal {
    pub fill: Percent,
    pub active_marker: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProgressReveal {
    fill: Percent,
    marker_count: usize,
    active_marker: Option<usize>,
}

impl ProgressReveal {
    /// `None` when there are no markers to reveal
    pub fn new(marker_count: usize) -> Option<Self> {
        if marker_count == 0 {
            return None;
        }
        Some(Self {
            fill: Percent::EMPTY,
            marker_count,
            active_marker: None,
        })
    }

    pub fn fill(&self) -> Percent {
        self.fill
    }

    pub fn is_revealed(&self) -> bool {
        self.active_marker.is_some()
    }

    #[cfg(test)]
    pub fn active_marker(&self) -> Option<usize> {
        self.active_marker
    }

    /// Fills the bar and activates the last marker. Terminal: only the
    /// first call returns a `Reveal`.
    pub fn reveal(&mut self) -> Option<Reveal> {
        if self.is_revealed() {
            return None;
        }
        let last = self.marker_count - 1;
        self.fill = Percent::FULL;
        self.active_marker = Some(last);
        Some(Reveal {
            fill: self.fill,
            active_marker: last,
        })
    }
}

/// Marker pose; markers are positioned by their center
pub fn marker_pose(hovered: bool, hover_scale: Scale) -> Transform {
    let scale = if hovered { hover_scale } else { Scale::NORMAL };
    Transform::identity().with_anchor_centered().with_scale(scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_markers_no_tracker() {
        assert!(ProgressReveal::new(0).is_none());
    }

    #[test]
    fn reveal_fires_once() {
        let mut p = ProgressReveal::new(4).unwrap();
        assert_eq!(p.fill(), Percent::EMPTY);
        assert_eq!(p.active_marker(), None);
        assert!(!p.is_revealed());

        let reveal = p.reveal().unwrap();
        assert_eq!(reveal.fill, Percent::FULL);
        assert_eq!(reveal.active_marker, 3);
        assert_eq!(p.active_marker(), Some(3));

        assert_eq!(p.reveal(), None);
        assert!(p.is_revealed());
        assert_eq!(p.active_marker(), Some(3));
        assert_eq!(p.fill(), Percent::FULL);
    }

    #[test]
    fn single_marker_is_the_active_one() {
        let mut p = ProgressReveal::new(1).unwrap();
        assert_eq!(p.reveal().map(|r| r.active_marker), Some(0));
    }

    #[test]
    fn marker_poses() {
        assert_eq!(
            marker_pose(true, Scale::HOVER).to_css(),
            "translate(-50%, -50%) scale(1.3)"
        );
        assert_eq!(
            marker_pose(false, Scale::HOVER).to_css(),
            "translate(-50%, -50%) scale(1)"
        );
    }
}

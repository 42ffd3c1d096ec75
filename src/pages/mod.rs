mod dashboard;
mod trip_view;

pub use dashboard::Dashboard;
pub use trip_view::TripView;

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::page::Page;

/// Binds the interaction layer once the view is in the DOM and tears it
/// down with the view.
pub fn use_interactions() {
    let page = use_hook(|| Rc::new(RefCell::new(None::<Page>)));

    let mounted = Rc::clone(&page);
    use_effect(move || {
        if mounted.borrow().is_some() {
            return;
        }
        match Page::ready() {
            Ok(bound) => *mounted.borrow_mut() = Some(bound),
            Err(err) => tracing::error!(%err, "interactions unavailable"),
        }
    });

    use_drop(move || {
        page.borrow_mut().take();
    });
}

/// Keyframes and resting styles; the interaction layer only overrides
/// transforms, backgrounds and timing on top of these.
pub(crate) const STYLESHEET: &str = r#"
.particle {
    position: absolute;
    border-radius: 50%;
    background: rgba(255, 255, 255, 0.35);
    pointer-events: none;
    animation: particle-drift 6s ease-in-out infinite;
}
@keyframes particle-drift {
    0%, 100% { transform: translateY(0); opacity: 0.2; }
    50% { transform: translateY(-40px); opacity: 0.8; }
}
.expense-cube {
    width: 160px;
    height: 160px;
    transform-style: preserve-3d;
    border-radius: 16px;
    background: linear-gradient(135deg, #6366f1, #22c55e);
    box-shadow: 0 20px 60px rgba(99, 102, 241, 0.35);
}
.morph-circle {
    width: 120px;
    height: 120px;
    border-radius: 50%;
    animation: morph 8s ease-in-out infinite;
}
@keyframes morph {
    0%, 100% { border-radius: 50%; }
    50% { border-radius: 30% 70% 70% 30% / 30% 30% 70% 70%; }
}
.holographic-card, .floating-card {
    background: #1a1a2e;
    border: 1px solid #2a2a4a;
    border-radius: 10px;
    padding: 24px;
    transition: transform 0.15s ease-out;
}
.floating-card {
    animation: float 4s ease-in-out infinite;
}
@keyframes float {
    0%, 100% { translate: 0 0; }
    50% { translate: 0 -8px; }
}
.glow-button {
    padding: 12px 28px;
    border: 1px solid rgba(255, 255, 255, 0.2);
    border-radius: 8px;
    color: #e5e7eb;
    background: rgba(255, 255, 255, 0.1);
    cursor: pointer;
}
.tracker {
    position: relative;
    height: 8px;
    background: #2a2a4a;
    border-radius: 4px;
}
#trackerProgress {
    height: 100%;
    border-radius: 4px;
    background: linear-gradient(90deg, #3b82f6, #22c55e);
    transition: width 1.5s ease-out;
}
.tracker-marker {
    position: absolute;
    top: 50%;
    width: 18px;
    height: 18px;
    border-radius: 50%;
    background: #4b5563;
    transform: translate(-50%, -50%);
    transition: transform 0.2s, background 0.2s;
}
.tracker-marker.active {
    background: #22c55e;
    box-shadow: 0 0 12px #22c55e;
}
.btn {
    display: inline-flex;
    align-items: center;
    gap: 6px;
    padding: 10px 18px;
    border: none;
    border-radius: 6px;
    background: #3b82f6;
    color: white;
    font-size: 15px;
}
.btn.btn-sm {
    padding: 6px 10px;
    font-size: 13px;
}
.btn-group { display: flex; gap: 8px; }
.btn-group.flex-column { flex-direction: column; }
.btn-group.flex-wrap { flex-wrap: wrap; }
"#;

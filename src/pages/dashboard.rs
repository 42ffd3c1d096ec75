use dioxus::prelude::*;

use super::{STYLESHEET, use_interactions};
use crate::Route;

const PARTICLE_COUNT: usize = 12;
const MARKER_POSITIONS: [u32; 4] = [0, 33, 66, 100];

const SUMMARY_CARDS: [(&str, &str); 3] = [
    ("Spent this month", "$1,284.50"),
    ("Largest category", "Travel"),
    ("Shared balance", "+$212.00"),
];

#[component]
pub fn Dashboard() -> Element {
    use_interactions();

    rsx! {
        style { "{STYLESHEET}" }
        div {
            style: "position: relative; overflow: hidden; min-height: 100vh; background: #0f0f1a; display: flex; flex-direction: column; align-items: center; padding: 40px 20px; font-family: system-ui, -apple-system, sans-serif;",

            // Particles sit behind everything
            div {
                style: "position: absolute; inset: 0; pointer-events: none;",
                for i in 0..PARTICLE_COUNT {
                    div { key: "{i}", class: "particle" }
                }
            }

            // Hero
            div {
                style: "position: relative; display: flex; gap: 48px; align-items: center; max-width: 880px; margin-bottom: 48px;",
                div {
                    style: "perspective: 800px;",
                    div { class: "expense-cube" }
                }
                div {
                    h1 {
                        style: "font-size: 44px; font-weight: 700; color: #e5e7eb; margin: 0 0 12px 0; letter-spacing: -1px;",
                        "Expenses"
                    }
                    p {
                        style: "font-size: 18px; color: #9ca3af; margin: 0 0 24px 0; line-height: 1.6;",
                        "Track what you spend on every trip and settle up with the people you travel with."
                    }
                    div {
                        style: "display: flex; gap: 12px;",
                        button { class: "glow-button", "Add expense" }
                        button { class: "glow-button", "Settle up" }
                    }
                }
                div { class: "morph-circle" }
            }

            // Trip progress
            div {
                style: "position: relative; width: 100%; max-width: 880px; margin-bottom: 48px;",
                p {
                    style: "color: #9ca3af; font-size: 14px; margin: 0 0 16px 0;",
                    "Trip budget"
                }
                div {
                    class: "tracker",
                    div { id: "trackerProgress" }
                    for (i, left) in MARKER_POSITIONS.iter().enumerate() {
                        div {
                            key: "{i}",
                            class: "tracker-marker",
                            style: "left: {left}%;",
                        }
                    }
                }
            }

            // Summary cards
            div {
                style: "position: relative; display: grid; grid-template-columns: repeat(3, 1fr); gap: 20px; width: 100%; max-width: 880px;",
                for (title, amount) in SUMMARY_CARDS {
                    div {
                        key: "{title}",
                        class: "holographic-card",
                        h3 {
                            style: "color: #9ca3af; font-size: 14px; margin: 0 0 8px 0;",
                            "{title}"
                        }
                        p {
                            style: "color: #e5e7eb; font-size: 24px; margin: 0;",
                            "{amount}"
                        }
                    }
                }
            }

            div {
                style: "position: relative; display: flex; gap: 20px; margin-top: 32px;",
                div { class: "floating-card", style: "color: #e5e7eb;", "Lisbon \u{00b7} 4 people" }
                div { class: "floating-card", style: "color: #e5e7eb;", "Kyoto \u{00b7} 2 people" }
                div { class: "floating-card", style: "color: #e5e7eb;", "Oslo \u{00b7} 6 people" }
            }

            div {
                style: "position: relative; display: flex; gap: 12px; margin-top: 48px;",
                Link {
                    to: Route::TripView {},
                    class: "btn",
                    "\u{2192}"
                    span { "Open trip" }
                }
                button {
                    class: "btn",
                    "+"
                    span { "New trip" }
                }
                button {
                    class: "btn",
                    "\u{2699}"
                    span { class: "d-md-inline", "Settings" }
                }
            }
        }
    }
}

use dioxus::prelude::*;

use super::{STYLESHEET, use_interactions};
use crate::Route;

#[component]
pub fn TripView() -> Element {
    use_interactions();

    rsx! {
        style { "{STYLESHEET}" }
        div {
            style: "min-height: 100vh; background: #0f0f1a; display: flex; flex-direction: column; align-items: center; padding: 20px; font-family: system-ui, sans-serif;",

            div {
                style: "display: flex; gap: 16px; align-items: center; margin-bottom: 24px;",
                Link {
                    to: Route::Dashboard {},
                    style: "color: #6b7280; text-decoration: none; font-size: 14px;",
                    "\u{2190} Dashboard"
                }
                h2 {
                    style: "color: #e5e7eb; margin: 0; font-size: 20px;",
                    "Lisbon, May"
                }
            }

            div {
                class: "trip-view-buttons",
                style: "width: 100%; max-width: 720px;",
                div {
                    class: "btn-group",
                    button { class: "btn", "+" span { "Add expense" } }
                    button { class: "btn", "\u{21c4}" span { "Settle up" } }
                    button { class: "btn", "\u{2913}" span { "Export" } }
                    form {
                        onsubmit: move |event| event.prevent_default(),
                        button {
                            class: "btn",
                            r#type: "submit",
                            "\u{27f3}"
                            // the trip-view adapter owns this label
                            span { class: "d-sm-inline", "Sync" }
                        }
                    }
                }
            }

            div {
                style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(200px, 1fr)); gap: 16px; width: 100%; max-width: 720px; margin-top: 32px;",
                div { class: "holographic-card", style: "color: #e5e7eb;", "Dinner \u{00b7} \u{20ac}96.00" }
                div { class: "holographic-card", style: "color: #e5e7eb;", "Tram pass \u{00b7} \u{20ac}24.00" }
                div { class: "holographic-card", style: "color: #e5e7eb;", "Museum \u{00b7} \u{20ac}45.00" }
            }
        }
    }
}

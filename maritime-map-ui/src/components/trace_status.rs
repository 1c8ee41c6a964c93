//! Hint shown while a site trace is on the map.

use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn TraceStatus() -> Element {
    let state = use_context::<AppState>();

    rsx! {
        if (state.trace_active)() {
            div {
                style: "margin: 8px 0; padding: 6px 10px; background: #FFF8E1; border: 1px solid #FFE082; border-radius: 4px; font-size: 12px;",
                "Trace shown newest (red) to oldest (green). Double-click a marker of the same site to reset the view."
            }
        }
    }
}

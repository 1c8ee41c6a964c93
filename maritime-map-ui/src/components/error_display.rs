//! Banner for the most recent failed request.

use crate::state::AppState;
use dioxus::prelude::*;

/// Shows `AppState::error` until dismissed or the next successful fetch.
#[component]
pub fn ErrorDisplay() -> Element {
    let state = use_context::<AppState>();
    let mut error = state.error;

    let Some(message) = error() else {
        return rsx! {};
    };

    rsx! {
        div {
            style: "display: flex; justify-content: space-between; align-items: center; padding: 8px 12px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A; font-size: 13px;",
            span {
                strong { "Request failed: " }
                "{message}"
            }
            button {
                style: "border: none; background: transparent; color: #C62828; cursor: pointer; font-size: 14px;",
                onclick: move |_| error.set(None),
                "×"
            }
        }
    }
}

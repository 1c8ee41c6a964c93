//! Button that refetches markers for the current filters.

use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn RefreshButton() -> Element {
    let mut state = use_context::<AppState>();
    let loading = (state.loading)();

    rsx! {
        button {
            style: "margin: 8px 0; padding: 6px 14px; font-weight: bold;",
            disabled: loading,
            onclick: move |_| state.request_refresh(),
            if loading { "Loading..." } else { "Show markers" }
        }
    }
}

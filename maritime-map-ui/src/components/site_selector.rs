//! Checkbox list of the sites matching the current filters.

use crate::state::AppState;
use dioxus::prelude::*;

/// Site checklist with select all / none. An empty selection fetches
/// markers for every site.
#[component]
pub fn SiteSelector() -> Element {
    let mut state = use_context::<AppState>();
    let sites = state.sites.read().clone();
    let selected = state.selected_sites.read().clone();
    let count = sites.len();

    rsx! {
        div {
            style: "margin: 8px 0;",
            div {
                style: "display: flex; gap: 8px; align-items: center; margin-bottom: 4px;",
                strong { "Sites ({count})" }
                button { onclick: move |_| state.select_all_sites(), "All" }
                button { onclick: move |_| state.deselect_all_sites(), "None" }
            }
            div {
                style: "max-height: 200px; overflow-y: auto; border: 1px solid #E0E0E0; border-radius: 4px; padding: 4px 8px;",
                if sites.is_empty() {
                    span { style: "color: #666;", "No sites for these filters" }
                }
                for site in sites.iter() {
                    label {
                        key: "{site.name}",
                        style: "display: block;",
                        input {
                            r#type: "checkbox",
                            checked: selected.contains(&site.name),
                            onchange: {
                                let name = site.name.clone();
                                move |_| state.select_site(&name)
                            },
                        }
                        " {site.name}"
                    }
                }
            }
        }
    }
}

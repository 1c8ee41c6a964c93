//! Marker radius control.

use crate::state::AppState;
use dioxus::prelude::*;

pub const MIN_MARKER_SIZE: f64 = 1.0;
pub const MAX_MARKER_SIZE: f64 = 20.0;

#[component]
pub fn MarkerSizeInput() -> Element {
    let mut state = use_context::<AppState>();
    let size = (state.marker_size)();

    let on_change = move |evt: Event<FormData>| {
        if let Ok(size) = evt.value().parse::<f64>() {
            state.marker_size.set(size.clamp(MIN_MARKER_SIZE, MAX_MARKER_SIZE));
        }
    };

    rsx! {
        label {
            style: "font-weight: bold; margin: 8px 0; display: inline-block;",
            "Marker size: "
            input {
                r#type: "range",
                min: "{MIN_MARKER_SIZE}",
                max: "{MAX_MARKER_SIZE}",
                step: "1",
                value: "{size}",
                oninput: on_change,
            }
            " {size} px"
        }
    }
}

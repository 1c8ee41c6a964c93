//! Measurement type selector.

use crate::state::AppState;
use dioxus::prelude::*;
use maritime_core::site_layer::reading_label;

/// Reading types served by the measurements endpoint.
pub const READINGS: &[&str] = &[
    "aod_340nm",
    "aod_380nm",
    "aod_440nm",
    "aod_500nm",
    "aod_675nm",
    "aod_870nm",
    "aod_1020nm",
    "aod_1640nm",
    "water_vapor_CM",
    "angstrom_exponent_440_870",
    "air_mass",
    "std_440nm",
    "std_500nm",
    "std_870nm",
];

#[component]
pub fn ReadingSelector() -> Element {
    let mut state = use_context::<AppState>();
    let selected = (state.reading)();
    let options: Vec<(&str, String)> = READINGS.iter().map(|r| (*r, reading_label(r))).collect();

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "reading-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Reading: "
            }
            select {
                id: "reading-select",
                onchange: move |evt: Event<FormData>| state.reading.set(evt.value()),
                for (reading, label) in options {
                    option {
                        value: "{reading}",
                        selected: reading == selected,
                        "{label}"
                    }
                }
            }
        }
    }
}

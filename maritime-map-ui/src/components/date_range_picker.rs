//! Start/end date filter.

use crate::state::AppState;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
struct DateFieldProps {
    label: String,
    value: String,
    /// Earliest selectable date, if any
    #[props(default = String::new())]
    min: String,
    /// Latest selectable date, if any
    #[props(default = String::new())]
    max: String,
    on_change: EventHandler<String>,
}

#[component]
fn DateField(props: DateFieldProps) -> Element {
    rsx! {
        label {
            style: "font-weight: bold;",
            "{props.label} "
            input {
                r#type: "date",
                value: "{props.value}",
                min: "{props.min}",
                max: "{props.max}",
                onchange: move |evt: Event<FormData>| props.on_change.call(evt.value()),
            }
        }
    }
}

/// Date range for the sites list and the next marker refresh. The two
/// inputs constrain each other so the range cannot be inverted.
#[component]
pub fn DateRangePicker() -> Element {
    let mut state = use_context::<AppState>();
    let start = (state.start_date)();
    let end = (state.end_date)();

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center;",
            DateField {
                label: "From:".to_string(),
                value: start.clone(),
                max: end.clone(),
                on_change: move |value: String| state.start_date.set(value),
            }
            DateField {
                label: "To:".to_string(),
                value: end,
                min: start,
                on_change: move |value: String| state.end_date.set(value),
            }
        }
    }
}

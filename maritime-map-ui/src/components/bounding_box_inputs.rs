//! Bounding box corner inputs.

use crate::state::AppState;
use dioxus::prelude::*;

/// Blank or unparsable input clears the corner.
fn parse_corner(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn corner_text(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Four numeric inputs for the bbox filter. The sites list only uses the
/// box once all four corners are filled in.
#[component]
pub fn BoundingBoxInputs() -> Element {
    let state = use_context::<AppState>();
    let corners = [
        ("Min lat", state.min_lat, "-90", "90"),
        ("Min lng", state.min_lng, "-180", "180"),
        ("Max lat", state.max_lat, "-90", "90"),
        ("Max lng", state.max_lng, "-180", "180"),
    ];

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center; flex-wrap: wrap;",
            for (name, signal, min, max) in corners {
                label {
                    key: "{name}",
                    style: "font-weight: bold;",
                    "{name}: "
                    input {
                        r#type: "number",
                        step: "any",
                        min: min,
                        max: max,
                        style: "width: 80px;",
                        value: corner_text(signal()),
                        onchange: move |evt: Event<FormData>| {
                            let mut signal = signal;
                            signal.set(parse_corner(&evt.value()));
                        },
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_corner() {
        assert_eq!(parse_corner(" 12.5 "), Some(12.5));
        assert_eq!(parse_corner("-80"), Some(-80.0));
        assert_eq!(parse_corner(""), None);
        assert_eq!(parse_corner("north"), None);
        assert_eq!(parse_corner("inf"), None);
    }

    #[test]
    fn test_corner_text() {
        assert_eq!(corner_text(Some(45.0)), "45");
        assert_eq!(corner_text(None), "");
    }
}

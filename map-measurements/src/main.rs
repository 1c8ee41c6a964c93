//! Maritime Measurements Map
//!
//! Shows sun photometer readings (aerosol optical depth, water vapor,
//! Angstrom exponent, ...) from ship cruises as colored markers on a
//! Leaflet map.
//!
//! Data flow:
//! 1. Date and bbox filters refresh the list of cruises (sites).
//! 2. "Show markers" posts the full filter set to the measurements API.
//! 3. Each reading becomes a marker colored by the reading type's domain.
//! 4. Clicking a marker isolates its site and draws the cruise track;
//!    a quick second click on the same site resets the view.

use dioxus::prelude::*;
use maritime_core::domain::ColorDomain;
use maritime_map_ui::components::{
    BoundingBoxInputs, DateRangePicker, ErrorDisplay, MarkerSizeInput, ReadingSelector, RefreshButton,
    SiteSelector, TraceStatus,
};
use maritime_map_ui::state::AppState;
use maritime_map_ui::SiteManager;

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    log::info!("Starting maritime measurements map");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("maritime-map-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(AppState::new);
    let domain = ColorDomain::for_reading(&(state.reading)());
    let legend = domain
        .breakpoints
        .iter()
        .map(|b| b.to_string())
        .collect::<Vec<_>>()
        .join(" / ");

    rsx! {
        document::Stylesheet { href: LEAFLET_CSS }
        document::Script { src: LEAFLET_JS }

        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            h3 {
                style: "margin: 0 0 4px 0; font-size: 16px;",
                "Maritime Aerosol Measurements"
            }
            p {
                style: "margin: 0 0 8px 0; font-size: 12px; color: #666;",
                "Color breakpoints: {legend} (grey = no data, dark red = above range)"
            }

            div {
                style: "display: flex; gap: 16px; flex-wrap: wrap; align-items: center;",
                DateRangePicker {}
                ReadingSelector {}
                MarkerSizeInput {}
                RefreshButton {}
            }
            BoundingBoxInputs {}
            ErrorDisplay {}
            TraceStatus {}

            SiteManager {
                SiteSelector {}
            }
        }
    }
}

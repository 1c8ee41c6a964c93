//! Map container component with loading state.

use dioxus::prelude::*;

/// Props for MapContainer
#[derive(Props, Clone, PartialEq)]
pub struct MapContainerProps {
    /// The DOM id for the map container (Leaflet will render into this)
    pub id: String,
    /// Whether markers are still loading
    #[props(default = false)]
    pub loading: bool,
    #[props(default = 520)]
    pub min_height: u32,
}

/// A container div for the Leaflet map with loading overlay.
#[component]
pub fn MapContainer(props: MapContainerProps) -> Element {
    let style = format!(
        "height: {}px; position: relative; width: 100%;",
        props.min_height
    );

    rsx! {
        div {
            style: "{style}",
            div {
                id: "{props.id}",
                style: "width: 100%; height: 100%;",
            }
            if props.loading {
                div {
                    style: "position: absolute; top: 8px; right: 8px; z-index: 1000; padding: 4px 8px; background: rgba(255,255,255,0.9); border-radius: 4px; color: #666;",
                    "Loading markers..."
                }
            }
        }
    }
}

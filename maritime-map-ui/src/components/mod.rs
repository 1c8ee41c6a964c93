//! Reusable Dioxus RSX components for the measurement map.

mod bounding_box_inputs;
mod date_range_picker;
mod error_display;
mod map_container;
mod marker_size_input;
mod reading_selector;
mod refresh_button;
mod site_selector;
mod trace_status;

pub use bounding_box_inputs::BoundingBoxInputs;
pub use date_range_picker::DateRangePicker;
pub use error_display::ErrorDisplay;
pub use map_container::MapContainer;
pub use marker_size_input::MarkerSizeInput;
pub use reading_selector::{ReadingSelector, READINGS};
pub use refresh_button::RefreshButton;
pub use site_selector::SiteSelector;
pub use trace_status::TraceStatus;

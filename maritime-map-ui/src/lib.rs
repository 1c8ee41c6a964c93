//! Shared Dioxus components and Leaflet bridge for the maritime measurement map.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the Leaflet glue via `js_sys::eval()`
//! - `fetch`: browser client for the sites and measurements endpoints
//! - `state`: Reactive AppState with Dioxus Signals
//! - `site_manager`: the component that keeps markers and traces in sync
//! - `components`: filter controls and the map container

pub mod components;
pub mod events;
pub mod fetch;
pub mod js_bridge;
pub mod site_manager;
pub mod state;

pub use site_manager::SiteManager;

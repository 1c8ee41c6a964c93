//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use maritime_core::query::{BoundingBox, MarkerQuery, SiteQuery};
use maritime_core::site::Site;
use maritime_core::site_layer::DEFAULT_MARKER_RADIUS;
use std::collections::BTreeSet;

pub const DEFAULT_START_DATE: &str = "2020-01-01";
pub const DEFAULT_END_DATE: &str = "2024-12-31";
pub const DEFAULT_READING: &str = "aod_500nm";

/// Shared state of the measurement map.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Whether a marker fetch is in flight
    pub loading: Signal<bool>,
    /// Message of the last failed fetch, cleared on success
    pub error: Signal<Option<String>>,
    pub start_date: Signal<String>,
    pub end_date: Signal<String>,
    pub min_lat: Signal<Option<f64>>,
    pub min_lng: Signal<Option<f64>>,
    pub max_lat: Signal<Option<f64>>,
    pub max_lng: Signal<Option<f64>>,
    /// Measurement type, e.g. "aod_500nm" or "water_vapor_CM"
    pub reading: Signal<String>,
    /// Sites matching the current date and bbox filters
    pub sites: Signal<Vec<Site>>,
    /// Sites the marker fetch is restricted to (empty = all)
    pub selected_sites: Signal<BTreeSet<String>>,
    pub marker_size: Signal<f64>,
    /// Bumped by the caller to refetch markers
    pub refresh_markers: Signal<u64>,
    /// Whether a site trace is drawn on the map
    pub trace_active: Signal<bool>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            loading: Signal::new(false),
            error: Signal::new(None),
            start_date: Signal::new(DEFAULT_START_DATE.to_string()),
            end_date: Signal::new(DEFAULT_END_DATE.to_string()),
            min_lat: Signal::new(None),
            min_lng: Signal::new(None),
            max_lat: Signal::new(None),
            max_lng: Signal::new(None),
            reading: Signal::new(DEFAULT_READING.to_string()),
            sites: Signal::new(Vec::new()),
            selected_sites: Signal::new(BTreeSet::new()),
            marker_size: Signal::new(DEFAULT_MARKER_RADIUS),
            refresh_markers: Signal::new(0),
            trace_active: Signal::new(false),
        }
    }

    /// Sites query from the current filters. Subscribes the caller to the
    /// date and bbox signals.
    pub fn site_query(&self) -> SiteQuery {
        SiteQuery {
            start_date: (self.start_date)(),
            end_date: (self.end_date)(),
            bbox: BoundingBox {
                min_lat: (self.min_lat)(),
                min_lng: (self.min_lng)(),
                max_lat: (self.max_lat)(),
                max_lng: (self.max_lng)(),
            },
        }
    }

    /// Markers query from the current filters, read without subscribing:
    /// markers only refetch on an explicit refresh.
    pub fn marker_query(&self) -> MarkerQuery {
        MarkerQuery {
            start_date: self.start_date.peek().clone(),
            end_date: self.end_date.peek().clone(),
            sites: self.selected_sites.peek().clone(),
            bbox: BoundingBox {
                min_lat: *self.min_lat.peek(),
                min_lng: *self.min_lng.peek(),
                max_lat: *self.max_lat.peek(),
                max_lng: *self.max_lng.peek(),
            },
            reading: self.reading.peek().clone(),
        }
    }

    /// Toggle one site in the selection.
    pub fn select_site(&mut self, name: &str) {
        let mut selected = self.selected_sites.write();
        if !selected.remove(name) {
            selected.insert(name.to_string());
        }
    }

    pub fn select_all_sites(&mut self) {
        let all: BTreeSet<String> = self.sites.peek().iter().map(|s| s.name.clone()).collect();
        self.selected_sites.set(all);
    }

    pub fn deselect_all_sites(&mut self) {
        self.selected_sites.set(BTreeSet::new());
    }

    pub fn request_refresh(&mut self) {
        *self.refresh_markers.write() += 1;
    }
}

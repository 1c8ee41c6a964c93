//! The component that keeps the map in sync with the filters.
//!
//! `SiteManager` owns the [`SiteLayer`] for its whole lifetime and wires it
//! to three triggers:
//! - date/bbox changes refetch the sites list (skipped when unchanged)
//! - the refresh counter refetches markers
//! - reading type changes recompute the color domain after a short delay
//!
//! Marker events from Leaflet arrive on a coroutine channel so that every
//! state write happens inside the Dioxus runtime.

use crate::components::MapContainer;
use crate::events::{forward_js_event, MapEvent};
use crate::fetch;
use crate::js_bridge::{self, LeafletSurface, DEFAULT_CENTER, DEFAULT_ZOOM, MAP_CONTAINER_ID};
use crate::state::AppState;
use dioxus::prelude::*;
use futures::StreamExt;
use maritime_core::config::ApiConfig;
use maritime_core::domain::DOMAIN_DEBOUNCE_MS;
use maritime_core::generation::RequestGeneration;
use maritime_core::query::SiteQueryTracker;
use maritime_core::scale::ColorScale;
use maritime_core::site_layer::SiteLayer;
use std::cell::RefCell;
use std::rc::Rc;

type SharedLayer = Rc<RefCell<SiteLayer<LeafletSurface>>>;

/// Map overlay for the current filters. Renders the map followed by
/// `children`, which reach sites and selection through `AppState`.
#[component]
pub fn SiteManager(children: Element) -> Element {
    let state = use_context::<AppState>();
    let config = use_hook(ApiConfig::from_build_env);
    let layer: SharedLayer = use_hook(|| {
        let reading = state.reading.peek().clone();
        Rc::new(RefCell::new(SiteLayer::new(LeafletSurface::new(), &reading)))
    });
    let site_tracker = use_hook(|| Rc::new(RefCell::new(SiteQueryTracker::new())));
    let site_fetches = use_hook(|| Rc::new(RequestGeneration::new()));

    // Marker events from Leaflet
    let event_layer = layer.clone();
    let events = use_coroutine(move |mut rx: UnboundedReceiver<MapEvent>| {
        let layer = event_layer.clone();
        async move {
            while let Some(event) = rx.next().await {
                handle_map_event(&layer, event, state);
            }
        }
    });

    use_hook(move || {
        js_bridge::init_map(MAP_CONTAINER_ID, DEFAULT_CENTER, DEFAULT_ZOOM);
        let tx = events.tx();
        js_bridge::install_marker_events(move |kind, id| {
            forward_js_event(&tx, &kind, id);
        });
    });

    // Sites: refetch when dates or bbox change
    let sites_config = config.clone();
    use_effect(move || {
        let query = state.site_query();
        if !site_tracker.borrow_mut().observe(&query) {
            return;
        }
        let ticket = site_fetches.begin();
        let config = sites_config.clone();
        let site_fetches = site_fetches.clone();
        let mut sites = state.sites;
        let mut error = state.error;
        spawn(async move {
            let result = fetch::fetch_sites(&config, &query).await;
            if !site_fetches.is_current(ticket) {
                log::debug!("Discarding stale sites response");
                return;
            }
            error.set(fetch::failure_message(&result));
            match result {
                Ok(list) => {
                    log::info!("Loaded {} sites", list.len());
                    sites.set(list);
                }
                Err(e) => log::error!("Error fetching sites: {}", e),
            }
        });
    });

    // Color domain: recompute shortly after mount and after type changes
    let domain_layer = layer.clone();
    use_effect(move || {
        let reading = (state.reading)();
        let layer = domain_layer.clone();
        spawn(async move {
            js_bridge::sleep_ms(DOMAIN_DEBOUNCE_MS).await;
            let mut layer = layer.borrow_mut();
            layer.set_reading(&reading);
            layer.set_scale(ColorScale::for_reading(&reading));
        });
    });

    // Markers: refetch on explicit refresh only
    let markers_layer = layer.clone();
    use_effect(move || {
        if (state.refresh_markers)() == 0 {
            return;
        }
        let query = state.marker_query();
        let ticket = {
            let mut layer = markers_layer.borrow_mut();
            layer.set_reading(&query.reading);
            layer.set_scale(ColorScale::for_reading(&query.reading));
            layer.begin_fetch()
        };
        let config = config.clone();
        let layer = markers_layer.clone();
        let mut loading = state.loading;
        let mut trace_active = state.trace_active;
        let mut error = state.error;
        loading.set(true);
        spawn(async move {
            let result = fetch::fetch_markers(&config, &query).await;
            let failure = fetch::failure_message(&result);
            let mut layer = layer.borrow_mut();
            if layer.finish_fetch(ticket, result) {
                trace_active.set(layer.trace_active());
                error.set(failure);
                loading.set(false);
            }
        });
    });

    // Marker size
    let size_layer = layer.clone();
    use_effect(move || {
        let size = (state.marker_size)();
        size_layer.borrow_mut().set_marker_radius(size);
    });

    rsx! {
        MapContainer {
            id: MAP_CONTAINER_ID.to_string(),
            loading: (state.loading)(),
        }
        {children}
    }
}

fn handle_map_event(layer: &SharedLayer, event: MapEvent, state: AppState) {
    let Ok(mut layer) = layer.try_borrow_mut() else {
        log::warn!("Map layer busy, dropping {:?}", event);
        return;
    };
    match event {
        MapEvent::Click(id) => {
            let now = js_sys::Date::now() as u64;
            if let Some(outcome) = layer.click(id, now) {
                log::debug!("{:?} click on marker {:?}", outcome, id);
            }
            let mut trace_active = state.trace_active;
            trace_active.set(layer.trace_active());
        }
        MapEvent::Hover(id) => layer.hover(id),
        MapEvent::Unhover(id) => layer.unhover(id),
        MapEvent::Zoom(level) => {
            log::debug!("Zoomed to {}", level);
            layer.set_marker_radius(*state.marker_size.peek());
        }
    }
}

//! Marker rendering and interaction for the fetched readings.
//!
//! `SiteLayer` owns everything that outlives a single event: the current
//! readings, the per-marker presentation registry, the site groups, the
//! trace registry and the click tracker. Event handlers on the map call
//! into it; it drives the map through [`MapSurface`].

use crate::click::{ClickOutcome, ClickTracker};
use crate::generation::{RequestGeneration, Ticket};
use crate::marker::Marker;
use crate::scale::ColorScale;
use crate::surface::{MapSurface, MarkerId, MarkerStyle, TraceHandle};
use crate::trace::build_trace;
use std::collections::{BTreeMap, HashMap};

/// Marker radius before the user changes it.
pub const DEFAULT_MARKER_RADIUS: f64 = 6.0;

/// Frequency shown in popups; the API only serves daily aggregates.
pub const FREQUENCY_LABEL: &str = "Daily";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    None,
    Site(String),
}

pub struct SiteLayer<S: MapSurface> {
    surface: S,
    reading: String,
    scale: ColorScale,
    radius: f64,
    markers: Vec<Marker>,
    styles: HashMap<MarkerId, MarkerStyle>,
    site_groups: BTreeMap<String, Vec<MarkerId>>,
    traces: HashMap<String, TraceHandle>,
    selection: Selection,
    clicks: ClickTracker,
    fetches: RequestGeneration,
}

impl<S: MapSurface> SiteLayer<S> {
    pub fn new(surface: S, reading: &str) -> Self {
        Self {
            surface,
            reading: reading.to_string(),
            scale: ColorScale::for_reading(reading),
            radius: DEFAULT_MARKER_RADIUS,
            markers: Vec::new(),
            styles: HashMap::new(),
            site_groups: BTreeMap::new(),
            traces: HashMap::new(),
            selection: Selection::None,
            clicks: ClickTracker::new(),
            fetches: RequestGeneration::new(),
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn marker_count(&self) -> usize {
        self.styles.len()
    }

    pub fn style(&self, id: MarkerId) -> Option<&MarkerStyle> {
        self.styles.get(&id)
    }

    pub fn site_group(&self, site: &str) -> &[MarkerId] {
        self.site_groups.get(site).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Whether a site is selected. Holds even when the site has too few
    /// readings for a polyline.
    pub fn trace_active(&self) -> bool {
        matches!(self.selection, Selection::Site(_))
    }

    pub fn scale(&self) -> &ColorScale {
        &self.scale
    }

    /// Switch reading type; popups use the new label right away, colors
    /// apply to markers rendered after the next [`set_scale`](Self::set_scale).
    pub fn set_reading(&mut self, reading: &str) {
        self.reading = reading.to_string();
    }

    pub fn set_scale(&mut self, scale: ColorScale) {
        self.scale = scale;
    }

    /// Start a marker fetch. Earlier tickets become stale.
    pub fn begin_fetch(&mut self) -> Ticket {
        self.fetches.begin()
    }

    /// Apply a finished marker fetch. Stale results are dropped; failures
    /// clear the map. Returns whether the result was applied.
    pub fn finish_fetch(&mut self, ticket: Ticket, result: crate::Result<Vec<Marker>>) -> bool {
        if !self.fetches.is_current(ticket) {
            log::debug!("Discarding stale marker response");
            return false;
        }
        match result {
            Ok(markers) => {
                log::info!("Rendering {} markers", markers.len());
                self.replace_markers(markers);
            }
            Err(e) => {
                log::error!("Error fetching markers: {}", e);
                self.clear();
            }
        }
        true
    }

    /// Replace every rendered marker with `markers`.
    pub fn replace_markers(&mut self, markers: Vec<Marker>) {
        self.clear();
        for (index, marker) in markers.iter().enumerate() {
            let id = MarkerId(index as u32);
            let color = self.scale.resolve(marker.value);
            let style = MarkerStyle::new(color.rgb(), color.default_fill_opacity(), self.radius);
            self.surface.add_marker(id, marker.latlng, &style);
            self.styles.insert(id, style);
            self.site_groups.entry(marker.site.clone()).or_default().push(id);
        }
        self.markers = markers;
    }

    /// Remove all markers and traces from the map.
    pub fn clear(&mut self) {
        self.remove_traces(None);
        let mut ids: Vec<MarkerId> = self.styles.keys().copied().collect();
        ids.sort();
        for id in ids {
            if let Err(e) = self.surface.remove_marker(id) {
                log::warn!("Problem removing marker {:?}: {}", id, e);
            }
        }
        self.styles.clear();
        self.site_groups.clear();
        self.markers.clear();
        self.selection = Selection::None;
        self.clicks.reset();
    }

    pub fn hover(&mut self, id: MarkerId) {
        let interactive = self.styles.get(&id).is_some_and(|s| s.interactive);
        if !interactive {
            return;
        }
        if let Some(marker) = self.markers.get(id.0 as usize) {
            let html = popup_html(marker, &self.reading);
            self.surface.open_popup(id, &html);
        }
    }

    pub fn unhover(&mut self, id: MarkerId) {
        if self.styles.contains_key(&id) {
            self.surface.close_popup(id);
        }
    }

    /// Handle a click on a marker. Dimmed markers still take clicks, so a
    /// click on another site switches the selection to it.
    pub fn click(&mut self, id: MarkerId, now_ms: u64) -> Option<ClickOutcome> {
        if !self.styles.contains_key(&id) {
            return None;
        }
        let site = self.markers.get(id.0 as usize)?.site.clone();
        let outcome = self.clicks.click(&site, now_ms);
        match outcome {
            ClickOutcome::Double => self.reset(),
            ClickOutcome::Single => self.select_site(&site),
        }
        Some(outcome)
    }

    /// Show only `site`'s markers and draw its trace.
    pub fn select_site(&mut self, site: &str) {
        self.remove_traces(Some(site));
        for (id, style) in self.styles.iter_mut() {
            let Some(marker) = self.markers.get(id.0 as usize) else {
                continue;
            };
            if marker.site == site {
                style.highlight();
            } else {
                style.dim();
            }
            self.surface.restyle_marker(*id, style);
        }
        self.draw_trace(site);
        self.selection = Selection::Site(site.to_string());
    }

    /// Drop the trace and bring every marker back to its default look.
    pub fn reset(&mut self) {
        self.remove_traces(None);
        for (id, style) in self.styles.iter_mut() {
            style.restore();
            self.surface.restyle_marker(*id, style);
        }
        self.selection = Selection::None;
    }

    pub fn set_marker_radius(&mut self, radius: f64) {
        self.radius = radius;
        for (id, style) in self.styles.iter_mut() {
            style.radius = radius;
            self.surface.restyle_marker(*id, style);
        }
    }

    fn draw_trace(&mut self, site: &str) {
        if let Some(old) = self.traces.remove(site) {
            if let Err(e) = self.surface.remove_trace(old) {
                log::warn!("Problem removing trace for {}: {}", site, e);
            }
        }
        let segments = build_trace(site, &self.markers);
        if segments.is_empty() {
            return;
        }
        let handle = self.surface.add_trace(&segments);
        self.traces.insert(site.to_string(), handle);
    }

    /// Remove every trace except `keep`'s, which `draw_trace` replaces.
    fn remove_traces(&mut self, keep: Option<&str>) {
        let sites: Vec<String> = self
            .traces
            .keys()
            .filter(|site| Some(site.as_str()) != keep)
            .cloned()
            .collect();
        for site in sites {
            if let Some(handle) = self.traces.remove(&site) {
                if let Err(e) = self.surface.remove_trace(handle) {
                    log::warn!("Problem removing trace for {}: {}", site, e);
                }
            }
        }
    }
}

/// `aod_500nm` -> `AOD 500NM`
pub fn reading_label(reading: &str) -> String {
    reading.to_uppercase().replace('_', " ")
}

/// Popup body shown while hovering a marker.
pub fn popup_html(marker: &Marker, reading: &str) -> String {
    let value = match marker.value {
        Some(v) if !v.is_nan() => format!("{:.4}", v),
        _ => "no data".to_string(),
    };
    format!(
        "<b>Site:</b> {}<br><b>{}:</b> {}<br><b>Frequency:</b> {}<br><b>Date:</b> {}",
        escape_html(&marker.site),
        escape_html(&reading_label(reading)),
        value,
        FREQUENCY_LABEL,
        marker.date.format("%Y-%m-%d"),
    )
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

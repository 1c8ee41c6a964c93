//! Typed wrappers around Leaflet interop via `js_sys::eval()`.
//!
//! The Leaflet glue lives in `assets/js/leaflet-layers.js` and is evaluated
//! once at startup, exposing `window.mamLayers.*`. Leaflet itself is loaded
//! by the page; `init_map` polls until both it and the container exist.
//! Marker events come back through `window.__mamMarkerEvent(kind, id)`.

use maritime_core::marker::LatLng;
use maritime_core::surface::{MapSurface, MarkerId, MarkerStyle, TraceHandle};
use maritime_core::trace::{TraceSegment, TRACE_WEIGHT};
use maritime_core::{Error, Result};
use wasm_bindgen::prelude::*;

static LEAFLET_LAYERS_JS: &str = include_str!("../assets/js/leaflet-layers.js");

/// DOM id of the div Leaflet renders into.
pub const MAP_CONTAINER_ID: &str = "maritime-map";

/// Initial view: the Atlantic, zoomed out far enough to see both coasts.
pub const DEFAULT_CENTER: LatLng = LatLng { lat: 20.0, lng: -30.0 };
pub const DEFAULT_ZOOM: u8 = 3;

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('MAM JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Execute JS and report a thrown exception as a layer error.
pub fn try_js(code: &str) -> Result<()> {
    js_sys::eval(code)
        .map(|_| ())
        .map_err(|e| Error::Layer(js_message(&e)))
}

/// Best-effort text of a thrown JS value.
pub fn js_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// Evaluate the layer glue and start Leaflet once it has loaded.
pub fn init_map(container_id: &str, center: LatLng, zoom: u8) {
    let _ = js_sys::eval(LEAFLET_LAYERS_JS);
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (typeof L !== 'undefined' && document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.mamLayers.init('{container_id}', {lat}, {lng}, {zoom});
                    }} catch(e) {{ console.error('[MAM] map init error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
        lat = center.lat,
        lng = center.lng,
    ));
}

/// Route marker and map events to `handler(kind, id)`. The closure lives
/// for the rest of the page.
pub fn install_marker_events<F>(handler: F)
where
    F: FnMut(String, u32) + 'static,
{
    let closure = Closure::<dyn FnMut(String, u32)>::new(handler);
    if let Some(window) = web_sys::window() {
        if let Err(e) = js_sys::Reflect::set(
            &window,
            &JsValue::from_str("__mamMarkerEvent"),
            closure.as_ref(),
        ) {
            log::error!("Failed to install marker events: {}", js_message(&e));
        }
    }
    closure.forget();
}

/// Resolve after `ms` milliseconds via `setTimeout`.
pub async fn sleep_ms(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let scheduled = web_sys::window()
            .map(|w| w.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms).is_ok())
            .unwrap_or(false);
        if !scheduled {
            let _ = resolve.call0(&JsValue::NULL);
        }
    });
    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}

/// `MapSurface` backed by the Leaflet glue.
#[derive(Default)]
pub struct LeafletSurface {
    next_trace: u32,
}

impl LeafletSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

fn style_json(style: &MarkerStyle) -> String {
    serde_json::to_string(style).unwrap_or_default()
}

impl MapSurface for LeafletSurface {
    fn add_marker(&mut self, id: MarkerId, position: LatLng, style: &MarkerStyle) {
        call_js(&format!(
            "window.mamLayers.addMarker({}, {}, {}, {});",
            id.0,
            position.lat,
            position.lng,
            style_json(style)
        ));
    }

    fn restyle_marker(&mut self, id: MarkerId, style: &MarkerStyle) {
        call_js(&format!("window.mamLayers.setStyle({}, {});", id.0, style_json(style)));
    }

    fn remove_marker(&mut self, id: MarkerId) -> Result<()> {
        try_js(&format!("window.mamLayers.removeMarker({});", id.0))
    }

    fn open_popup(&mut self, id: MarkerId, html: &str) {
        let html = serde_json::to_string(html).unwrap_or_default();
        call_js(&format!("window.mamLayers.openPopup({}, {});", id.0, html));
    }

    fn close_popup(&mut self, id: MarkerId) {
        call_js(&format!("window.mamLayers.closePopup({});", id.0));
    }

    fn add_trace(&mut self, segments: &[TraceSegment]) -> TraceHandle {
        self.next_trace += 1;
        let handle = TraceHandle(self.next_trace);
        let data = serde_json::to_string(segments).unwrap_or_else(|_| "[]".to_string());
        call_js(&format!(
            "window.mamLayers.addTrace({}, {}, {});",
            handle.0, TRACE_WEIGHT, data
        ));
        handle
    }

    fn remove_trace(&mut self, handle: TraceHandle) -> Result<()> {
        try_js(&format!("window.mamLayers.removeTrace({});", handle.0))
    }
}

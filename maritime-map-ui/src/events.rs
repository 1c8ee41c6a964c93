use futures::channel::mpsc::UnboundedSender;
use maritime_core::surface::MarkerId;

/// Event forwarded from the Leaflet glue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapEvent {
    Click(MarkerId),
    Hover(MarkerId),
    Unhover(MarkerId),
    /// Zoom finished at the given level
    Zoom(u32),
}

impl MapEvent {
    /// Decode the `(kind, id)` pair passed to `window.__mamMarkerEvent`.
    pub fn from_js(kind: &str, id: u32) -> Option<Self> {
        match kind {
            "click" => Some(MapEvent::Click(MarkerId(id))),
            "mouseover" => Some(MapEvent::Hover(MarkerId(id))),
            "mouseout" => Some(MapEvent::Unhover(MarkerId(id))),
            "zoom" => Some(MapEvent::Zoom(id)),
            _ => None,
        }
    }
}

/// Decode a JS event and queue it for the map coroutine. Returns whether
/// the event was queued.
pub fn forward_js_event(tx: &UnboundedSender<MapEvent>, kind: &str, id: u32) -> bool {
    let Some(event) = MapEvent::from_js(kind, id) else {
        log::debug!("Ignoring map event {}", kind);
        return false;
    };
    match tx.unbounded_send(event) {
        Ok(()) => true,
        Err(e) => {
            log::debug!("Dropping {:?}, event loop is gone: {}", event, e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::mpsc;

    #[test]
    fn test_from_js() {
        assert_eq!(MapEvent::from_js("click", 4), Some(MapEvent::Click(MarkerId(4))));
        assert_eq!(MapEvent::from_js("mouseout", 0), Some(MapEvent::Unhover(MarkerId(0))));
        assert_eq!(MapEvent::from_js("zoom", 7), Some(MapEvent::Zoom(7)));
        assert_eq!(MapEvent::from_js("dblclick", 1), None);
    }

    #[test]
    fn test_forward_js_event() {
        let (tx, mut rx) = mpsc::unbounded();
        assert!(forward_js_event(&tx, "click", 2));
        assert!(!forward_js_event(&tx, "contextmenu", 2));
        assert_eq!(rx.try_next().unwrap(), Some(MapEvent::Click(MarkerId(2))));

        drop(rx);
        assert!(!forward_js_event(&tx, "mouseover", 3));
    }
}

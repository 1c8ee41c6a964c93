//! The map the site layer draws on.
//!
//! `SiteLayer` never touches overlay objects directly; it describes what
//! it wants through this trait and keeps all styling state on its side.

use crate::color::Rgb;
use crate::marker::LatLng;
use crate::trace::TraceSegment;
use serde::Serialize;

/// Identity of a rendered marker for the lifetime of one fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct MarkerId(pub u32);

/// Identity of a drawn trace (polyline group).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TraceHandle(pub u32);

/// Presentation state of one marker, kept apart from the overlay itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerStyle {
    pub color: Rgb,
    #[serde(skip)]
    pub original_color: Rgb,
    pub radius: f64,
    pub fill_opacity: f64,
    #[serde(skip)]
    pub default_fill_opacity: f64,
    pub opacity: f64,
    pub weight: f64,
    pub interactive: bool,
}

impl MarkerStyle {
    pub fn new(color: Rgb, fill_opacity: f64, radius: f64) -> Self {
        Self {
            color,
            original_color: color,
            radius,
            fill_opacity,
            default_fill_opacity: fill_opacity,
            opacity: 1.0,
            weight: 2.0,
            interactive: true,
        }
    }

    /// Back to the look the marker was created with.
    pub fn restore(&mut self) {
        self.color = self.original_color;
        self.fill_opacity = self.default_fill_opacity;
        self.opacity = 1.0;
        self.interactive = true;
    }

    /// Marker of the selected site.
    pub fn highlight(&mut self) {
        self.color = self.original_color;
        self.fill_opacity = 1.0;
        self.opacity = 1.0;
        self.interactive = true;
    }

    /// Marker of any other site while one is selected.
    pub fn dim(&mut self) {
        self.color = Rgb::GREY;
        self.fill_opacity = 0.0;
        self.opacity = 0.0;
        self.interactive = false;
    }
}

pub trait MapSurface {
    fn add_marker(&mut self, id: MarkerId, position: LatLng, style: &MarkerStyle);

    fn restyle_marker(&mut self, id: MarkerId, style: &MarkerStyle);

    fn remove_marker(&mut self, id: MarkerId) -> crate::Result<()>;

    fn open_popup(&mut self, id: MarkerId, html: &str);

    fn close_popup(&mut self, id: MarkerId);

    /// Draw the segments as one group and return its handle.
    fn add_trace(&mut self, segments: &[TraceSegment]) -> TraceHandle;

    fn remove_trace(&mut self, handle: TraceHandle) -> crate::Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dim_then_restore() {
        let mut style = MarkerStyle::new(Rgb::TEAL, 0.9, 6.0);
        style.dim();
        assert_eq!(style.color, Rgb::GREY);
        assert!(!style.interactive);
        style.restore();
        assert_eq!(style, MarkerStyle::new(Rgb::TEAL, 0.9, 6.0));
    }

    #[test]
    fn test_style_json_for_leaflet() {
        let style = MarkerStyle::new(Rgb::BLUE, 0.6, 4.0);
        let json = serde_json::to_value(&style).unwrap();
        assert_eq!(json["color"], "rgb(0, 0, 255)");
        assert_eq!(json["fillOpacity"], 0.6);
        assert!(json.get("originalColor").is_none());
    }
}

//! Per-site trace: a site's readings joined newest to oldest.

use crate::color::Rgb;
use crate::marker::{LatLng, Marker};
use serde::Serialize;

/// Color of the first (newest) segment.
pub const TRACE_START: Rgb = Rgb::RED;
/// Color the gradient runs towards.
pub const TRACE_END: Rgb = Rgb::LIME;
/// Line weight of trace segments, in pixels.
pub const TRACE_WEIGHT: f64 = 3.0;

/// A straight segment between two consecutive readings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraceSegment {
    pub from: LatLng,
    pub to: LatLng,
    /// `index / points`, the segment's position along the trace.
    pub fraction: f64,
    pub color: Rgb,
}

/// Segments connecting `site`'s markers by descending date.
///
/// Segment colors depend only on position in the sorted list, not on the
/// dates or values themselves.
pub fn build_trace(site: &str, markers: &[Marker]) -> Vec<TraceSegment> {
    let mut points: Vec<&Marker> = markers.iter().filter(|m| m.site == site).collect();
    points.sort_by(|a, b| a.cmp_newest_first(b));

    let total = points.len() as f64;
    points
        .windows(2)
        .enumerate()
        .map(|(index, pair)| {
            let fraction = index as f64 / total;
            TraceSegment {
                from: pair[0].latlng,
                to: pair[1].latlng,
                fraction,
                color: TRACE_START.lerp(TRACE_END, fraction),
            }
        })
        .collect()
}

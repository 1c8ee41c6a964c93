//! CSV export of readings with their resolved marker colors.

use maritime_core::marker::Marker;
use maritime_core::scale::ColorScale;
use std::io::Write;

pub const CSV_HEADER: [&str; 7] = ["site", "date", "time", "lat", "lng", "value", "color"];

/// Write one row per marker, in the order given.
pub fn write_markers_csv<W: Write>(writer: W, markers: &[Marker], scale: &ColorScale) -> anyhow::Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(CSV_HEADER)?;
    for marker in markers {
        let time = marker
            .time
            .map(|t| t.format("%H:%M:%S").to_string())
            .unwrap_or_default();
        let value = marker.value.map(|v| v.to_string()).unwrap_or_default();
        let date = marker.date.format("%Y-%m-%d").to_string();
        let lat = marker.latlng.lat.to_string();
        let lng = marker.latlng.lng.to_string();
        let color = scale.resolve(marker.value).rgb().to_css();
        csv_writer.write_record([
            marker.site.as_str(),
            date.as_str(),
            time.as_str(),
            lat.as_str(),
            lng.as_str(),
            value.as_str(),
            color.as_str(),
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}

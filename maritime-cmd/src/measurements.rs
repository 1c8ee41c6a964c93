//! `measurements` subcommand: fetch readings, summarize, optionally export.

use crate::client::ApiClient;
use crate::export::write_markers_csv;
use maritime_core::marker::Marker;
use maritime_core::query::MarkerQuery;
use maritime_core::scale::{ColorScale, MarkerColor};
use std::fs::File;
use std::path::PathBuf;

/// Per-site counts of in-range, out-of-range and missing readings.
#[derive(Debug, Default, PartialEq)]
pub struct SiteSummary {
    pub readings: usize,
    pub out_of_range: usize,
    pub no_data: usize,
    pub first: Option<String>,
    pub last: Option<String>,
}

pub fn summarize(markers: &[Marker], scale: &ColorScale) -> Vec<(String, SiteSummary)> {
    Marker::group_by_site(markers)
        .into_iter()
        .map(|(site, readings)| {
            let mut summary = SiteSummary {
                readings: readings.len(),
                ..SiteSummary::default()
            };
            for marker in &readings {
                match scale.resolve(marker.value) {
                    MarkerColor::OutOfRange => summary.out_of_range += 1,
                    MarkerColor::NoData => summary.no_data += 1,
                    MarkerColor::Scaled(_) => {}
                }
            }
            summary.first = readings.iter().map(|m| m.date).min().map(|d| d.to_string());
            summary.last = readings.iter().map(|m| m.date).max().map(|d| d.to_string());
            (site, summary)
        })
        .collect()
}

/// Write the CSV on the blocking pool. Returns the number of rows.
pub async fn export_csv(path: PathBuf, markers: Vec<Marker>, scale: ColorScale) -> anyhow::Result<usize> {
    tokio::task::spawn_blocking(move || {
        let file = File::create(&path)?;
        write_markers_csv(file, &markers, &scale)?;
        Ok(markers.len())
    })
    .await?
}

pub async fn run_measurements(
    client: &ApiClient,
    query: &MarkerQuery,
    csv_path: Option<&str>,
    csrf_token: Option<&str>,
) -> anyhow::Result<()> {
    let markers = client.fetch_markers(query, csrf_token).await?;
    let scale = ColorScale::for_reading(&query.reading);
    log::info!(
        "Fetched {} {} readings, domain {:?}",
        markers.len(),
        query.reading,
        scale.domain().breakpoints
    );

    for (site, summary) in summarize(&markers, &scale) {
        println!(
            "{site}: {} readings ({} above range, {} no data) {} .. {}",
            summary.readings,
            summary.out_of_range,
            summary.no_data,
            summary.first.unwrap_or_default(),
            summary.last.unwrap_or_default(),
        );
    }

    if let Some(path) = csv_path {
        let rows = export_csv(PathBuf::from(path), markers, scale).await?;
        log::info!("Wrote {} rows to {}", rows, path);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize() {
        let markers = Marker::list_from_json(
            r#"[
                {"site":"B","date":"2023-06-03","latlng":{"lat":0,"lng":0},"value":2.5},
                {"site":"A","date":"2023-06-02","latlng":{"lat":0,"lng":0},"value":0.2},
                {"site":"A","date":"2023-06-01","latlng":{"lat":0,"lng":0},"value":0.9},
                {"site":"A","date":"2023-06-05","latlng":{"lat":0,"lng":0}}
            ]"#,
        )
        .unwrap();
        let summary = summarize(&markers, &ColorScale::for_reading("aod_440nm"));

        assert_eq!(summary.len(), 2);
        let (site, a) = &summary[0];
        assert_eq!(site, "A");
        assert_eq!(
            a,
            &SiteSummary {
                readings: 3,
                out_of_range: 1,
                no_data: 1,
                first: Some("2023-06-01".to_string()),
                last: Some("2023-06-05".to_string()),
            }
        );
        assert_eq!(summary[1].1.out_of_range, 1);
    }

    #[tokio::test]
    async fn test_export_csv_writes_file() {
        let markers = Marker::list_from_json(
            r#"[{"site":"A","date":"2023-06-01","latlng":{"lat":1.5,"lng":2.5},"value":0.0}]"#,
        )
        .unwrap();
        let path = std::env::temp_dir().join(format!("maritime-export-{}.csv", std::process::id()));

        let rows = export_csv(path.clone(), markers, ColorScale::for_reading("aod_500nm"))
            .await
            .unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(rows, 1);
        assert_eq!(text.lines().count(), 2);
        assert!(text.starts_with("site,date,time,lat,lng,value,color"));
    }
}

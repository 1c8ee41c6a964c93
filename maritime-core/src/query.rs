//! Filter parameters for the two API calls, and change tracking for the
//! sites list.

use crate::{Error, Result};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeSet;

/// Date format used by both endpoints.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Check a date filter. An empty string means "no bound".
pub fn parse_date_filter(raw: &str) -> Result<Option<NaiveDate>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map(Some)
        .map_err(|e| Error::InvalidDate(format!("{raw}: {e}")))
}

/// Bounding box filter. Corners are optional; the sites endpoint only
/// receives them once all four are set.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoundingBox {
    pub min_lat: Option<f64>,
    pub min_lng: Option<f64>,
    pub max_lat: Option<f64>,
    pub max_lng: Option<f64>,
}

impl BoundingBox {
    pub fn new(min_lat: f64, min_lng: f64, max_lat: f64, max_lng: f64) -> Self {
        Self {
            min_lat: Some(min_lat),
            min_lng: Some(min_lng),
            max_lat: Some(max_lat),
            max_lng: Some(max_lng),
        }
    }

    /// All four corners, if every one is set.
    pub fn corners(&self) -> Option<[f64; 4]> {
        Some([self.min_lat?, self.min_lng?, self.max_lat?, self.max_lng?])
    }
}

/// Parameters of `GET /measurements/sites/`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SiteQuery {
    pub start_date: String,
    pub end_date: String,
    pub bbox: BoundingBox,
}

impl SiteQuery {
    /// Query string without the leading `?`. Empty dates are left out.
    pub fn to_query_string(&self) -> String {
        let mut params: Vec<(&str, String)> = Vec::new();
        if !self.start_date.is_empty() {
            params.push(("start_date", self.start_date.clone()));
        }
        if !self.end_date.is_empty() {
            params.push(("end_date", self.end_date.clone()));
        }
        if let Some([min_lat, min_lng, max_lat, max_lng]) = self.bbox.corners() {
            params.push(("min_lat", min_lat.to_string()));
            params.push(("min_lng", min_lng.to_string()));
            params.push(("max_lat", max_lat.to_string()));
            params.push(("max_lng", max_lng.to_string()));
        }
        params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Parameters of `POST /measurements/`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkerQuery {
    pub start_date: String,
    pub end_date: String,
    pub sites: BTreeSet<String>,
    pub bbox: BoundingBox,
    pub reading: String,
}

/// JSON body of the measurements request. Unset corners are omitted.
#[derive(Debug, Serialize)]
struct MarkerRequestBody<'a> {
    start_date: &'a str,
    end_date: &'a str,
    sites: Vec<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_lat: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_lng: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_lat: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_lng: Option<String>,
    reading: &'a str,
}

impl MarkerQuery {
    pub fn to_json_body(&self) -> crate::Result<String> {
        let body = MarkerRequestBody {
            start_date: &self.start_date,
            end_date: &self.end_date,
            sites: self.sites.iter().map(String::as_str).collect(),
            min_lat: self.bbox.min_lat.map(|v| v.to_string()),
            min_lng: self.bbox.min_lng.map(|v| v.to_string()),
            max_lat: self.bbox.max_lat.map(|v| v.to_string()),
            max_lng: self.bbox.max_lng.map(|v| v.to_string()),
            reading: &self.reading,
        };
        Ok(serde_json::to_string(&body)?)
    }
}

/// Remembers the last sites query so unchanged filters do not refetch.
#[derive(Debug, Default)]
pub struct SiteQueryTracker {
    previous: Option<SiteQuery>,
}

impl SiteQueryTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when `query` differs from the previous one (or there
    /// was none), and records it as the new previous query.
    pub fn observe(&mut self, query: &SiteQuery) -> bool {
        if self.previous.as_ref() == Some(query) {
            return false;
        }
        self.previous = Some(query.clone());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_filter() {
        assert_eq!(
            parse_date_filter("2023-06-01").unwrap(),
            NaiveDate::from_ymd_opt(2023, 6, 1)
        );
        assert_eq!(parse_date_filter("  ").unwrap(), None);
        assert!(matches!(parse_date_filter("06/01/2023"), Err(Error::InvalidDate(_))));
    }

    fn june() -> SiteQuery {
        SiteQuery {
            start_date: "2023-06-01".to_string(),
            end_date: "2023-06-30".to_string(),
            bbox: BoundingBox::new(-10.0, 20.5, 45.0, 60.0),
        }
    }

    #[test]
    fn test_site_query_string() {
        assert_eq!(
            june().to_query_string(),
            "start_date=2023-06-01&end_date=2023-06-30&min_lat=-10&min_lng=20.5&max_lat=45&max_lng=60"
        );
    }

    #[test]
    fn test_site_query_skips_partial_bbox_and_empty_dates() {
        let query = SiteQuery {
            start_date: String::new(),
            end_date: "2023-06-30".to_string(),
            bbox: BoundingBox {
                min_lat: Some(1.0),
                ..BoundingBox::default()
            },
        };
        assert_eq!(query.to_query_string(), "end_date=2023-06-30");
    }

    #[test]
    fn test_marker_body_strips_unset_corners() {
        let query = MarkerQuery {
            start_date: "2023-06-01".to_string(),
            end_date: "2023-06-30".to_string(),
            sites: ["Tara_Ocean".to_string(), "Polarstern_23".to_string()].into(),
            bbox: BoundingBox {
                max_lat: Some(12.25),
                ..BoundingBox::default()
            },
            reading: "aod_500nm".to_string(),
        };
        let body: serde_json::Value = serde_json::from_str(&query.to_json_body().unwrap()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "start_date": "2023-06-01",
                "end_date": "2023-06-30",
                "sites": ["Polarstern_23", "Tara_Ocean"],
                "max_lat": "12.25",
                "reading": "aod_500nm",
            })
        );
    }

    #[test]
    fn test_tracker_ignores_identical_query() {
        let mut tracker = SiteQueryTracker::new();
        assert!(tracker.observe(&june()));
        assert!(!tracker.observe(&june()));
        assert!(!tracker.observe(&june()));
    }

    #[test]
    fn test_tracker_fires_once_per_change() {
        let mut tracker = SiteQueryTracker::new();
        tracker.observe(&june());

        let mut later_end = june();
        later_end.end_date = "2023-07-15".to_string();
        assert!(tracker.observe(&later_end));
        assert!(!tracker.observe(&later_end));

        let mut moved = later_end.clone();
        moved.bbox.max_lng = Some(61.0);
        assert!(tracker.observe(&moved));
        assert!(!tracker.observe(&moved));

        let mut earlier_start = moved.clone();
        earlier_start.start_date = "2023-05-01".to_string();
        assert!(tracker.observe(&earlier_start));
    }
}

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, collections::BTreeMap};

/// Geographic position of a reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// One reading at one site and time, as returned by `/measurements/`.
///
/// `value` is `None` when the API sends `null` or omits the field; such
/// markers are drawn with the no-data color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub site: String,
    #[serde(default)]
    pub filename: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub time: Option<NaiveTime>,
    #[serde(alias = "coordinates")]
    pub latlng: LatLng,
    #[serde(default)]
    pub aeronet_number: i64,
    #[serde(default)]
    pub value: Option<f64>,
}

impl Marker {
    /// Decode the JSON array returned by the measurements endpoint.
    pub fn list_from_json(body: &str) -> crate::Result<Vec<Marker>> {
        Ok(serde_json::from_str(body)?)
    }

    /// Newest first: by date, then by time of day.
    pub fn cmp_newest_first(&self, other: &Self) -> Ordering {
        other
            .date
            .cmp(&self.date)
            .then_with(|| other.time.cmp(&self.time))
    }

    /// Group markers by site name, keeping fetch order within each site.
    pub fn group_by_site(markers: &[Marker]) -> BTreeMap<String, Vec<&Marker>> {
        let mut result: BTreeMap<String, Vec<&Marker>> = BTreeMap::new();
        for marker in markers {
            result.entry(marker.site.clone()).or_default().push(marker);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"[
        {"site":"Polarstern_23","filename":"PS_23_all_points.lev15","date":"2023-06-02","time":"10:14:03",
         "latlng":{"lat":54.1,"lng":7.9},"aeronet_number":512,"value":0.1342},
        {"site":"Polarstern_23","filename":"PS_23_all_points.lev15","date":"2023-06-01","time":"09:01:44",
         "latlng":{"lat":53.9,"lng":8.2},"aeronet_number":512,"value":null},
        {"site":"Tara_Ocean","date":"2023-06-01","coordinates":{"lat":-12.0,"lng":140.5}}
    ]"#;

    #[test]
    fn test_list_from_json() {
        let markers = Marker::list_from_json(BODY).unwrap();
        assert_eq!(markers.len(), 3);
        assert_eq!(markers[0].value, Some(0.1342));
        assert_eq!(markers[1].value, None);
        assert_eq!(markers[2].latlng, LatLng::new(-12.0, 140.5));
        assert_eq!(markers[2].time, None);
        assert_eq!(markers[2].aeronet_number, 0);
    }

    #[test]
    fn test_group_by_site() {
        let markers = Marker::list_from_json(BODY).unwrap();
        let groups = Marker::group_by_site(&markers);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups["Polarstern_23"].len(), 2);
        assert_eq!(groups["Tara_Ocean"].len(), 1);
    }

    #[test]
    fn test_cmp_newest_first() {
        let markers = Marker::list_from_json(BODY).unwrap();
        assert_eq!(markers[0].cmp_newest_first(&markers[1]), Ordering::Less);
        // same date, the one with a time of day sorts before the one without
        assert_eq!(markers[1].cmp_newest_first(&markers[2]), Ordering::Less);
    }
}

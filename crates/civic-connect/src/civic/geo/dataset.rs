use super::GeoRecord;
use std::collections::HashMap;
use std::sync::OnceLock;

pub const DEFAULT_TIME_ZONE: &str = "America/Chicago";

static ZIP_TABLE: OnceLock<HashMap<&'static str, GeoRecord>> = OnceLock::new();

pub(crate) fn record_for_zip(zip: &str) -> Option<&'static GeoRecord> {
    zip_table().get(zip)
}

fn zip_table() -> &'static HashMap<&'static str, GeoRecord> {
    ZIP_TABLE.get_or_init(|| {
        // zip, place, county, state, lat, lon, county FIPS, OCD division, time zone
        const ROWS: &[(&str, &str, &str, &str, f64, f64, &str, &str, &str)] = &[
            (
                "77002",
                "Houston",
                "Harris County",
                "TX",
                29.7569,
                -95.3657,
                "48201",
                "ocd-division/country:us/state:tx/place:houston",
                "America/Chicago",
            ),
            (
                "60602",
                "Chicago",
                "Cook County",
                "IL",
                41.8830,
                -87.6290,
                "17031",
                "ocd-division/country:us/state:il/place:chicago",
                "America/Chicago",
            ),
            (
                "10007",
                "New York",
                "New York County",
                "NY",
                40.7135,
                -74.0079,
                "36061",
                "ocd-division/country:us/state:ny/place:new_york",
                "America/New_York",
            ),
        ];

        ROWS.iter()
            .map(|&(zip, place, county, state, lat, lon, fips, ocd_id, time_zone)| {
                let record = GeoRecord {
                    zip: zip.to_string(),
                    place: place.to_string(),
                    county: Some(county.to_string()),
                    state: Some(state.to_string()),
                    lat: Some(lat),
                    lon: Some(lon),
                    fips_county: Some(fips.to_string()),
                    ocd_id: Some(ocd_id.to_string()),
                    time_zone: time_zone.to_string(),
                };
                (zip, record)
            })
            .collect()
    })
}

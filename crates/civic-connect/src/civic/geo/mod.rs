//! ZIP code to place and jurisdiction metadata.
//!
//! Lookups run against a bounded reference table. A ZIP that is not in the table is a valid
//! outcome and resolves to a minimal `"Unknown"` record instead of an error.

mod dataset;
pub mod router;

use serde::{Deserialize, Serialize};

pub use dataset::DEFAULT_TIME_ZONE;
pub use router::geo_router;

/// Place metadata for a single ZIP code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoRecord {
    pub zip: String,
    pub place: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub county: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fips_county: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ocd_id: Option<String>,
    pub time_zone: String,
}

impl GeoRecord {
    fn unknown(zip: &str) -> Self {
        Self {
            zip: zip.to_string(),
            place: "Unknown".to_string(),
            county: None,
            state: None,
            lat: None,
            lon: None,
            fips_county: None,
            ocd_id: None,
            time_zone: DEFAULT_TIME_ZONE.to_string(),
        }
    }

    pub fn is_known(&self) -> bool {
        self.place != "Unknown"
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeoError {
    #[error("zip is required")]
    MissingZip,
}

/// Resolves `zip` against the reference table.
pub fn resolve(zip: &str) -> Result<GeoRecord, GeoError> {
    let zip = zip.trim();
    if zip.is_empty() {
        return Err(GeoError::MissingZip);
    }

    Ok(dataset::record_for_zip(zip)
        .cloned()
        .unwrap_or_else(|| GeoRecord::unknown(zip)))
}

use super::domain::OfficialRecord;
use crate::civic::geo::{self, GeoRecord};

/// How much of the synthetic roster to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Coverage {
    /// Full roster, served when no live credential is configured.
    Full,
    /// Essential offices only, served after the live source failed.
    Essential,
}

struct SyntheticOfficial {
    name: &'static str,
    role: &'static str,
    level: &'static str,
    website: &'static str,
    essential: bool,
}

const HOUSTON_DOWNTOWN: &[SyntheticOfficial] = &[
    SyntheticOfficial {
        name: "Houston Mayor",
        role: "Mayor - City Executive",
        level: "city",
        website: "https://www.houstontx.gov",
        essential: true,
    },
    SyntheticOfficial {
        name: "District C Council Member",
        role: "City Council",
        level: "city",
        website: "https://www.houstontx.gov",
        essential: false,
    },
];

/// Rosters are keyed by OCD division, so only ZIPs the geo table knows can carry data.
fn roster_for_zip(zip: &str) -> &'static [SyntheticOfficial] {
    let Some(record) = geo::resolve(zip).ok().filter(GeoRecord::is_known) else {
        return &[];
    };

    match record.ocd_id.as_deref() {
        Some("ocd-division/country:us/state:tx/place:houston") if zip == "77002" => {
            HOUSTON_DOWNTOWN
        }
        _ => &[],
    }
}

pub(crate) fn officials_for_zip(zip: &str, coverage: Coverage) -> Vec<OfficialRecord> {
    roster_for_zip(zip)
        .iter()
        .filter(|official| coverage == Coverage::Full || official.essential)
        .map(|official| OfficialRecord {
            name: Some(official.name.to_string()),
            role: Some(official.role.to_string()),
            level: official.level.to_string(),
            phone: None,
            email: None,
            website: Some(official.website.to_string()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_roster_includes_council() {
        let officials = officials_for_zip("77002", Coverage::Full);
        assert_eq!(officials.len(), 2);
        assert!(officials
            .iter()
            .any(|official| official.name.as_deref() == Some("Houston Mayor")));
    }

    #[test]
    fn essential_roster_is_a_subset() {
        let full = officials_for_zip("77002", Coverage::Full);
        let essential = officials_for_zip("77002", Coverage::Essential);
        assert_eq!(essential.len(), 1);
        assert!(essential.iter().all(|official| full.contains(official)));
    }

    #[test]
    fn known_place_without_roster_has_no_synthetic_data() {
        assert!(geo::resolve("60602").expect("lookup").is_known());
        assert!(officials_for_zip("60602", Coverage::Full).is_empty());
    }

    #[test]
    fn unknown_zip_has_no_synthetic_data() {
        assert!(officials_for_zip("99999", Coverage::Full).is_empty());
        assert!(officials_for_zip("", Coverage::Essential).is_empty());
    }
}

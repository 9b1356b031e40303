//! Flattens an upstream `offices` + `officials` graph into [`OfficialRecord`]s.
//!
//! The payload stays an untyped JSON document until it reaches this module. Anything
//! malformed degrades to an absent field; records are never dropped.

use serde_json::Value;

use super::domain::OfficialRecord;

const UNKNOWN_LEVEL: &str = "unknown";

/// Borrowed view over one upstream office entry.
#[derive(Debug)]
pub(crate) struct RawOffice<'a> {
    name: Option<&'a str>,
    levels: &'a [Value],
    official_indices: &'a [Value],
}

impl<'a> RawOffice<'a> {
    fn from_value(value: &'a Value) -> Self {
        Self {
            name: value.get("name").and_then(Value::as_str),
            levels: array_field(value, "levels"),
            official_indices: array_field(value, "officialIndices"),
        }
    }

    fn level(&self) -> &'a str {
        first_text(self.levels).unwrap_or(UNKNOWN_LEVEL)
    }
}

/// Borrowed view over one upstream official entry.
#[derive(Debug, Default)]
pub(crate) struct RawOfficial<'a> {
    name: Option<&'a str>,
    phones: &'a [Value],
    emails: &'a [Value],
    urls: &'a [Value],
}

impl<'a> RawOfficial<'a> {
    fn from_value(value: &'a Value) -> Self {
        Self {
            name: value.get("name").and_then(Value::as_str),
            phones: array_field(value, "phones"),
            emails: array_field(value, "emails"),
            urls: array_field(value, "urls"),
        }
    }

    fn at(officials: &'a [Value], index: &Value) -> Self {
        index
            .as_u64()
            .and_then(|index| usize::try_from(index).ok())
            .and_then(|index| officials.get(index))
            .map(Self::from_value)
            .unwrap_or_default()
    }
}

/// Normalizes a full upstream document.
pub fn normalize_payload(payload: &Value) -> Vec<OfficialRecord> {
    normalize(array_field(payload, "offices"), array_field(payload, "officials"))
}

/// Emits one record per official index, in office order then index order.
pub fn normalize(offices: &[Value], officials: &[Value]) -> Vec<OfficialRecord> {
    let mut records = Vec::new();

    for office in offices.iter().map(RawOffice::from_value) {
        let level = office.level();
        for index in office.official_indices {
            let official = RawOfficial::at(officials, index);
            records.push(OfficialRecord {
                name: official.name.map(str::to_string),
                role: office.name.map(str::to_string),
                level: level.to_string(),
                phone: first_text(official.phones).map(str::to_string),
                email: first_text(official.emails).map(str::to_string),
                website: first_text(official.urls).map(str::to_string),
            });
        }
    }

    records
}

fn array_field<'a>(value: &'a Value, field: &str) -> &'a [Value] {
    value
        .get(field)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

fn first_text(values: &[Value]) -> Option<&str> {
    values
        .first()
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_payload() -> Value {
        json!({
            "offices": [
                {
                    "name": "Mayor of Houston",
                    "levels": ["locality"],
                    "officialIndices": [0]
                },
                {
                    "name": "U.S. Senator",
                    "levels": ["country", "administrativeArea1"],
                    "officialIndices": [1, 2]
                }
            ],
            "officials": [
                {
                    "name": "Jane Doe",
                    "phones": ["(832) 393-1011", "(832) 393-0000"],
                    "emails": ["mayor@houstontx.gov"],
                    "urls": ["https://www.houstontx.gov/mayor"]
                },
                { "name": "Senator One", "urls": ["https://one.senate.gov"] },
                { "name": "Senator Two" }
            ]
        })
    }

    #[test]
    fn flattens_offices_in_order() {
        let records = normalize_payload(&sample_payload());
        assert_eq!(records.len(), 3);

        assert_eq!(records[0].name.as_deref(), Some("Jane Doe"));
        assert_eq!(records[0].role.as_deref(), Some("Mayor of Houston"));
        assert_eq!(records[0].level, "locality");
        assert_eq!(records[0].phone.as_deref(), Some("(832) 393-1011"));
        assert_eq!(records[0].email.as_deref(), Some("mayor@houstontx.gov"));

        assert_eq!(records[1].name.as_deref(), Some("Senator One"));
        assert_eq!(records[1].level, "country");
        assert_eq!(records[1].website.as_deref(), Some("https://one.senate.gov"));
        assert_eq!(records[2].name.as_deref(), Some("Senator Two"));
        assert!(records[2].phone.is_none() && records[2].website.is_none());
    }

    #[test]
    fn output_length_matches_total_index_count() {
        let offices = vec![
            json!({ "name": "A", "officialIndices": [0, 1, 2] }),
            json!({ "name": "B", "officialIndices": [] }),
            json!({ "name": "C", "officialIndices": [2, 2] }),
        ];
        let officials = vec![json!({ "name": "x" }), json!({ "name": "y" }), json!({ "name": "z" })];

        let records = normalize(&offices, &officials);
        assert_eq!(records.len(), 5);
        let names: Vec<_> = records.iter().filter_map(|r| r.name.as_deref()).collect();
        assert_eq!(names, vec!["x", "y", "z", "z", "z"]);
    }

    #[test]
    fn out_of_range_index_yields_empty_record() {
        let offices = vec![json!({ "name": "Ghost Office", "levels": ["administrativeArea2"], "officialIndices": [7, -1, "1"] })];
        let officials = vec![json!({ "name": "Only" })];

        let records = normalize(&offices, &officials);
        assert_eq!(records.len(), 3);
        for record in &records {
            assert!(record.name.is_none());
            assert!(record.phone.is_none() && record.email.is_none() && record.website.is_none());
            assert_eq!(record.role.as_deref(), Some("Ghost Office"));
            assert_eq!(record.level, "administrativeArea2");
        }
    }

    #[test]
    fn missing_levels_default_to_unknown() {
        let offices = vec![
            json!({ "name": "No Levels", "officialIndices": [0] }),
            json!({ "name": "Empty Levels", "levels": [], "officialIndices": [0] }),
            json!({ "name": "Bad Levels", "levels": "city", "officialIndices": [0] }),
        ];
        let officials = vec![json!({ "name": "Someone" })];

        let records = normalize(&offices, &officials);
        assert!(records.iter().all(|record| record.level == "unknown"));
    }

    #[test]
    fn malformed_documents_never_fail() {
        assert!(normalize_payload(&json!(null)).is_empty());
        assert!(normalize_payload(&json!({ "offices": "nope" })).is_empty());
        assert!(normalize_payload(&json!({ "offices": [{ "name": "Orphan" }] })).is_empty());

        let records = normalize_payload(&json!({
            "offices": [{ "name": 42, "officialIndices": [0] }],
            "officials": [{ "name": null, "phones": [""], "emails": [7], "urls": "x" }]
        }));
        assert_eq!(records.len(), 1);
        assert_eq!(
            records[0],
            OfficialRecord {
                name: None,
                role: None,
                level: "unknown".to_string(),
                phone: None,
                email: None,
                website: None,
            }
        );
    }
}

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::civic::first_param;

const DEFAULT_RESOURCE_LIMIT: usize = 50;
const MAX_RESOURCE_LIMIT: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

/// Incoming catalog entry as posted by editors. Only `object_type` and `title` are required.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemSubmission {
    #[serde(default)]
    pub object_type: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub body_html: Option<String>,
    #[serde(default)]
    pub publish_date: Option<NaiveDate>,
    #[serde(default)]
    pub pathways: Vec<String>,
    #[serde(default)]
    pub sub_pathways: Vec<String>,
    #[serde(default)]
    pub engagement_levels: Vec<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub images: Vec<Value>,
    #[serde(default)]
    pub access_guide: Option<Value>,
    #[serde(default)]
    pub resources: Option<Value>,
    #[serde(default)]
    pub policy: Option<Value>,
    #[serde(default)]
    pub responsible: Option<Value>,
    #[serde(default)]
    pub is_online: bool,
    #[serde(default)]
    pub coverage: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub county: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub zip: Option<String>,
    #[serde(default)]
    pub ocd_id: Option<String>,
    #[serde(default)]
    pub fips_county: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
}

impl ItemSubmission {
    /// Applies defaults and checks the required fields.
    pub fn validate(self) -> Result<ItemFields, MissingItemFields> {
        let object_type = required(self.object_type).ok_or(MissingItemFields)?;
        let title = required(self.title).ok_or(MissingItemFields)?;

        Ok(ItemFields {
            object_type,
            title,
            summary: self.summary,
            body_html: self.body_html,
            publish_date: self.publish_date,
            pathways: self.pathways,
            sub_pathways: self.sub_pathways,
            engagement_levels: self.engagement_levels,
            keywords: self.keywords,
            images: self.images,
            access_guide: object_or_empty(self.access_guide),
            resources: object_or_empty(self.resources),
            policy: object_or_empty(self.policy),
            responsible: object_or_empty(self.responsible),
            is_online: self.is_online,
            coverage: self.coverage.unwrap_or_else(|| "online".to_string()),
            city: self.city,
            county: self.county,
            state: self.state,
            zip: self.zip,
            ocd_id: self.ocd_id,
            fips_county: self.fips_county,
            lat: self.lat.unwrap_or(0.0),
            lon: self.lon.unwrap_or(0.0),
        })
    }
}

fn required(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

fn object_or_empty(value: Option<Value>) -> Value {
    value.unwrap_or_else(|| Value::Object(Default::default()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("object_type and title are required")]
pub struct MissingItemFields;

/// Validated catalog content, ready to be stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemFields {
    pub object_type: String,
    pub title: String,
    pub summary: Option<String>,
    pub body_html: Option<String>,
    pub publish_date: Option<NaiveDate>,
    pub pathways: Vec<String>,
    pub sub_pathways: Vec<String>,
    pub engagement_levels: Vec<String>,
    pub keywords: Vec<String>,
    pub images: Vec<Value>,
    pub access_guide: Value,
    pub resources: Value,
    pub policy: Value,
    pub responsible: Value,
    pub is_online: bool,
    pub coverage: String,
    pub city: Option<String>,
    pub county: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub ocd_id: Option<String>,
    pub fips_county: Option<String>,
    pub lat: f64,
    pub lon: f64,
}

/// Stored catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: ItemId,
    #[serde(flatten)]
    pub fields: ItemFields,
}

/// Raw `GET /resources` parameters.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResourceQuery {
    #[serde(default)]
    pub zip: Option<String>,
    #[serde(default)]
    pub types: Option<String>,
    #[serde(default)]
    pub limit: Option<String>,
}

impl ResourceQuery {
    /// Builds the query from raw parameters, taking the first of any repeated value.
    pub fn from_params(params: &[(String, String)]) -> Self {
        Self {
            zip: first_param(params, "zip"),
            types: first_param(params, "types"),
            limit: first_param(params, "limit"),
        }
    }

    pub fn filter(&self) -> ResourceFilter {
        let zip = self
            .zip
            .as_deref()
            .map(str::trim)
            .filter(|zip| !zip.is_empty())
            .map(str::to_string);
        let types = self
            .types
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|kind| !kind.is_empty())
            .map(str::to_string)
            .collect();
        let limit = self
            .limit
            .as_deref()
            .and_then(|limit| limit.trim().parse::<usize>().ok())
            .unwrap_or(DEFAULT_RESOURCE_LIMIT)
            .min(MAX_RESOURCE_LIMIT);

        ResourceFilter { zip, types, limit }
    }
}

/// Normalized resource search criteria.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceFilter {
    pub zip: Option<String>,
    pub types: Vec<String>,
    pub limit: usize,
}

impl ResourceFilter {
    /// Online items match every zip.
    pub fn matches(&self, item: &CatalogItem) -> bool {
        let fields = &item.fields;
        let type_matches = self.types.is_empty() || self.types.contains(&fields.object_type);
        let zip_matches = match &self.zip {
            Some(zip) => fields.is_online || fields.zip.as_deref() == Some(zip.as_str()),
            None => true,
        };
        type_matches && zip_matches
    }

    /// Filters, orders newest first with undated items last, and applies the limit.
    pub fn select<I>(&self, items: I) -> Vec<CatalogItem>
    where
        I: IntoIterator<Item = CatalogItem>,
    {
        let mut selected: Vec<CatalogItem> =
            items.into_iter().filter(|item| self.matches(item)).collect();
        selected.sort_by(|a, b| {
            b.fields
                .publish_date
                .cmp(&a.fields.publish_date)
                .then_with(|| a.id.cmp(&b.id))
        });
        selected.truncate(self.limit);
        selected
    }
}

/// Value counts over a result page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResourceFacets {
    pub object_type: BTreeMap<String, usize>,
    pub pathways: BTreeMap<String, usize>,
    pub engagement_levels: BTreeMap<String, usize>,
}

impl ResourceFacets {
    pub fn from_items(items: &[CatalogItem]) -> Self {
        let mut facets = Self::default();
        for item in items {
            *facets
                .object_type
                .entry(item.fields.object_type.clone())
                .or_default() += 1;
            for pathway in &item.fields.pathways {
                *facets.pathways.entry(pathway.clone()).or_default() += 1;
            }
            for level in &item.fields.engagement_levels {
                *facets.engagement_levels.entry(level.clone()).or_default() += 1;
            }
        }
        facets
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ResourceSearch {
    pub results: Vec<CatalogItem>,
    pub facets: ResourceFacets,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(id: u64, object_type: &str, zip: Option<&str>, online: bool, date: Option<(i32, u32, u32)>) -> CatalogItem {
        let submission = ItemSubmission {
            object_type: Some(object_type.to_string()),
            title: Some(format!("item {id}")),
            zip: zip.map(str::to_string),
            is_online: online,
            publish_date: date.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
            ..ItemSubmission::default()
        };
        CatalogItem {
            id: ItemId(id),
            fields: submission.validate().expect("valid submission"),
        }
    }

    #[test]
    fn validate_applies_defaults() {
        let fields = ItemSubmission {
            object_type: Some("event".to_string()),
            title: Some("Town hall".to_string()),
            ..ItemSubmission::default()
        }
        .validate()
        .expect("valid");

        assert_eq!(fields.coverage, "online");
        assert_eq!(fields.access_guide, json!({}));
        assert!(fields.images.is_empty());
        assert_eq!((fields.lat, fields.lon), (0.0, 0.0));
    }

    #[test]
    fn validate_requires_type_and_title() {
        let missing_title = ItemSubmission {
            object_type: Some("event".to_string()),
            title: Some("  ".to_string()),
            ..ItemSubmission::default()
        };
        assert_eq!(missing_title.validate(), Err(MissingItemFields));
        assert_eq!(ItemSubmission::default().validate(), Err(MissingItemFields));
    }

    #[test]
    fn query_parsing_clamps_limit_and_splits_types() {
        let filter = ResourceQuery {
            zip: Some("77002".to_string()),
            types: Some("event,,program, ".to_string()),
            limit: Some("1000".to_string()),
        }
        .filter();
        assert_eq!(filter.types, vec!["event".to_string(), "program".to_string()]);
        assert_eq!(filter.limit, 200);
        assert_eq!(filter.zip.as_deref(), Some("77002"));

        let filter = ResourceQuery {
            limit: Some("lots".to_string()),
            ..ResourceQuery::default()
        }
        .filter();
        assert_eq!(filter.limit, 50);
        assert!(filter.types.is_empty());
        assert!(filter.zip.is_none());
    }

    #[test]
    fn select_keeps_local_and_online_items_newest_first() {
        let items = vec![
            item(1, "event", Some("77002"), false, Some((2025, 1, 5))),
            item(2, "event", Some("60602"), false, Some((2025, 3, 1))),
            item(3, "program", None, true, None),
            item(4, "event", None, true, Some((2025, 6, 1))),
        ];
        let filter = ResourceQuery {
            zip: Some("77002".to_string()),
            ..ResourceQuery::default()
        }
        .filter();

        let ids: Vec<u64> = filter.select(items).iter().map(|item| item.id.0).collect();
        assert_eq!(ids, vec![4, 1, 3]);
    }

    #[test]
    fn select_filters_types_and_truncates() {
        let items = vec![
            item(1, "event", None, true, Some((2025, 1, 1))),
            item(2, "program", None, true, Some((2025, 1, 2))),
            item(3, "event", None, true, Some((2025, 1, 3))),
        ];
        let filter = ResourceQuery {
            types: Some("event".to_string()),
            limit: Some("1".to_string()),
            ..ResourceQuery::default()
        }
        .filter();

        let selected = filter.select(items);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].id, ItemId(3));
    }

    #[test]
    fn facets_count_values() {
        let mut first = item(1, "event", None, true, None);
        first.fields.pathways = vec!["voting".to_string(), "volunteering".to_string()];
        let mut second = item(2, "event", None, true, None);
        second.fields.pathways = vec!["voting".to_string()];
        second.fields.engagement_levels = vec!["beginner".to_string()];

        let facets = ResourceFacets::from_items(&[first, second]);
        assert_eq!(facets.object_type.get("event"), Some(&2));
        assert_eq!(facets.pathways.get("voting"), Some(&2));
        assert_eq!(facets.pathways.get("volunteering"), Some(&1));
        assert_eq!(facets.engagement_levels.get("beginner"), Some(&1));
    }

    #[test]
    fn stored_item_serializes_flat() {
        let value = serde_json::to_value(item(9, "event", Some("77002"), false, None)).expect("serialize");
        assert_eq!(value["id"], json!(9));
        assert_eq!(value["object_type"], json!("event"));
        assert_eq!(value["zip"], json!("77002"));
    }
}

use serde::{Deserialize, Serialize};

use crate::civic::first_param;

/// Location parameters supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LocationQuery {
    #[serde(default)]
    pub zip: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

impl LocationQuery {
    /// Builds the query from raw parameters, taking the first of any repeated value.
    pub fn from_params(params: &[(String, String)]) -> Self {
        Self {
            zip: first_param(params, "zip"),
            address: first_param(params, "address"),
        }
    }

    #[cfg(test)]
    pub(crate) fn from_zip(zip: impl Into<String>) -> Self {
        Self {
            zip: Some(zip.into()),
            address: None,
        }
    }

    /// Rejects queries with neither a zip nor an address. The address wins as the lookup term.
    pub fn validate(&self) -> Result<ResolutionKey, ResolutionError> {
        let zip = non_empty(self.zip.as_deref());
        let address = non_empty(self.address.as_deref());

        let term = address
            .or(zip)
            .ok_or(ResolutionError::InvalidInput)?
            .to_string();

        Ok(ResolutionKey {
            term,
            zip: zip.unwrap_or_default().to_string(),
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

/// Validated query: `term` goes to the live source, `zip` drives the synthetic tiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionKey {
    pub term: String,
    pub zip: String,
}

/// Canonical official shape emitted by every tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfficialRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// Which tier produced a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionSource {
    Stub,
    Live,
    Fallback,
}

impl ResolutionSource {
    pub fn label(self) -> &'static str {
        match self {
            ResolutionSource::Stub => "stub",
            ResolutionSource::Live => "live",
            ResolutionSource::Fallback => "fallback",
        }
    }
}

/// Response envelope returned to callers regardless of tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolutionResult {
    pub source: ResolutionSource,
    pub officials: Vec<OfficialRecord>,
    #[serde(default)]
    pub agencies: Vec<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ResolutionResult {
    pub fn is_degraded(&self) -> bool {
        self.source != ResolutionSource::Live
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolutionError {
    #[error("zip or address is required")]
    InvalidInput,
    #[error("civic api error")]
    UpstreamRejected { status: u16, detail: String },
}

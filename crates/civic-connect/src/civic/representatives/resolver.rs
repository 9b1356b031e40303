use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use super::directory::{CivicDirectory, DirectoryError};
use super::domain::{
    LocationQuery, OfficialRecord, ResolutionError, ResolutionKey, ResolutionResult,
    ResolutionSource,
};
use super::normalizer::normalize_payload;
use super::synthetic::{officials_for_zip, Coverage};

const MAX_DETAIL_CHARS: usize = 500;

/// Data source chosen for a request. Tiers run in order; the only downgrade is live to fallback.
enum Tier<'a, D> {
    Stub,
    Live(&'a D),
}

/// What a tier produced, before it is wrapped into the response envelope.
#[derive(Debug)]
enum TierOutcome {
    Stub(Vec<OfficialRecord>),
    Live(Vec<OfficialRecord>),
    Fallback {
        officials: Vec<OfficialRecord>,
        error: String,
    },
}

impl From<TierOutcome> for ResolutionResult {
    fn from(outcome: TierOutcome) -> Self {
        let (source, officials, error) = match outcome {
            TierOutcome::Stub(officials) => (ResolutionSource::Stub, officials, None),
            TierOutcome::Live(officials) => (ResolutionSource::Live, officials, None),
            TierOutcome::Fallback { officials, error } => {
                (ResolutionSource::Fallback, officials, Some(error))
            }
        };

        ResolutionResult {
            source,
            officials,
            agencies: Vec::new(),
            error,
        }
    }
}

/// Chooses between synthetic data and the live directory for each request.
///
/// Holds no per-request state, so one instance is shared across concurrent resolutions.
pub struct RepresentativeResolver<D> {
    directory: Option<Arc<D>>,
    timeout: Duration,
}

impl<D> RepresentativeResolver<D>
where
    D: CivicDirectory + 'static,
{
    /// `directory` is `None` when no live credential is configured.
    pub fn new(directory: Option<Arc<D>>, timeout: Duration) -> Self {
        Self { directory, timeout }
    }

    pub fn has_live_source(&self) -> bool {
        self.directory.is_some()
    }

    pub async fn resolve(
        &self,
        query: &LocationQuery,
    ) -> Result<ResolutionResult, ResolutionError> {
        let key = query.validate()?;

        let outcome = match self.select_tier() {
            Tier::Stub => {
                info!(zip = %key.zip, tier = "stub", "no civic api key configured");
                TierOutcome::Stub(officials_for_zip(&key.zip, Coverage::Full))
            }
            Tier::Live(directory) => self.resolve_live(directory, &key).await?,
        };

        Ok(outcome.into())
    }

    fn select_tier(&self) -> Tier<'_, D> {
        match self.directory.as_deref() {
            Some(directory) => Tier::Live(directory),
            None => Tier::Stub,
        }
    }

    async fn resolve_live(
        &self,
        directory: &D,
        key: &ResolutionKey,
    ) -> Result<TierOutcome, ResolutionError> {
        let call = tokio::time::timeout(self.timeout, directory.representatives(&key.term)).await;

        match call {
            Ok(Ok(payload)) => {
                let officials = normalize_payload(&payload);
                info!(zip = %key.zip, tier = "live", officials = officials.len(), "resolved representatives");
                Ok(TierOutcome::Live(officials))
            }
            Ok(Err(DirectoryError::Rejected { status, body })) => {
                warn!(zip = %key.zip, status, "civic api rejected representatives request");
                Err(ResolutionError::UpstreamRejected {
                    status,
                    detail: truncate_chars(&body, MAX_DETAIL_CHARS),
                })
            }
            Ok(Err(error @ DirectoryError::Unavailable(_))) => Ok(fallback(key, error.to_string())),
            Err(_) => Ok(fallback(
                key,
                DirectoryError::Unavailable(format!(
                    "no response within {}ms",
                    self.timeout.as_millis()
                ))
                .to_string(),
            )),
        }
    }
}

fn fallback(key: &ResolutionKey, error: String) -> TierOutcome {
    warn!(zip = %key.zip, tier = "fallback", %error, "civic api unavailable, serving fallback data");
    TierOutcome::Fallback {
        officials: officials_for_zip(&key.zip, Coverage::Essential),
        error,
    }
}

fn truncate_chars(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}

//! TTL cache bounding calls into the sample source.

use crate::model::Sample;
use crate::source::{FetchError, SampleSource};

use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

/// Freshness window for cached samples.
pub const SAMPLE_TTL: Duration = Duration::from_secs(10);

/// The most recent successful fetch.
struct CacheEntry {
    samples: Arc<Vec<Sample>>,
    fetched_at: Instant,
}

/// Result of one refresh. `samples` may be stale or empty after a failed
/// fetch; `failure` carries the cause for the warning banner.
pub struct Refresh {
    pub samples: Arc<Vec<Sample>>,
    pub failure: Option<FetchError>,
}

/// Wraps a [`SampleSource`] with a fixed time-to-live so repeated display
/// refreshes do not over-query the probing service.
pub struct RefreshCache {
    source: Arc<dyn SampleSource>,
    ttl: Duration,
    entry: Mutex<Option<CacheEntry>>,
}

impl RefreshCache {
    pub fn new(source: Arc<dyn SampleSource>) -> Self {
        Self::with_ttl(source, SAMPLE_TTL)
    }

    pub fn with_ttl(source: Arc<dyn SampleSource>, ttl: Duration) -> Self {
        Self {
            source,
            ttl,
            entry: Mutex::new(None),
        }
    }

    /// Return the current sample set, fetching from upstream only when the
    /// cached copy is older than the TTL.
    ///
    /// Never fails outward: on a fetch failure the previous cached set (or an
    /// empty one) is returned together with the failure. The TTL clock is not
    /// reset on failure, so the next call retries immediately.
    pub async fn get_samples(&self) -> Refresh {
        // One guard across the whole check-then-fetch sequence: at most one
        // upstream call per TTL window, even with concurrent refreshes.
        let mut entry = self.entry.lock().await;

        if let Some(cached) = entry.as_ref() {
            if cached.fetched_at.elapsed() < self.ttl {
                return Refresh {
                    samples: cached.samples.clone(),
                    failure: None,
                };
            }
        }

        match self.source.fetch().await {
            Ok(samples) => {
                let samples = Arc::new(samples);
                *entry = Some(CacheEntry {
                    samples: samples.clone(),
                    fetched_at: Instant::now(),
                });
                Refresh {
                    samples,
                    failure: None,
                }
            }
            Err(e) => {
                match &e {
                    FetchError::Transport(cause) => {
                        tracing::warn!("sample fetch failed: {}", cause);
                    }
                    FetchError::Parse(cause) => {
                        tracing::warn!("sample response rejected: {}", cause);
                    }
                }

                let samples = entry
                    .as_ref()
                    .map(|c| c.samples.clone())
                    .unwrap_or_default();
                Refresh {
                    samples,
                    failure: Some(e),
                }
            }
        }
    }
}

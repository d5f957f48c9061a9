//! Sample retrieval from the external probing service.

mod http;

pub use http::HttpSampleSource;

use crate::model::{parse_timestamp, Sample};

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

/// Fetch failure categories.
///
/// `Transport` covers the network round-trip; `Parse` covers a response that
/// arrived but violates the sample contract. Both carry a human-readable
/// cause and surface as a warning banner, never a crash.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("parse error: {0}")]
    Parse(String),
}

/// A source of latency/availability samples for the monitored site.
#[async_trait]
pub trait SampleSource: Send + Sync {
    /// Retrieve the full sample set, oldest first.
    async fn fetch(&self) -> Result<Vec<Sample>, FetchError>;
}

/// Wire shape of one element of the upstream JSON array.
///
/// `timestamp` and `online` are required; `latency` may be null or absent.
/// Unknown fields are ignored.
#[derive(Debug, Deserialize)]
struct RawSample {
    timestamp: String,
    #[serde(default)]
    latency: Option<f64>,
    online: bool,
}

/// Decode a response body into samples.
///
/// The whole body is rejected if any element is malformed; a partially
/// decoded set is never returned.
pub(crate) fn decode_body(body: &[u8]) -> Result<Vec<Sample>, FetchError> {
    let raw: Vec<RawSample> = serde_json::from_slice(body)
        .map_err(|e| FetchError::Parse(format!("invalid response body: {}", e)))?;

    let mut samples = Vec::with_capacity(raw.len());
    for (i, r) in raw.into_iter().enumerate() {
        let timestamp = parse_timestamp(&r.timestamp).ok_or_else(|| {
            FetchError::Parse(format!("sample {}: bad timestamp {:?}", i, r.timestamp))
        })?;

        if let Some(ms) = r.latency {
            if !ms.is_finite() || ms < 0.0 {
                return Err(FetchError::Parse(format!("sample {}: bad latency {}", i, ms)));
            }
        }

        samples.push(Sample {
            timestamp,
            latency: r.latency,
            online: r.online,
        });
    }

    Ok(samples)
}

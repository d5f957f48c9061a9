//! Sample model shared across the refresh pipeline.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;

/// One latency/availability observation for the monitored site.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sample {
    pub timestamp: DateTime<Utc>,
    /// Latency in milliseconds; `None` when the probe could not measure it.
    pub latency: Option<f64>,
    pub online: bool,
}

/// Parse an upstream timestamp string.
///
/// The probing service emits RFC 3339, but older deployments used bare
/// `YYYY-MM-DD HH:MM:SS` strings, so several formats are accepted. Naive
/// timestamps are taken as UTC.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    let formats = [
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];

    for fmt in &formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(DateTime::from_naive_utc_and_offset(dt, Utc));
        }
    }

    None
}

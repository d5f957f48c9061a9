//! Pure derivation of summary metrics from a sample set.

use crate::model::Sample;
use serde::Serialize;

/// The four summary metrics, recomputed on every refresh.
///
/// Every field is `None` when the sample set is empty; `average_latency` is
/// also `None` when no sample carries a latency, so "no data" is never
/// displayed as zero latency.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Metrics {
    pub average_latency: Option<f64>,
    pub current_status: Option<bool>,
    pub current_latency: Option<f64>,
    pub uptime_percentage: Option<f64>,
}

/// Compute metrics over samples ordered oldest to newest.
///
/// `current_status` and `current_latency` read only the last sample; the
/// aggregates cover the whole set.
pub fn compute(samples: &[Sample]) -> Metrics {
    let Some(last) = samples.last() else {
        return Metrics::default();
    };

    let latencies: Vec<f64> = samples.iter().filter_map(|s| s.latency).collect();
    let average_latency = if latencies.is_empty() {
        None
    } else {
        Some(round1(latencies.iter().sum::<f64>() / latencies.len() as f64))
    };

    let online_count = samples.iter().filter(|s| s.online).count();
    let uptime_percentage = Some(round1(online_count as f64 * 100.0 / samples.len() as f64));

    Metrics {
        average_latency,
        current_status: Some(last.online),
        current_latency: last.latency,
        uptime_percentage,
    }
}

/// Round half away from zero to one decimal place.
fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn sample(minute: u32, latency: Option<f64>, online: bool) -> Sample {
        Sample {
            timestamp: Utc.with_ymd_and_hms(2025, 3, 17, 10, minute, 0).unwrap(),
            latency,
            online,
        }
    }

    #[test]
    fn test_metrics_for_steady_online_site() {
        let samples = vec![
            sample(0, Some(120.0), true),
            sample(10, Some(145.0), true),
            sample(20, Some(118.0), true),
        ];
        let m = compute(&samples);

        assert_eq!(m.average_latency, Some(127.7));
        assert_eq!(m.current_status, Some(true));
        assert_eq!(m.current_latency, Some(118.0));
        assert_eq!(m.uptime_percentage, Some(100.0));
    }

    #[test]
    fn test_metrics_skip_missing_latencies() {
        let samples = vec![sample(1, None, false), sample(2, Some(200.0), true)];
        let m = compute(&samples);

        // The offline sample counts toward uptime but not the mean
        assert_eq!(m.average_latency, Some(200.0));
        assert_eq!(m.uptime_percentage, Some(50.0));
        assert_eq!(m.current_status, Some(true));
        assert_eq!(m.current_latency, Some(200.0));
    }

    #[test]
    fn test_metrics_for_empty_set() {
        let m = compute(&[]);
        assert_eq!(m, Metrics::default());
        assert!(m.average_latency.is_none());
        assert!(m.current_status.is_none());
        assert!(m.current_latency.is_none());
        assert!(m.uptime_percentage.is_none());
    }

    #[test]
    fn test_average_none_when_all_latencies_missing() {
        let samples = vec![sample(1, None, false), sample(2, None, false)];
        let m = compute(&samples);

        assert_eq!(m.average_latency, None);
        assert_eq!(m.uptime_percentage, Some(0.0));
        assert_eq!(m.current_status, Some(false));
        assert_eq!(m.current_latency, None);
    }

    #[test]
    fn test_last_sample_determines_status() {
        let samples = vec![
            sample(0, Some(100.0), true),
            sample(10, Some(100.0), true),
            sample(20, None, false),
        ];
        let m = compute(&samples);

        assert_eq!(m.current_status, Some(false));
        assert_eq!(m.current_latency, None);
        // Earlier samples still count toward the aggregates
        assert_eq!(m.average_latency, Some(100.0));
        assert_eq!(m.uptime_percentage, Some(66.7));
    }

    #[test]
    fn test_rounding_half_away_from_zero() {
        assert_eq!(round1(0.25), 0.3);
        assert_eq!(round1(0.24), 0.2);
        assert_eq!(round1(127.66666666666667), 127.7);
        assert_eq!(round1(100.0), 100.0);
    }
}

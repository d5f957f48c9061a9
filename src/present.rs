//! Projection of samples and metrics into the dashboard view.
//!
//! No business logic lives here: metric derivation happens in
//! [`crate::metrics`], and this module only shapes and formats the result
//! for the display layer.

use crate::metrics::Metrics;
use crate::model::Sample;

use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;

/// Timestamp format used in history rows and the "last updated" stamp.
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub const STATUS_ONLINE: &str = "Online";
pub const STATUS_OFFLINE: &str = "Offline";

/// One labeled metric card.
#[derive(Debug, Clone, Serialize)]
pub struct MetricCard {
    pub label: String,
    pub value: String,
    /// CSS class for the value, matching the dashboard stylesheet.
    pub class: &'static str,
}

/// One point of the latency chart. A missing latency serializes as `null`
/// so the chart renders a gap instead of a zero.
#[derive(Debug, Clone, Serialize)]
pub struct ChartPoint {
    pub timestamp: DateTime<Utc>,
    pub latency: Option<f64>,
}

/// One row of the status history table.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryRow {
    pub timestamp: String,
    pub status: &'static str,
    pub latency: Option<f64>,
}

/// Everything the display layer needs for one render.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub site_name: String,
    /// False when no live data exists and the preview set is shown.
    pub live: bool,
    pub warning: Option<String>,
    pub last_updated: String,
    pub metrics: Metrics,
    pub cards: Vec<MetricCard>,
    pub chart: Vec<ChartPoint>,
    pub history: Vec<HistoryRow>,
}

/// Build the view for one render.
///
/// An empty sample set activates the preview path: the fixed example set
/// drives the chart and history projections, `live` goes false, and the
/// metrics stay undefined.
pub fn build_view(
    site_name: &str,
    samples: &[Sample],
    metrics: &Metrics,
    failure: Option<String>,
    now: DateTime<Utc>,
) -> DashboardView {
    let live = !samples.is_empty();
    let preview;
    let shown: &[Sample] = if live {
        samples
    } else {
        preview = example_samples();
        &preview
    };

    DashboardView {
        site_name: site_name.to_string(),
        live,
        warning: failure,
        last_updated: now.format(TIME_FORMAT).to_string(),
        metrics: metrics.clone(),
        cards: cards(site_name, metrics),
        chart: shown
            .iter()
            .map(|s| ChartPoint {
                timestamp: s.timestamp,
                latency: s.latency,
            })
            .collect(),
        history: shown.iter().map(history_row).collect(),
    }
}

fn cards(site_name: &str, metrics: &Metrics) -> Vec<MetricCard> {
    let status = metrics.current_status.map(|online| {
        if online {
            (STATUS_ONLINE, "metric-online")
        } else {
            (STATUS_OFFLINE, "metric-offline")
        }
    });

    vec![
        MetricCard {
            label: "Site".to_string(),
            value: site_name.to_string(),
            class: "metric-site",
        },
        MetricCard {
            label: "Average Latency".to_string(),
            value: metrics
                .average_latency
                .map(|ms| format!("{:.1} ms", ms))
                .unwrap_or_else(|| "--".to_string()),
            class: "metric-latency",
        },
        MetricCard {
            label: "Current Status".to_string(),
            value: status
                .map(|(label, _)| label.to_string())
                .unwrap_or_else(|| "--".to_string()),
            class: status.map(|(_, class)| class).unwrap_or("metric-site"),
        },
        MetricCard {
            label: "Uptime".to_string(),
            value: metrics
                .uptime_percentage
                .map(|p| format!("{:.1}%", p))
                .unwrap_or_else(|| "--".to_string()),
            class: "metric-latency",
        },
    ]
}

fn history_row(s: &Sample) -> HistoryRow {
    HistoryRow {
        timestamp: s.timestamp.format(TIME_FORMAT).to_string(),
        status: if s.online {
            STATUS_ONLINE
        } else {
            STATUS_OFFLINE
        },
        latency: s.latency,
    }
}

/// Fixed preview set shown when no live data exists yet.
pub fn example_samples() -> Vec<Sample> {
    [(0, 120.0), (10, 145.0), (20, 118.0)]
        .into_iter()
        .map(|(minute, latency)| Sample {
            timestamp: Utc.with_ymd_and_hms(2025, 3, 17, 10, minute, 0).unwrap(),
            latency: Some(latency),
            online: true,
        })
        .collect()
}

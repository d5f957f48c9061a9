//! HTTP request handlers.

use super::AppState;
use crate::metrics;
use crate::present::{self, DashboardView};

use axum::{
    extract::State,
    response::{Html, IntoResponse, Json},
};
use chrono::Utc;

// Templates use simple string replacement, no templating engine needed
const DASHBOARD_TEMPLATE: &str = include_str!("templates/dashboard.html");
const LAYOUT_TEMPLATE: &str = include_str!("templates/layout.html");

/// Run one refresh cycle and build the view for it.
async fn refresh_view(state: &AppState) -> DashboardView {
    let refresh = state.cache.get_samples().await;
    let computed = metrics::compute(&refresh.samples);

    present::build_view(
        &state.config.site_name,
        &refresh.samples,
        &computed,
        refresh.failure.map(|e| e.to_string()),
        Utc::now(),
    )
}

pub async fn handle_dashboard(State(state): State<AppState>) -> impl IntoResponse {
    let view = refresh_view(&state).await;
    let view_json = serde_json::to_string(&view).unwrap_or_else(|_| "{}".to_string());

    let content = DASHBOARD_TEMPLATE.replace("{{view_json}}", &view_json);

    let page = LAYOUT_TEMPLATE
        .replace("{{title}}", &format!("{} - Latency Monitor", view.site_name))
        .replace("{{content}}", &content);

    Html(page)
}

pub async fn handle_view(State(state): State<AppState>) -> impl IntoResponse {
    Json(refresh_view(&state).await)
}

pub async fn handle_favicon() -> impl IntoResponse {
    let svg = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100">
        <circle cx="50" cy="50" r="45" fill="#8b5cf6"/>
        <path d="M25 55 L40 40 L55 55 L70 35 L85 50" stroke="white" stroke-width="4" fill="none"/>
    </svg>"##;

    (
        [(axum::http::header::CONTENT_TYPE, "image/svg+xml")],
        svg,
    )
}

//! sitepulse - single-site uptime/latency dashboard.
//!
//! Fetches latency/availability samples from an external probing service on
//! a bounded cache interval and serves them as metric cards, a latency
//! chart, and a status history table.

mod cache;
mod config;
mod metrics;
mod model;
mod present;
mod source;
mod web;

use cache::RefreshCache;
use config::ServerConfig;
use source::HttpSampleSource;
use web::Server;

use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env()
            .add_directive("sitepulse=info".parse()?))
        .init();

    // Load configuration
    let cfg = ServerConfig::load();
    tracing::info!("Starting sitepulse on port {}...", cfg.http_port);
    tracing::info!("Monitoring {} via {}", cfg.site_name, cfg.api_url);

    // Wire the refresh pipeline
    let source = Arc::new(HttpSampleSource::new(&cfg.api_url)?);
    let cache = Arc::new(RefreshCache::new(source));

    // Start web server
    let server = Server::new(cfg, cache);
    server.start().await?;

    Ok(())
}

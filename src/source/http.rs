//! HTTP implementation of the sample source.

use super::{decode_body, FetchError, SampleSource};
use crate::model::Sample;

use async_trait::async_trait;
use std::time::Duration;

/// Upstream request timeout. A fetch never blocks longer than this.
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Sample source backed by a single HTTP GET against the probing API.
pub struct HttpSampleSource {
    client: reqwest::Client,
    url: String,
}

impl HttpSampleSource {
    /// Create a source for the given endpoint URL.
    pub fn new(url: &str) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            url: url.to_string(),
        })
    }
}

#[async_trait]
impl SampleSource for HttpSampleSource {
    async fn fetch(&self) -> Result<Vec<Sample>, FetchError> {
        let response = self.client.get(&self.url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Transport(format!("request timed out after {:?}", FETCH_TIMEOUT))
            } else {
                FetchError::Transport(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Transport(format!("unexpected status {}", status)));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        decode_body(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::{routing::get, Router};

    /// Serve a throwaway router on an ephemeral port, returning the data URL.
    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}/data", addr)
    }

    #[tokio::test]
    async fn test_fetch_parses_valid_body() {
        let body = r#"[
            {"timestamp":"2025-03-17T10:00:00Z","latency":120,"online":true},
            {"timestamp":"2025-03-17T10:10:00Z","latency":null,"online":false}
        ]"#;
        let url = serve(Router::new().route("/data", get(move || async move { body }))).await;

        let source = HttpSampleSource::new(&url).unwrap();
        let samples = source.fetch().await.unwrap();

        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].latency, Some(120.0));
        assert!(samples[1].latency.is_none());
        assert!(!samples[1].online);
    }

    #[tokio::test]
    async fn test_fetch_maps_error_status_to_transport() {
        let url = serve(Router::new().route(
            "/data",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        ))
        .await;

        let source = HttpSampleSource::new(&url).unwrap();
        match source.fetch().await {
            Err(FetchError::Transport(msg)) => assert!(msg.contains("500")),
            other => panic!("expected transport error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_maps_bad_body_to_parse() {
        let url = serve(Router::new().route("/data", get(|| async { "<html>oops</html>" }))).await;

        let source = HttpSampleSource::new(&url).unwrap();
        assert!(matches!(source.fetch().await, Err(FetchError::Parse(_))));
    }

    #[tokio::test]
    async fn test_fetch_unreachable_host_is_transport() {
        let source = HttpSampleSource::new("http://256.256.256.256/data").unwrap();
        assert!(matches!(
            source.fetch().await,
            Err(FetchError::Transport(_))
        ));
    }
}

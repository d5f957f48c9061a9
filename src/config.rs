//! Configuration module for sitepulse.
//!
//! Loads configuration from environment variables with sensible defaults.

use std::env;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP port for the dashboard (default: 8501)
    pub http_port: u16,
    /// Endpoint of the probing service returning the sample JSON
    pub api_url: String,
    /// Display name of the monitored site
    pub site_name: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: 8501,
            api_url: "http://localhost:8080/data".to_string(),
            site_name: "Test Site".to_string(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SITEPULSE_HTTP_PORT`: dashboard port (default: 8501)
    /// - `SITEPULSE_API_URL`: probing service endpoint (default: "http://localhost:8080/data")
    /// - `SITEPULSE_SITE_NAME`: site display name (default: "Test Site")
    pub fn load() -> Self {
        let mut cfg = Self::default();

        if let Ok(port_str) = env::var("SITEPULSE_HTTP_PORT") {
            if let Ok(port) = port_str.parse() {
                cfg.http_port = port;
            }
        }

        if let Ok(url) = env::var("SITEPULSE_API_URL") {
            cfg.api_url = url;
        }

        if let Ok(name) = env::var("SITEPULSE_SITE_NAME") {
            cfg.site_name = name;
        }

        cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.http_port, 8501);
        assert_eq!(cfg.api_url, "http://localhost:8080/data");
        assert_eq!(cfg.site_name, "Test Site");
    }
}

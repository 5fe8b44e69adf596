//! # Viewer Configuration
//!
//! Everything the viewer needs to know about its environment lives in
//! [`ViewerConfig`]. The defaults point at the production proxy backend; the base
//! URL can be overridden with the `ORDER_VIEWER_BASE_URL` environment variable.

use reqwest::Url;
use thiserror::Error;

/// Proxy backend used when no override is configured.
pub const DEFAULT_BASE_URL: &str = "https://square-checkin-backend.onrender.com";

/// Loader label shown while an order is being fetched.
pub const DEFAULT_LOADING_MESSAGE: &str = "Fetching order details...";

/// Environment variable that overrides [`DEFAULT_BASE_URL`].
pub const BASE_URL_ENV: &str = "ORDER_VIEWER_BASE_URL";

/// Errors raised while building a configuration.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// The base URL is empty or does not use an http(s) scheme.
    #[error("Invalid base URL: {0:?}")]
    InvalidBaseUrl(String),

    /// The page actor needs room for at least one pending request.
    #[error("Channel capacity must be at least 1")]
    InvalidChannelCapacity,
}

/// Runtime configuration for the order viewer.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    /// Proxy backend root, without the `/api` suffix and without a trailing slash.
    pub base_url: String,
    /// Label shown in the loader while a fetch is pending.
    pub loading_message: String,
    /// Buffer size of the page actor's request channel.
    pub channel_capacity: usize,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            loading_message: DEFAULT_LOADING_MESSAGE.to_string(),
            channel_capacity: 32,
        }
    }
}

impl ViewerConfig {
    /// Builds a configuration from the defaults plus any environment overrides.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(BASE_URL_ENV) {
            Ok(url) => Self::default().with_base_url(url),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Replaces the base URL after validating it.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Result<Self, ConfigError> {
        self.base_url = normalize_base_url(url.into())?;
        Ok(self)
    }

    /// Replaces the page actor's channel capacity. Zero is rejected.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::InvalidChannelCapacity);
        }
        self.channel_capacity = capacity;
        Ok(self)
    }
}

fn normalize_base_url(url: String) -> Result<String, ConfigError> {
    let trimmed = url.trim();
    match Url::parse(trimmed) {
        Ok(parsed)
            if matches!(parsed.scheme(), "http" | "https") && parsed.host_str().is_some() =>
        {
            Ok(trimmed.trim_end_matches('/').to_string())
        }
        _ => Err(ConfigError::InvalidBaseUrl(url)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_proxy() {
        let config = ViewerConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.loading_message, "Fetching order details...");
    }

    #[test]
    fn test_with_base_url_strips_trailing_slash() {
        let config = ViewerConfig::default()
            .with_base_url("http://localhost:8080/")
            .unwrap();
        assert_eq!(config.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_with_base_url_rejects_non_http() {
        let result = ViewerConfig::default().with_base_url("ftp://example.com");
        assert!(matches!(result, Err(ConfigError::InvalidBaseUrl(_))));

        let result = ViewerConfig::default().with_base_url("");
        assert!(matches!(result, Err(ConfigError::InvalidBaseUrl(_))));
    }

    #[test]
    fn test_with_base_url_rejects_missing_host() {
        for url in ["http://", "https://", "localhost:8080"] {
            let result = ViewerConfig::default().with_base_url(url);
            assert!(
                matches!(result, Err(ConfigError::InvalidBaseUrl(_))),
                "{:?} should be rejected",
                url
            );
        }
    }

    #[test]
    fn test_channel_capacity_must_be_positive() {
        let result = ViewerConfig::default().with_channel_capacity(0);
        assert_eq!(result, Err(ConfigError::InvalidChannelCapacity));

        let config = ViewerConfig::default().with_channel_capacity(4).unwrap();
        assert_eq!(config.channel_capacity, 4);
    }
}

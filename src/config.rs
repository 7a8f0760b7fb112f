// src/config.rs
use reqwest::Url;
use std::time::Duration;

use crate::core::{ApiError, Result};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

pub const HISTORY_TIMEOUT_SECS: u64 = 30;
// PDF rendering happens server side on request
pub const EXPORT_TIMEOUT_SECS: u64 = 300;
// AI-backed calls are slow; these are plain per-call limits, nothing retries.
pub const INTERVIEW_TIMEOUT_SECS: u64 = 180;
pub const RESUME_TIMEOUT_SECS: u64 = 120;
pub const KNOWLEDGEBASE_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub history_timeout: Duration,
    pub export_timeout: Duration,
    pub interview_timeout: Duration,
    pub resume_timeout: Duration,
    pub knowledgebase_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: normalize_base_url(base_url),
            history_timeout: Duration::from_secs(HISTORY_TIMEOUT_SECS),
            export_timeout: Duration::from_secs(EXPORT_TIMEOUT_SECS),
            interview_timeout: Duration::from_secs(INTERVIEW_TIMEOUT_SECS),
            resume_timeout: Duration::from_secs(RESUME_TIMEOUT_SECS),
            knowledgebase_timeout: Duration::from_secs(KNOWLEDGEBASE_TIMEOUT_SECS),
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = normalize_base_url(base_url);
        self
    }

    pub fn with_history_timeout(mut self, timeout: Duration) -> Self {
        self.history_timeout = timeout;
        self
    }

    pub fn with_export_timeout(mut self, timeout: Duration) -> Self {
        self.export_timeout = timeout;
        self
    }

    pub fn with_interview_timeout(mut self, timeout: Duration) -> Self {
        self.interview_timeout = timeout;
        self
    }

    pub fn with_resume_timeout(mut self, timeout: Duration) -> Self {
        self.resume_timeout = timeout;
        self
    }

    pub fn with_knowledgebase_timeout(mut self, timeout: Duration) -> Self {
        self.knowledgebase_timeout = timeout;
        self
    }

    /// Parse and validate the base URL; only http and https are accepted
    pub fn parsed_base_url(&self) -> Result<Url> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| ApiError::Config(format!("Invalid base URL '{}': {}", self.base_url, e)))?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(ApiError::Config(format!(
                "Unsupported URL scheme '{}' in {}",
                other, self.base_url
            ))),
        }
    }
}

fn normalize_base_url(base_url: &str) -> String {
    base_url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.history_timeout, Duration::from_secs(30));
        assert_eq!(config.export_timeout, Duration::from_secs(300));
        assert_eq!(config.interview_timeout, Duration::from_secs(180));
        assert_eq!(config.resume_timeout, Duration::from_secs(120));
        assert_eq!(config.knowledgebase_timeout, Duration::from_secs(120));
    }

    #[test]
    fn test_trailing_slash_removed() {
        let config = ClientConfig::new(" https://guide.example.com/ ");
        assert_eq!(config.base_url, "https://guide.example.com");
        assert!(config.parsed_base_url().is_ok());
    }

    #[test]
    fn test_builder_overrides() {
        let config = ClientConfig::default()
            .with_base_url("http://10.0.0.5:9000/")
            .with_interview_timeout(Duration::from_secs(5));
        assert_eq!(config.base_url, "http://10.0.0.5:9000");
        assert_eq!(config.interview_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_rejects_invalid_urls() {
        assert!(ClientConfig::new("not a url").parsed_base_url().is_err());
        assert!(ClientConfig::new("ftp://files.example.com").parsed_base_url().is_err());
    }
}

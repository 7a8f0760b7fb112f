// src/environment.rs
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::config::ClientConfig;
use crate::core::{ApiError, Result};

pub const CONFIG_FILE: &str = "config.yaml";
pub const BASE_URL_ENV: &str = "INTERVIEW_GUIDE_API_URL";

/// One section of `config.yaml`. Anything left out keeps its default.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnvironmentConfig {
    pub base_url: Option<String>,
    pub history_timeout_secs: Option<u64>,
    pub export_timeout_secs: Option<u64>,
    pub interview_timeout_secs: Option<u64>,
    pub resume_timeout_secs: Option<u64>,
    pub knowledgebase_timeout_secs: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    local: EnvironmentConfig,
    #[serde(default)]
    production: EnvironmentConfig,
}

impl ClientConfig {
    /// Load configuration based on environment
    pub fn load() -> Result<Self> {
        let environment = Self::get_environment();
        info!("Loading client configuration for environment: {}", environment);

        let mut config = Self::load_from_file(Path::new(CONFIG_FILE), &environment)?;

        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            debug!("{} overrides base URL", BASE_URL_ENV);
            config = config.with_base_url(&base_url);
        }

        Ok(config)
    }

    /// Load configuration, letting an explicit base URL win over everything.
    ///
    /// With an explicit URL, a broken config file only costs its timeouts.
    /// The final base URL is validated last.
    pub fn load_with_base_url(base_url: Option<&str>) -> Result<Self> {
        Self::resolve(Self::load(), base_url)
    }

    fn resolve(loaded: Result<Self>, base_url: Option<&str>) -> Result<Self> {
        let config = match (loaded, base_url) {
            (Ok(config), Some(base_url)) => config.with_base_url(base_url),
            (Ok(config), None) => config,
            (Err(e), Some(base_url)) => {
                warn!("Ignoring client configuration: {}", e);
                Self::new(base_url)
            }
            (Err(e), None) => return Err(e),
        };

        config.parsed_base_url()?;
        Ok(config)
    }

    fn get_environment() -> String {
        std::env::var("INTERVIEW_GUIDE_ENV")
            .or_else(|_| std::env::var("ENVIRONMENT"))
            .unwrap_or_else(|_| "local".to_string())
    }

    /// A missing file yields the defaults
    pub fn load_from_file(path: &Path, environment: &str) -> Result<Self> {
        if !path.exists() {
            debug!("{} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ApiError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_yaml(&content, environment)
    }

    pub fn from_yaml(content: &str, environment: &str) -> Result<Self> {
        let config_file: ConfigFile = serde_yaml::from_str(content)
            .map_err(|e| ApiError::Config(format!("Failed to parse {}: {}", CONFIG_FILE, e)))?;

        let section = match environment {
            "production" => config_file.production,
            _ => config_file.local,
        };

        Ok(Self::default().apply(section))
    }

    fn apply(mut self, section: EnvironmentConfig) -> Self {
        if let Some(base_url) = section.base_url {
            self = self.with_base_url(&base_url);
        }
        if let Some(secs) = section.history_timeout_secs {
            self = self.with_history_timeout(Duration::from_secs(secs));
        }
        if let Some(secs) = section.export_timeout_secs {
            self = self.with_export_timeout(Duration::from_secs(secs));
        }
        if let Some(secs) = section.interview_timeout_secs {
            self = self.with_interview_timeout(Duration::from_secs(secs));
        }
        if let Some(secs) = section.resume_timeout_secs {
            self = self.with_resume_timeout(Duration::from_secs(secs));
        }
        if let Some(secs) = section.knowledgebase_timeout_secs {
            self = self.with_knowledgebase_timeout(Duration::from_secs(secs));
        }
        self
    }
}

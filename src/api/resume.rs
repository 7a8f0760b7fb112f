// src/api/resume.rs
//! Resume upload with AI analysis, and the service health probe

use reqwest::multipart::{Form, Part};
use std::path::Path;
use tracing::info;

use crate::config::ClientConfig;
use crate::core::{ApiError, Endpoint, Result, ServiceClient};
use crate::types::{HealthStatus, UploadResponse};
use crate::utils;

const UPLOAD_ENDPOINT: &str = "/api/resume/upload";
const HEALTH_ENDPOINT: &str = "/api/resume/health";

#[derive(Debug, Clone)]
pub struct ResumeApi {
    service: ServiceClient,
}

impl ResumeApi {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let service = ServiceClient::new(&config.parsed_base_url()?, config.resume_timeout)?;
        Ok(Self { service })
    }

    /// Read a resume from disk, upload it and wait for the analysis
    pub async fn upload_and_analyze(&self, file_path: &Path) -> Result<UploadResponse> {
        let file_name = utils::upload_file_name(file_path)?;
        // Reject unsupported types before touching the file
        utils::content_type_for(&file_name)?;

        let content = utils::read_file_bytes(file_path).await?;
        self.upload_bytes(&file_name, content).await
    }

    /// Upload in-memory resume content under the given file name
    pub async fn upload_bytes(&self, file_name: &str, content: Vec<u8>) -> Result<UploadResponse> {
        let form = Form::new().part("file", file_part(file_name, content)?);

        info!("Uploading resume {} for analysis", file_name);
        let response: UploadResponse = self
            .service
            .post_multipart(&Endpoint::new(UPLOAD_ENDPOINT), form)
            .await?;

        info!(
            "Resume {} analysed: score {}, resume id {}{}",
            file_name,
            response.analysis.overall_score,
            response.storage.resume_id,
            if response.duplicate { " (duplicate)" } else { "" }
        );
        Ok(response)
    }

    pub async fn health_check(&self) -> Result<HealthStatus> {
        self.service.get(&Endpoint::new(HEALTH_ENDPOINT)).await
    }
}

/// Multipart `file` part with the content type derived from the extension
pub(crate) fn file_part(file_name: &str, content: Vec<u8>) -> Result<Part> {
    let content_type = utils::content_type_for(file_name)?;

    Part::bytes(content)
        .file_name(file_name.to_string())
        .mime_str(content_type)
        .map_err(|e| ApiError::Config(format!("Failed to create multipart: {}", e)))
}

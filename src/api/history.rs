// src/api/history.rs
//! Resume and interview history, plus PDF exports

use tracing::info;

use crate::config::ClientConfig;
use crate::core::envelope::EXPORT_FAILURE_MESSAGE;
use crate::core::{Endpoint, Result, ServiceClient};
use crate::types::{InterviewDetail, ResumeDetail, ResumeListItem};

const RESUMES_ENDPOINT: &str = "/api/history/resumes";
const INTERVIEWS_ENDPOINT: &str = "/api/history/interviews";
const EXPORT_ANALYSIS_ENDPOINT: &str = "/api/history/export/analysis";
const EXPORT_INTERVIEW_ENDPOINT: &str = "/api/history/export/interview";

#[derive(Debug, Clone)]
pub struct HistoryApi {
    service: ServiceClient,
    // Same backend, longer limit for PDF rendering
    export_service: ServiceClient,
}

impl HistoryApi {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let base_url = config.parsed_base_url()?;
        let service = ServiceClient::new(&base_url, config.history_timeout)?;
        let export_service = ServiceClient::new(&base_url, config.export_timeout)?;
        Ok(Self {
            service,
            export_service,
        })
    }

    /// All uploaded resumes, newest first as ordered by the server
    pub async fn list_resumes(&self) -> Result<Vec<ResumeListItem>> {
        self.service.get(&Endpoint::new(RESUMES_ENDPOINT)).await
    }

    /// Full resume record with its analyses and interviews
    pub async fn get_resume_detail(&self, id: i64) -> Result<ResumeDetail> {
        self.service
            .get(&Endpoint::new(RESUMES_ENDPOINT).push(id))
            .await
    }

    pub async fn get_interview_detail(&self, session_id: &str) -> Result<InterviewDetail> {
        self.service
            .get(&Endpoint::new(INTERVIEWS_ENDPOINT).push(session_id))
            .await
    }

    /// Resume analysis report as PDF bytes
    pub async fn export_analysis_pdf(&self, resume_id: i64) -> Result<Vec<u8>> {
        info!("Exporting analysis report for resume {}", resume_id);
        self.export_service
            .get_bytes(
                &Endpoint::new(EXPORT_ANALYSIS_ENDPOINT).push(resume_id),
                EXPORT_FAILURE_MESSAGE,
            )
            .await
    }

    /// Interview report as PDF bytes
    pub async fn export_interview_pdf(&self, session_id: &str) -> Result<Vec<u8>> {
        info!("Exporting interview report for session {}", session_id);
        self.export_service
            .get_bytes(
                &Endpoint::new(EXPORT_INTERVIEW_ENDPOINT).push(session_id),
                EXPORT_FAILURE_MESSAGE,
            )
            .await
    }
}

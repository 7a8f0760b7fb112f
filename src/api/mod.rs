// src/api/mod.rs
//! Endpoint groups. Each group owns its own HTTP client so it can carry its own timeout.

pub mod history;
pub mod interview;
pub mod knowledgebase;
pub mod resume;

pub use history::HistoryApi;
pub use interview::InterviewApi;
pub use knowledgebase::KnowledgeBaseApi;
pub use resume::ResumeApi;

use crate::config::ClientConfig;
use crate::core::Result;

/// Every endpoint group built from one configuration
#[derive(Debug, Clone)]
pub struct InterviewGuideClient {
    pub history: HistoryApi,
    pub interview: InterviewApi,
    pub resume: ResumeApi,
    pub knowledge_base: KnowledgeBaseApi,
}

impl InterviewGuideClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Ok(Self {
            history: HistoryApi::new(config)?,
            interview: InterviewApi::new(config)?,
            resume: ResumeApi::new(config)?,
            knowledge_base: KnowledgeBaseApi::new(config)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ApiError;

    #[test]
    fn test_invalid_base_url_fails_fast() {
        let err = InterviewGuideClient::new(&ClientConfig::new("localhost:8080")).unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
    }

    #[test]
    fn test_builds_from_defaults() {
        assert!(InterviewGuideClient::new(&ClientConfig::default()).is_ok());
    }
}

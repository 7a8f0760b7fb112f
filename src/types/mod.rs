// src/types/mod.rs
//! Data-transfer shapes exchanged with the interview guide backend

pub mod history;
pub mod interview;
pub mod knowledgebase;
pub mod resume;

pub use history::{
    AnalysisItem, AnswerItem, InterviewDetail, InterviewItem, ResumeDetail, ResumeListItem,
};
pub use interview::{
    CategoryScore, CreateInterviewRequest, CurrentQuestionResponse, InterviewQuestion,
    InterviewReport, InterviewSession, QuestionEvaluation, ReferenceAnswer, SessionStatus,
    SubmitAnswerRequest, SubmitAnswerResponse,
};
pub use knowledgebase::{KnowledgeBaseItem, QueryRequest, QueryResponse};
pub use resume::{
    HealthStatus, ResumeAnalysis, ScoreDetail, StorageInfo, Suggestion, UploadResponse,
};

// src/types/interview.rs
//! Mock interview session payloads

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionStatus {
    Created,
    InProgress,
    Completed,
    Evaluated,
    /// Any status this client does not know yet, kept verbatim.
    #[serde(untagged)]
    Other(String),
}

impl SessionStatus {
    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Completed | Self::Evaluated)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewQuestion {
    pub question_index: i32,
    pub question: String,
    #[serde(rename = "type")]
    pub question_type: String,
    pub category: String,
    #[serde(default)]
    pub user_answer: Option<String>,
    #[serde(default)]
    pub score: Option<i32>,
    #[serde(default)]
    pub feedback: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewSession {
    pub session_id: String,
    pub resume_text: String,
    pub total_questions: i32,
    pub current_question_index: i32,
    pub questions: Vec<InterviewQuestion>,
    pub status: SessionStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInterviewRequest {
    pub resume_text: String,
    pub question_count: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_id: Option<i64>,
}

impl CreateInterviewRequest {
    pub fn new(resume_text: impl Into<String>, question_count: i32) -> Self {
        Self {
            resume_text: resume_text.into(),
            question_count,
            resume_id: None,
        }
    }

    /// Link the session to a stored resume so it shows up in its history
    pub fn with_resume_id(mut self, resume_id: i64) -> Self {
        self.resume_id = Some(resume_id);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAnswerRequest {
    pub session_id: String,
    pub question_index: i32,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAnswerResponse {
    pub has_next_question: bool,
    #[serde(default)]
    pub next_question: Option<InterviewQuestion>,
    pub current_index: i32,
    pub total_questions: i32,
}

/// Either the next unanswered question, or `completed` with a closing message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentQuestionResponse {
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<InterviewQuestion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScore {
    pub category: String,
    pub score: i32,
    pub question_count: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionEvaluation {
    pub question_index: i32,
    pub question: String,
    pub category: String,
    #[serde(default)]
    pub user_answer: Option<String>,
    pub score: i32,
    pub feedback: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceAnswer {
    pub question_index: i32,
    pub question: String,
    pub reference_answer: String,
    #[serde(default)]
    pub key_points: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewReport {
    pub session_id: String,
    pub total_questions: i32,
    pub overall_score: i32,
    pub category_scores: Vec<CategoryScore>,
    pub question_details: Vec<QuestionEvaluation>,
    pub overall_feedback: String,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub reference_answers: Vec<ReferenceAnswer>,
}

// src/types/history.rs
//! Read-only projections returned by the history endpoints

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::interview::SessionStatus;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeListItem {
    pub id: i64,
    pub filename: String,
    pub file_size: i64,
    pub uploaded_at: NaiveDateTime,
    pub access_count: i64,
    pub latest_score: Option<i32>,
    pub last_analyzed_at: Option<NaiveDateTime>,
    pub interview_count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisItem {
    pub id: i64,
    // Score columns are nullable until grading has filled them in
    pub overall_score: Option<i32>,
    pub content_score: Option<i32>,
    pub structure_score: Option<i32>,
    pub skill_match_score: Option<i32>,
    pub expression_score: Option<i32>,
    pub project_score: Option<i32>,
    pub summary: String,
    pub analyzed_at: NaiveDateTime,
    pub strengths: Vec<String>,
    // Stored as free-form JSON on the server
    pub suggestions: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewItem {
    pub id: i64,
    pub session_id: String,
    pub total_questions: i32,
    pub status: SessionStatus,
    pub overall_score: Option<i32>,
    pub overall_feedback: Option<String>,
    pub created_at: NaiveDateTime,
    pub completed_at: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub questions: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strengths: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub improvements: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_answers: Option<Vec<Value>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerItem {
    pub question_index: i32,
    pub question: String,
    pub category: String,
    pub user_answer: String,
    pub score: i32,
    pub feedback: String,
    #[serde(default)]
    pub reference_answer: Option<String>,
    #[serde(default)]
    pub key_points: Option<Vec<String>>,
    pub answered_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeDetail {
    pub id: i64,
    pub filename: String,
    pub file_size: i64,
    pub content_type: Option<String>,
    pub storage_url: Option<String>,
    pub uploaded_at: NaiveDateTime,
    pub access_count: i64,
    pub resume_text: String,
    pub analyses: Vec<AnalysisItem>,
    pub interviews: Vec<InterviewItem>,
}

/// An interview history record together with every recorded answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewDetail {
    #[serde(flatten)]
    pub interview: InterviewItem,
    pub answers: Vec<AnswerItem>,
}

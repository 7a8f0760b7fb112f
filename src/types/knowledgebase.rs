// src/types/knowledgebase.rs

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeBaseItem {
    pub id: i64,
    pub name: String,
    pub category: Option<String>,
    pub original_filename: String,
    pub file_size: i64,
    pub content_type: Option<String>,
    pub uploaded_at: NaiveDateTime,
    pub last_accessed_at: Option<NaiveDateTime>,
    pub access_count: Option<i32>,
    pub question_count: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRequest {
    pub knowledge_base_ids: Vec<i64>,
    pub question: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResponse {
    pub answer: String,
    #[serde(default)]
    pub knowledge_base_id: Option<i64>,
    #[serde(default)]
    pub knowledge_base_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct CategoryUpdate {
    pub category: Option<String>,
}

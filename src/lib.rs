//! Typed client for the interview guide backend: resume upload and analysis,
//! mock interview sessions, history and PDF exports, knowledge bases.
//!
//! Every JSON endpoint answers with a `{code, message, data}` envelope. The
//! client returns `data` when `code` is 200 and an [`ApiError::Business`]
//! carrying `message` otherwise; HTTP-level failures surface as
//! [`ApiError::Transport`] or [`ApiError::Network`].

pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod environment;
pub mod types;
pub mod utils;

pub use api::{HistoryApi, InterviewApi, InterviewGuideClient, KnowledgeBaseApi, ResumeApi};
pub use config::ClientConfig;
pub use crate::core::{ApiError, Envelope, Result};

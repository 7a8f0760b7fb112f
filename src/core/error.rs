// src/core/error.rs
//! Error type shared by every endpoint group

use reqwest::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status. The body is never inspected.
    #[error("{message}")]
    Transport { message: String, status: StatusCode },

    /// No usable HTTP response: connection refused, timeout, broken body stream.
    #[error("{message}")]
    Network {
        message: String,
        #[source]
        source: reqwest::Error,
    },

    /// HTTP succeeded but the envelope carried `code != 200`. `code` is `None`
    /// when the body had no integer code at all.
    #[error("{message}")]
    Business { code: Option<i64>, message: String },

    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid client configuration: {0}")]
    Config(String),
}

impl ApiError {
    pub fn network(message: &str, source: reqwest::Error) -> Self {
        Self::Network {
            message: message.to_string(),
            source,
        }
    }

    /// True for both flavours of HTTP-level failure.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::Network { .. })
    }

    pub fn is_business(&self) -> bool {
        matches!(self, Self::Business { .. })
    }

    pub fn business_code(&self) -> Option<i64> {
        match self {
            Self::Business { code, .. } => *code,
            _ => None,
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Transport { status, .. } => Some(*status),
            Self::Network { source, .. } => source.status(),
            _ => None,
        }
    }
}

// src/core/envelope.rs
//! The `{code, message, data}` wrapper the backend puts around every JSON response.
//!
//! Unwrapping is a pure function over the raw body so that the service client
//! can apply it as an explicit step after the transport call.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{error, warn};

use super::error::{ApiError, Result};

/// Envelope code signalling success.
pub const SUCCESS_CODE: i64 = 200;

pub const TRANSPORT_FAILURE_MESSAGE: &str = "Network request failed";
pub const BUSINESS_FAILURE_MESSAGE: &str = "Request failed";
pub const EXPORT_FAILURE_MESSAGE: &str = "PDF export failed";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T = Value> {
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn is_success(&self) -> bool {
        self.code == Some(SUCCESS_CODE)
    }

    /// Hands back `data` on success, otherwise a business error with the server message.
    pub fn into_result(self) -> Result<T> {
        if self.is_success() {
            return Ok(self.data);
        }

        let message = self
            .message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| BUSINESS_FAILURE_MESSAGE.to_string());

        Err(ApiError::Business {
            code: self.code,
            message,
        })
    }
}

/// Parse a response body as an envelope and extract its payload.
///
/// A missing `data` field is read as JSON `null`, which lets endpoints that
/// return nothing deserialize into `()`.
///
/// Only a body that is not JSON at all is a decode error. Valid JSON without an
/// integer `code` of 200 (missing, `"200"` as a string, not an object) is a
/// business failure.
pub fn unwrap_envelope<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    let raw: Value = serde_json::from_slice(body)?;
    let data = Envelope::from_json(raw).into_result()?;
    Ok(serde_json::from_value(data)?)
}

impl Envelope<Value> {
    /// Read the envelope fields leniently from any JSON value
    pub fn from_json(raw: Value) -> Self {
        match raw {
            Value::Object(mut map) => Self {
                code: map.get("code").and_then(Value::as_i64),
                message: map
                    .get("message")
                    .and_then(Value::as_str)
                    .map(str::to_string),
                data: map.remove("data").unwrap_or(Value::Null),
            },
            _ => Self {
                code: None,
                message: None,
                data: Value::Null,
            },
        }
    }
}

/// Reject any non-2xx status with a fixed message, ignoring the body.
pub fn ensure_transport_ok(status: StatusCode, message: &str) -> Result<()> {
    if status.is_success() {
        return Ok(());
    }

    error!("Service returned error status {}", status);
    Err(ApiError::Transport {
        message: message.to_string(),
        status,
    })
}

/// Log a business failure without altering it.
pub(crate) fn trace_business_failure<T>(result: Result<T>, endpoint: &str) -> Result<T> {
    if let Err(ApiError::Business { code, message }) = &result {
        match code {
            Some(code) => warn!("{} rejected with code {}: {}", endpoint, code, message),
            None => warn!("{} rejected without a code: {}", endpoint, message),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    #[serde(rename_all = "camelCase")]
    struct Resume {
        id: i64,
        filename: String,
        file_size: i64,
    }

    #[test]
    fn test_success_returns_data_unmodified() {
        let body = json!({
            "code": 200,
            "message": "ok",
            "data": {"id": 7, "filename": "a.pdf", "fileSize": 1024, "extra": [1, 2]}
        });
        let data: Value = unwrap_envelope(body.to_string().as_bytes()).unwrap();
        assert_eq!(
            data,
            json!({"id": 7, "filename": "a.pdf", "fileSize": 1024, "extra": [1, 2]})
        );
    }

    #[test]
    fn test_success_deserializes_typed_payload() {
        let body = r#"{"code":200,"message":"ok","data":{"id":7,"filename":"a.pdf","fileSize":3}}"#;
        let resume: Resume = unwrap_envelope(body.as_bytes()).unwrap();
        assert_eq!(
            resume,
            Resume {
                id: 7,
                filename: "a.pdf".to_string(),
                file_size: 3
            }
        );
    }

    #[test]
    fn test_business_error_uses_server_message() {
        let body = r#"{"code":400,"message":"invalid session"}"#;
        let err = unwrap_envelope::<Value>(body.as_bytes()).unwrap_err();
        assert_eq!(err.to_string(), "invalid session");
        assert_eq!(err.business_code(), Some(400));
    }

    #[test]
    fn test_business_error_falls_back_to_default_message() {
        for body in [
            r#"{"code":500}"#,
            r#"{"code":500,"message":null}"#,
            r#"{"code":500,"message":""}"#,
        ] {
            let err = unwrap_envelope::<Value>(body.as_bytes()).unwrap_err();
            assert_eq!(err.to_string(), BUSINESS_FAILURE_MESSAGE);
        }
    }

    #[test]
    fn test_missing_code_is_business_error() {
        let body = r#"{"message":"session expired"}"#;
        let err = unwrap_envelope::<Value>(body.as_bytes()).unwrap_err();
        assert!(err.is_business());
        assert_eq!(err.business_code(), None);
        assert_eq!(err.to_string(), "session expired");
    }

    #[test]
    fn test_non_integer_code_is_business_error() {
        for body in [
            r#"{"code":"500","message":"boom"}"#,
            r#"{"code":"200","message":"boom","data":{"id":1}}"#,
            r#"{"code":200.5,"message":"boom"}"#,
        ] {
            let err = unwrap_envelope::<Value>(body.as_bytes()).unwrap_err();
            assert!(err.is_business(), "{}", body);
            assert_eq!(err.to_string(), "boom");
        }
    }

    #[test]
    fn test_json_without_envelope_is_business_error() {
        for body in ["[1, 2]", "\"ok\"", "null", "{}"] {
            let err = unwrap_envelope::<Value>(body.as_bytes()).unwrap_err();
            assert!(err.is_business(), "{}", body);
            assert_eq!(err.to_string(), BUSINESS_FAILURE_MESSAGE);
        }
    }

    #[test]
    fn test_non_string_message_falls_back_to_default() {
        let body = r#"{"code":503,"message":{"detail":"x"}}"#;
        let err = unwrap_envelope::<Value>(body.as_bytes()).unwrap_err();
        assert_eq!(err.to_string(), BUSINESS_FAILURE_MESSAGE);
        assert_eq!(err.business_code(), Some(503));
    }

    #[test]
    fn test_missing_data_decodes_as_unit() {
        let body = r#"{"code":200,"message":"deleted"}"#;
        let () = unwrap_envelope(body.as_bytes()).unwrap();
    }

    #[test]
    fn test_malformed_body_is_decode_error() {
        let err = unwrap_envelope::<Value>(b"<html>gateway</html>").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_mismatched_payload_is_decode_error() {
        let body = r#"{"code":200,"message":"ok","data":{"id":"seven"}}"#;
        let err = unwrap_envelope::<Resume>(body.as_bytes()).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_ensure_transport_ok() {
        assert!(ensure_transport_ok(StatusCode::OK, TRANSPORT_FAILURE_MESSAGE).is_ok());
        assert!(ensure_transport_ok(StatusCode::NO_CONTENT, TRANSPORT_FAILURE_MESSAGE).is_ok());

        let err = ensure_transport_ok(StatusCode::NOT_FOUND, EXPORT_FAILURE_MESSAGE).unwrap_err();
        assert_eq!(err.to_string(), EXPORT_FAILURE_MESSAGE);
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    }
}

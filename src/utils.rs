// src/utils.rs
use std::path::{Path, PathBuf};

use crate::core::{ApiError, Result};

/// Extensions the resume and knowledge base uploads accept
pub const UPLOAD_EXTENSIONS: &[&str] = &["pdf", "docx", "doc", "txt", "md"];

/// Get file extension in lowercase
pub fn get_file_extension(filename: &str) -> Option<String> {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

/// Validate file extension against allowed types
pub fn validate_file_extension(filename: &str, allowed: &[&str]) -> Result<()> {
    let ext = get_file_extension(filename)
        .ok_or_else(|| ApiError::Config(format!("File has no extension: {}", filename)))?;

    if !allowed.contains(&ext.as_str()) {
        return Err(ApiError::Config(format!(
            "Unsupported file extension: {}. Allowed: {:?}",
            ext, allowed
        )));
    }

    Ok(())
}

/// Get content type for an upload
pub fn content_type_for(filename: &str) -> Result<&'static str> {
    validate_file_extension(filename, UPLOAD_EXTENSIONS)?;

    match get_file_extension(filename).as_deref() {
        Some("pdf") => Ok("application/pdf"),
        Some("docx") => {
            Ok("application/vnd.openxmlformats-officedocument.wordprocessingml.document")
        }
        Some("doc") => Ok("application/msword"),
        Some("md") => Ok("text/markdown"),
        _ => Ok("text/plain"),
    }
}

/// File name component of a path, for the multipart part
pub fn upload_file_name(path: &Path) -> Result<String> {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
        .ok_or_else(|| ApiError::Config(format!("Not a file path: {}", path.display())))
}

/// Read file content with proper error context
pub async fn read_file_bytes(path: &Path) -> Result<Vec<u8>> {
    tokio::fs::read(path).await.map_err(|source| ApiError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Normalize an identifier for file system usage
pub fn sanitize_file_stem(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Default output path for an exported report, e.g. `analysis_7.pdf`
pub fn export_file_path(dir: &Path, kind: &str, id: &str) -> PathBuf {
    dir.join(format!("{}_{}.pdf", kind, sanitize_file_stem(id)))
}

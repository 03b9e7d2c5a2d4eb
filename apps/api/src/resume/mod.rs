//! Resume ingestion — turns uploaded resume bytes into plain text.
//!
//! The matching engine only ever sees the returned string.

use thiserror::Error;
use tracing::debug;

const MIME_PDF: &str = "application/pdf";
const MIME_TEXT: &str = "text/plain";
const MIME_DOC: &str = "application/msword";
const MIME_DOCX: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[derive(Debug, Error)]
pub enum ResumeError {
    #[error("Unsupported resume format: {0}")]
    UnsupportedFormat(String),

    #[error("Could not decode resume: {0}")]
    Decode(String),
}

/// Extracts plain text from an uploaded resume.
pub trait ResumeTextExtractor: Send + Sync {
    fn extract_text(&self, bytes: &[u8], mime_type: &str) -> Result<String, ResumeError>;
}

/// PDF via `pdf-extract`; plain text and Word uploads decoded as lossy UTF-8.
pub struct DocumentTextExtractor;

impl ResumeTextExtractor for DocumentTextExtractor {
    fn extract_text(&self, bytes: &[u8], mime_type: &str) -> Result<String, ResumeError> {
        let mime = normalize_mime(mime_type);
        let text = match mime.as_str() {
            MIME_PDF => pdf_extract::extract_text_from_mem(bytes)
                .map_err(|e| ResumeError::Decode(e.to_string()))?,
            MIME_TEXT | MIME_DOC | MIME_DOCX => String::from_utf8_lossy(bytes).into_owned(),
            other => return Err(ResumeError::UnsupportedFormat(other.to_string())),
        };
        debug!(mime = %mime, bytes = bytes.len(), chars = text.len(), "Extracted resume text");
        Ok(text)
    }
}

/// Best-effort mime type for uploads sent without a usable content type.
pub fn mime_from_filename(filename: &str) -> Option<&'static str> {
    let extension = filename.rsplit_once('.')?.1.to_lowercase();
    match extension.as_str() {
        "pdf" => Some(MIME_PDF),
        "txt" => Some(MIME_TEXT),
        "doc" => Some(MIME_DOC),
        "docx" => Some(MIME_DOCX),
        _ => None,
    }
}

/// Drops parameters such as `; charset=utf-8` and lower-cases the type.
fn normalize_mime(mime_type: &str) -> String {
    mime_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_lowercase()
}

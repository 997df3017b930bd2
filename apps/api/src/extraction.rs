//! Upload classification and text extraction.
//!
//! The analysis endpoint accepts PDF and plain-text resumes. Images are
//! recognized so the client gets a specific message, but are not read.

use bytes::Bytes;
use tracing::debug;

use crate::errors::AppError;

/// Extracted text shorter than this (after trimming) is not worth analyzing.
pub const MIN_RESUME_CHARS: usize = 50;

const PDF_MAGIC: &[u8] = b"%PDF";

/// A file part pulled out of the multipart body.
#[derive(Debug, Clone)]
pub struct Upload {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub data: Bytes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    PlainText,
    Image,
    Unsupported,
}

impl Upload {
    /// Magic bytes win over the declared content type, which wins over the
    /// file extension.
    pub fn kind(&self) -> DocumentKind {
        if self.data.starts_with(PDF_MAGIC) {
            return DocumentKind::Pdf;
        }

        let content_type = self
            .content_type
            .as_deref()
            .map(|ct| ct.split(';').next().unwrap_or("").trim().to_ascii_lowercase())
            .unwrap_or_default();
        match content_type.as_str() {
            "application/pdf" => return DocumentKind::Pdf,
            "text/plain" | "text/markdown" => return DocumentKind::PlainText,
            ct if ct.starts_with("image/") => return DocumentKind::Image,
            _ => {}
        }

        let extension = self
            .file_name
            .as_deref()
            .and_then(|name| name.rsplit_once('.'))
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "pdf" => DocumentKind::Pdf,
            "txt" | "text" | "md" => DocumentKind::PlainText,
            "png" | "jpg" | "jpeg" | "gif" | "webp" | "bmp" | "tif" | "tiff" => DocumentKind::Image,
            _ => DocumentKind::Unsupported,
        }
    }

    fn describe(&self) -> String {
        self.content_type
            .clone()
            .or_else(|| self.file_name.clone())
            .unwrap_or_else(|| "unknown".to_string())
    }
}

/// Extracts normalized text from an upload.
///
/// Errors: 415 for images and unknown types, 422 when the document cannot be
/// read or yields fewer than `MIN_RESUME_CHARS` characters.
pub async fn extract_text(upload: &Upload) -> Result<String, AppError> {
    let raw = match upload.kind() {
        DocumentKind::Pdf => extract_pdf(upload.data.clone()).await?,
        DocumentKind::PlainText => String::from_utf8_lossy(&upload.data).into_owned(),
        DocumentKind::Image => {
            return Err(AppError::UnsupportedMediaType(
                "Image resumes are not supported. Please upload a PDF or plain-text file.".to_string(),
            ))
        }
        DocumentKind::Unsupported => {
            return Err(AppError::UnsupportedMediaType(format!(
                "Unsupported file type '{}'. Please upload a PDF or plain-text file.",
                upload.describe()
            )))
        }
    };

    let text = normalize(&raw);
    debug!(
        bytes = upload.data.len(),
        chars = text.chars().count(),
        "Extracted resume text"
    );

    if text.chars().count() < MIN_RESUME_CHARS {
        return Err(AppError::UnprocessableEntity(format!(
            "Could not extract enough text from the resume (need at least {MIN_RESUME_CHARS} characters). \
             Scanned PDFs without a text layer are not supported."
        )));
    }
    Ok(text)
}

/// pdf-extract is CPU-bound and panics on some malformed files, so it runs on
/// the blocking pool where a panic surfaces as a `JoinError`.
async fn extract_pdf(data: Bytes) -> Result<String, AppError> {
    let result = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&data)).await;
    match result {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => Err(AppError::UnprocessableEntity(format!(
            "Could not read the PDF: {e}"
        ))),
        Err(e) if e.is_panic() => Err(AppError::UnprocessableEntity(
            "Could not read the PDF: the file appears to be damaged".to_string(),
        )),
        Err(e) => Err(AppError::Internal(anyhow::anyhow!(
            "spawn_blocking failed in PDF extraction: {e}"
        ))),
    }
}

/// Unifies line endings, drops NULs and trims the ends.
fn normalize(raw: &str) -> String {
    raw.replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace('\0', "")
        .trim()
        .to_string()
}

//! Upload pipeline
//!
//! Handles the core upload workflow:
//! 1. Validate filename and declared type
//! 2. Validate payload size
//! 3. Extract text
//! 4. Persist the document record
//!
//! Each stage is a hard precondition: failure at any stage aborts the
//! whole operation and nothing is persisted. The stored document's
//! identifier is assigned by the store at insert time and is the one
//! returned to the caller. No stage or progress updates are issued
//! after creation; the persisted record keeps its creation defaults
//! while clients follow the synthetic progress stream.

use doclens_common::db::{models::Document, Repository};
use doclens_common::errors::{AppError, Result};
use doclens_common::metrics;
use doclens_extraction::{extract, FileKind};
use std::time::Instant;

/// Maximum accepted payload size in bytes (5 MiB)
pub const MAX_FILE_SIZE: usize = 5 * 1024 * 1024;

/// Maximum filename length the store accepts
pub const MAX_FILENAME_LEN: usize = 255;

pub struct UploadService {
    repo: Repository,
}

impl UploadService {
    pub fn new(repo: Repository) -> Self {
        Self { repo }
    }

    /// Ingest one uploaded file and return the persisted document.
    pub async fn handle_upload(&self, filename: &str, bytes: &[u8]) -> Result<Document> {
        let start = Instant::now();

        let kind = validate_upload(filename, bytes.len())?;

        let text = extract(bytes, kind).map_err(|e| AppError::ExtractionFailed {
            message: e.to_string(),
        })?;

        let document = self
            .repo
            .create_document(filename.to_string(), bytes.len() as i32, Some(text))
            .await?;

        metrics::record_upload(start.elapsed().as_secs_f64(), kind.as_str());

        tracing::info!(
            document_id = %document.id,
            filename = %document.filename,
            file_size = document.file_size,
            text_length = document.text_length,
            "Document uploaded"
        );

        Ok(document)
    }
}

/// Validate the declared type, filename, and payload size.
///
/// Checks run in pipeline order: type first, then size, so an oversized
/// payload with a bad extension reports the type error.
pub fn validate_upload(filename: &str, size: usize) -> Result<FileKind> {
    let kind = FileKind::from_filename(filename).ok_or_else(|| AppError::InvalidFileType {
        filename: filename.to_string(),
    })?;

    if filename.len() > MAX_FILENAME_LEN {
        return Err(AppError::Validation {
            message: format!("filename exceeds {} characters", MAX_FILENAME_LEN),
            field: Some("filename".to_string()),
        });
    }

    if size == 0 {
        return Err(AppError::Validation {
            message: "uploaded file is empty".to_string(),
            field: Some("file".to_string()),
        });
    }

    if size > MAX_FILE_SIZE {
        return Err(AppError::FileTooLarge {
            size,
            limit: MAX_FILE_SIZE,
        });
    }

    Ok(kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_unsupported_extension() {
        let err = validate_upload("slides.pptx", 1024).unwrap_err();
        assert!(matches!(err, AppError::InvalidFileType { .. }));
    }

    #[test]
    fn test_type_check_runs_before_size_check() {
        // Oversized AND wrongly typed: the type error wins
        let err = validate_upload("dump.bin", MAX_FILE_SIZE + 1).unwrap_err();
        assert!(matches!(err, AppError::InvalidFileType { .. }));
    }

    #[test]
    fn test_rejects_oversized_payload() {
        let err = validate_upload("big.txt", MAX_FILE_SIZE + 1).unwrap_err();
        assert!(matches!(err, AppError::FileTooLarge { .. }));
    }

    #[test]
    fn test_accepts_payload_at_limit() {
        assert_eq!(
            validate_upload("exact.pdf", MAX_FILE_SIZE).unwrap(),
            FileKind::Pdf
        );
    }

    #[test]
    fn test_rejects_empty_payload() {
        let err = validate_upload("empty.txt", 0).unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[test]
    fn test_rejects_overlong_filename() {
        let name = format!("{}.txt", "a".repeat(300));
        let err = validate_upload(&name, 10).unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[test]
    fn test_uppercase_extension_is_invalid() {
        let err = validate_upload("REPORT.PDF", 10).unwrap_err();
        assert!(matches!(err, AppError::InvalidFileType { .. }));
    }
}

//! Extraction error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("unsupported file type: {filename}")]
    UnsupportedType { filename: String },

    #[error("PDF extraction failed: {message}")]
    PdfParse { message: String },
}

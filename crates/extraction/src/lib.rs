//! DocLens text extraction
//!
//! Converts uploaded file bytes into plain text. Two file kinds are
//! supported, selected by a case-sensitive suffix match on the declared
//! filename: `.pdf` (extracted page by page via lopdf) and `.txt`
//! (decoded as UTF-8, dropping undecodable sequences). Everything else
//! is rejected before extraction is attempted.
//!
//! Extraction reads the input bytes and has no other side effects.

pub mod errors;
mod pdf;
mod text;

pub use errors::ExtractionError;

/// Supported file kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Pdf,
    Text,
}

impl FileKind {
    /// Determine the file kind from a filename.
    ///
    /// The suffix match is case-sensitive: `report.PDF` is not accepted.
    pub fn from_filename(filename: &str) -> Option<Self> {
        if filename.ends_with(".pdf") {
            Some(Self::Pdf)
        } else if filename.ends_with(".txt") {
            Some(Self::Text)
        } else {
            None
        }
    }

    /// Short label for logging and metrics
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Text => "txt",
        }
    }
}

/// Extract text from file bytes of a known kind
pub fn extract(bytes: &[u8], kind: FileKind) -> Result<String, ExtractionError> {
    match kind {
        FileKind::Pdf => pdf::extract_text(bytes),
        FileKind::Text => Ok(text::decode_lossy(bytes)),
    }
}

/// Extract text from file bytes, determining the kind from the filename
pub fn extract_from_filename(filename: &str, bytes: &[u8]) -> Result<String, ExtractionError> {
    let kind = FileKind::from_filename(filename).ok_or_else(|| ExtractionError::UnsupportedType {
        filename: filename.to_string(),
    })?;
    extract(bytes, kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_kind_from_filename() {
        assert_eq!(FileKind::from_filename("notes.txt"), Some(FileKind::Text));
        assert_eq!(FileKind::from_filename("paper.pdf"), Some(FileKind::Pdf));
        assert_eq!(FileKind::from_filename("archive.tar.txt"), Some(FileKind::Text));
        assert_eq!(FileKind::from_filename("image.png"), None);
        assert_eq!(FileKind::from_filename("no_extension"), None);
    }

    #[test]
    fn test_file_kind_suffix_match_is_case_sensitive() {
        assert_eq!(FileKind::from_filename("REPORT.PDF"), None);
        assert_eq!(FileKind::from_filename("notes.TXT"), None);
    }

    #[test]
    fn test_extract_txt_round_trip() {
        let content = "line one\nline two";
        let text = extract(content.as_bytes(), FileKind::Text).unwrap();
        assert_eq!(text, content);
    }

    #[test]
    fn test_extract_from_filename_rejects_unknown_extension() {
        let err = extract_from_filename("malware.exe", b"payload").unwrap_err();
        assert!(matches!(err, ExtractionError::UnsupportedType { .. }));
    }

    #[test]
    fn test_extract_from_filename_txt() {
        let text = extract_from_filename("notes.txt", b"plain body").unwrap();
        assert_eq!(text, "plain body");
    }
}

//! PDF text extraction
//!
//! Extracts text content from in-memory PDF bytes using lopdf. Page
//! texts are joined with a single space; a page with no extractable
//! text contributes an empty string. Any reader failure (corrupt file,
//! encryption, parser error) surfaces as one uniform extraction error;
//! the underlying cause is carried only in the message.

use crate::errors::ExtractionError;
use tracing::debug;

/// Extract text content from PDF bytes
pub fn extract_text(bytes: &[u8]) -> Result<String, ExtractionError> {
    let doc = lopdf::Document::load_mem(bytes).map_err(|e| ExtractionError::PdfParse {
        message: format!("failed to open PDF: {}", e),
    })?;

    let pages = doc.get_pages();
    debug!(page_count = pages.len(), "Extracting text from PDF");

    let mut page_texts = Vec::with_capacity(pages.len());
    for (&page_num, _) in pages.iter() {
        let text = doc
            .extract_text(&[page_num])
            .map_err(|e| ExtractionError::PdfParse {
                message: format!("failed to extract text from page {}: {}", page_num, e),
            })?;
        page_texts.push(text.trim_end().to_string());
    }

    Ok(page_texts.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Document, Object, Stream};

    /// Build a one-page PDF containing the given text
    fn pdf_with_text(text: &str) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Courier",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });

        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![50.into(), 700.into()]),
                Operation::new("Tj", vec![Object::string_literal(text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("encode content stream"),
        ));

        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        });
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![page_id.into()],
                "Count" => 1,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).expect("serialize PDF");
        bytes
    }

    #[test]
    fn test_extracts_text_from_generated_pdf() {
        let bytes = pdf_with_text("Hello from the uploader");
        let text = extract_text(&bytes).unwrap();
        assert!(text.contains("Hello from the uploader"), "got: {text:?}");
    }

    #[test]
    fn test_corrupt_bytes_fail_uniformly() {
        let err = extract_text(b"definitely not a pdf").unwrap_err();
        assert!(matches!(err, ExtractionError::PdfParse { .. }));
    }

    #[test]
    fn test_empty_input_fails() {
        assert!(extract_text(b"").is_err());
    }
}

//! AI analysis invocation
//!
//! Combines a stored document's extracted text with a user prompt and
//! invokes the generative model. The whole text is sent; there is no
//! truncation or token budgeting. The call is made exactly once per
//! request, and provider failures surface uniformly with the underlying
//! message. Persisting the result is a separate, caller-driven step.

use doclens_common::ai::Generator;
use doclens_common::db::Repository;
use doclens_common::errors::{AppError, Result};
use doclens_common::metrics;
use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

pub struct AnalysisService {
    repo: Repository,
    generator: Arc<dyn Generator>,
}

impl AnalysisService {
    pub fn new(repo: Repository, generator: Arc<dyn Generator>) -> Self {
        Self { repo, generator }
    }

    /// Run the model against a document's extracted text and return the
    /// raw response.
    pub async fn analyze(&self, document_id: Uuid, prompt: &str) -> Result<String> {
        let document = self
            .repo
            .find_document_by_id(document_id)
            .await?
            .ok_or_else(|| AppError::DocumentNotFound {
                id: document_id.to_string(),
            })?;

        let text = document
            .extracted_text
            .as_deref()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::NoExtractedText {
                id: document_id.to_string(),
            })?;

        let full_prompt = build_prompt(prompt, text);

        let start = Instant::now();
        let result = self.generator.generate(&full_prompt).await;
        let duration = start.elapsed();

        metrics::record_analysis(
            duration.as_secs_f64(),
            self.generator.model_name(),
            result.is_ok(),
        );

        let response = result?;

        tracing::info!(
            document_id = %document_id,
            model = self.generator.model_name(),
            duration_ms = duration.as_millis() as u64,
            response_chars = response.chars().count(),
            "Analysis completed"
        );

        Ok(response)
    }
}

/// Assemble the prompt sent to the model: user prompt, a blank line,
/// then the document's full extracted text.
pub fn build_prompt(prompt: &str, text: &str) -> String {
    format!("{}\n\n{}", prompt, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_prompt_separates_with_blank_line() {
        let combined = build_prompt("Summarize this.", "Body of the document.");
        assert_eq!(combined, "Summarize this.\n\nBody of the document.");
    }

    #[test]
    fn test_build_prompt_sends_whole_text() {
        let text = "x".repeat(200_000);
        let combined = build_prompt("Q", &text);
        assert!(combined.ends_with(&text));
        assert_eq!(combined.len(), 1 + 2 + text.len());
    }
}

//! Analysis invocation and persistence handlers

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::services::AppState;
use doclens_common::db::models::AiAnalysis;
use doclens_common::db::NewAnalysis;
use doclens_common::errors::{AppError, Result};

/// Request to analyze a stored document
#[derive(Debug, Deserialize, Validate)]
pub struct AnalyzeRequest {
    pub file_id: Uuid,

    #[validate(length(min = 1, message = "prompt must not be empty"))]
    pub prompt: String,
}

#[derive(Serialize)]
pub struct AnalyzeResponse {
    pub response: String,
}

/// Request to persist one analysis record
#[derive(Debug, Deserialize, Validate)]
pub struct SaveAnalysisRequest {
    pub document_id: Uuid,

    #[serde(default)]
    pub prompt_template_id: Option<Uuid>,

    #[validate(length(min = 1, message = "final_prompt must not be empty"))]
    pub final_prompt: String,

    #[serde(default)]
    pub gemini_response: String,

    #[serde(default)]
    pub response_metadata: Option<serde_json::Value>,

    #[serde(default)]
    pub execution_time_ms: Option<i32>,

    #[serde(default)]
    pub error_message: Option<String>,
}

/// One analysis record in a response
#[derive(Serialize)]
pub struct AnalysisResponse {
    pub id: Uuid,
    pub document_id: Uuid,
    pub prompt_template_id: Option<Uuid>,
    pub final_prompt: String,
    pub gemini_response: String,
    pub response_metadata: Option<serde_json::Value>,
    pub execution_time_ms: Option<i32>,
    pub error_message: Option<String>,
    pub created_at: String,
}

impl From<AiAnalysis> for AnalysisResponse {
    fn from(analysis: AiAnalysis) -> Self {
        Self {
            id: analysis.id,
            document_id: analysis.document_id,
            prompt_template_id: analysis.prompt_template_id,
            final_prompt: analysis.final_prompt,
            gemini_response: analysis.gemini_response,
            response_metadata: analysis.response_metadata,
            execution_time_ms: analysis.execution_time_ms,
            error_message: analysis.error_message,
            created_at: analysis.created_at.to_rfc3339(),
        }
    }
}

/// Run the model against a document's extracted text
pub async fn analyze_document(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>> {
    request.validate().map_err(|e| AppError::Validation {
        message: e.to_string(),
        field: None,
    })?;

    let response = state
        .analysis
        .analyze(request.file_id, &request.prompt)
        .await?;

    Ok(Json(AnalyzeResponse { response }))
}

/// Persist one analysis record as provided by the caller
pub async fn save_analysis(
    State(state): State<AppState>,
    Json(request): Json<SaveAnalysisRequest>,
) -> Result<Json<AnalysisResponse>> {
    request.validate().map_err(|e| AppError::Validation {
        message: e.to_string(),
        field: None,
    })?;

    let analysis = state
        .repo
        .create_analysis(NewAnalysis {
            document_id: request.document_id,
            prompt_template_id: request.prompt_template_id,
            final_prompt: request.final_prompt,
            gemini_response: request.gemini_response,
            response_metadata: request.response_metadata,
            execution_time_ms: request.execution_time_ms,
            error_message: request.error_message,
        })
        .await?;

    Ok(Json(analysis.into()))
}

/// List all analyses, most recently created first
pub async fn list_analyses(
    State(state): State<AppState>,
) -> Result<Json<Vec<AnalysisResponse>>> {
    let analyses = state.repo.list_analyses().await?;
    Ok(Json(analyses.into_iter().map(Into::into).collect()))
}

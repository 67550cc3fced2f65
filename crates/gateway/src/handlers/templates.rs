//! Prompt template listing handler

use axum::{extract::State, Json};
use serde::Serialize;
use uuid::Uuid;

use crate::services::AppState;
use doclens_common::db::models::PromptTemplate;
use doclens_common::errors::Result;

/// One prompt template in a listing
#[derive(Serialize)]
pub struct TemplateResponse {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub prompt_text: String,
    pub category: Option<String>,
    pub variables: Option<serde_json::Value>,
    pub example_output: Option<String>,
    pub usage_count: i32,
    pub created_at: String,
    pub is_public: bool,
}

impl From<PromptTemplate> for TemplateResponse {
    fn from(template: PromptTemplate) -> Self {
        Self {
            id: template.id,
            name: template.name,
            description: template.description,
            prompt_text: template.prompt_text,
            category: template.category,
            variables: template.variables,
            example_output: template.example_output,
            usage_count: template.usage_count,
            created_at: template.created_at.to_rfc3339(),
            is_public: template.is_public,
        }
    }
}

/// List all prompt templates, most recently created first
pub async fn list_templates(
    State(state): State<AppState>,
) -> Result<Json<Vec<TemplateResponse>>> {
    let templates = state.repo.list_prompt_templates().await?;
    Ok(Json(templates.into_iter().map(Into::into).collect()))
}

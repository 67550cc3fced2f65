//! Document upload and listing handlers

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::services::AppState;
use doclens_common::db::models::Document;
use doclens_common::errors::{AppError, Result};

/// Response after a successful upload
#[derive(Serialize)]
pub struct UploadResponse {
    pub file_id: Uuid,
}

/// One document in a listing
#[derive(Serialize)]
pub struct DocumentResponse {
    pub id: Uuid,
    pub filename: String,
    pub file_size: i32,
    pub upload_time: String,
    pub status: String,
    pub current_stage: Option<String>,
    pub progress: i32,
    pub text_length: Option<i32>,
    pub language: Option<String>,
}

impl From<Document> for DocumentResponse {
    fn from(doc: Document) -> Self {
        Self {
            id: doc.id,
            filename: doc.filename,
            file_size: doc.file_size,
            upload_time: doc.upload_time.to_rfc3339(),
            status: doc.status,
            current_stage: doc.current_stage,
            progress: doc.progress,
            text_length: doc.text_length,
            language: doc.language,
        }
    }
}

/// Upload a document (multipart field "file") and run the ingest
/// pipeline synchronously.
pub async fn upload_document(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>> {
    let mut file: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation {
            message: format!("invalid multipart payload: {}", e),
            field: None,
        })?
    {
        if field.name() == Some("file") {
            let filename = field
                .file_name()
                .ok_or_else(|| AppError::MissingField {
                    field: "filename".to_string(),
                })?
                .to_string();
            let data = field.bytes().await.map_err(|e| AppError::Validation {
                message: format!("failed to read file field: {}", e),
                field: Some("file".to_string()),
            })?;
            file = Some((filename, data.to_vec()));
        }
    }

    let (filename, data) = file.ok_or_else(|| AppError::MissingField {
        field: "file".to_string(),
    })?;

    let document = state.upload.handle_upload(&filename, &data).await?;

    Ok(Json(UploadResponse {
        file_id: document.id,
    }))
}

/// List all documents, most recently uploaded first
pub async fn list_documents(
    State(state): State<AppState>,
) -> Result<Json<Vec<DocumentResponse>>> {
    let documents = state.repo.list_documents().await?;
    Ok(Json(documents.into_iter().map(Into::into).collect()))
}

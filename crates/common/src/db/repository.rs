//! Repository pattern for database operations
//!
//! Provides a clean interface for all data access operations with
//! proper error handling. The repository owns the connection pool;
//! cloning is cheap (the pool is internally reference-counted).

use crate::config::DatabaseConfig;
use crate::db::models::*;
use crate::errors::{AppError, Result};
use sea_orm::{
    ActiveModelTrait, ConnectOptions, ConnectionTrait, Database, DatabaseConnection, EntityTrait,
    QueryOrder, Set,
};
use std::time::Duration;
use tracing::info;
use uuid::Uuid;

/// Input for persisting one AI analysis record
#[derive(Debug, Clone)]
pub struct NewAnalysis {
    pub document_id: Uuid,
    pub prompt_template_id: Option<Uuid>,
    pub final_prompt: String,
    pub gemini_response: String,
    pub response_metadata: Option<serde_json::Value>,
    pub execution_time_ms: Option<i32>,
    pub error_message: Option<String>,
}

/// Repository for data access operations
#[derive(Clone)]
pub struct Repository {
    db: DatabaseConnection,
}

impl Repository {
    /// Connect to the database and build a repository
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let mut opts = ConnectOptions::new(&config.url);
        opts.max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
            .sqlx_logging(true);

        let db = Database::connect(opts)
            .await
            .map_err(|e| AppError::DatabaseConnection {
                message: format!("Failed to connect: {}", e),
            })?;

        info!("Database connection established");

        Ok(Self { db })
    }

    /// Build a repository over an existing connection
    pub fn from_connection(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Ping the database to check connectivity
    pub async fn ping(&self) -> Result<()> {
        self.db
            .execute_unprepared("SELECT 1")
            .await
            .map_err(|e| AppError::DatabaseConnection {
                message: format!("Ping failed: {}", e),
            })?;
        Ok(())
    }

    // ========================================================================
    // Document Operations
    // ========================================================================

    /// Create a new document record. The store assigns the identifier;
    /// stage/progress/status start at their creation defaults.
    pub async fn create_document(
        &self,
        filename: String,
        file_size: i32,
        extracted_text: Option<String>,
    ) -> Result<Document> {
        let now = chrono::Utc::now();
        let text_length = extracted_text.as_ref().map(|t| t.chars().count() as i32);

        let document = DocumentActiveModel {
            id: Set(Uuid::new_v4()),
            filename: Set(filename),
            file_size: Set(file_size),
            upload_time: Set(now.into()),
            status: Set("uploaded".to_string()),
            current_stage: Set(None),
            progress: Set(0),
            extracted_text: Set(extracted_text),
            text_length: Set(text_length),
            language: Set(None),
        };

        document.insert(&self.db).await.map_err(Into::into)
    }

    /// Find document by ID
    pub async fn find_document_by_id(&self, id: Uuid) -> Result<Option<Document>> {
        DocumentEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(Into::into)
    }

    /// List all documents, most recently uploaded first
    pub async fn list_documents(&self) -> Result<Vec<Document>> {
        DocumentEntity::find()
            .order_by_desc(DocumentColumn::UploadTime)
            .all(&self.db)
            .await
            .map_err(Into::into)
    }

    /// Update a document's processing stage, progress, and status
    pub async fn update_document_stage(
        &self,
        id: Uuid,
        stage: String,
        progress: i32,
        status: String,
    ) -> Result<Document> {
        let mut document: DocumentActiveModel = DocumentEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| AppError::DocumentNotFound { id: id.to_string() })?
            .into();

        document.current_stage = Set(Some(stage));
        document.progress = Set(progress);
        document.status = Set(status);

        document.update(&self.db).await.map_err(Into::into)
    }

    // ========================================================================
    // Prompt Template Operations
    // ========================================================================

    /// List all prompt templates, most recently created first
    pub async fn list_prompt_templates(&self) -> Result<Vec<PromptTemplate>> {
        PromptTemplateEntity::find()
            .order_by_desc(PromptTemplateColumn::CreatedAt)
            .all(&self.db)
            .await
            .map_err(Into::into)
    }

    // ========================================================================
    // Analysis Operations
    // ========================================================================

    /// Persist one AI analysis record
    pub async fn create_analysis(&self, analysis: NewAnalysis) -> Result<AiAnalysis> {
        let now = chrono::Utc::now();

        let record = AiAnalysisActiveModel {
            id: Set(Uuid::new_v4()),
            document_id: Set(analysis.document_id),
            prompt_template_id: Set(analysis.prompt_template_id),
            final_prompt: Set(analysis.final_prompt),
            gemini_response: Set(analysis.gemini_response),
            response_metadata: Set(analysis.response_metadata),
            execution_time_ms: Set(analysis.execution_time_ms),
            error_message: Set(analysis.error_message),
            created_at: Set(now.into()),
        };

        record.insert(&self.db).await.map_err(Into::into)
    }

    /// List all analyses, most recently created first
    pub async fn list_analyses(&self) -> Result<Vec<AiAnalysis>> {
        AiAnalysisEntity::find()
            .order_by_desc(AiAnalysisColumn::CreatedAt)
            .all(&self.db)
            .await
            .map_err(Into::into)
    }
}

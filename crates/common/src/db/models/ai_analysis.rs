//! AI analysis entity
//!
//! One row per invocation of the generative model against a document.
//! Immutable after creation. A well-formed row carries either a
//! non-empty response or a non-empty error message; that contract is
//! the caller's to uphold.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ai_analyses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub document_id: Uuid,

    pub prompt_template_id: Option<Uuid>,

    /// The fully-resolved prompt that was sent to the model
    #[sea_orm(column_type = "Text")]
    pub final_prompt: String,

    #[sea_orm(column_type = "Text")]
    pub gemini_response: String,

    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub response_metadata: Option<Json>,

    pub execution_time_ms: Option<i32>,

    #[sea_orm(column_type = "Text", nullable)]
    pub error_message: Option<String>,

    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::document::Entity",
        from = "Column::DocumentId",
        to = "super::document::Column::Id"
    )]
    Document,

    #[sea_orm(
        belongs_to = "super::prompt_template::Entity",
        from = "Column::PromptTemplateId",
        to = "super::prompt_template::Column::Id"
    )]
    PromptTemplate,
}

impl Related<super::document::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Document.def()
    }
}

impl Related<super::prompt_template::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PromptTemplate.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

//! Document entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "documents")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Original filename as uploaded (non-empty, at most 255 chars)
    pub filename: String,

    /// Payload size in bytes
    pub file_size: i32,

    pub upload_time: DateTimeWithTimeZone,

    /// Free-text status label, "uploaded" at creation
    #[sea_orm(column_type = "Text")]
    pub status: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub current_stage: Option<String>,

    /// Percent complete, 0-100. Callers are expected to keep this
    /// monotonically non-decreasing within a processing pass; the store
    /// does not enforce it.
    pub progress: i32,

    #[sea_orm(column_type = "Text", nullable)]
    pub extracted_text: Option<String>,

    pub text_length: Option<i32>,

    #[sea_orm(column_type = "Text", nullable)]
    pub language: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::ai_analysis::Entity")]
    Analyses,
}

impl Related<super::ai_analysis::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Analyses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

//! Prompt template entity
//!
//! Read-mostly in this service; templates are seeded externally and only
//! listed here.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "prompt_templates")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub name: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,

    #[sea_orm(column_type = "Text")]
    pub prompt_text: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub category: Option<String>,

    /// Variable schema as JSONB
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub variables: Option<Json>,

    #[sea_orm(column_type = "Text", nullable)]
    pub example_output: Option<String>,

    pub usage_count: i32,

    pub created_at: DateTimeWithTimeZone,

    pub is_public: bool,
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

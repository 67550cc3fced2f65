//! Database models for DocLens
//!
//! SeaORM entities with separate modules for documents, prompt
//! templates, and AI analyses.

pub mod ai_analysis;
pub mod document;
pub mod prompt_template;

pub use document::ActiveModel as DocumentActiveModel;
pub use document::Column as DocumentColumn;
pub use document::Entity as DocumentEntity;
pub use document::Model as Document;

pub use prompt_template::ActiveModel as PromptTemplateActiveModel;
pub use prompt_template::Column as PromptTemplateColumn;
pub use prompt_template::Entity as PromptTemplateEntity;
pub use prompt_template::Model as PromptTemplate;

pub use ai_analysis::ActiveModel as AiAnalysisActiveModel;
pub use ai_analysis::Column as AiAnalysisColumn;
pub use ai_analysis::Entity as AiAnalysisEntity;
pub use ai_analysis::Model as AiAnalysis;

//! DocLens Common Library
//!
//! Shared code for the DocLens document-analysis service including:
//! - Database models and repository
//! - Generative-AI client abstraction
//! - Error types and handling
//! - Configuration management
//! - Metrics and observability

pub mod ai;
pub mod config;
pub mod db;
pub mod errors;
pub mod metrics;

// Re-export commonly used types
pub use ai::Generator;
pub use config::AppConfig;
pub use db::Repository;
pub use errors::{AppError, Result};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default generative model
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-pro";

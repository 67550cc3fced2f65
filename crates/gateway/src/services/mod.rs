use doclens_common::ai::Generator;
use doclens_common::db::Repository;
use std::sync::Arc;

pub mod analysis;
pub mod upload;

use analysis::AnalysisService;
use upload::UploadService;

// A container for all services to be injected into handlers
#[derive(Clone)]
pub struct AppState {
    pub repo: Repository,
    pub upload: Arc<UploadService>,
    pub analysis: Arc<AnalysisService>,
}

impl AppState {
    pub fn new(repo: Repository, generator: Arc<dyn Generator>) -> Self {
        // Repository is cheap to clone (pooled connection inside)
        Self {
            repo: repo.clone(),
            upload: Arc::new(UploadService::new(repo.clone())),
            analysis: Arc::new(AnalysisService::new(repo, generator)),
        }
    }
}

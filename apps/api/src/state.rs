use std::sync::Arc;

use crate::analysis::TextAnalyzer;
use crate::config::Config;
use crate::storage::ResumeTextSource;

/// Shared application state injected into all route handlers via Axum
/// extractors. Holds only the configuration and the two external-service
/// seams — documents travel in request bodies, never in server state.
#[derive(Clone)]
pub struct AppState {
    /// Kept for handlers that need runtime knobs; currently only read at startup.
    #[allow(dead_code)]
    pub config: Config,
    /// Text-analysis service seam. Tests substitute a fake.
    pub analyzer: Arc<dyn TextAnalyzer>,
    /// Resume store seam for the import workflow.
    pub resumes: Arc<dyn ResumeTextSource>,
}

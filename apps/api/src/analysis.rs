//! Text-analysis service client — the single point of entry for CV draft
//! generation calls.
//!
//! The core owns no retry logic: one attempt per call, and the caller decides
//! whether to retry or fall back to manual entry. A response that fails strict
//! deserialization is a hard failure of that call.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Response shape mismatch: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Request for one CV draft: the target role plus free-text summaries the user
/// typed into the AI-assisted form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CvDraftRequest {
    pub target_role: String,
    pub experience_summary: String,
    pub skills_list: String,
    pub education_summary: String,
}

/// The structured draft the service returns.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CvDraftResponse {
    pub description: String,
    pub suggested_skills: Vec<String>,
}

/// Seam for the external text-analysis service. Held in app state as
/// `Arc<dyn TextAnalyzer>` so tests substitute fakes.
#[async_trait]
pub trait TextAnalyzer: Send + Sync {
    async fn draft_cv(&self, request: &CvDraftRequest) -> Result<CvDraftResponse, AnalysisError>;
}

/// Production client talking JSON over HTTP with a bearer-style API key.
pub struct HttpTextAnalyzer {
    client: Client,
    base_url: String,
    api_key: String,
}

impl HttpTextAnalyzer {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            base_url,
            api_key,
        }
    }
}

#[async_trait]
impl TextAnalyzer for HttpTextAnalyzer {
    async fn draft_cv(&self, request: &CvDraftRequest) -> Result<CvDraftResponse, AnalysisError> {
        let url = format!("{}/v1/cv-draft", self.base_url.trim_end_matches('/'));
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!("Text analysis call failed with {status}: {body}");
            return Err(AnalysisError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let draft: CvDraftResponse = serde_json::from_str(&body)?;
        debug!(
            "CV draft received: {} suggested skills",
            draft.suggested_skills.len()
        );
        Ok(draft)
    }
}

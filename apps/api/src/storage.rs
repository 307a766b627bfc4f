//! Resume store client — retrieves the extracted plain text of a previously
//! uploaded resume.
//!
//! The store owns upload, parsing and extraction; this side treats the text as
//! an opaque string and makes exactly one attempt per call.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};
use uuid::Uuid;

const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Response shape mismatch: {0}")]
    Parse(#[from] serde_json::Error),
}

/// What the store returns for one resume: the original filename (feeds the
/// imported document's title) and the extracted text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedResume {
    pub filename: String,
    pub extracted_text: String,
}

/// Seam for the external resume store. Held in app state as
/// `Arc<dyn ResumeTextSource>` so tests substitute fakes.
#[async_trait]
pub trait ResumeTextSource: Send + Sync {
    async fn extracted_text(&self, resume_id: Uuid) -> Result<ExtractedResume, StorageError>;
}

pub struct HttpResumeTextSource {
    client: Client,
    base_url: String,
    api_key: String,
}

impl HttpResumeTextSource {
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
impl ResumeTextSource for HttpResumeTextSource {
    async fn extracted_text(&self, resume_id: Uuid) -> Result<ExtractedResume, StorageError> {
        let url = format!(
            "{}/v1/resumes/{resume_id}/text",
            self.base_url.trim_end_matches('/')
        );
        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!("Resume text fetch failed with {status}: {body}");
            return Err(StorageError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let extracted: ExtractedResume = serde_json::from_str(&body)?;
        debug!(
            "Extracted text received for {resume_id}: {} chars",
            extracted.extracted_text.len()
        );
        Ok(extracted)
    }
}

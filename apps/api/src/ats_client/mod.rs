//! ATS client — the single outbound path for candidate stage mutations.
//!
//! ARCHITECTURAL RULE: no other module may talk to the ATS backend
//! directly. The board workflow only sees the `StageGateway` trait; the
//! concrete HTTP client lives here.
//!
//! The gateway is deliberately dumb: exactly one attempt per call, no
//! retry, no request timeout. A failed move is rolled back by the tracker
//! and the user re-initiates the drag (there is no automatic retry
//! anywhere in the workflow).

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("ATS error (status {status}): {message}")]
    Api { status: u16, message: String },
}

/// The stage mutation gateway. The tracker treats it as opaque: it does
/// not inspect error variants and performs no partial rollback beyond
/// clearing its own bookkeeping.
///
/// Carried in `AppState` as `Arc<dyn StageGateway>` so tests can swap in
/// a scripted implementation.
#[async_trait]
pub trait StageGateway: Send + Sync {
    async fn move_candidate(
        &self,
        candidate_id: &str,
        target_stage: &str,
    ) -> Result<(), GatewayError>;
}

#[derive(Debug, Serialize)]
struct StagePatch<'a> {
    stage: &'a str,
}

/// Reqwest-backed gateway against the ATS backend's candidate API.
#[derive(Clone)]
pub struct HttpStageGateway {
    client: Client,
    base_url: String,
    api_token: String,
}

impl HttpStageGateway {
    pub fn new(base_url: &str, api_token: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_token,
        }
    }
}

#[async_trait]
impl StageGateway for HttpStageGateway {
    async fn move_candidate(
        &self,
        candidate_id: &str,
        target_stage: &str,
    ) -> Result<(), GatewayError> {
        let url = stage_url(&self.base_url, candidate_id);

        let response = self
            .client
            .patch(&url)
            .bearer_auth(&self.api_token)
            .json(&StagePatch {
                stage: target_stage,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GatewayError::Api {
                status: status.as_u16(),
                message,
            });
        }

        debug!(candidate_id, target_stage, "ATS confirmed stage change");
        Ok(())
    }
}

fn stage_url(base_url: &str, candidate_id: &str) -> String {
    format!("{base_url}/candidates/{candidate_id}/stage")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_url_shape() {
        assert_eq!(
            stage_url("https://ats.example.com/api/v2", "c1"),
            "https://ats.example.com/api/v2/candidates/c1/stage"
        );
    }

    #[test]
    fn test_new_strips_trailing_slash() {
        let gateway = HttpStageGateway::new("https://ats.example.com/", "tok".to_string());
        assert_eq!(gateway.base_url, "https://ats.example.com");
    }
}

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::generations::{enums::poll_outcome::PollOutcome, models::job_handle::JobHandle};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("request to generation service failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("generation service responded with {0}")]
    Status(StatusCode),
    #[error("could not decode generation service response: {0}")]
    Decode(String),
}

/// The two remote operations a generation depends on. Implementations hold no
/// state between calls.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GenerationClient: Send + Sync {
    async fn submit(&self, prompt: &str) -> Result<JobHandle, ClientError>;

    async fn poll(&self, handle: &JobHandle) -> PollOutcome;
}

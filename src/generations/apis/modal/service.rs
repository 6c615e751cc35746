use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, StatusCode};

use crate::generations::{
    apis::generation_client::{ClientError, GenerationClient},
    enums::poll_outcome::PollOutcome,
    models::job_handle::JobHandle,
};

use super::{
    config::{CALL_ID_PARAM, ELAPSED_TIME_HEADER, GENERATE_PATH, REQUEST_TIMEOUT, RESULT_PATH},
    structs::modal_generate_response::ModalGenerateResponse,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultStatus {
    Ready,
    Pending,
    Error,
}

/// Maps a `/result` response onto the poll contract: `200` with an image body
/// is ready, `200` with a json body is the service reporting a problem, any
/// 4xx or 5xx is an error and everything else (the service sends `202`) is
/// still pending.
pub fn classify_result(status: StatusCode, content_type: Option<&str>) -> ResultStatus {
    if status == StatusCode::OK {
        let is_json = content_type
            .and_then(|value| value.parse::<mime::Mime>().ok())
            .map_or(false, |parsed| parsed.subtype() == mime::JSON);

        return match is_json {
            true => ResultStatus::Error,
            false => ResultStatus::Ready,
        };
    }

    match status.is_client_error() || status.is_server_error() {
        true => ResultStatus::Error,
        false => ResultStatus::Pending,
    }
}

#[derive(Debug, Clone)]
pub struct ModalClient {
    client: reqwest::Client,
    api_url: String,
}

impl ModalClient {
    pub fn new(api_url: &str) -> Result<Self, ClientError> {
        Self::with_timeout(api_url, REQUEST_TIMEOUT)
    }

    pub fn with_timeout(api_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl GenerationClient for ModalClient {
    async fn submit(&self, prompt: &str) -> Result<JobHandle, ClientError> {
        let url = format!("{}{}", self.api_url, GENERATE_PATH);
        let res = self
            .client
            .post(url)
            .form(&[("prompt", prompt)])
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            tracing::error!("submit rejected by generation service: {}", status);
            return Err(ClientError::Status(status));
        }

        let text = res.text().await?;
        match serde_json::from_str::<ModalGenerateResponse>(&text) {
            Ok(response) => Ok(JobHandle::new(response.call_id)),
            Err(_) => {
                tracing::error!(%text);
                Err(ClientError::Decode(text))
            }
        }
    }

    async fn poll(&self, handle: &JobHandle) -> PollOutcome {
        let url = format!("{}{}", self.api_url, RESULT_PATH);
        let result = self
            .client
            .get(url)
            .query(&[(CALL_ID_PARAM, handle.as_str())])
            .send()
            .await;

        let res = match result {
            Ok(res) => res,
            Err(e) => {
                tracing::warn!("poll request for {} failed: {}", handle, e);
                return PollOutcome::Error(e.to_string());
            }
        };

        let status = res.status();
        let content_type = res
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());

        match classify_result(status, content_type.as_deref()) {
            ResultStatus::Pending => PollOutcome::Pending,
            ResultStatus::Error => {
                let text = res.text().await.unwrap_or_default();
                tracing::error!("result for {} failed with {}: {}", handle, status, text);
                PollOutcome::Error(format!("{}: {}", status, text))
            }
            ResultStatus::Ready => {
                let elapsed_time = res
                    .headers()
                    .get(ELAPSED_TIME_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .map(|value| value.to_string());

                match res.bytes().await {
                    Ok(image) => PollOutcome::Ready {
                        image,
                        elapsed_time,
                    },
                    Err(e) => {
                        tracing::error!(%e);
                        PollOutcome::Error(e.to_string())
                    }
                }
            }
        }
    }
}

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::generations::{
    dtos::generate_image_dto::GenerateImageDto, models::generated_image::GeneratedImage,
};

pub mod http_relay;
pub mod local_relay;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("relay request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("relay responded with {status}")]
    Rejected {
        status: StatusCode,
        message: Option<String>,
    },
}

impl TransportError {
    /// Human readable reason shown once the lifecycle has failed.
    pub fn reason(&self) -> String {
        match self {
            Self::Request(_) => "Failed to generate image.".to_string(),
            Self::Rejected {
                message: Some(message),
                ..
            } => message.to_string(),
            Self::Rejected { message: None, .. } => "Generation failed.".to_string(),
        }
    }
}

/// Carries one generation request to the relay and back.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RelayTransport: Send + Sync {
    async fn generate(&self, dto: &GenerateImageDto) -> Result<GeneratedImage, TransportError>;
}

use std::sync::Arc;

use async_trait::async_trait;

use crate::generations::{
    apis::generation_client::GenerationClient, dtos::generate_image_dto::GenerateImageDto,
    models::generated_image::GeneratedImage, service, util::poll_policy::PollPolicy,
};

use super::{RelayTransport, TransportError};

/// Runs the relay in-process, for pages rendered by the relay server itself.
#[derive(Clone)]
pub struct LocalRelay {
    client: Arc<dyn GenerationClient>,
    policy: PollPolicy,
}

impl LocalRelay {
    pub fn new(client: Arc<dyn GenerationClient>, policy: PollPolicy) -> Self {
        Self { client, policy }
    }
}

#[async_trait]
impl RelayTransport for LocalRelay {
    async fn generate(&self, dto: &GenerateImageDto) -> Result<GeneratedImage, TransportError> {
        match service::generate_image(dto, self.client.as_ref(), &self.policy).await {
            Ok(image) => Ok(image),
            Err(e) => {
                let api_error = e.value();
                Err(TransportError::Rejected {
                    status: api_error.code,
                    message: Some(api_error.message),
                })
            }
        }
    }
}

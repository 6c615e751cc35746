use tokio::time::sleep;

use super::{
    apis::generation_client::GenerationClient, dtos::generate_image_dto::GenerateImageDto,
    enums::poll_outcome::PollOutcome, errors::GenerationsApiError,
    models::{generated_image::GeneratedImage, job_handle::JobHandle},
    util::poll_policy::PollPolicy,
};

pub async fn generate_image(
    dto: &GenerateImageDto,
    client: &dyn GenerationClient,
    policy: &PollPolicy,
) -> Result<GeneratedImage, GenerationsApiError> {
    if let Err(message) = dto.check() {
        return Err(GenerationsApiError::InvalidPrompt(message));
    }

    let handle = match client.submit(&dto.prompt).await {
        Ok(handle) => handle,
        Err(e) => {
            tracing::error!("failed to submit generation: {}", e);
            return Err(GenerationsApiError::SubmissionFailed);
        }
    };

    tracing::debug!("submitted generation {}", handle);

    await_completion(&handle, client, policy).await
}

async fn await_completion(
    handle: &JobHandle,
    client: &dyn GenerationClient,
    policy: &PollPolicy,
) -> Result<GeneratedImage, GenerationsApiError> {
    let mut delays = policy.delays();
    let mut attempt: u32 = 0;

    loop {
        attempt += 1;

        let outcome = client.poll(handle).await;
        tracing::debug!("generation {} attempt {}: {}", handle, attempt, outcome.value());

        match outcome {
            PollOutcome::Ready {
                image,
                elapsed_time,
            } => {
                tracing::info!(
                    "generation {} ready after {} attempts ({} bytes)",
                    handle,
                    attempt,
                    image.len()
                );
                return Ok(GeneratedImage::from_png_bytes(&image, elapsed_time));
            }
            PollOutcome::Error(reason) => {
                tracing::error!("generation {} failed: {}", handle, reason);
                return Err(GenerationsApiError::PollFailed);
            }
            PollOutcome::Pending => {}
        }

        let Some(delay) = delays.next()
        else {
            tracing::error!("generation {} timed out after {} attempts", handle, attempt);
            return Err(GenerationsApiError::TimedOut);
        };

        tracing::debug!("generation {} pending, checking again in {:?}", handle, delay);

        sleep(delay).await;
    }
}

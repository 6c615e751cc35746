use crate::generations::{
    dtos::generate_image_dto::GenerateImageDto, models::generated_image::GeneratedImage,
};

use super::{
    enums::lifecycle_state::LifecycleState,
    errors::LifecycleError,
    models::notification::Notification,
    transport::{RelayTransport, TransportError},
};

/// Client-side state machine of a single generation:
/// `Idle -> Pending -> Succeeded | Failed`, and back to `Idle` on restart.
#[derive(Debug, Default)]
pub struct LifecycleController {
    state: LifecycleState,
    prompt: Option<String>,
    notifications: Vec<Notification>,
}

impl LifecycleController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LifecycleState {
        &self.state
    }

    /// The prompt of the current or last resolved request.
    pub fn submitted_prompt(&self) -> Option<&str> {
        self.prompt.as_deref()
    }

    pub fn can_submit(&self) -> bool {
        !matches!(self.state, LifecycleState::Pending)
    }

    /// Validates the prompt and moves to `Pending`, clearing any previous
    /// image or error. A rejected prompt leaves the state untouched.
    pub fn begin(&mut self, prompt: &str) -> Result<GenerateImageDto, LifecycleError> {
        if !self.can_submit() {
            return Err(LifecycleError::Busy);
        }

        let dto = GenerateImageDto::new(prompt);
        if let Err(message) = dto.check() {
            return Err(LifecycleError::Validation(message));
        }

        tracing::info!("{} -> pending", self.state.value());

        self.state = LifecycleState::Pending;
        self.prompt = Some(dto.prompt.to_string());

        Ok(dto)
    }

    /// Applies the relay's answer. Outcomes arriving outside `Pending` belong
    /// to a request that was restarted away and are dropped.
    pub fn resolve(&mut self, outcome: Result<GeneratedImage, TransportError>) {
        if !matches!(self.state, LifecycleState::Pending) {
            tracing::warn!("dropping relay outcome while {}", self.state.value());
            return;
        }

        match outcome {
            Ok(image) => {
                tracing::info!("pending -> succeeded");
                self.state = LifecycleState::Succeeded(image);
                self.notifications.push(Notification::success(
                    "Image generated",
                    "Your image is ready.",
                ));
            }
            Err(e) => {
                tracing::error!("pending -> failed: {}", e);
                let reason = e.reason();
                self.notifications
                    .push(Notification::failure("Failed to generate image", &reason));
                self.state = LifecycleState::Failed(reason);
            }
        }
    }

    pub async fn submit(
        &mut self,
        prompt: &str,
        relay: &dyn RelayTransport,
    ) -> Result<(), LifecycleError> {
        let dto = self.begin(prompt)?;
        let outcome = relay.generate(&dto).await;
        self.resolve(outcome);

        Ok(())
    }

    pub fn restart(&mut self) {
        tracing::info!("{} -> idle", self.state.value());

        self.state = LifecycleState::Idle;
        self.prompt = None;
    }

    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }
}

use crate::generations::models::generated_image::GeneratedImage;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LifecycleState {
    #[default]
    Idle,
    Pending,
    Succeeded(GeneratedImage),
    Failed(String),
}

impl LifecycleState {
    pub fn value(&self) -> &str {
        match *self {
            Self::Idle => "idle",
            Self::Pending => "pending",
            Self::Succeeded(_) => "succeeded",
            Self::Failed(_) => "failed",
        }
    }
}

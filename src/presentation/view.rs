use crate::lifecycle::enums::lifecycle_state::LifecycleState;

use super::{
    enums::{submit_label::SubmitLabel, theme::Theme},
    models::view_context::ViewContext,
    prompt_form::PromptForm,
    surprise::PLACEHOLDER_PROMPT,
};

/// Fixed output size of the generation service.
pub static IMAGE_SIZE: u32 = 512;

pub static EMPTY_HINT: &str = "Enter a prompt to generate an image";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Empty,
    Loading,
    Image {
        src: String,
        alt: String,
        width: u32,
        height: u32,
        elapsed_time: Option<String>,
    },
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub output: Output,
    pub centered: bool,
    pub prompt: String,
    pub placeholder: Option<&'static str>,
    pub field_error: Option<String>,
    pub input_disabled: bool,
    pub show_prompt_actions: bool,
    pub submit_label: SubmitLabel,
    pub theme: Theme,
    pub seed: u64,
}

pub fn render(
    state: &LifecycleState,
    submitted_prompt: Option<&str>,
    form: &PromptForm,
    field_error: Option<&str>,
    context: &ViewContext,
) -> View {
    let pending = matches!(state, LifecycleState::Pending);

    let output = match state {
        LifecycleState::Idle => Output::Empty,
        LifecycleState::Pending => Output::Loading,
        LifecycleState::Succeeded(image) => Output::Image {
            src: image.image.to_string(),
            alt: submitted_prompt.unwrap_or(form.prompt()).to_string(),
            width: IMAGE_SIZE,
            height: IMAGE_SIZE,
            elapsed_time: image.elapsed_time.clone(),
        },
        LifecycleState::Failed(reason) => Output::Error(reason.to_string()),
    };

    let submit_label = match (form.placeholder_active(), pending) {
        (true, _) => SubmitLabel::SurpriseMe,
        (false, true) => SubmitLabel::Generating,
        (false, false) => SubmitLabel::Generate,
    };

    View {
        centered: matches!(output, Output::Empty | Output::Loading),
        output,
        prompt: form.prompt().to_string(),
        placeholder: form.placeholder_active().then_some(PLACEHOLDER_PROMPT),
        field_error: field_error.map(|message| message.to_string()),
        input_disabled: pending,
        show_prompt_actions: !form.prompt().is_empty(),
        submit_label,
        theme: context.theme,
        seed: context.seed,
    }
}

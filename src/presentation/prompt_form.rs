use crate::lifecycle::models::notification::Notification;

use super::{
    clipboard::Clipboard,
    enums::key::{Key, KeyAction},
    surprise::PLACEHOLDER_PROMPT,
};

pub static COPIED_TITLE: &str = "Copied to clipboard";
pub static COPIED_DESCRIPTION: &str = "The prompt has been copied to your clipboard.";
pub static COPY_FAILED_TITLE: &str = "Failed to copy text";
pub static COPY_FAILED_DESCRIPTION: &str = "Please try again.";

/// Text of the prompt box and whether its placeholder is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptForm {
    prompt: String,
    placeholder_active: bool,
}

impl Default for PromptForm {
    fn default() -> Self {
        Self {
            prompt: String::new(),
            placeholder_active: true,
        }
    }
}

impl PromptForm {
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn placeholder_active(&self) -> bool {
        self.placeholder_active
    }

    pub fn edit(&mut self, text: &str) {
        self.prompt = text.to_string();
        self.placeholder_active = text.is_empty();
    }

    pub fn on_key(&mut self, key: Key, shift: bool) -> KeyAction {
        match key {
            Key::Enter if !shift => KeyAction::Submit,
            Key::Tab if self.placeholder_active => {
                self.prompt = PLACEHOLDER_PROMPT.to_string();
                self.placeholder_active = false;
                KeyAction::AcceptedPlaceholder
            }
            _ => KeyAction::Passthrough,
        }
    }

    pub fn surprise_me(&mut self, prompt: &str) {
        self.prompt = prompt.to_string();
        self.placeholder_active = false;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn copy(&self, clipboard: &dyn Clipboard) -> Notification {
        match clipboard.write_text(&self.prompt) {
            Ok(_) => Notification::success(COPIED_TITLE, COPIED_DESCRIPTION),
            Err(e) => {
                tracing::error!("failed to copy prompt: {}", e);
                Notification::failure(COPY_FAILED_TITLE, COPY_FAILED_DESCRIPTION)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::{
        lifecycle::enums::notification_variant::NotificationVariant,
        presentation::clipboard::ClipboardError,
    };

    #[derive(Default)]
    struct RecordingClipboard {
        text: RefCell<Option<String>>,
    }

    impl Clipboard for RecordingClipboard {
        fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
            *self.text.borrow_mut() = Some(text.to_string());
            Ok(())
        }
    }

    struct DeniedClipboard;

    impl Clipboard for DeniedClipboard {
        fn write_text(&self, _text: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError("permission denied".to_string()))
        }
    }

    #[test]
    fn starts_empty_with_placeholder() {
        let form = PromptForm::default();

        assert_eq!(form.prompt(), "");
        assert!(form.placeholder_active());
    }

    #[test]
    fn editing_toggles_the_placeholder() {
        let mut form = PromptForm::default();

        form.edit("a fox");
        assert!(!form.placeholder_active());

        form.edit("");
        assert!(form.placeholder_active());
    }

    #[test]
    fn enter_submits_unless_shift_is_held() {
        let mut form = PromptForm::default();

        assert_eq!(form.on_key(Key::Enter, false), KeyAction::Submit);
        assert_eq!(form.on_key(Key::Enter, true), KeyAction::Passthrough);
    }

    #[test]
    fn tab_accepts_the_placeholder_only_once() {
        let mut form = PromptForm::default();

        assert_eq!(form.on_key(Key::Tab, false), KeyAction::AcceptedPlaceholder);
        assert_eq!(form.prompt(), PLACEHOLDER_PROMPT);
        assert!(!form.placeholder_active());

        assert_eq!(form.on_key(Key::Tab, false), KeyAction::Passthrough);
        assert_eq!(form.on_key(Key::Other, false), KeyAction::Passthrough);
    }

    #[test]
    fn surprise_fills_the_prompt_and_reset_clears_it() {
        let mut form = PromptForm::default();

        form.surprise_me("An underwater scene with bioluminescent creatures");
        assert_eq!(
            form.prompt(),
            "An underwater scene with bioluminescent creatures"
        );
        assert!(!form.placeholder_active());

        form.reset();
        assert_eq!(form, PromptForm::default());
    }

    #[test]
    fn copy_reports_success_and_failure() {
        let mut form = PromptForm::default();
        form.edit("A koala chilling on a tree");

        let clipboard = RecordingClipboard::default();
        let notification = form.copy(&clipboard);
        assert_eq!(notification.title, "Copied to clipboard");
        assert_eq!(
            clipboard.text.borrow().as_deref(),
            Some("A koala chilling on a tree")
        );

        let notification = form.copy(&DeniedClipboard);
        assert_eq!(notification.title, "Failed to copy text");
        assert_eq!(notification.variant, NotificationVariant::Destructive);
    }
}

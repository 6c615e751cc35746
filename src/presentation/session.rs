use crate::lifecycle::{
    controller::LifecycleController, errors::LifecycleError, models::notification::Notification,
    transport::RelayTransport,
};

use super::{
    clipboard::Clipboard,
    enums::key::{Key, KeyAction},
    models::view_context::ViewContext,
    page,
    prompt_form::PromptForm,
    view::{self, View},
};

/// One browser tab: the lifecycle plus the ui state around it. User intents
/// enter here and are forwarded to the controller.
#[derive(Debug)]
pub struct Session {
    controller: LifecycleController,
    form: PromptForm,
    context: ViewContext,
    field_error: Option<String>,
    notifications: Vec<Notification>,
}

impl Session {
    pub fn new(context: ViewContext) -> Self {
        Self {
            controller: LifecycleController::new(),
            form: PromptForm::default(),
            context,
            field_error: None,
            notifications: Vec::new(),
        }
    }

    pub fn controller(&self) -> &LifecycleController {
        &self.controller
    }

    pub fn form(&self) -> &PromptForm {
        &self.form
    }

    pub fn edit(&mut self, text: &str) {
        if !self.controller.can_submit() {
            return;
        }

        self.form.edit(text);
    }

    pub fn surprise_me(&mut self) {
        if !self.controller.can_submit() {
            return;
        }

        self.form.surprise_me(self.context.surprise_prompt);
    }

    pub async fn submit(&mut self, relay: &dyn RelayTransport) {
        let prompt = self.form.prompt().to_string();

        match self.controller.submit(&prompt, relay).await {
            Ok(_) => self.field_error = None,
            Err(LifecycleError::Validation(message)) => self.field_error = Some(message),
            Err(LifecycleError::Busy) => tracing::debug!("ignoring submit while pending"),
        }
    }

    pub async fn press_key(&mut self, key: Key, shift: bool, relay: &dyn RelayTransport) {
        if !self.controller.can_submit() {
            return;
        }

        if self.form.on_key(key, shift) == KeyAction::Submit {
            self.submit(relay).await;
        }
    }

    pub fn copy(&mut self, clipboard: &dyn Clipboard) {
        let notification = self.form.copy(clipboard);
        self.notifications.push(notification);
    }

    pub fn restart(&mut self) {
        self.controller.restart();
        self.form.reset();
        self.field_error = None;
    }

    pub fn take_notifications(&mut self) -> Vec<Notification> {
        let mut notifications = std::mem::take(&mut self.notifications);
        notifications.extend(self.controller.take_notifications());
        notifications
    }

    pub fn view(&self) -> View {
        view::render(
            self.controller.state(),
            self.controller.submitted_prompt(),
            &self.form,
            self.field_error.as_deref(),
            &self.context,
        )
    }

    pub fn render_page(&mut self) -> String {
        let notifications = self.take_notifications();
        page::render_page(&self.view(), &notifications)
    }
}

use crate::lifecycle::enums::notification_variant::NotificationVariant;

pub static NOTIFICATION_DURATION_MS: u64 = 3000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
    pub duration_ms: u64,
}

impl Notification {
    pub fn success(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            variant: NotificationVariant::Default,
            duration_ms: NOTIFICATION_DURATION_MS,
        }
    }

    pub fn failure(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            variant: NotificationVariant::Destructive,
            duration_ms: NOTIFICATION_DURATION_MS,
        }
    }
}

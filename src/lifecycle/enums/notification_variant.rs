#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationVariant {
    Default,
    Destructive,
}

impl NotificationVariant {
    pub fn value(&self) -> &str {
        match *self {
            Self::Default => "default",
            Self::Destructive => "destructive",
        }
    }
}

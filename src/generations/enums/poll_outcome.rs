use bytes::Bytes;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    Pending,
    Ready {
        image: Bytes,
        elapsed_time: Option<String>,
    },
    Error(String),
}

impl PollOutcome {
    pub fn value(&self) -> &str {
        match *self {
            Self::Pending => "pending",
            Self::Ready { .. } => "ready",
            Self::Error(_) => "error",
        }
    }
}

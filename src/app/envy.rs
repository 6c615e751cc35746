use serde::Deserialize;

use crate::generations::util::poll_policy::{PollBackoff, PollPolicy};

#[derive(Debug, Clone, Deserialize)]
pub struct Envy {
    pub app_env: Option<String>,
    pub port: Option<u16>,

    pub modal_url: String,
    pub relay_url: Option<String>,

    pub poll_max_attempts: Option<u32>,
    pub poll_interval_ms: Option<u64>,
    pub poll_backoff: Option<String>,
    pub poll_max_interval_ms: Option<u64>,
}

impl Envy {
    pub fn poll_policy(&self) -> Result<PollPolicy, String> {
        let default_policy = PollPolicy::default();

        let backoff = match self.poll_backoff.as_deref() {
            None | Some("fixed") => PollBackoff::Fixed,
            Some("exponential") => PollBackoff::Exponential {
                max_interval_ms: self.poll_max_interval_ms.unwrap_or(8000),
            },
            Some(other) => return Err(format!("unknown poll backoff \"{}\"", other)),
        };

        let policy = PollPolicy {
            max_attempts: self.poll_max_attempts.unwrap_or(default_policy.max_attempts),
            interval_ms: self.poll_interval_ms.unwrap_or(default_policy.interval_ms),
            backoff,
        };

        if policy.max_attempts == 0 {
            return Err("poll max attempts must be at least 1".to_string());
        }

        Ok(policy)
    }

    pub fn modal_url(&self) -> &str {
        self.modal_url.trim_end_matches('/')
    }
}

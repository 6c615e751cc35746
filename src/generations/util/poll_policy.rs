use std::time::Duration;

use tokio_retry::strategy::{ExponentialBackoff, FixedInterval};

pub static DEFAULT_MAX_ATTEMPTS: u32 = 30;
pub static DEFAULT_INTERVAL_MS: u64 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollBackoff {
    Fixed,
    /// Doubles the interval after every attempt, capped at `max_interval_ms`.
    Exponential { max_interval_ms: u64 },
}

/// Attempt budget and delay schedule of the relay's polling loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    pub max_attempts: u32,
    pub interval_ms: u64,
    pub backoff: PollBackoff,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            interval_ms: DEFAULT_INTERVAL_MS,
            backoff: PollBackoff::Fixed,
        }
    }
}

impl PollPolicy {
    /// Delays to wait between consecutive attempts. Yields one less item than
    /// `max_attempts`, so nothing is slept after the final attempt.
    pub fn delays(&self) -> Box<dyn Iterator<Item = Duration> + Send> {
        let gaps = self.max_attempts.saturating_sub(1) as usize;

        match self.backoff {
            PollBackoff::Fixed => Box::new(FixedInterval::from_millis(self.interval_ms).take(gaps)),
            PollBackoff::Exponential { max_interval_ms } => Box::new(
                ExponentialBackoff::from_millis(2)
                    .factor((self.interval_ms / 2).max(1))
                    .max_delay(Duration::from_millis(max_interval_ms))
                    .take(gaps),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_policy_waits_one_second_between_thirty_attempts() {
        let delays: Vec<Duration> = PollPolicy::default().delays().collect();

        assert_eq!(delays.len(), 29);
        assert!(delays.iter().all(|delay| *delay == Duration::from_millis(1000)));
    }

    #[test]
    fn exponential_policy_doubles_up_to_the_cap() {
        let policy = PollPolicy {
            max_attempts: 6,
            interval_ms: 1000,
            backoff: PollBackoff::Exponential {
                max_interval_ms: 8000,
            },
        };

        let delays: Vec<u128> = policy.delays().map(|delay| delay.as_millis()).collect();

        assert_eq!(delays, vec![1000, 2000, 4000, 8000, 8000]);
    }

    #[test]
    fn single_attempt_never_sleeps() {
        let policy = PollPolicy {
            max_attempts: 1,
            ..PollPolicy::default()
        };

        assert_eq!(policy.delays().count(), 0);
    }
}

//! Inactivity policy.
//!
//! Pure decision of which participants are considered gone. The caller
//! supplies `now`, so the policy is testable without real time passing.

use std::time::Duration;

use super::{entity::Participant, value_object::Timestamp};

/// Default inactivity threshold.
pub const DEFAULT_INACTIVITY_THRESHOLD: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InactivityPolicy {
    threshold: Duration,
}

impl InactivityPolicy {
    pub fn new(threshold: Duration) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> Duration {
        self.threshold
    }

    /// A participant is inactive iff `now - last_seen_at >= threshold`.
    pub fn is_inactive(&self, participant: &Participant, now: Timestamp) -> bool {
        let threshold_ms = i64::try_from(self.threshold.as_millis()).unwrap_or(i64::MAX);
        now.millis_since(participant.last_seen_at) >= threshold_ms
    }

    /// Inactive participants of `participants`, in their original order.
    pub fn select_inactive<'a>(
        &self,
        participants: &'a [Participant],
        now: Timestamp,
    ) -> Vec<&'a Participant> {
        participants
            .iter()
            .filter(|p| self.is_inactive(p, now))
            .collect()
    }
}

impl Default for InactivityPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_INACTIVITY_THRESHOLD)
    }
}

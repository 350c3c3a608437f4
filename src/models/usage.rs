use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One row of the usage table. Field order is the column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageEvent {
    pub timestamp: String,
    pub email: String,
    pub question_count: u64,
    pub cost_estimate: f64,
}

/// Per-user fold of the usage table. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UsageSummary {
    pub email: String,
    pub total_questions: u64,
    pub total_cost: f64,
    pub sessions: u64,
    pub last_activity: String,
}

impl UsageSummary {
    /// Empty summary seeded from the first event seen for a user.
    pub fn starting_at(event: &UsageEvent) -> Self {
        Self {
            email: event.email.clone(),
            total_questions: 0,
            total_cost: 0.0,
            sessions: 0,
            last_activity: event.timestamp.clone(),
        }
    }

    /// Add one event to the running totals. Fails rather than wrapping when a
    /// counter would exceed `u64::MAX`.
    pub fn absorb(&mut self, event: &UsageEvent) -> Result<()> {
        let overflow = |counter: &str| {
            Error::persistence(
                "compute usage stats",
                format!("{counter} overflows for {}", self.email),
            )
        };
        self.total_questions = self
            .total_questions
            .checked_add(event.question_count)
            .ok_or_else(|| overflow("question total"))?;
        self.sessions = self
            .sessions
            .checked_add(1)
            .ok_or_else(|| overflow("session count"))?;
        self.total_cost += event.cost_estimate;
        // Plain string order; holds only while timestamps share one fixed width
        if event.timestamp > self.last_activity {
            self.last_activity = event.timestamp.clone();
        }
        Ok(())
    }
}

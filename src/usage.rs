//! # Usage Module
//!
//! Records usage events and folds the usage table into per-user summaries.
//!
//! ## Key Types
//!
//! - `UsageRecorder`: appends one timestamped event per call
//! - `UsageAggregator`: recomputes every `UsageSummary` from the full table
//! - `summarize`: the fold itself, independent of storage

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::info;

use crate::config::StoreConfig;
use crate::error::Result;
use crate::models::{StatusResponse, UsageEvent, UsageSummary};
use crate::store::UsageLog;
use crate::utils::format_timestamp;

#[derive(Debug, Clone)]
pub struct UsageRecorder {
    log: UsageLog,
}

impl UsageRecorder {
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            log: UsageLog::new(config),
        }
    }

    /// Append an event stamped with the current UTC time.
    ///
    /// The email is not checked against the credential table.
    pub fn record_usage(
        &self,
        email: &str,
        question_count: u64,
        cost_estimate: f64,
    ) -> Result<StatusResponse> {
        self.record_usage_at(email, question_count, cost_estimate, Utc::now())
    }

    pub fn record_usage_at(
        &self,
        email: &str,
        question_count: u64,
        cost_estimate: f64,
        at: DateTime<Utc>,
    ) -> Result<StatusResponse> {
        let event = UsageEvent {
            timestamp: format_timestamp(at),
            email: email.to_string(),
            question_count,
            cost_estimate,
        };
        self.log.append(&event)?;
        info!(email, question_count, cost_estimate, "recorded usage");
        Ok(StatusResponse::logged())
    }
}

#[derive(Debug, Clone)]
pub struct UsageAggregator {
    log: UsageLog,
}

impl UsageAggregator {
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            log: UsageLog::new(config),
        }
    }

    /// One summary per email, in first-seen order. Empty when there is no log.
    pub fn compute_stats(&self) -> Result<Vec<UsageSummary>> {
        summarize(&self.log.events()?)
    }
}

/// Fold events into per-user summaries in a single pass.
pub fn summarize(events: &[UsageEvent]) -> Result<Vec<UsageSummary>> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut summaries: Vec<UsageSummary> = Vec::new();

    for event in events {
        let slot = *index.entry(event.email.as_str()).or_insert_with(|| {
            summaries.push(UsageSummary::starting_at(event));
            summaries.len() - 1
        });
        summaries[slot].absorb(event)?;
    }
    Ok(summaries)
}

//! Boundary operations in one place, each built from the injected
//! [`StoreConfig`]. A hosting layer maps these one-to-one onto its routes.

use crate::auth::Authenticator;
use crate::config::StoreConfig;
use crate::error::Result;
use crate::models::{AuthResponse, HealthReport, PublicUser, StatusResponse, UsageSummary};
use crate::usage::{UsageAggregator, UsageRecorder};
use crate::utils::now_timestamp;

#[derive(Debug, Clone)]
pub struct Backend {
    config: StoreConfig,
    auth: Authenticator,
    recorder: UsageRecorder,
    aggregator: UsageAggregator,
}

impl Backend {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            auth: Authenticator::new(&config),
            recorder: UsageRecorder::new(&config),
            aggregator: UsageAggregator::new(&config),
            config,
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn authenticate(&self, email: &str, password: &str) -> Result<AuthResponse> {
        self.auth.authenticate(email, password)
    }

    pub fn record_usage(
        &self,
        email: &str,
        question_count: u64,
        cost_estimate: f64,
    ) -> Result<StatusResponse> {
        self.recorder
            .record_usage(email, question_count, cost_estimate)
    }

    pub fn compute_stats(&self) -> Result<Vec<UsageSummary>> {
        self.aggregator.compute_stats()
    }

    pub fn list_users(&self) -> Result<Vec<PublicUser>> {
        self.auth.list_users()
    }

    pub fn create_user(&self, email: &str, password: &str) -> Result<StatusResponse> {
        self.auth.create_user(email, password)
    }

    pub fn health(&self) -> HealthReport {
        HealthReport {
            status: "healthy".to_string(),
            timestamp: now_timestamp(),
        }
    }
}

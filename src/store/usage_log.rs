//! Append-only usage table.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::table::{append_row, open_reader};
use crate::config::StoreConfig;
use crate::error::{Error, Result};
use crate::models::UsageEvent;

pub const USAGE_HEADER: [&str; 4] = ["timestamp", "email", "question_count", "cost_estimate"];

#[derive(Debug, Clone)]
pub struct UsageLog {
    path: PathBuf,
}

impl UsageLog {
    pub fn new(config: &StoreConfig) -> Self {
        Self::at(&config.usage_path)
    }

    pub fn at(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    #[cfg(test)]
    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&self, event: &UsageEvent) -> Result<()> {
        let row = [
            event.timestamp.clone(),
            event.email.clone(),
            event.question_count.to_string(),
            event.cost_estimate.to_string(),
        ];
        append_row(&self.path, &USAGE_HEADER, &row, "log usage")
    }

    /// Every event in file order. A missing table yields no events.
    pub fn events(&self) -> Result<Vec<UsageEvent>> {
        const READ: &str = "read usage log";
        let Some(mut reader) = open_reader(&self.path, READ)? else {
            debug!(path = %self.path.display(), "usage log not found");
            return Ok(Vec::new());
        };
        let events = reader
            .deserialize::<UsageEvent>()
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| Error::persistence(READ, e))?;
        debug!(path = %self.path.display(), count = events.len(), "read usage log");
        Ok(events)
    }
}

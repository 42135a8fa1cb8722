//! Two-step confirmation for destructive operations.
//!
//! A `request_*` method on a service returns a confirmation token that
//! describes what would be destroyed; nothing happens until the caller
//! passes the token back to the matching `confirm_*` method. Tokens can
//! only be constructed inside this crate, so the confirm step cannot be
//! reached without the request step.

use shared::MetricType;

/// Pending deletion of health records matching one timestamp.
#[derive(Debug, Clone)]
pub struct DeleteRecordConfirmation {
    metric: MetricType,
    timestamp: i64,
    matches: usize,
    summary: String,
}

impl DeleteRecordConfirmation {
    pub(crate) fn new(metric: MetricType, timestamp: i64, matches: usize) -> Self {
        let summary = format!(
            "Delete {} {} record(s)? This cannot be undone.",
            matches, metric
        );
        Self {
            metric,
            timestamp,
            matches,
            summary,
        }
    }

    pub fn metric(&self) -> MetricType {
        self.metric
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// How many records match the key and would be removed.
    pub fn matches(&self) -> usize {
        self.matches
    }

    /// Human-readable prompt for the confirmation dialog.
    pub fn summary(&self) -> &str {
        &self.summary
    }
}

/// Pending deletion of one milestone.
#[derive(Debug, Clone)]
pub struct DeleteMilestoneConfirmation {
    id: i64,
    summary: String,
}

impl DeleteMilestoneConfirmation {
    pub(crate) fn new(id: i64, title: &str) -> Self {
        Self {
            id,
            summary: format!("Delete milestone \"{}\"? This cannot be undone.", title),
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }
}

/// Pending wipe of every store.
#[derive(Debug, Clone)]
pub struct ClearAllConfirmation {
    summary: String,
}

impl ClearAllConfirmation {
    pub(crate) fn new() -> Self {
        Self {
            summary: "Delete ALL stored data (health records, milestones, forum posts, \
                      settings, and high scores)? This cannot be undone."
                .to_string(),
        }
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }
}

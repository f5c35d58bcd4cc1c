use super::{LiveResults, VoteCounts};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How often the results screen refreshes.
pub const POLL_INTERVAL: Duration = Duration::from_secs(2);

/// One poll's worth of dashboard data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub counts: VoteCounts,
    pub results: LiveResults,
    pub fetched_at: DateTime<Utc>,
}

impl DashboardSnapshot {
    pub fn new(counts: VoteCounts, results: LiveResults) -> Self {
        Self {
            counts,
            results,
            fetched_at: Utc::now(),
        }
    }

    /// Shown before the first poll completes and right after a reset.
    pub fn empty() -> Self {
        Self::new(VoteCounts::zeroed(), LiveResults::default())
    }
}

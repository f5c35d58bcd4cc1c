use super::{Category, VoteCounts};
use serde::{Deserialize, Serialize};

/// What happened to a submitted vote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum VoteOutcome {
    Recorded {
        category: Category,
        candidate: String,
    },
    /// The API answered `success: false`, e.g. a second vote from the same device.
    Rejected { message: String },
}

impl VoteOutcome {
    pub fn is_recorded(&self) -> bool {
        matches!(self, Self::Recorded { .. })
    }

    pub fn message(&self) -> String {
        match self {
            Self::Recorded {
                category,
                candidate,
            } => format!("Vote recorded for {candidate} in {category}!"),
            Self::Rejected { message } => message.clone(),
        }
    }
}

/// Plain `{success, message}` acknowledgement used by several endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiAck {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    /// Counts after a reset, when the server includes them.
    #[serde(default)]
    pub counts: Option<VoteCounts>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStats {
    pub concurrent_users: u64,
    pub total_votes: u64,
}

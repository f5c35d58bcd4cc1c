use super::Category;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const NO_VOTES_YET: &str = "No votes yet";

/// Leading candidate of one category as reported by the voting API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryResult {
    /// Either a single name, `"Tie: a, b"`, or [`NO_VOTES_YET`].
    pub leading_candidate: String,
    pub votes: u64,
    #[serde(default)]
    pub total_votes: u64,
    #[serde(default)]
    pub percentage: f64,
    #[serde(default)]
    pub all_candidates: BTreeMap<String, u64>,
}

impl CategoryResult {
    pub fn has_votes(&self) -> bool {
        self.votes > 0 && self.leading_candidate != NO_VOTES_YET
    }

    pub fn is_tie(&self) -> bool {
        self.leading_candidate.starts_with("Tie: ")
    }

    /// Candidates ordered by votes, highest first, ties broken by name.
    pub fn ranked_candidates(&self) -> Vec<(&str, u64)> {
        let mut ranked: Vec<(&str, u64)> = self
            .all_candidates
            .iter()
            .map(|(name, votes)| (name.as_str(), *votes))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked
    }
}

/// Per-category results keyed by category. Unknown keys are dropped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, CategoryResult>", into = "BTreeMap<String, CategoryResult>")]
pub struct LiveResults {
    by_category: BTreeMap<Category, CategoryResult>,
}

impl From<BTreeMap<String, CategoryResult>> for LiveResults {
    fn from(raw: BTreeMap<String, CategoryResult>) -> Self {
        let by_category = raw
            .into_iter()
            .filter_map(|(name, result)| name.parse::<Category>().ok().map(|c| (c, result)))
            .collect();
        Self { by_category }
    }
}

impl From<LiveResults> for BTreeMap<String, CategoryResult> {
    fn from(results: LiveResults) -> Self {
        results
            .by_category
            .into_iter()
            .map(|(c, result)| (c.as_str().to_string(), result))
            .collect()
    }
}

impl LiveResults {
    pub fn get(&self, category: Category) -> Option<&CategoryResult> {
        self.by_category.get(&category)
    }

    pub fn is_empty(&self) -> bool {
        self.by_category.is_empty()
    }
}

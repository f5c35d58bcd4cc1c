use super::Category;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Votes cast per category plus the overall total.
///
/// On the wire this is a flat object, `{"King": 3, ..., "total": 10}`. Missing
/// categories read as zero and unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawCounts", into = "RawCounts")]
pub struct VoteCounts {
    per_category: [u64; 7],
    total: u64,
}

#[derive(Serialize, Deserialize)]
struct RawCounts {
    #[serde(flatten)]
    categories: BTreeMap<String, u64>,
    #[serde(default)]
    total: u64,
}

impl From<RawCounts> for VoteCounts {
    fn from(raw: RawCounts) -> Self {
        let mut per_category = [0; 7];
        for (name, count) in raw.categories {
            if let Ok(category) = name.parse::<Category>() {
                per_category[category.index()] = count;
            }
        }
        Self {
            per_category,
            total: raw.total,
        }
    }
}

impl From<VoteCounts> for RawCounts {
    fn from(counts: VoteCounts) -> Self {
        let categories = Category::ALL
            .iter()
            .map(|c| (c.as_str().to_string(), counts.get(*c)))
            .collect();
        Self {
            categories,
            total: counts.total,
        }
    }
}

impl VoteCounts {
    /// All categories at zero, shown before the first poll and after a reset.
    pub fn zeroed() -> Self {
        Self::default()
    }

    pub fn from_counts(counts: impl IntoIterator<Item = (Category, u64)>) -> Self {
        let mut per_category = [0; 7];
        for (category, count) in counts {
            per_category[category.index()] = count;
        }
        let total = per_category.iter().sum();
        Self {
            per_category,
            total,
        }
    }

    pub fn get(&self, category: Category) -> u64 {
        self.per_category[category.index()]
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Share of all votes that went to `category`, rounded to a whole percent.
    pub fn share_percent(&self, category: Category) -> u32 {
        if self.total == 0 {
            return 0;
        }
        let share = self.get(category) as f64 / self.total as f64 * 100.0;
        share.round() as u32
    }

    /// Same ratio as [`Self::share_percent`] without rounding, for bar widths.
    pub fn share_ratio(&self, category: Category) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.get(category) as f64 / self.total as f64
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, u64)> + '_ {
        Category::ALL.into_iter().map(|c| (c, self.get(c)))
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The seven contests of the event, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    King,
    Queen,
    Prince,
    Princess,
    #[serde(rename = "Best Costume Male")]
    BestCostumeMale,
    #[serde(rename = "Best Costume Female")]
    BestCostumeFemale,
    #[serde(rename = "Best Performance Award")]
    BestPerformanceAward,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::King,
        Category::Queen,
        Category::Prince,
        Category::Princess,
        Category::BestCostumeMale,
        Category::BestCostumeFemale,
        Category::BestPerformanceAward,
    ];

    /// Name used on the wire and on screen.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::King => "King",
            Self::Queen => "Queen",
            Self::Prince => "Prince",
            Self::Princess => "Princess",
            Self::BestCostumeMale => "Best Costume Male",
            Self::BestCostumeFemale => "Best Costume Female",
            Self::BestPerformanceAward => "Best Performance Award",
        }
    }

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

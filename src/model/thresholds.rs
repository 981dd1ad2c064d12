use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub struct ScoringProfile {
    pub significance_threshold: u32,
    pub neutral_share: u32,
    pub drift_policy: DriftPolicy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum DriftPolicy {
    /// Rounding drift goes entirely to the highest share.
    #[default]
    Dominant,
    /// Floor every share, then hand leftover points out by largest fractional remainder.
    LargestRemainder,
}

impl DriftPolicy {
    pub fn label(self) -> &'static str {
        match self {
            DriftPolicy::Dominant => "dominant",
            DriftPolicy::LargestRemainder => "largest_remainder",
        }
    }
}

impl ScoringProfile {
    pub fn default_v1() -> Self {
        Self {
            significance_threshold: 25,
            neutral_share: 25,
            drift_policy: DriftPolicy::Dominant,
        }
    }

    pub fn largest_remainder_v1() -> Self {
        let mut base = Self::default_v1();
        base.drift_policy = DriftPolicy::LargestRemainder;
        base
    }

    pub fn with_drift_policy(policy: DriftPolicy) -> Self {
        match policy {
            DriftPolicy::Dominant => Self::default_v1(),
            DriftPolicy::LargestRemainder => Self::largest_remainder_v1(),
        }
    }
}

impl Default for ScoringProfile {
    fn default() -> Self {
        Self::default_v1()
    }
}

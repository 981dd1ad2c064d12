use serde::{Deserialize, Serialize};

use crate::model::styles::{VarkStyle, style_order};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RawScores {
    pub values: [f64; 4],
}

impl RawScores {
    pub fn add(&mut self, style: VarkStyle, weight: f64) {
        self.values[style.index()] += weight;
    }

    pub fn get(&self, style: VarkStyle) -> f64 {
        self.values[style.index()]
    }

    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }
}

/// Persisted learning-style profile. Sums to 100 whenever produced by the scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PercentageScores {
    pub visual: u32,
    pub auditory: u32,
    pub reading_writing: u32,
    pub kinesthetic: u32,
}

impl PercentageScores {
    pub fn new(visual: u32, auditory: u32, reading_writing: u32, kinesthetic: u32) -> Self {
        Self {
            visual,
            auditory,
            reading_writing,
            kinesthetic,
        }
    }

    pub fn neutral(share: u32) -> Self {
        Self::new(share, share, share, share)
    }

    pub fn from_array(values: [u32; 4]) -> Self {
        Self::new(values[0], values[1], values[2], values[3])
    }

    pub fn as_array(&self) -> [u32; 4] {
        [
            self.visual,
            self.auditory,
            self.reading_writing,
            self.kinesthetic,
        ]
    }

    pub fn get(&self, style: VarkStyle) -> u32 {
        self.as_array()[style.index()]
    }

    pub fn total(&self) -> u32 {
        self.as_array().iter().sum()
    }

    pub fn entries(&self) -> Vec<(VarkStyle, u32)> {
        style_order().iter().map(|&s| (s, self.get(s))).collect()
    }

    /// Highest share; the earlier style in precedence order wins ties.
    pub fn dominant(&self) -> VarkStyle {
        let mut best = VarkStyle::Visual;
        let mut best_value = self.visual;
        for &style in style_order() {
            let v = self.get(style);
            if v > best_value {
                best = style;
                best_value = v;
            }
        }
        best
    }
}

impl Default for PercentageScores {
    fn default() -> Self {
        Self::neutral(25)
    }
}

use serde::{Deserialize, Serialize};

use crate::model::scores::PercentageScores;
use crate::model::styles::VarkStyle;

/// A material's original text plus any pre-generated per-style variants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentVariants {
    pub original: String,
    #[serde(default)]
    pub visual: Option<String>,
    #[serde(default)]
    pub auditory: Option<String>,
    #[serde(default)]
    pub reading_writing: Option<String>,
    #[serde(default)]
    pub kinesthetic: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectedContent<'a> {
    pub style: VarkStyle,
    pub body: &'a str,
    /// False when the dominant style had no variant and the original was used.
    pub personalized: bool,
}

impl ContentVariants {
    pub fn variant(&self, style: VarkStyle) -> Option<&str> {
        let v = match style {
            VarkStyle::Visual => &self.visual,
            VarkStyle::Auditory => &self.auditory,
            VarkStyle::ReadingWriting => &self.reading_writing,
            VarkStyle::Kinesthetic => &self.kinesthetic,
        };
        v.as_deref().filter(|s| !s.trim().is_empty())
    }
}

pub fn select_variant<'a>(
    content: &'a ContentVariants,
    scores: &PercentageScores,
) -> SelectedContent<'a> {
    let style = scores.dominant();
    match content.variant(style) {
        Some(body) => SelectedContent {
            style,
            body,
            personalized: true,
        },
        None => SelectedContent {
            style,
            body: &content.original,
            personalized: false,
        },
    }
}

/// Style label passed to the text-generation service when requesting a variant.
pub fn transformation_label(style: VarkStyle) -> &'static str {
    match style {
        VarkStyle::Visual => "visual learners (diagrams, charts, spatial layout)",
        VarkStyle::Auditory => "auditory learners (conversational, spoken explanation)",
        VarkStyle::ReadingWriting => "reading/writing learners (structured text, lists, definitions)",
        VarkStyle::Kinesthetic => "kinesthetic learners (hands-on activities, worked examples)",
    }
}

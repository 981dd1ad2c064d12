use serde::Serialize;

use crate::model::scores::PercentageScores;
use crate::model::styles::VarkStyle;
use crate::model::thresholds::ScoringProfile;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleSummary {
    pub style: VarkStyle,
    pub name: &'static str,
    pub description: &'static str,
    pub percentage: u32,
}

impl StyleSummary {
    fn new(style: VarkStyle, percentage: u32) -> Self {
        Self {
            style,
            name: style.name(),
            description: style.description(),
            percentage,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interpretation {
    pub dominant: StyleSummary,
    pub secondary: Option<StyleSummary>,
    pub is_multimodal: bool,
    pub multimodal_styles: Vec<VarkStyle>,
    pub all_scores: Vec<StyleSummary>,
    pub summary: String,
}

pub fn interpret(scores: &PercentageScores) -> Interpretation {
    interpret_with(scores, &ScoringProfile::default_v1())
}

pub fn interpret_with(scores: &PercentageScores, profile: &ScoringProfile) -> Interpretation {
    let threshold = profile.significance_threshold;

    // entries() is in precedence order and sort_by is stable, so ties keep that order.
    let mut ranked = scores.entries();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    let all_scores: Vec<StyleSummary> = ranked
        .iter()
        .map(|&(style, pct)| StyleSummary::new(style, pct))
        .collect();

    let dominant = all_scores[0].clone();
    let secondary = all_scores
        .get(1)
        .filter(|s| s.percentage >= threshold)
        .cloned();

    let significant: Vec<VarkStyle> = all_scores
        .iter()
        .filter(|s| s.percentage >= threshold)
        .map(|s| s.style)
        .collect();
    let is_multimodal = significant.len() > 1;
    let multimodal_styles = if is_multimodal { significant } else { Vec::new() };

    let summary = build_summary(&dominant, &multimodal_styles);

    Interpretation {
        dominant,
        secondary,
        is_multimodal,
        multimodal_styles,
        all_scores,
        summary,
    }
}

fn build_summary(dominant: &StyleSummary, multimodal_styles: &[VarkStyle]) -> String {
    if multimodal_styles.len() > 1 {
        let names = multimodal_styles
            .iter()
            .map(|s| s.name())
            .collect::<Vec<_>>()
            .join(" and ");
        format!("You are a multimodal learner with strong preferences for {names} learning.")
    } else {
        format!(
            "Your dominant learning style is {}. {}",
            dominant.name, dominant.description
        )
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_interpret.rs"]
mod tests;

pub mod json;
pub mod text;

use serde::Serialize;

use crate::model::styles::{VarkStyle, style_order};
use crate::model::thresholds::ScoringProfile;
use crate::pipeline::ScoredRespondent;
use crate::pipeline::stage3_interpret::Interpretation;

#[derive(Debug, Clone, Serialize)]
pub struct StyleStat {
    pub style: VarkStyle,
    pub name: &'static str,
    pub dominant_count: usize,
    pub dominant_fraction: f64,
    pub mean_percentage: f64,
    pub significant_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub tool: ToolMeta,
    pub mode: String,
    pub drift_policy: String,
    pub significance_threshold: u32,
    pub n_respondents: usize,
    pub n_responses_counted: usize,
    pub n_responses_ignored: usize,
    pub neutral_fallback_count: usize,
    pub multimodal_count: usize,
    pub multimodal_fraction: f64,
    pub styles: Vec<StyleStat>,
}

#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    pub summary: &'a SummaryData,
    /// Present when the batch holds exactly one respondent.
    pub single: Option<(&'a str, &'a Interpretation)>,
}

pub fn build_summary(
    respondents: &[ScoredRespondent],
    profile: &ScoringProfile,
    mode: &str,
) -> SummaryData {
    let n = respondents.len();
    let mut styles = Vec::with_capacity(4);
    for &style in style_order() {
        let dominant_count = respondents
            .iter()
            .filter(|r| r.interpretation.dominant.style == style)
            .count();
        let significant_count = respondents
            .iter()
            .filter(|r| r.breakdown.scores.get(style) >= profile.significance_threshold)
            .count();
        let percentages = respondents
            .iter()
            .map(|r| r.breakdown.scores.get(style) as f64)
            .collect::<Vec<_>>();
        styles.push(StyleStat {
            style,
            name: style.name(),
            dominant_count,
            dominant_fraction: fraction(dominant_count, n),
            mean_percentage: mean(&percentages),
            significant_count,
        });
    }

    let multimodal_count = respondents
        .iter()
        .filter(|r| r.interpretation.is_multimodal)
        .count();

    SummaryData {
        tool: ToolMeta {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        mode: mode.to_string(),
        drift_policy: profile.drift_policy.label().to_string(),
        significance_threshold: profile.significance_threshold,
        n_respondents: n,
        n_responses_counted: respondents.iter().map(|r| r.breakdown.counted_responses).sum(),
        n_responses_ignored: respondents.iter().map(|r| r.breakdown.ignored_responses).sum(),
        neutral_fallback_count: respondents
            .iter()
            .filter(|r| r.breakdown.used_neutral_fallback())
            .count(),
        multimodal_count,
        multimodal_fraction: fraction(multimodal_count, n),
        styles,
    }
}

pub fn format_f64_6(v: f64) -> String {
    format!("{:.6}", v)
}

pub fn fraction(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 / total as f64
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;

use serde::Serialize;

use crate::pipeline::stage3_interpret::Interpretation;
use crate::report::SummaryData;

pub fn render_summary_json(data: &SummaryData) -> serde_json::Result<String> {
    serde_json::to_string_pretty(data)
}

#[derive(Serialize)]
struct InterpretationDoc<'a> {
    scores: crate::model::scores::PercentageScores,
    #[serde(flatten)]
    interpretation: &'a Interpretation,
}

/// Scores and interpretation for one respondent, as served to a results view.
pub fn render_interpretation_json(
    scores: &crate::model::scores::PercentageScores,
    interpretation: &Interpretation,
) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&InterpretationDoc {
        scores: *scores,
        interpretation,
    })
}

pub mod stage1_collect;
pub mod stage2_score;
pub mod stage3_interpret;
pub mod stage4_report;

use crate::input::ResponseSubmission;
use crate::model::thresholds::ScoringProfile;
use stage2_score::{ScoreBreakdown, score_responses};
use stage3_interpret::{Interpretation, interpret_with};

#[derive(Debug, Clone, PartialEq)]
pub struct ScoredRespondent {
    pub respondent_id: String,
    pub breakdown: ScoreBreakdown,
    pub interpretation: Interpretation,
}

pub fn score_submissions(
    submissions: &[ResponseSubmission],
    profile: &ScoringProfile,
) -> Vec<ScoredRespondent> {
    submissions
        .iter()
        .map(|sub| {
            let breakdown = score_responses(&sub.responses, profile);
            let interpretation = interpret_with(&breakdown.scores, profile);
            tracing::debug!(
                respondent = %sub.respondent_id,
                dominant = %interpretation.dominant.style,
                multimodal = interpretation.is_multimodal,
                "scored respondent"
            );
            ScoredRespondent {
                respondent_id: sub.respondent_id.clone(),
                breakdown,
                interpretation,
            }
        })
        .collect()
}

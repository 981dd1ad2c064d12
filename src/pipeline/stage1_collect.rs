use crate::input::{AnswerSubmission, InputError, ResponseSubmission};
use crate::questionnaire::{Questionnaire, collect_responses};

/// Resolves questionnaire answers into weighted responses. The first
/// invalid submission aborts the batch and names the respondent.
pub fn run_stage1(
    questionnaire: &Questionnaire,
    submissions: &[AnswerSubmission],
) -> Result<Vec<ResponseSubmission>, InputError> {
    let mut out = Vec::with_capacity(submissions.len());
    for sub in submissions {
        let responses = collect_responses(questionnaire, &sub.answers).map_err(|e| {
            InputError::InvalidInput(format!("respondent {}: {e}", sub.respondent_id))
        })?;
        out.push(ResponseSubmission {
            respondent_id: sub.respondent_id.clone(),
            responses,
        });
    }
    Ok(out)
}

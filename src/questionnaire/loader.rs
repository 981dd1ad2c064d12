use std::collections::BTreeSet;
use std::path::Path;

use crate::input::{InputError, open_maybe_gz};
use crate::questionnaire::{AssessmentError, Questionnaire, option_style};

pub fn load_questionnaire(path: &Path) -> Result<Questionnaire, InputError> {
    let reader = open_maybe_gz(path)?;
    let questionnaire: Questionnaire = serde_json::from_reader(reader)?;
    validate_questionnaire(&questionnaire)?;
    tracing::info!(
        path = %path.display(),
        domains = questionnaire.domains.len(),
        questions = questionnaire.question_count(),
        "loaded questionnaire"
    );
    Ok(questionnaire)
}

pub fn validate_questionnaire(questionnaire: &Questionnaire) -> Result<(), AssessmentError> {
    if questionnaire.domains.is_empty() {
        return Err(invalid("questionnaire has no domains".to_string()));
    }

    let mut seen = BTreeSet::new();
    for domain in &questionnaire.domains {
        if domain.questions.is_empty() {
            return Err(invalid(format!("domain {} has no questions", domain.id)));
        }
        if !(domain.weight > 0.0) || !domain.weight.is_finite() {
            return Err(invalid(format!(
                "domain {} has non-positive weight {}",
                domain.id, domain.weight
            )));
        }
        for question in &domain.questions {
            if !seen.insert(question.id.as_str()) {
                return Err(invalid(format!("duplicate question id {}", question.id)));
            }
            if question.options.is_empty() {
                return Err(invalid(format!("question {} has no options", question.id)));
            }
            for option in &question.options {
                if option_style(option).is_none() {
                    return Err(invalid(format!(
                        "question {} has option with unknown style tag {:?}",
                        question.id, option.style
                    )));
                }
            }
        }
    }
    Ok(())
}

fn invalid(msg: String) -> AssessmentError {
    AssessmentError::InvalidQuestionnaire(msg)
}

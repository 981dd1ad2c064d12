pub mod defs;
pub mod loader;

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::model::response::Response;
use crate::model::styles::VarkStyle;

pub use loader::{load_questionnaire, validate_questionnaire};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionOption {
    pub text: String,
    pub style: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub options: Vec<QuestionOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub weight: f64,
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Questionnaire {
    pub domains: Vec<Domain>,
}

/// A respondent's pick for one question, by option index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    #[serde(alias = "questionId")]
    pub question_id: String,
    pub option: usize,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum AssessmentError {
    #[error("unknown question: {0}")]
    UnknownQuestion(String),
    #[error("option {option} out of range for question {question_id} ({available} options)")]
    OptionOutOfRange {
        question_id: String,
        option: usize,
        available: usize,
    },
    #[error("question answered more than once: {0}")]
    DuplicateAnswer(String),
    #[error("assessment incomplete; unanswered questions: {}", .0.join(", "))]
    Incomplete(Vec<String>),
    #[error("invalid questionnaire: {0}")]
    InvalidQuestionnaire(String),
}

impl Questionnaire {
    pub fn builtin() -> Self {
        let domains = defs::builtin_domains()
            .iter()
            .map(|d| Domain {
                id: d.id.to_string(),
                name: d.name.to_string(),
                description: d.description.to_string(),
                weight: d.weight,
                questions: d
                    .questions
                    .iter()
                    .map(|q| Question {
                        id: q.id.to_string(),
                        text: q.text.to_string(),
                        options: q
                            .options
                            .iter()
                            .map(|o| QuestionOption {
                                text: o.text.to_string(),
                                style: o.style.tag().to_string(),
                            })
                            .collect(),
                    })
                    .collect(),
            })
            .collect();
        Self { domains }
    }

    pub fn question_count(&self) -> usize {
        self.domains.iter().map(|d| d.questions.len()).sum()
    }

    fn questions(&self) -> impl Iterator<Item = (&Domain, &Question)> {
        self.domains
            .iter()
            .flat_map(|d| d.questions.iter().map(move |q| (d, q)))
    }
}

/// Turns a complete answer set into one `Response` per question, in questionnaire order.
pub fn collect_responses(
    questionnaire: &Questionnaire,
    answers: &[Answer],
) -> Result<Vec<Response>, AssessmentError> {
    let known: BTreeSet<&str> = questionnaire.questions().map(|(_, q)| q.id.as_str()).collect();

    let mut picked: BTreeMap<&str, usize> = BTreeMap::new();
    for answer in answers {
        if !known.contains(answer.question_id.as_str()) {
            return Err(AssessmentError::UnknownQuestion(answer.question_id.clone()));
        }
        if picked
            .insert(answer.question_id.as_str(), answer.option)
            .is_some()
        {
            return Err(AssessmentError::DuplicateAnswer(answer.question_id.clone()));
        }
    }

    let mut responses = Vec::with_capacity(questionnaire.question_count());
    let mut missing = Vec::new();
    for (domain, question) in questionnaire.questions() {
        let Some(&option) = picked.get(question.id.as_str()) else {
            missing.push(question.id.clone());
            continue;
        };
        let chosen =
            question
                .options
                .get(option)
                .ok_or_else(|| AssessmentError::OptionOutOfRange {
                    question_id: question.id.clone(),
                    option,
                    available: question.options.len(),
                })?;
        responses.push(Response {
            question_id: question.id.clone(),
            domain_id: domain.id.clone(),
            selected_style: chosen.style.clone(),
            domain_weight: Some(domain.weight),
        });
    }

    if !missing.is_empty() {
        return Err(AssessmentError::Incomplete(missing));
    }
    Ok(responses)
}

pub fn option_style(option: &QuestionOption) -> Option<VarkStyle> {
    VarkStyle::from_tag(&option.style)
}

#[cfg(test)]
#[path = "../../tests/src_inline/questionnaire/tests.rs"]
mod tests;

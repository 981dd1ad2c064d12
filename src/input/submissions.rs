use std::collections::BTreeSet;
use std::path::Path;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::input::{InputError, open_maybe_gz};
use crate::model::response::Response;
use crate::questionnaire::Answer;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResponseSubmission {
    #[serde(alias = "respondentId", alias = "userId", alias = "user_id")]
    pub respondent_id: String,
    pub responses: Vec<Response>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnswerSubmission {
    #[serde(alias = "respondentId", alias = "userId", alias = "user_id")]
    pub respondent_id: String,
    pub answers: Vec<Answer>,
}

/// Accepts either a JSON array of submissions or a single submission object.
#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

pub fn load_response_submissions(path: &Path) -> Result<Vec<ResponseSubmission>, InputError> {
    let subs: Vec<ResponseSubmission> = load_submissions(path)?;
    check_unique(subs.iter().map(|s| s.respondent_id.as_str()))?;
    Ok(subs)
}

pub fn load_answer_submissions(path: &Path) -> Result<Vec<AnswerSubmission>, InputError> {
    let subs: Vec<AnswerSubmission> = load_submissions(path)?;
    check_unique(subs.iter().map(|s| s.respondent_id.as_str()))?;
    Ok(subs)
}

fn load_submissions<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, InputError> {
    let reader = open_maybe_gz(path)?;
    let parsed: OneOrMany<T> = serde_json::from_reader(reader)?;
    let subs = match parsed {
        OneOrMany::Many(v) => v,
        OneOrMany::One(s) => vec![s],
    };
    if subs.is_empty() {
        return Err(InputError::InvalidInput(format!(
            "{} contains no submissions",
            path.display()
        )));
    }
    tracing::info!(path = %path.display(), n = subs.len(), "loaded submissions");
    Ok(subs)
}

fn check_unique<'a>(ids: impl Iterator<Item = &'a str>) -> Result<(), InputError> {
    let mut seen = BTreeSet::new();
    for id in ids {
        if id.trim().is_empty() {
            return Err(InputError::InvalidInput("empty respondent id".to_string()));
        }
        if !seen.insert(id) {
            return Err(InputError::InvalidInput(format!(
                "duplicate respondent id {id}"
            )));
        }
    }
    Ok(())
}

//! Learning-style profile persistence.
//!
//! Every store call takes an explicit [`Session`]; there is no process-wide
//! client or cached login. Owner sessions may only read and write their own
//! record, service sessions may touch any record.

pub mod file_store;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use file_store::FileProfileStore;

use crate::model::scores::PercentageScores;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionRole {
    Owner,
    Service,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
    pub role: SessionRole,
}

impl Session {
    pub fn owner(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            role: SessionRole::Owner,
        }
    }

    pub fn service(name: impl Into<String>) -> Self {
        Self {
            user_id: name.into(),
            role: SessionRole::Service,
        }
    }

    pub fn can_access(&self, user_id: &str) -> bool {
        match self.role {
            SessionRole::Service => true,
            SessionRole::Owner => self.user_id == user_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub user_id: String,
    pub visual: u32,
    pub auditory: u32,
    pub reading_writing: u32,
    pub kinesthetic: u32,
    pub completed_at: DateTime<Utc>,
}

impl ProfileRecord {
    pub fn new(
        user_id: impl Into<String>,
        scores: &PercentageScores,
        completed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            visual: scores.visual,
            auditory: scores.auditory,
            reading_writing: scores.reading_writing,
            kinesthetic: scores.kinesthetic,
            completed_at,
        }
    }

    pub fn scores(&self) -> PercentageScores {
        PercentageScores::new(
            self.visual,
            self.auditory,
            self.reading_writing,
            self.kinesthetic,
        )
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("session {session} may not access profile of {user_id}")]
    Forbidden { session: String, user_id: String },
    #[error("invalid user id: {0:?}")]
    InvalidUserId(String),
    #[error("profile store IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("profile store encoding error: {0}")]
    Encoding(#[from] serde_json::Error),
}

pub trait ProfileStore {
    fn save_scores(
        &self,
        session: &Session,
        user_id: &str,
        scores: &PercentageScores,
        completed_at: DateTime<Utc>,
    ) -> Result<ProfileRecord, StoreError>;

    fn load(&self, session: &Session, user_id: &str) -> Result<Option<ProfileRecord>, StoreError>;
}

pub(crate) fn authorize(session: &Session, user_id: &str) -> Result<(), StoreError> {
    if session.can_access(user_id) {
        Ok(())
    } else {
        Err(StoreError::Forbidden {
            session: session.user_id.clone(),
            user_id: user_id.to_string(),
        })
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/profile/tests.rs"]
mod tests;

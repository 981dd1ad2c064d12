use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::model::scores::PercentageScores;
use crate::profile::{ProfileRecord, ProfileStore, Session, StoreError, authorize};

/// One `<user_id>.json` document per profile under `root`.
#[derive(Debug, Clone)]
pub struct FileProfileStore {
    root: PathBuf,
}

impl FileProfileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn record_path(&self, user_id: &str) -> Result<PathBuf, StoreError> {
        let valid = !user_id.is_empty()
            && user_id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
            && user_id != "."
            && user_id != "..";
        if !valid {
            return Err(StoreError::InvalidUserId(user_id.to_string()));
        }
        Ok(self.root.join(format!("{user_id}.json")))
    }
}

impl ProfileStore for FileProfileStore {
    fn save_scores(
        &self,
        session: &Session,
        user_id: &str,
        scores: &PercentageScores,
        completed_at: DateTime<Utc>,
    ) -> Result<ProfileRecord, StoreError> {
        authorize(session, user_id)?;
        let path = self.record_path(user_id)?;
        fs::create_dir_all(&self.root)?;

        let record = ProfileRecord::new(user_id, scores, completed_at);
        let tmp = path.with_extension("json.tmp");
        {
            let mut w = BufWriter::new(fs::File::create(&tmp)?);
            serde_json::to_writer_pretty(&mut w, &record)?;
            w.flush()?;
        }
        fs::rename(&tmp, &path)?;

        tracing::debug!(user_id, path = %path.display(), "saved learning-style profile");
        Ok(record)
    }

    fn load(&self, session: &Session, user_id: &str) -> Result<Option<ProfileRecord>, StoreError> {
        authorize(session, user_id)?;
        let path = self.record_path(user_id)?;
        let bytes = match fs::read(&path) {
            Ok(b) => b,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_slice(&bytes)?))
    }
}

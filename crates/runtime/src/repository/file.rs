//! File-based record repository.

use std::fs;
use std::path::{Path, PathBuf};

use crate::repository::{RecordRepository, RepositoryError, SessionRecord};

/// Stores one pretty-printed JSON file per session under a base directory.
///
/// Writes go to a temp file first and are renamed into place.
pub struct FileRecordRepository {
    base_dir: PathBuf,
}

impl FileRecordRepository {
    /// Create a new repository, creating `base_dir` if needed.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self, RepositoryError> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn record_path(&self, session_id: &str) -> Result<PathBuf, RepositoryError> {
        let valid = !session_id.is_empty()
            && session_id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(RepositoryError::InvalidSessionId(session_id.to_string()));
        }
        Ok(self.base_dir.join(format!("session_{}.json", session_id)))
    }

    /// Writes a record to an explicit path.
    pub fn write_path(path: &Path, record: &SessionRecord) -> Result<(), RepositoryError> {
        let temp_path = path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(record)
            .map_err(|e| RepositoryError::Json(e.to_string()))?;
        fs::write(&temp_path, json)?;
        fs::rename(&temp_path, path)?;
        tracing::debug!(
            target: "runtime::repository",
            path = %path.display(),
            "saved session record"
        );
        Ok(())
    }

    /// Reads a record from an explicit path.
    pub fn read_path(path: &Path) -> Result<SessionRecord, RepositoryError> {
        if !path.exists() {
            return Err(RepositoryError::NotFound(path.display().to_string()));
        }
        let json = fs::read_to_string(path)?;
        serde_json::from_str(&json).map_err(|e| RepositoryError::Json(e.to_string()))
    }
}

impl RecordRepository for FileRecordRepository {
    fn save(&self, record: &SessionRecord) -> Result<(), RepositoryError> {
        let path = self.record_path(&record.session_id)?;
        Self::write_path(&path, record)
    }

    fn load(&self, session_id: &str) -> Result<Option<SessionRecord>, RepositoryError> {
        let path = self.record_path(session_id)?;
        if !path.exists() {
            return Ok(None);
        }
        Self::read_path(&path).map(Some)
    }

    fn delete(&self, session_id: &str) -> Result<(), RepositoryError> {
        let path = self.record_path(session_id)?;
        if path.exists() {
            fs::remove_file(&path)?;
            tracing::info!(target: "runtime::repository", session_id, "deleted session record");
        }
        Ok(())
    }

    fn list_sessions(&self) -> Result<Vec<String>, RepositoryError> {
        let mut sessions = Vec::new();

        for entry in fs::read_dir(&self.base_dir)? {
            let path = entry?.path();
            if let Some(filename) = path.file_name().and_then(|s| s.to_str())
                && let Some(session_id) = filename
                    .strip_prefix("session_")
                    .and_then(|s| s.strip_suffix(".json"))
            {
                sessions.push(session_id.to_string());
            }
        }

        sessions.sort();
        Ok(sessions)
    }
}

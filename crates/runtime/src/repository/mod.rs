//! Persistence for session records.

mod error;
mod file;
mod record;

pub use error::RepositoryError;
pub use file::FileRecordRepository;
pub use record::{ActionLogEntry, SessionRecord, session_id_for};

/// Storage for finished or in-progress session records.
pub trait RecordRepository: Send + Sync {
    fn save(&self, record: &SessionRecord) -> Result<(), RepositoryError>;

    /// Returns `None` if no record exists for `session_id`.
    fn load(&self, session_id: &str) -> Result<Option<SessionRecord>, RepositoryError>;

    fn delete(&self, session_id: &str) -> Result<(), RepositoryError>;

    /// All stored session ids, sorted.
    fn list_sessions(&self) -> Result<Vec<String>, RepositoryError>;
}

//! Environment-driven CLI configuration.

use std::path::PathBuf;

/// Settings read from the environment (and `.env`).
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    /// `DISPOSITION_DATA_DIR`: content directory; built-in content when unset.
    pub data_dir: Option<PathBuf>,
    /// `DISPOSITION_LOG_DIR`: also write logs to `<dir>/disposition.log`.
    pub log_dir: Option<PathBuf>,
}

impl CliConfig {
    pub fn from_env() -> Self {
        Self {
            data_dir: std::env::var_os("DISPOSITION_DATA_DIR").map(PathBuf::from),
            log_dir: std::env::var_os("DISPOSITION_LOG_DIR").map(PathBuf::from),
        }
    }
}

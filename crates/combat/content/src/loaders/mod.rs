//! Content loaders for reading combat data from files.

pub mod bundle;
pub mod cards;
pub mod config;
pub mod enemies;
pub mod factory;
pub mod fate;
pub mod vulnerabilities;

pub use bundle::ContentBundle;
pub use cards::CardLoader;
pub use config::ConfigLoader;
pub use enemies::{EnemyCatalog, EnemyLoader};
pub use factory::ContentFactory;
pub use fate::FateDeckLoader;
pub use vulnerabilities::VulnerabilityLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

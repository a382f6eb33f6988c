//! Balance sheet loader.

use std::path::Path;

use combat_core::CombatConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for [`CombatConfig`] from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    pub fn load(path: &Path) -> LoadResult<CombatConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse config from TOML text. Missing keys keep their defaults.
    pub fn parse(content: &str) -> LoadResult<CombatConfig> {
        let config: CombatConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        anyhow::ensure!(config.hard_cap > 0, "hard_cap must be positive");
        anyhow::ensure!(
            config.max_energy >= config.starting_energy,
            "max_energy ({}) is below starting_energy ({})",
            config.max_energy,
            config.starting_energy
        );
        anyhow::ensure!(config.hero_max_health > 0, "hero_max_health must be positive");
        anyhow::ensure!(
            (config.swing_window as usize) <= CombatConfig::MAX_SWING_WINDOW,
            "swing_window {} exceeds the supported maximum of {}",
            config.swing_window,
            CombatConfig::MAX_SWING_WINDOW
        );

        Ok(config)
    }
}

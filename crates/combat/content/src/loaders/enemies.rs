//! Enemy catalog loader.

use std::collections::BTreeMap;
use std::path::Path;

use combat_core::EnemyDefinition;

use crate::loaders::{LoadResult, read_file};

/// Enemy definitions keyed by id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EnemyCatalog {
    enemies: BTreeMap<String, EnemyDefinition>,
}

impl EnemyCatalog {
    pub fn get(&self, id: &str) -> Option<&EnemyDefinition> {
        self.enemies.get(id)
    }

    /// Like [`get`](Self::get), but with an error naming the known ids.
    pub fn require(&self, id: &str) -> LoadResult<&EnemyDefinition> {
        self.get(id).ok_or_else(|| {
            anyhow::anyhow!(
                "unknown enemy '{}' (known: {})",
                id,
                self.ids().collect::<Vec<_>>().join(", ")
            )
        })
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.enemies.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EnemyDefinition> + '_ {
        self.enemies.values()
    }

    pub fn len(&self) -> usize {
        self.enemies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty()
    }
}

/// Loader for the enemy catalog from RON files.
///
/// RON format: `Vec<EnemyDefinition>`.
pub struct EnemyLoader;

impl EnemyLoader {
    pub fn load(path: &Path) -> LoadResult<EnemyCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<EnemyCatalog> {
        let raw: Vec<EnemyDefinition> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse enemy catalog RON: {}", e))?;

        let mut enemies = BTreeMap::new();
        for enemy in raw {
            let id = enemy.id.clone();
            anyhow::ensure!(!id.is_empty(), "enemy '{}' has an empty id", enemy.name);
            if enemies.insert(id.clone(), enemy).is_some() {
                anyhow::bail!("duplicate enemy id '{}'", id);
            }
        }
        Ok(EnemyCatalog { enemies })
    }
}

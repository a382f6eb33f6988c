//! Static content for Disposition Combat.
//!
//! Cards, enemies, the campaign fate deck, vulnerability overrides and the
//! balance sheet live in RON/TOML files under `data/`. Content is read once,
//! shared immutably by every session and never appears in session state.
//!
//! All loaders deserialize combat-core types directly through serde.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    CardLoader, ConfigLoader, ContentBundle, ContentFactory, EnemyCatalog, EnemyLoader,
    FateDeckLoader, LoadResult, VulnerabilityLoader,
};

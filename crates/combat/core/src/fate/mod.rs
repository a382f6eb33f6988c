//! Fate cards, the persistent fate deck and keyword resolution.
//!
//! Every Strike, Influence and Sacrifice draws one fate card (Echo repeats
//! reuse the card that triggered them). The card's modifier and keyword feed
//! the momentum calculator; the resolution is also reported verbatim in the
//! event log.
mod card;
mod deck;
mod resolution;

pub use card::{FateCard, FateKeyword, FateSuit};
pub use deck::{FateDeck, FateDraw};
pub use resolution::{
    DispositionBand, FateEffects, FateResolution, KeywordEffect, keyword_context_effect,
    resolve_fate,
};

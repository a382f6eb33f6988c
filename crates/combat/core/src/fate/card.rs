use crate::resonance::ResonanceZone;

/// Keyword printed on a fate card.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum FateKeyword {
    /// Base power ×1.5.
    Surge,
    /// -1, and disposition-dependent disruption.
    Shadow,
    /// Cancels backlash at extreme dispositions.
    Ward,
    /// +1, and ignores enemy guard flags at extreme dispositions.
    Focus,
    /// Free repeat of the action that drew it.
    Echo,
}

/// Suit of a fate card.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum FateSuit {
    Nav,
    Prav,
    Yav,
    #[default]
    Neutral,
}

impl FateSuit {
    /// True if the suit resonates with the zone.
    pub const fn matches(self, zone: ResonanceZone) -> bool {
        matches!(
            (self, zone),
            (FateSuit::Nav, ResonanceZone::Nav)
                | (FateSuit::Prav, ResonanceZone::Prav)
                | (FateSuit::Yav, ResonanceZone::Yav)
        )
    }
}

/// A single card of the fate deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FateCard {
    pub suit: FateSuit,
    pub base_modifier: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub keyword: Option<FateKeyword>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub intensity: u8,
}

impl FateCard {
    /// Drawn when the fate deck holds no cards at all.
    pub const BLANK: Self = Self {
        suit: FateSuit::Neutral,
        base_modifier: 0,
        keyword: None,
        intensity: 0,
    };

    pub const fn new(suit: FateSuit, base_modifier: i32) -> Self {
        Self {
            suit,
            base_modifier,
            keyword: None,
            intensity: 0,
        }
    }

    pub const fn with_keyword(mut self, keyword: FateKeyword) -> Self {
        self.keyword = Some(keyword);
        self
    }

    pub const fn with_intensity(mut self, intensity: u8) -> Self {
        self.intensity = intensity;
        self
    }
}

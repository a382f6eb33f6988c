use bitflags::bitflags;

use super::{FateCard, FateKeyword};
use crate::config::CombatConfig;
use crate::resonance::ResonanceZone;

bitflags! {
    /// Non-numeric consequences of a fate keyword for the current action.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct FateEffects: u8 {
        /// Base power ×1.5 (integer, rounded down).
        const SURGE           = 1 << 0;
        /// Extra switch penalty if the action kind changes.
        const SHADOW_PENALTY  = 1 << 1;
        /// A telegraphed Defend intent is stripped this turn.
        const STRIP_DEFEND    = 1 << 2;
        /// Backlash side effects of this action are cancelled.
        const CANCEL_BACKLASH = 1 << 3;
        /// The enemy's Defend flag does not reduce Strike.
        const IGNORE_DEFEND   = 1 << 4;
        /// The enemy's Provoke flag does not reduce Influence.
        const IGNORE_PROVOKE  = 1 << 5;
        /// The action may repeat once for free.
        const ECHO            = 1 << 6;
    }
}

/// Which side of the scale the conflict currently leans to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DispositionBand {
    /// Disposition below `-threshold`.
    Hostile,
    Contested,
    /// Disposition above `+threshold`.
    Yielding,
}

impl DispositionBand {
    pub fn classify(disposition: i32, threshold: i32) -> Self {
        if disposition < -threshold {
            DispositionBand::Hostile
        } else if disposition > threshold {
            DispositionBand::Yielding
        } else {
            DispositionBand::Contested
        }
    }
}

/// Numeric and flag effect of a keyword in a given band.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeywordEffect {
    pub modifier: i32,
    pub effects: FateEffects,
}

/// Evaluates a keyword against the disposition band.
///
/// | Keyword | Base | Hostile (< -30) | Yielding (> +30) |
/// |---|---|---|---|
/// | Surge | ×1.5 power | same | same |
/// | Shadow | -1 | switch penalty +2 | strips Defend intent |
/// | Ward | 0 | cancels backlash | cancels backlash |
/// | Focus | +1 | ignores Defend | ignores Provoke |
/// | Echo | 0 | free repeat | free repeat |
pub fn keyword_context_effect(
    keyword: Option<FateKeyword>,
    band: DispositionBand,
) -> KeywordEffect {
    use DispositionBand::*;

    let Some(keyword) = keyword else {
        return KeywordEffect::default();
    };

    match (keyword, band) {
        (FateKeyword::Surge, _) => KeywordEffect {
            modifier: 0,
            effects: FateEffects::SURGE,
        },
        (FateKeyword::Shadow, Hostile) => KeywordEffect {
            modifier: -1,
            effects: FateEffects::SHADOW_PENALTY,
        },
        (FateKeyword::Shadow, Yielding) => KeywordEffect {
            modifier: -1,
            effects: FateEffects::STRIP_DEFEND,
        },
        (FateKeyword::Shadow, Contested) => KeywordEffect {
            modifier: -1,
            effects: FateEffects::empty(),
        },
        (FateKeyword::Ward, Hostile | Yielding) => KeywordEffect {
            modifier: 0,
            effects: FateEffects::CANCEL_BACKLASH,
        },
        (FateKeyword::Ward, Contested) => KeywordEffect::default(),
        (FateKeyword::Focus, Hostile) => KeywordEffect {
            modifier: 1,
            effects: FateEffects::IGNORE_DEFEND,
        },
        (FateKeyword::Focus, Yielding) => KeywordEffect {
            modifier: 1,
            effects: FateEffects::IGNORE_PROVOKE,
        },
        (FateKeyword::Focus, Contested) => KeywordEffect {
            modifier: 1,
            effects: FateEffects::empty(),
        },
        (FateKeyword::Echo, Hostile | Yielding) => KeywordEffect {
            modifier: 0,
            effects: FateEffects::ECHO,
        },
        (FateKeyword::Echo, Contested) => KeywordEffect::default(),
    }
}

/// A drawn fate card evaluated in context.
///
/// Used both by the power calculation and, unchanged, by the event log.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FateResolution {
    pub card: FateCard,
    /// `base_modifier` plus the keyword's numeric effect.
    pub value: i32,
    pub is_critical: bool,
    pub keyword: Option<FateKeyword>,
    pub suit_match: bool,
    pub band: DispositionBand,
    pub effects: FateEffects,
}

impl FateResolution {
    /// Resolution with no modifier and no keyword.
    pub fn neutral() -> Self {
        Self {
            card: FateCard::BLANK,
            value: 0,
            is_critical: false,
            keyword: None,
            suit_match: false,
            band: DispositionBand::Contested,
            effects: FateEffects::empty(),
        }
    }

    pub fn has(&self, effect: FateEffects) -> bool {
        self.effects.contains(effect)
    }
}

/// Evaluates a drawn card against the pre-action disposition and zone.
pub fn resolve_fate(
    card: FateCard,
    disposition: i32,
    zone: ResonanceZone,
    config: &CombatConfig,
) -> FateResolution {
    let band = DispositionBand::classify(disposition, config.keyword_disposition_threshold);
    let keyword_effect = keyword_context_effect(card.keyword, band);

    FateResolution {
        card,
        value: card.base_modifier + keyword_effect.modifier,
        is_critical: card.intensity >= config.critical_intensity,
        keyword: card.keyword,
        suit_match: card.suit.matches(zone),
        band,
        effects: keyword_effect.effects,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fate::FateSuit;

    fn resolve(keyword: FateKeyword, disposition: i32) -> FateResolution {
        let card = FateCard::new(FateSuit::Neutral, 0).with_keyword(keyword);
        resolve_fate(card, disposition, ResonanceZone::Yav, &CombatConfig::default())
    }

    #[test]
    fn band_boundaries_are_strict() {
        assert_eq!(DispositionBand::classify(-30, 30), DispositionBand::Contested);
        assert_eq!(DispositionBand::classify(-31, 30), DispositionBand::Hostile);
        assert_eq!(DispositionBand::classify(30, 30), DispositionBand::Contested);
        assert_eq!(DispositionBand::classify(31, 30), DispositionBand::Yielding);
    }

    #[test]
    fn surge_everywhere() {
        for disposition in [-80, 0, 80] {
            assert!(resolve(FateKeyword::Surge, disposition).has(FateEffects::SURGE));
        }
    }

    #[test]
    fn shadow_depends_on_band() {
        let hostile = resolve(FateKeyword::Shadow, -35);
        assert_eq!(hostile.value, -1);
        assert!(hostile.has(FateEffects::SHADOW_PENALTY));

        let yielding = resolve(FateKeyword::Shadow, 35);
        assert!(yielding.has(FateEffects::STRIP_DEFEND));
        assert!(!yielding.has(FateEffects::SHADOW_PENALTY));

        assert!(resolve(FateKeyword::Shadow, 0).effects.is_empty());
    }

    #[test]
    fn ward_only_at_extremes() {
        assert!(resolve(FateKeyword::Ward, -50).has(FateEffects::CANCEL_BACKLASH));
        assert!(resolve(FateKeyword::Ward, 50).has(FateEffects::CANCEL_BACKLASH));
        assert!(!resolve(FateKeyword::Ward, 10).has(FateEffects::CANCEL_BACKLASH));
    }

    #[test]
    fn echo_only_at_extremes() {
        assert!(resolve(FateKeyword::Echo, -31).has(FateEffects::ECHO));
        assert!(resolve(FateKeyword::Echo, 31).has(FateEffects::ECHO));
        for disposition in [-30, 0, 30] {
            let contested = resolve(FateKeyword::Echo, disposition);
            assert!(contested.effects.is_empty());
            assert_eq!(contested.value, 0);
        }
    }

    #[test]
    fn focus_ignores_the_matching_flag() {
        let hostile = resolve(FateKeyword::Focus, -40);
        assert_eq!(hostile.value, 1);
        assert!(hostile.has(FateEffects::IGNORE_DEFEND));
        assert!(!hostile.has(FateEffects::IGNORE_PROVOKE));

        let yielding = resolve(FateKeyword::Focus, 40);
        assert!(yielding.has(FateEffects::IGNORE_PROVOKE));
    }

    #[test]
    fn critical_and_suit_match_are_reported() {
        let card = FateCard::new(FateSuit::Nav, 2).with_intensity(3);
        let resolution = resolve_fate(card, 0, ResonanceZone::Nav, &CombatConfig::default());
        assert!(resolution.is_critical);
        assert!(resolution.suit_match);
        assert_eq!(resolution.value, 2);
        assert_eq!(resolution.keyword, None);
    }
}

//! Anti-meta vulnerability lookup.
//!
//! A three-dimensional table keyed by (tag, zone, action kind) scales the
//! impact of an action before it moves disposition. Unlisted combinations
//! are 1.0; an enemy with several tags multiplies their entries together.
use std::collections::BTreeMap;

use crate::action::ActionKind;
use crate::resonance::ResonanceZone;

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum VulnerabilityTag {
    Beast,
    Spirit,
    Noble,
    Undead,
    Fey,
    Construct,
}

impl VulnerabilityTag {
    pub const ALL: [VulnerabilityTag; 6] = [
        VulnerabilityTag::Beast,
        VulnerabilityTag::Spirit,
        VulnerabilityTag::Noble,
        VulnerabilityTag::Undead,
        VulnerabilityTag::Fey,
        VulnerabilityTag::Construct,
    ];
}

/// Read access to multiplier data.
pub trait VulnerabilityOracle {
    /// Explicit entry for the combination, if any.
    fn entry(&self, tag: VulnerabilityTag, zone: ResonanceZone, kind: ActionKind) -> Option<f32>;
}

/// One explicit row of the table.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VulnerabilityEntry {
    pub tag: VulnerabilityTag,
    pub zone: ResonanceZone,
    pub kind: ActionKind,
    pub multiplier: f32,
}

type Key = (VulnerabilityTag, ResonanceZone, ActionKind);

#[derive(Clone, Debug, Default, PartialEq)]
pub struct VulnerabilityTable {
    entries: BTreeMap<Key, f32>,
}

impl VulnerabilityTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from explicit rows. Later rows override earlier ones.
    pub fn from_entries(entries: impl IntoIterator<Item = VulnerabilityEntry>) -> Self {
        let mut table = Self::new();
        for entry in entries {
            table.insert(entry);
        }
        table
    }

    /// Inserts a row; negative or NaN multipliers are stored as 0.
    pub fn insert(&mut self, entry: VulnerabilityEntry) {
        self.entries.insert(
            (entry.tag, entry.zone, entry.kind),
            entry.multiplier.max(0.0),
        );
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rows in (tag, zone, kind) order.
    pub fn entries(&self) -> impl Iterator<Item = VulnerabilityEntry> + '_ {
        self.entries
            .iter()
            .map(|(&(tag, zone, kind), &multiplier)| VulnerabilityEntry {
                tag,
                zone,
                kind,
                multiplier,
            })
    }

    /// The built-in balance table.
    ///
    /// Every (tag, zone, kind) combination is visited; combinations that
    /// resolve to 1.0 are not stored.
    pub fn standard() -> Self {
        let mut table = Self::new();
        for tag in VulnerabilityTag::ALL {
            for zone in ResonanceZone::ALL {
                for kind in ActionKind::ALL {
                    let multiplier = standard_multiplier(tag, zone, kind);
                    if multiplier != 1.0 {
                        table.insert(VulnerabilityEntry {
                            tag,
                            zone,
                            kind,
                            multiplier,
                        });
                    }
                }
            }
        }
        table
    }
}

impl VulnerabilityOracle for VulnerabilityTable {
    fn entry(&self, tag: VulnerabilityTag, zone: ResonanceZone, kind: ActionKind) -> Option<f32> {
        self.entries.get(&(tag, zone, kind)).copied()
    }
}

fn standard_multiplier(tag: VulnerabilityTag, zone: ResonanceZone, kind: ActionKind) -> f32 {
    use ActionKind::*;
    use ResonanceZone::*;
    use VulnerabilityTag::*;

    match (tag, zone, kind) {
        (_, _, Sacrifice) => 1.0,

        (Beast, Nav, Strike) => 0.75,
        (Beast, Prav | Yav, Influence) => 1.25,
        (Beast, _, _) => 1.0,

        (Spirit, Prav, Strike) => 1.0,
        (Spirit, _, Strike) => 0.5,
        (Spirit, Nav, Influence) => 1.5,
        (Spirit, _, Influence) => 1.0,

        (Noble, Prav, Influence) => 1.5,
        (Noble, Prav, Strike) => 0.75,
        (Noble, Nav, Strike) => 1.25,
        (Noble, _, _) => 1.0,

        (Undead, _, Influence) => 0.5,
        (Undead, Prav, Strike) => 1.5,
        (Undead, _, Strike) => 1.0,

        (Fey, Yav, Influence) => 1.5,
        (Fey, Nav, Strike) => 1.25,
        (Fey, Prav, Strike) => 0.75,
        (Fey, _, _) => 1.0,

        (Construct, _, Influence) => 0.25,
        (Construct, Nav, Strike) => 1.25,
        (Construct, _, Strike) => 1.0,
    }
}

/// Combined multiplier for an enemy's tags. Total: 1.0 when nothing matches.
pub fn vulnerability_multiplier(
    oracle: &(impl VulnerabilityOracle + ?Sized),
    tags: &[VulnerabilityTag],
    zone: ResonanceZone,
    kind: ActionKind,
) -> f32 {
    tags.iter()
        .map(|&tag| oracle.entry(tag, zone, kind).unwrap_or(1.0))
        .product()
}

/// Applies a multiplier to an impact, rounding down and capping at `cap`.
pub fn scale_impact(impact: u32, multiplier: f32, cap: u32) -> u32 {
    let scaled = (impact as f64 * multiplier.max(0.0) as f64).floor();
    if scaled >= cap as f64 {
        cap
    } else {
        scaled as u32
    }
}

use super::CardDefinition;
use crate::rng::SessionRng;

/// The hero's deck for one combat.
///
/// Cards move draw pile → hand → discard (or exhaust). Exhausted cards never
/// come back during this combat.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeroDeck {
    draw_pile: Vec<CardDefinition>,
    hand: Vec<CardDefinition>,
    discard_pile: Vec<CardDefinition>,
    exhausted: Vec<CardDefinition>,
}

/// What happened while refilling the hand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DrawReport {
    pub drawn: u32,
    pub reshuffled: bool,
}

impl HeroDeck {
    /// Builds a deck from the loadout, shuffled with the session generator.
    pub fn shuffled(loadout: &[CardDefinition], rng: &mut SessionRng) -> Self {
        let mut draw_pile = loadout.to_vec();
        rng.shuffle(&mut draw_pile);
        Self {
            draw_pile,
            ..Self::default()
        }
    }

    pub fn hand(&self) -> &[CardDefinition] {
        &self.hand
    }

    pub fn draw_pile(&self) -> &[CardDefinition] {
        &self.draw_pile
    }

    pub fn discard_pile(&self) -> &[CardDefinition] {
        &self.discard_pile
    }

    pub fn exhausted(&self) -> &[CardDefinition] {
        &self.exhausted
    }

    /// Draws until the hand holds `hand_size` cards or nothing is left.
    pub fn draw_to(&mut self, hand_size: usize, rng: &mut SessionRng) -> DrawReport {
        let mut report = DrawReport::default();
        while self.hand.len() < hand_size {
            if self.draw_pile.is_empty() {
                if self.discard_pile.is_empty() {
                    break;
                }
                self.draw_pile.append(&mut self.discard_pile);
                rng.shuffle(&mut self.draw_pile);
                report.reshuffled = true;
            }
            match self.draw_pile.pop() {
                Some(card) => {
                    self.hand.push(card);
                    report.drawn += 1;
                }
                None => break,
            }
        }
        report
    }

    /// Removes the card at `index` from the hand.
    pub fn take_from_hand(&mut self, index: usize) -> Option<CardDefinition> {
        (index < self.hand.len()).then(|| self.hand.remove(index))
    }

    /// Puts a played card where its definition says it goes.
    pub fn settle(&mut self, card: CardDefinition) {
        if card.exhaust {
            self.exhausted.push(card);
        } else {
            self.discard_pile.push(card);
        }
    }

    pub fn exhaust(&mut self, card: CardDefinition) {
        self.exhausted.push(card);
    }

    /// Exhausts the right-most card still in hand.
    pub fn exhaust_rightmost(&mut self) -> Option<CardDefinition> {
        let card = self.hand.pop()?;
        self.exhausted.push(card.clone());
        Some(card)
    }

    /// Total number of cards across all piles.
    pub fn total_cards(&self) -> usize {
        self.draw_pile.len() + self.hand.len() + self.discard_pile.len() + self.exhausted.len()
    }
}

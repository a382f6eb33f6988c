use super::FateCard;
use crate::rng::SessionRng;

/// The campaign-wide fate deck.
///
/// A session borrows the deck for its lifetime and hands it back when the
/// fight ends, so draws and reshuffles persist across encounters. The top of
/// the draw pile is the end of the vector.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FateDeck {
    draw_pile: Vec<FateCard>,
    discard_pile: Vec<FateCard>,
}

/// Result of a single draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FateDraw {
    pub card: FateCard,
    /// The discard pile was shuffled back in before this draw.
    pub reshuffled: bool,
}

impl FateDeck {
    /// Creates a deck whose draw pile is `cards`, last card on top.
    pub fn new(cards: Vec<FateCard>) -> Self {
        Self {
            draw_pile: cards,
            discard_pile: Vec::new(),
        }
    }

    /// Restores a deck from saved piles.
    pub fn from_piles(draw_pile: Vec<FateCard>, discard_pile: Vec<FateCard>) -> Self {
        Self {
            draw_pile,
            discard_pile,
        }
    }

    pub fn draw_pile(&self) -> &[FateCard] {
        &self.draw_pile
    }

    pub fn discard_pile(&self) -> &[FateCard] {
        &self.discard_pile
    }

    /// Total cards owned by the deck.
    pub fn len(&self) -> usize {
        self.draw_pile.len() + self.discard_pile.len()
    }

    pub fn is_empty(&self) -> bool {
        self.draw_pile.is_empty() && self.discard_pile.is_empty()
    }

    /// Draws the top card, reshuffling the discard pile first if needed.
    ///
    /// A deck with no cards at all yields [`FateCard::BLANK`] and stays empty.
    pub fn draw(&mut self, rng: &mut SessionRng) -> FateDraw {
        let mut reshuffled = false;
        if self.draw_pile.is_empty() && !self.discard_pile.is_empty() {
            self.draw_pile.append(&mut self.discard_pile);
            rng.shuffle(&mut self.draw_pile);
            reshuffled = true;
        }

        match self.draw_pile.pop() {
            Some(card) => {
                self.discard_pile.push(card);
                FateDraw { card, reshuffled }
            }
            None => FateDraw {
                card: FateCard::BLANK,
                reshuffled,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fate::{FateKeyword, FateSuit};

    fn card(modifier: i32) -> FateCard {
        FateCard::new(FateSuit::Neutral, modifier)
    }

    #[test]
    fn draws_from_top() {
        let mut rng = SessionRng::from_seed(1);
        let mut deck = FateDeck::new(vec![card(1), card(2), card(3)]);

        let draw = deck.draw(&mut rng);
        assert_eq!(draw.card.base_modifier, 3);
        assert!(!draw.reshuffled);
        assert_eq!(deck.draw_pile().len(), 2);
        assert_eq!(deck.discard_pile().len(), 1);
    }

    #[test]
    fn reshuffles_discard_on_exhaustion() {
        let mut rng = SessionRng::from_seed(5);
        let mut deck = FateDeck::new(vec![card(1), card(2)]);
        deck.draw(&mut rng);
        deck.draw(&mut rng);
        assert!(deck.draw_pile().is_empty());

        let draw = deck.draw(&mut rng);
        assert!(draw.reshuffled);
        assert_eq!(deck.len(), 2);
        assert_eq!(deck.draw_pile().len(), 1);
    }

    #[test]
    fn empty_deck_yields_blank() {
        let mut rng = SessionRng::from_seed(5);
        let mut deck = FateDeck::default();
        let draw = deck.draw(&mut rng);
        assert_eq!(draw.card, FateCard::BLANK);
        assert!(deck.is_empty());
    }

    #[test]
    fn keywords_survive_the_discard() {
        let mut rng = SessionRng::from_seed(2);
        let echo = card(0).with_keyword(FateKeyword::Echo);
        let mut deck = FateDeck::new(vec![echo]);
        deck.draw(&mut rng);
        assert_eq!(deck.discard_pile(), &[echo]);
    }
}

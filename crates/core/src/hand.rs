use crate::{is_natural, Card, HandValue};
use serde::{Deserialize, Serialize};

/// Cards dealt to one wager, or to the dealer (whose wager is zero).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hand {
    pub cards: Vec<Card>,
    pub bet: i64,
    pub closed: bool,
    #[serde(default)]
    pub from_split: bool,
}

impl Hand {
    pub fn new(bet: i64) -> Self {
        Self {
            cards: Vec::new(),
            bet,
            closed: false,
            from_split: false,
        }
    }

    pub fn dealer() -> Self {
        Self::new(0)
    }

    pub fn with_cards(cards: Vec<Card>, bet: i64) -> Self {
        Self {
            cards,
            bet,
            closed: false,
            from_split: false,
        }
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn value(&self) -> HandValue {
        HandValue::of(&self.cards)
    }

    pub fn score(&self) -> u8 {
        self.value().total
    }

    pub fn is_bust(&self) -> bool {
        self.value().is_bust()
    }

    /// Two-card 21 from the initial deal. Split hands never count.
    pub fn is_natural(&self) -> bool {
        !self.from_split && is_natural(&self.cards)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn close(&mut self) {
        self.closed = true;
    }

    /// Moves the most recently dealt card into a new active hand carrying `bet`.
    /// Both hands are marked as split hands. Returns `None` when there is
    /// nothing to split off.
    pub fn split_off_last(&mut self, bet: i64) -> Option<Hand> {
        if self.cards.len() < 2 {
            return None;
        }
        let card = self.cards.pop()?;
        self.from_split = true;
        let mut sibling = Hand::with_cards(vec![card], bet);
        sibling.from_split = true;
        Some(sibling)
    }

    pub fn is_pair(&self) -> bool {
        self.cards.len() == 2 && self.cards[0].rank == self.cards[1].rank
    }
}

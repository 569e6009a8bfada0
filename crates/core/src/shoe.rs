use crate::{Card, Rank, RngState, Suit};
use thiserror::Error;

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ShoeError {
    #[error("the shoe is out of cards")]
    OutOfCards,
}

/// Cards left to deal. The tail of `cards` is the top of the shoe.
#[derive(Debug, Default, Clone)]
pub struct Shoe {
    cards: Vec<Card>,
}

impl Shoe {
    pub fn standard52() -> Vec<Card> {
        let mut deck = Vec::with_capacity(52);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                deck.push(Card::new(suit, rank));
            }
        }
        deck
    }

    /// Concatenates `decks` standard decks and shuffles them.
    pub fn populate(decks: u32, rng: &mut RngState) -> Self {
        let mut cards = Vec::with_capacity(52 * decks as usize);
        for _ in 0..decks {
            cards.extend(Self::standard52());
        }
        rng.shuffle(&mut cards);
        log::debug!(
            "populated shoe with {} cards from {} deck(s), seed {}",
            cards.len(),
            decks,
            rng.seed()
        );
        Self { cards }
    }

    /// Builds an unshuffled shoe. `draw_order[0]` is the first card dealt.
    pub fn from_cards(draw_order: impl IntoIterator<Item = Card>) -> Self {
        let mut cards: Vec<Card> = draw_order.into_iter().collect();
        cards.reverse();
        Self { cards }
    }

    pub fn draw(&mut self) -> Result<Card, ShoeError> {
        self.cards.pop().ok_or(ShoeError::OutOfCards)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[cfg(test)]
    fn count_rank(&self, rank: Rank) -> usize {
        self.cards.iter().filter(|card| card.rank == rank).count()
    }

    #[cfg(test)]
    fn peek_order(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter().rev()
    }
}

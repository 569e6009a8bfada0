use crate::Card;
use serde::{Deserialize, Serialize};

pub const BLACKJACK: u8 = 21;

/// Best total of a set of cards together with whether an Ace still counts 11.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandValue {
    pub total: u8,
    pub soft: bool,
}

impl HandValue {
    pub fn of(cards: &[Card]) -> Self {
        let mut total: u8 = 0;
        let mut soft_aces = 0u8;
        for card in cards {
            total = total.saturating_add(card.value());
            if card.is_ace() {
                soft_aces += 1;
            }
        }
        // Demoting any Ace subtracts the same 10, so order only matters for display.
        while total > BLACKJACK && soft_aces > 0 {
            total -= 10;
            soft_aces -= 1;
        }
        Self {
            total,
            soft: soft_aces > 0,
        }
    }

    pub fn is_bust(&self) -> bool {
        self.total > BLACKJACK
    }
}

/// Highest total not above 21, or the minimal total when every Ace
/// assignment busts. Pure: scoring the same cards twice gives the same result.
pub fn score(cards: &[Card]) -> u8 {
    HandValue::of(cards).total
}

pub fn is_bust(cards: &[Card]) -> bool {
    score(cards) > BLACKJACK
}

/// Two-card 21.
pub fn is_natural(cards: &[Card]) -> bool {
    cards.len() == 2 && score(cards) == BLACKJACK
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_cards;

    macro_rules! score_case {
        ($name:ident, $codes:expr, $expected:expr) => {
            #[test]
            fn $name() {
                let cards = parse_cards($codes).expect("cards");
                assert_eq!(score(&cards), $expected);
            }
        };
    }

    score_case!(simple_sum, "h2 s3", 5);
    score_case!(face_cards, "hK sQ", 20);
    score_case!(ace_king_is_21, "sA hK", 21);
    score_case!(soft_seventeen, "hA s6", 17);
    score_case!(ace_demoted_to_avoid_bust, "hA s6 c9", 16);
    score_case!(one_of_two_aces_demoted, "hA sA c9", 21);
    score_case!(four_aces, "hA sA cA dA", 14);
    score_case!(bust_without_aces, "hK sQ c5", 25);
    score_case!(bust_after_every_demotion, "hA sK cQ d5", 26);
    score_case!(empty_hand, "", 0);

    #[test]
    fn scoring_is_idempotent() {
        let cards = parse_cards("hA sA c9 d5").expect("cards");
        let first = score(&cards);
        assert_eq!(first, 16);
        assert_eq!(score(&cards), first);
        assert_eq!(score(&cards), first);
    }

    #[test]
    fn soft_flag_follows_best_total() {
        let soft = |codes: &str| HandValue::of(&parse_cards(codes).expect("cards")).soft;
        assert!(soft("hA s6"));
        assert!(!soft("hA s6 c9"));
        assert!(soft("hA sA"));
        assert!(!soft("hK s7"));
    }

    #[test]
    fn best_total_never_busts_when_avoidable() {
        // Every hand of up to three cards from one suit: if some Ace
        // assignment stays at or under 21, the score must be the highest such.
        let deck: Vec<Card> = crate::Shoe::standard52().into_iter().take(13).collect();
        for a in &deck {
            for b in &deck {
                for c in &deck {
                    let cards = [*a, *b, *c];
                    let aces = cards.iter().filter(|card| card.is_ace()).count() as u8;
                    let hard: u8 = cards.iter().map(|card| if card.is_ace() { 1 } else { card.value() }).sum();
                    let best = (0..=aces)
                        .map(|soft| hard + soft * 10)
                        .filter(|total| *total <= BLACKJACK)
                        .max()
                        .unwrap_or(hard);
                    assert_eq!(score(&cards), best, "{a} {b} {c}");
                }
            }
        }
    }

    #[test]
    fn natural_requires_two_cards() {
        assert!(is_natural(&parse_cards("sA hK").expect("cards")));
        assert!(!is_natural(&parse_cards("s7 h7 c7").expect("cards")));
        assert!(!is_natural(&parse_cards("hK sQ").expect("cards")));
        assert!(is_bust(&parse_cards("hK sQ c2").expect("cards")));
    }
}

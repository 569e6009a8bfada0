use crate::Card;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum HandOutcome {
    Win,
    Natural,
    Loss,
    Bust,
}

impl HandOutcome {
    pub fn is_win(self) -> bool {
        matches!(self, HandOutcome::Win | HandOutcome::Natural)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    RoundStarted {
        bet: i64,
        balance: i64,
        shoe_cards: usize,
    },
    CardDrawn {
        card: Card,
        score: u8,
    },
    NaturalDealt { bet: i64 },
    HandBusted { score: u8, bet: i64 },
    HandClosed { score: u8 },
    HandDoubled {
        card: Card,
        bet: i64,
        balance: i64,
    },
    HandSplit {
        moved: Card,
        bet: i64,
        balance: i64,
        hands: usize,
    },
    SaveRequested,
    InvalidDecision { input: String },
    IllegalDecision { reason: String },
    DealerRevealed { hole: Card, score: u8 },
    DealerDrew { card: Card, score: u8 },
    HandSettled {
        outcome: HandOutcome,
        score: u8,
        dealer_score: u8,
        bet: i64,
        credit: i64,
    },
    RoundAbandoned,
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }
}

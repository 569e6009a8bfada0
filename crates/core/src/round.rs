use crate::{
    Bankroll, Event, EventBus, Hand, HandOutcome, HandQueue, RulesError, Shoe, ShoeError,
    TableRules,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

mod dealer;
mod driver;
mod turn;

pub use driver::{begin_round, play_round, RoundOutcome, Seat};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RoundError {
    #[error("out of cards, the round ends without settlement")]
    OutOfCards,
    #[error("no hand is waiting for a decision")]
    NoCurrentHand,
    #[error("player hands are still open")]
    PlayerTurnPending,
    #[error("the round is already over")]
    RoundOver,
    #[error("invalid table rules: {0}")]
    Rules(#[from] RulesError),
}

impl From<ShoeError> for RoundError {
    fn from(value: ShoeError) -> Self {
        match value {
            ShoeError::OutOfCards => Self::OutOfCards,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    PlayerTurn,
    DealerTurn,
    Settled,
    Abandoned,
    OutOfCards,
}

/// What the caller should do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// A player hand is waiting; call `Round::apply`.
    Decide,
    /// Every hand is closed or gone; call `Round::finish`.
    Dealer,
    Over,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Abandoned,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettledHand {
    pub hand: Hand,
    pub outcome: HandOutcome,
    pub credit: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settlement {
    pub dealer: Hand,
    pub hands: Vec<SettledHand>,
}

impl Settlement {
    pub fn dealer_score(&self) -> u8 {
        self.dealer.score()
    }

    pub fn total_credit(&self) -> i64 {
        self.hands.iter().map(|settled| settled.credit).sum()
    }

    pub fn wins(&self) -> usize {
        self.hands
            .iter()
            .filter(|settled| settled.outcome.is_win())
            .count()
    }
}

/// Snapshot handed to the seat whenever input is needed or an outcome is shown.
#[derive(Debug, Clone, Copy)]
pub struct TableView<'a> {
    pub dealer: &'a Hand,
    pub hand: Option<&'a Hand>,
    pub reveal_dealer: bool,
    pub balance: i64,
    pub queued: usize,
    pub phase: RoundPhase,
}

/// One round of play. Owns its shoe, the dealer's hand and the queue of
/// player hands; nothing outside the round touches them.
#[derive(Debug)]
pub struct Round {
    pub rules: TableRules,
    shoe: Shoe,
    dealer: Hand,
    queue: HandQueue,
    current: Option<Hand>,
    busted: Vec<Hand>,
    phase: RoundPhase,
    dealer_revealed: bool,
}

impl Round {
    /// Deals two cards to the dealer, then two to the player, and only then
    /// debits the base bet.
    pub fn deal(
        rules: TableRules,
        mut shoe: Shoe,
        bankroll: &mut Bankroll,
        events: &mut EventBus,
    ) -> Result<Self, RoundError> {
        rules.validate()?;
        let mut dealer = Hand::dealer();
        dealer.push(shoe.draw()?);
        dealer.push(shoe.draw()?);
        let first = shoe.draw()?;
        let second = shoe.draw()?;

        bankroll.debit(rules.bet);
        let mut hand = Hand::with_cards(vec![first, second], rules.bet);
        log::info!(
            "round started: bet {}, balance {}, {} cards left",
            rules.bet,
            bankroll.balance(),
            shoe.len()
        );
        events.push(Event::RoundStarted {
            bet: rules.bet,
            balance: bankroll.balance(),
            shoe_cards: shoe.len(),
        });
        if hand.is_natural() {
            hand.close();
            events.push(Event::NaturalDealt { bet: hand.bet });
        }

        let mut queue = HandQueue::new();
        queue.push_back(hand);
        Ok(Self {
            rules,
            shoe,
            dealer,
            queue,
            current: None,
            busted: Vec::new(),
            phase: RoundPhase::PlayerTurn,
            dealer_revealed: false,
        })
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn dealer(&self) -> &Hand {
        &self.dealer
    }

    pub fn current(&self) -> Option<&Hand> {
        self.current.as_ref()
    }

    pub fn queue(&self) -> &HandQueue {
        &self.queue
    }

    pub fn view(&self, balance: i64) -> TableView<'_> {
        TableView {
            dealer: &self.dealer,
            hand: self.current.as_ref().or_else(|| self.queue.iter().next()),
            reveal_dealer: self.dealer_revealed,
            balance,
            queued: self.queue.len(),
            phase: self.phase,
        }
    }

    fn out_of_cards(&mut self) -> RoundError {
        log::warn!("shoe exhausted, abandoning round without settlement");
        self.phase = RoundPhase::OutOfCards;
        self.current = None;
        RoundError::OutOfCards
    }
}

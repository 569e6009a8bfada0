use super::*;
use crate::{Card, Decision, BLACKJACK};

impl Round {
    /// Pops hands until one needs a decision. Closed hands go to the back
    /// while active hands remain; once nothing is active the round moves to
    /// the dealer.
    pub fn next_turn(&mut self) -> Turn {
        match self.phase {
            RoundPhase::PlayerTurn => {}
            RoundPhase::DealerTurn => return Turn::Dealer,
            _ => return Turn::Over,
        }
        if self.current.is_some() {
            return Turn::Decide;
        }
        loop {
            let Some(hand) = self.queue.pop_front() else {
                self.phase = RoundPhase::DealerTurn;
                return Turn::Dealer;
            };
            if !hand.closed {
                self.current = Some(hand);
                return Turn::Decide;
            }
            if self.queue.all_closed() {
                self.queue.push_front(hand);
                self.phase = RoundPhase::DealerTurn;
                return Turn::Dealer;
            }
            self.queue.push_back(hand);
        }
    }

    /// Applies `decision` to the hand popped by `next_turn`.
    pub fn apply(
        &mut self,
        decision: Decision,
        bankroll: &mut Bankroll,
        events: &mut EventBus,
    ) -> Result<Step, RoundError> {
        if self.phase != RoundPhase::PlayerTurn {
            return Err(RoundError::RoundOver);
        }
        let mut hand = self.current.take().ok_or(RoundError::NoCurrentHand)?;
        log::debug!("decision {decision} on hand scoring {}", hand.score());
        match decision {
            Decision::Hit => {
                let card = self.draw()?;
                hand.push(card);
                events.push(Event::CardDrawn {
                    card,
                    score: hand.score(),
                });
                self.bust_check(hand, events);
            }
            Decision::Stand => {
                hand.close();
                events.push(Event::HandClosed {
                    score: hand.score(),
                });
                self.queue.push_front(hand);
            }
            Decision::Double => {
                if let Err(reason) = self.double_allowed(&hand) {
                    self.reject(hand, reason, events);
                    return Ok(Step::Continue);
                }
                let card = self.draw()?;
                bankroll.debit(hand.bet);
                hand.bet *= 2;
                hand.push(card);
                hand.close();
                events.push(Event::HandDoubled {
                    card,
                    bet: hand.bet,
                    balance: bankroll.balance(),
                });
                self.bust_check(hand, events);
            }
            Decision::Split => {
                if let Err(reason) = self.split_allowed(&hand) {
                    self.reject(hand, reason, events);
                    return Ok(Step::Continue);
                }
                let bet = hand.bet;
                let Some(sibling) = hand.split_off_last(bet) else {
                    self.reject(hand, "only a two-card hand can be split", events);
                    return Ok(Step::Continue);
                };
                bankroll.debit(bet);
                let moved = sibling.cards[0];
                self.queue.push_back(sibling);
                self.queue.push_back(hand);
                events.push(Event::HandSplit {
                    moved,
                    bet,
                    balance: bankroll.balance(),
                    hands: self.queue.len(),
                });
            }
            Decision::Save => {
                self.queue.push_back(hand);
                events.push(Event::SaveRequested);
            }
            Decision::Invalid(input) => {
                self.queue.push_back(hand);
                events.push(Event::InvalidDecision { input });
            }
            Decision::Back => {
                log::info!("round abandoned with {} hand(s) unsettled", self.queue.len() + 1);
                self.phase = RoundPhase::Abandoned;
                events.push(Event::RoundAbandoned);
                return Ok(Step::Abandoned);
            }
        }
        Ok(Step::Continue)
    }

    pub(super) fn draw(&mut self) -> Result<Card, RoundError> {
        match self.shoe.draw() {
            Ok(card) => {
                log::debug!("drew {card}, {} left", self.shoe.len());
                Ok(card)
            }
            Err(_) => Err(self.out_of_cards()),
        }
    }

    /// Busted hands leave play as losses. Hands at 21 close on their own.
    fn bust_check(&mut self, mut hand: Hand, events: &mut EventBus) {
        let score = hand.score();
        if score > BLACKJACK {
            events.push(Event::HandBusted {
                score,
                bet: hand.bet,
            });
            self.busted.push(hand);
            return;
        }
        if score == BLACKJACK && !hand.closed {
            hand.close();
            events.push(Event::HandClosed { score });
        }
        self.queue.push_front(hand);
    }

    fn double_allowed(&self, hand: &Hand) -> Result<(), &'static str> {
        if !self.rules.allow_double {
            return Err("doubling is disabled at this table");
        }
        if hand.len() != 2 {
            return Err("only a two-card hand can be doubled");
        }
        Ok(())
    }

    fn split_allowed(&self, hand: &Hand) -> Result<(), &'static str> {
        if !self.rules.allow_split {
            return Err("splitting is disabled at this table");
        }
        if hand.len() != 2 {
            return Err("only a two-card hand can be split");
        }
        if self.rules.split_requires_pair && !hand.is_pair() {
            return Err("only a pair can be split");
        }
        Ok(())
    }

    fn reject(&mut self, hand: Hand, reason: &str, events: &mut EventBus) {
        self.queue.push_back(hand);
        events.push(Event::IllegalDecision {
            reason: reason.to_string(),
        });
    }
}

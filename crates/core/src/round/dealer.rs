use super::*;
use crate::BLACKJACK;

impl Round {
    /// Reveals the hole card, plays out the dealer and settles every hand
    /// still in the queue. Runs at most once per round.
    pub fn finish(
        &mut self,
        bankroll: &mut Bankroll,
        events: &mut EventBus,
    ) -> Result<Settlement, RoundError> {
        match self.phase {
            RoundPhase::DealerTurn => {}
            RoundPhase::PlayerTurn => {
                if self.current.is_some() || self.queue.active_count() > 0 {
                    return Err(RoundError::PlayerTurnPending);
                }
                self.phase = RoundPhase::DealerTurn;
            }
            _ => return Err(RoundError::RoundOver),
        }

        self.dealer_revealed = true;
        events.push(Event::DealerRevealed {
            hole: self.dealer.cards[1],
            score: self.dealer.score(),
        });

        let hands: Vec<Hand> = self.queue.drain().collect();
        if !hands.is_empty() {
            while self.dealer.score() < self.rules.dealer_stands_on {
                let card = self.draw()?;
                self.dealer.push(card);
                events.push(Event::DealerDrew {
                    card,
                    score: self.dealer.score(),
                });
            }
        }

        let dealer_score = self.dealer.score();
        let mut settled = Vec::with_capacity(hands.len() + self.busted.len());
        for hand in hands {
            let score = hand.score();
            let outcome = if dealer_score > BLACKJACK || score > dealer_score {
                if hand.is_natural() {
                    HandOutcome::Natural
                } else {
                    HandOutcome::Win
                }
            } else {
                HandOutcome::Loss
            };
            let credit = match outcome {
                HandOutcome::Natural => hand.bet + self.rules.natural_payout.payout(hand.bet),
                HandOutcome::Win => hand.bet * 2,
                HandOutcome::Loss | HandOutcome::Bust => 0,
            };
            bankroll.credit(credit);
            events.push(Event::HandSettled {
                outcome,
                score,
                dealer_score,
                bet: hand.bet,
                credit,
            });
            settled.push(SettledHand {
                hand,
                outcome,
                credit,
            });
        }
        settled.extend(self.busted.drain(..).map(|hand| SettledHand {
            hand,
            outcome: HandOutcome::Bust,
            credit: 0,
        }));

        self.phase = RoundPhase::Settled;
        log::info!(
            "round settled: dealer {dealer_score}, {} hand(s), balance {}",
            settled.len(),
            bankroll.balance()
        );
        Ok(Settlement {
            dealer: self.dealer.clone(),
            hands: settled,
        })
    }
}

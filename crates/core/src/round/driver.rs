use super::*;
use crate::{Decision, RngState};

/// The player side of the table: shows the table and supplies decisions.
pub trait Seat {
    /// Called before every decision and once more after settlement, with
    /// the events produced since the previous call.
    fn render(&mut self, view: &TableView<'_>, events: &[Event]);

    fn decide(&mut self, view: &TableView<'_>) -> Decision;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundOutcome {
    Settled(Settlement),
    Abandoned,
}

/// Shuffles a fresh shoe from `rules.decks` and plays one round on it.
pub fn begin_round(
    bankroll: &mut Bankroll,
    rules: &TableRules,
    rng: &mut RngState,
    seat: &mut impl Seat,
) -> Result<RoundOutcome, RoundError> {
    rules.validate()?;
    let shoe = Shoe::populate(rules.decks, rng);
    play_round(bankroll, rules, shoe, seat)
}

/// Deals, runs the decision loop until every hand is closed or busted,
/// then plays out the dealer. An out-of-cards shoe ends the round with
/// no settlement.
pub fn play_round(
    bankroll: &mut Bankroll,
    rules: &TableRules,
    shoe: Shoe,
    seat: &mut impl Seat,
) -> Result<RoundOutcome, RoundError> {
    rules.validate()?;
    let mut events = EventBus::default();
    let mut round = Round::deal(rules.clone(), shoe, bankroll, &mut events)?;
    loop {
        match round.next_turn() {
            Turn::Decide => {
                let decision = {
                    let pending: Vec<Event> = events.drain().collect();
                    let view = round.view(bankroll.balance());
                    seat.render(&view, &pending);
                    seat.decide(&view)
                };
                match round.apply(decision, bankroll, &mut events) {
                    Ok(Step::Continue) => {}
                    Ok(Step::Abandoned) => {
                        flush(&round, bankroll, &mut events, seat);
                        return Ok(RoundOutcome::Abandoned);
                    }
                    Err(err) => {
                        flush(&round, bankroll, &mut events, seat);
                        return Err(err);
                    }
                }
            }
            Turn::Dealer => {
                let result = round.finish(bankroll, &mut events);
                flush(&round, bankroll, &mut events, seat);
                return result.map(RoundOutcome::Settled);
            }
            Turn::Over => return Ok(RoundOutcome::Abandoned),
        }
    }
}

fn flush(round: &Round, bankroll: &Bankroll, events: &mut EventBus, seat: &mut impl Seat) {
    let pending: Vec<Event> = events.drain().collect();
    seat.render(&round.view(bankroll.balance()), &pending);
}

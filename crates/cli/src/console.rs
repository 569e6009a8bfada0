use blackjack_core::{Card, Decision, Event, Hand, HandOutcome, Seat, TableView};
use std::io::{self, BufRead, Write};

const DECISION_PROMPT: &str =
    "Decision: H - hit; K - keep; D - double; S - split; SAVE - save; BACK - menu";

/// Line-oriented terminal. Plays the player's seat during a round and reads
/// menu input between rounds.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// `None` on end of input.
    pub fn read_line(&mut self, prompt: &str) -> Option<String> {
        if !prompt.is_empty() {
            self.say(prompt);
        }
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
            Err(err) => {
                log::error!("failed to read input: {err}");
                None
            }
        }
    }

    pub fn say(&mut self, text: &str) {
        if let Err(err) = writeln!(self.output, "{text}") {
            log::error!("failed to write output: {err}");
        }
    }

    pub fn flush(&mut self) {
        if let Err(err) = self.output.flush() {
            log::error!("failed to flush output: {err}");
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Seat for Console<R, W> {
    fn render(&mut self, view: &TableView<'_>, events: &[Event]) {
        for event in events {
            if let Some(line) = format_event(event) {
                self.say(&line);
            }
        }
        self.say(&format_dealer(view.dealer, view.reveal_dealer));
        if let Some(hand) = view.hand {
            self.say(&format!("Bet: {}", hand.bet));
            self.say(&format_hand(hand));
        }
        if view.queued > 0 {
            self.say(&format!("Hands waiting: {}", view.queued));
        }
        self.say(&format!("Cash: {}", view.balance));
        self.flush();
    }

    fn decide(&mut self, _view: &TableView<'_>) -> Decision {
        match self.read_line(DECISION_PROMPT) {
            Some(line) => Decision::parse(&line),
            None => Decision::Back,
        }
    }
}

pub fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn format_hand(hand: &Hand) -> String {
    let value = hand.value();
    let soft = if value.soft { " soft" } else { "" };
    format!("{} ({}{})", format_cards(&hand.cards), value.total, soft)
}

/// The hole card stays hidden until the dealer is revealed.
pub fn format_dealer(dealer: &Hand, reveal: bool) -> String {
    if reveal {
        return format!("Dealer: {}", format_hand(dealer));
    }
    match dealer.cards.first() {
        Some(up) => format!("Dealer: {up} **"),
        None => "Dealer: -".to_string(),
    }
}

pub fn format_event(event: &Event) -> Option<String> {
    let line = match event {
        Event::RoundStarted { bet, .. } => format!("New game! Bet placed: {bet}"),
        Event::CardDrawn { card, score } => format!("Drew {card}, total {score}"),
        Event::NaturalDealt { .. } => "Blackjack!".to_string(),
        Event::HandBusted { score, bet } => format!("Bust with {score}, lost {bet}"),
        Event::HandClosed { score } => format!("Hand closed at {score}"),
        Event::HandDoubled { card, bet, .. } => format!("Doubled to {bet}, drew {card}"),
        Event::HandSplit { moved, hands, .. } => {
            format!("Split off {moved}, {hands} hands in play")
        }
        Event::SaveRequested => "Saving is not supported yet".to_string(),
        Event::InvalidDecision { .. } => "wrong input!".to_string(),
        Event::IllegalDecision { reason } => format!("Not allowed: {reason}"),
        Event::DealerRevealed { hole, score } => format!("Dealer reveals {hole}, total {score}"),
        Event::DealerDrew { card, score } => format!("Dealer draws {card}, total {score}"),
        Event::HandSettled {
            outcome,
            score,
            dealer_score,
            credit,
            ..
        } => match outcome {
            HandOutcome::Win | HandOutcome::Natural => {
                format!("You win with {score} against {dealer_score}: +{credit}")
            }
            HandOutcome::Loss | HandOutcome::Bust => {
                format!("You lose with {score} against {dealer_score}")
            }
        },
        Event::RoundAbandoned => return None,
    };
    Some(line)
}

mod console;
mod settings;

use anyhow::{Context, Result};
use blackjack_core::{
    begin_round, Bankroll, HandOutcome, PayoutRatio, RngState, RoundError, RoundOutcome,
    Settlement, TableRules,
};
use clap::Parser;
use console::{format_hand, Console};
use settings::{apply_setting, settings_menu};
use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

const WELCOME: &str = "Welcome to BlackJack!
    N - New Game
    L - Load Game
    S - Settings
    Q - Quit";

#[derive(Debug, Parser)]
#[command(name = "blackjack", about = "Play blackjack against the dealer in the terminal")]
struct CliOptions {
    /// Seed for shuffling; a random seed is used when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file with table rules
    #[arg(long, env = "BLACKJACK_CONFIG")]
    config: Option<PathBuf>,

    /// Number of decks in the shoe
    #[arg(long)]
    decks: Option<u32>,

    /// Base bet per hand
    #[arg(long)]
    bet: Option<i64>,

    /// Starting cash
    #[arg(long)]
    cash: Option<i64>,

    /// Payout for a two-card 21, as N:D (for example 3:2)
    #[arg(long)]
    natural_payout: Option<PayoutRatio>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuCommand {
    NewGame,
    LoadGame,
    Settings,
    Quit,
}

impl MenuCommand {
    fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_uppercase().as_str() {
            "N" => Some(Self::NewGame),
            "L" => Some(Self::LoadGame),
            "S" => Some(Self::Settings),
            "Q" => Some(Self::Quit),
            _ => None,
        }
    }
}

struct Game<R, W> {
    rules: TableRules,
    bankroll: Bankroll,
    rng: RngState,
    console: Console<R, W>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let options = CliOptions::parse();
    let rules = match build_rules(&options) {
        Ok(rules) => rules,
        Err(err) => {
            eprintln!("config error: {err:#}");
            std::process::exit(1);
        }
    };
    let rng = match options.seed {
        Some(seed) => RngState::from_seed(seed),
        None => RngState::from_entropy(),
    };
    log::info!("shuffle seed {}", rng.seed());
    let mut game = Game::new(rules, rng, Console::stdio());
    game.main_loop();
}

fn build_rules(options: &CliOptions) -> Result<TableRules> {
    let mut rules = match options.config.as_deref() {
        Some(path) => load_rules(path)?,
        None => TableRules::default(),
    };
    if let Some(decks) = options.decks {
        rules.decks = decks;
    }
    if let Some(bet) = options.bet {
        rules.bet = bet;
    }
    if let Some(cash) = options.cash {
        rules.starting_cash = cash;
    }
    if let Some(ratio) = options.natural_payout {
        rules.natural_payout = ratio;
    }
    rules.validate().context("validate table rules")?;
    Ok(rules)
}

fn load_rules(path: &Path) -> Result<TableRules> {
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let rules = serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(rules)
}

impl<R: BufRead, W: Write> Game<R, W> {
    fn new(rules: TableRules, rng: RngState, console: Console<R, W>) -> Self {
        Self {
            bankroll: Bankroll::new(rules.starting_cash),
            rules,
            rng,
            console,
        }
    }

    fn main_loop(&mut self) {
        loop {
            self.console.say(WELCOME);
            let Some(line) = self.console.read_line("Type a letter: ") else {
                return;
            };
            match MenuCommand::parse(&line) {
                Some(MenuCommand::NewGame) => self.new_game(),
                Some(MenuCommand::LoadGame) => self.load_game(),
                Some(MenuCommand::Settings) => self.settings(),
                Some(MenuCommand::Quit) => return,
                None => self.console.say("Wrong input"),
            }
        }
    }

    fn new_game(&mut self) {
        if !self.bankroll.can_cover(self.rules.bet) {
            self.console.say(&format!(
                "Not enough cash for a bet of {} (cash: {})",
                self.rules.bet,
                self.bankroll.balance()
            ));
            return;
        }
        let result = begin_round(
            &mut self.bankroll,
            &self.rules,
            &mut self.rng,
            &mut self.console,
        );
        match result {
            Ok(RoundOutcome::Settled(settlement)) => self.report(&settlement),
            Ok(RoundOutcome::Abandoned) => self.console.say("Round abandoned, back to the menu"),
            Err(RoundError::OutOfCards) => {
                self.console
                    .say("Out of cards! The round ends without settlement.");
            }
            Err(err) => {
                log::error!("round failed: {err}");
                self.console.say(&format!("Round failed: {err}"));
            }
        }
    }

    fn report(&mut self, settlement: &Settlement) {
        self.console.say(&format!(
            "Dealer final: {}",
            format_hand(&settlement.dealer)
        ));
        for (idx, settled) in settlement.hands.iter().enumerate() {
            let verdict = match settled.outcome {
                HandOutcome::Natural => "blackjack",
                HandOutcome::Win => "win",
                HandOutcome::Loss => "loss",
                HandOutcome::Bust => "bust",
            };
            self.console.say(&format!(
                "Hand {}: {} bet {} -> {} (+{})",
                idx + 1,
                format_hand(&settled.hand),
                settled.hand.bet,
                verdict,
                settled.credit
            ));
        }
        self.console.say(&format!(
            "Won {} of {} hand(s), paid {}",
            settlement.wins(),
            settlement.hands.len(),
            settlement.total_credit()
        ));
        self.console
            .say(&format!("Cash: {}", self.bankroll.balance()));
    }

    fn load_game(&mut self) {
        self.console.say("Load game is not supported yet");
    }

    fn settings(&mut self) {
        loop {
            self.console.say(&settings_menu(&self.rules, &self.bankroll));
            let Some(line) = self.console.read_line("") else {
                return;
            };
            let mut parts = line.split_whitespace();
            let Some(key) = parts.next() else {
                return;
            };
            let needs_value = matches!(key.to_ascii_uppercase().as_str(), "C" | "B" | "N");
            let inline = parts.next().map(str::to_string);
            let value = if needs_value && inline.is_none() {
                self.console.read_line("New value: ")
            } else {
                inline
            };
            match apply_setting(key, value.as_deref(), &mut self.rules, &mut self.bankroll) {
                Ok(message) => self.console.say(&message),
                Err(err) => self.console.say(&format!("Invalid setting: {err}")),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blackjack_core::{is_natural, Shoe};

    fn game(input: &'static str, seed: u64) -> Game<&'static [u8], Vec<u8>> {
        Game::new(
            TableRules::default(),
            RngState::from_seed(seed),
            Console::new(input.as_bytes(), Vec::new()),
        )
    }

    fn output(game: Game<&'static [u8], Vec<u8>>) -> String {
        String::from_utf8(game.console.into_output()).expect("utf8")
    }

    #[test]
    fn menu_parses_letters() {
        assert_eq!(MenuCommand::parse("n"), Some(MenuCommand::NewGame));
        assert_eq!(MenuCommand::parse(" Q "), Some(MenuCommand::Quit));
        assert_eq!(MenuCommand::parse("x"), None);
    }

    #[test]
    fn settings_then_quit() {
        let mut game = game("s\nb 25\nn\n4\n\nq\n", 1);
        game.main_loop();
        assert_eq!(game.rules.bet, 25);
        assert_eq!(game.rules.decks, 4);
        let text = output(game);
        assert!(text.contains("bet set to 25"));
        assert!(text.contains("num_of_decks set to 4"));
    }

    /// First seed whose shuffled shoe deals the player a hand that needs a decision.
    fn seed_without_natural() -> u64 {
        (0u64..)
            .find(|seed| {
                let mut shoe = Shoe::populate(1, &mut RngState::from_seed(*seed));
                let mut next = || shoe.draw().expect("card");
                let _dealer = [next(), next()];
                !is_natural(&[next(), next()])
            })
            .expect("seed")
    }

    #[test]
    fn back_abandons_round() {
        let mut game = game("n\nback\nq\n", seed_without_natural());
        game.main_loop();
        assert_eq!(game.bankroll.balance(), 990);
        let text = output(game);
        assert!(text.contains("New game!"));
        assert!(text.contains("Round abandoned"));
        assert!(!text.contains("Wrong input"));
    }

    #[test]
    fn refuses_round_without_cash() {
        let mut game = game("n\nq\n", 1);
        game.bankroll.set(5);
        game.main_loop();
        assert!(output(game).contains("Not enough cash"));
    }

    #[test]
    fn command_line_overrides_rules() {
        let options = CliOptions::parse_from(["blackjack", "--decks", "6", "--bet", "5"]);
        let rules = build_rules(&options).expect("rules");
        assert_eq!(rules.decks, 6);
        assert_eq!(rules.bet, 5);
        let options = CliOptions::parse_from(["blackjack", "--decks", "0"]);
        assert!(build_rules(&options).is_err());
        let options = CliOptions::parse_from(["blackjack", "--bet", "5000000000"]);
        assert!(build_rules(&options).is_err());
        let options = CliOptions::parse_from(["blackjack", "--natural-payout", "3:2"]);
        let rules = build_rules(&options).expect("rules");
        assert_eq!(rules.natural_payout, PayoutRatio::THREE_TO_TWO);
        assert!(CliOptions::try_parse_from(["blackjack", "--natural-payout", "3-2"]).is_err());
    }

    #[test]
    fn loads_rules_from_json() {
        let path = std::env::temp_dir().join(format!(
            "blackjack_cli_rules_test_{}.json",
            std::process::id()
        ));
        fs::write(&path, r#"{"bet":50,"starting_cash":2000}"#).expect("write");
        let rules = load_rules(&path).expect("load");
        assert_eq!(rules.bet, 50);
        assert_eq!(rules.starting_cash, 2000);
        assert_eq!(rules.decks, 1);
        let _ = fs::remove_file(path);
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Largest accepted base bet. Keeps doubled stakes and payouts well inside `i64`.
pub const MAX_BET: i64 = 1_000_000_000;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RulesError {
    #[error("number of decks must be at least 1")]
    NoDecks,
    #[error("bet must be at least 1")]
    NonPositiveBet,
    #[error("bet cannot exceed {}", MAX_BET)]
    BetTooLarge,
    #[error("dealer stand threshold must be between 2 and 21, got {0}")]
    DealerThreshold(u8),
    #[error("payout denominator cannot be zero")]
    ZeroDenominator,
    #[error("invalid payout ratio '{0}', expected N:D")]
    BadRatio(String),
}

/// Winnings paid on top of the returned stake, as a ratio of the bet.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PayoutRatio {
    pub numerator: u16,
    pub denominator: u16,
}

impl PayoutRatio {
    pub const ONE_TO_ONE: Self = Self {
        numerator: 1,
        denominator: 1,
    };
    pub const THREE_TO_TWO: Self = Self {
        numerator: 3,
        denominator: 2,
    };

    pub fn new(numerator: u16, denominator: u16) -> Result<Self, RulesError> {
        if denominator == 0 {
            return Err(RulesError::ZeroDenominator);
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    pub fn payout(&self, bet: i64) -> i64 {
        bet * i64::from(self.numerator) / i64::from(self.denominator)
    }
}

impl Default for PayoutRatio {
    fn default() -> Self {
        Self::ONE_TO_ONE
    }
}

impl fmt::Display for PayoutRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.numerator, self.denominator)
    }
}

impl FromStr for PayoutRatio {
    type Err = RulesError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (numerator, denominator) = value
            .split_once(':')
            .ok_or_else(|| RulesError::BadRatio(value.to_string()))?;
        let numerator = numerator
            .trim()
            .parse::<u16>()
            .map_err(|_| RulesError::BadRatio(value.to_string()))?;
        let denominator = denominator
            .trim()
            .parse::<u16>()
            .map_err(|_| RulesError::BadRatio(value.to_string()))?;
        Self::new(numerator, denominator)
    }
}

fn default_cash() -> i64 {
    1000
}

fn default_bet() -> i64 {
    10
}

fn default_decks() -> u32 {
    1
}

fn default_true() -> bool {
    true
}

fn default_dealer_stands_on() -> u8 {
    17
}

/// Table settings. Missing fields fall back to the house defaults when
/// deserialised.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableRules {
    #[serde(default = "default_cash")]
    pub starting_cash: i64,
    #[serde(default = "default_bet")]
    pub bet: i64,
    #[serde(default = "default_decks")]
    pub decks: u32,
    #[serde(default = "default_true")]
    pub allow_split: bool,
    #[serde(default = "default_true")]
    pub allow_double: bool,
    #[serde(default = "default_true")]
    pub split_requires_pair: bool,
    #[serde(default = "default_dealer_stands_on")]
    pub dealer_stands_on: u8,
    #[serde(default)]
    pub natural_payout: PayoutRatio,
}

impl Default for TableRules {
    fn default() -> Self {
        Self {
            starting_cash: default_cash(),
            bet: default_bet(),
            decks: default_decks(),
            allow_split: true,
            allow_double: true,
            split_requires_pair: true,
            dealer_stands_on: default_dealer_stands_on(),
            natural_payout: PayoutRatio::ONE_TO_ONE,
        }
    }
}

impl TableRules {
    pub fn validate(&self) -> Result<(), RulesError> {
        if self.decks == 0 {
            return Err(RulesError::NoDecks);
        }
        if self.bet < 1 {
            return Err(RulesError::NonPositiveBet);
        }
        if self.bet > MAX_BET {
            return Err(RulesError::BetTooLarge);
        }
        if !(2..=21).contains(&self.dealer_stands_on) {
            return Err(RulesError::DealerThreshold(self.dealer_stands_on));
        }
        if self.natural_payout.denominator == 0 {
            return Err(RulesError::ZeroDenominator);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payout_ratios() {
        assert_eq!(PayoutRatio::ONE_TO_ONE.payout(10), 10);
        assert_eq!(PayoutRatio::THREE_TO_TWO.payout(10), 15);
        assert_eq!(PayoutRatio::new(6, 5).map(|ratio| ratio.payout(50)), Ok(60));
        assert_eq!(PayoutRatio::new(3, 0), Err(RulesError::ZeroDenominator));
    }

    #[test]
    fn parses_ratio_text() {
        assert_eq!("3:2".parse::<PayoutRatio>(), Ok(PayoutRatio::THREE_TO_TWO));
        assert_eq!(" 6 : 5 ".parse::<PayoutRatio>(), PayoutRatio::new(6, 5));
        assert!("3-2".parse::<PayoutRatio>().is_err());
        assert_eq!("1:0".parse::<PayoutRatio>(), Err(RulesError::ZeroDenominator));
    }

    #[test]
    fn defaults_match_house_settings() {
        let rules = TableRules::default();
        assert_eq!(rules.starting_cash, 1000);
        assert_eq!(rules.bet, 10);
        assert_eq!(rules.decks, 1);
        assert!(rules.allow_split && rules.allow_double);
        assert_eq!(rules.validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_bad_settings() {
        let rules = TableRules {
            decks: 0,
            ..TableRules::default()
        };
        assert_eq!(rules.validate(), Err(RulesError::NoDecks));
        let rules = TableRules {
            bet: 0,
            ..TableRules::default()
        };
        assert_eq!(rules.validate(), Err(RulesError::NonPositiveBet));
    }

    #[test]
    fn validate_bounds_bet_and_dealer_threshold() {
        let rules = TableRules {
            bet: i64::MAX / 2 + 1,
            ..TableRules::default()
        };
        assert_eq!(rules.validate(), Err(RulesError::BetTooLarge));
        let rules = TableRules {
            bet: MAX_BET,
            ..TableRules::default()
        };
        assert_eq!(rules.validate(), Ok(()));
        assert_eq!(
            PayoutRatio::new(u16::MAX, 1).map(|ratio| ratio.payout(MAX_BET * 2)),
            Ok(MAX_BET * 2 * i64::from(u16::MAX))
        );
        for (threshold, ok) in [(0u8, false), (1, false), (2, true), (17, true), (21, true), (22, false)] {
            let rules = TableRules {
                dealer_stands_on: threshold,
                ..TableRules::default()
            };
            assert_eq!(rules.validate().is_ok(), ok, "threshold {threshold}");
        }
    }

    #[test]
    fn partial_json_uses_defaults() {
        let rules: TableRules = serde_json::from_str(r#"{"decks":6,"bet":25}"#).expect("parse");
        assert_eq!(rules.decks, 6);
        assert_eq!(rules.bet, 25);
        assert_eq!(rules.starting_cash, 1000);
        assert_eq!(rules.natural_payout, PayoutRatio::ONE_TO_ONE);
        assert_eq!(rules.dealer_stands_on, 17);
    }
}

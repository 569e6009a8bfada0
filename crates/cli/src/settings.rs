use blackjack_core::{Bankroll, TableRules};

pub fn settings_menu(rules: &TableRules, bankroll: &Bankroll) -> String {
    format!(
        "Settings\n\
        \x20   C - cash (current: {})\n\
        \x20   B - bet (current: {})\n\
        \x20   N - num_of_decks (current: {})\n\
        \x20   S - split (current: {})\n\
        \x20   D - double (current: {})\n\
        \x20   Enter - go back",
        bankroll.balance(),
        rules.bet,
        rules.decks,
        rules.allow_split,
        rules.allow_double,
    )
}

/// Applies one settings edit. Numeric keys take a value, S and D toggle.
/// Invalid edits leave everything unchanged.
pub fn apply_setting(
    key: &str,
    value: Option<&str>,
    rules: &mut TableRules,
    bankroll: &mut Bankroll,
) -> Result<String, String> {
    let mut updated = rules.clone();
    let message = match key.trim().to_ascii_uppercase().as_str() {
        "C" => {
            let cash = parse_number(value)?;
            bankroll.set(cash);
            return Ok(format!("cash set to {cash}"));
        }
        "B" => {
            updated.bet = parse_number(value)?;
            format!("bet set to {}", updated.bet)
        }
        "N" => {
            let decks = parse_number(value)?;
            updated.decks = u32::try_from(decks).map_err(|_| "decks must be positive".to_string())?;
            format!("num_of_decks set to {}", updated.decks)
        }
        "S" => {
            updated.allow_split = !updated.allow_split;
            format!("split set to {}", updated.allow_split)
        }
        "D" => {
            updated.allow_double = !updated.allow_double;
            format!("double set to {}", updated.allow_double)
        }
        other => return Err(format!("unknown setting '{other}'")),
    };
    updated.validate().map_err(|err| err.to_string())?;
    *rules = updated;
    Ok(message)
}

fn parse_number(value: Option<&str>) -> Result<i64, String> {
    let value = value.map(str::trim).unwrap_or_default();
    value
        .parse::<i64>()
        .map_err(|_| format!("'{value}' is not a number"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edits_numbers_and_toggles() {
        let mut rules = TableRules::default();
        let mut bankroll = Bankroll::new(1000);
        apply_setting("b", Some("25"), &mut rules, &mut bankroll).expect("bet");
        apply_setting("N", Some(" 6 "), &mut rules, &mut bankroll).expect("decks");
        apply_setting("s", None, &mut rules, &mut bankroll).expect("split");
        apply_setting("C", Some("500"), &mut rules, &mut bankroll).expect("cash");
        assert_eq!(rules.bet, 25);
        assert_eq!(rules.decks, 6);
        assert!(!rules.allow_split);
        assert_eq!(bankroll.balance(), 500);
    }

    #[test]
    fn rejects_invalid_edits() {
        let mut rules = TableRules::default();
        let mut bankroll = Bankroll::new(1000);
        assert!(apply_setting("N", Some("0"), &mut rules, &mut bankroll).is_err());
        assert!(apply_setting("B", Some("ten"), &mut rules, &mut bankroll).is_err());
        assert!(apply_setting("N", Some("-2"), &mut rules, &mut bankroll).is_err());
        assert!(apply_setting("X", None, &mut rules, &mut bankroll).is_err());
        assert_eq!(rules, TableRules::default());
    }

    #[test]
    fn menu_lists_current_values() {
        let menu = settings_menu(&TableRules::default(), &Bankroll::new(1000));
        assert!(menu.contains("C - cash (current: 1000)"));
        assert!(menu.contains("N - num_of_decks (current: 1)"));
        assert!(menu.contains("D - double (current: true)"));
        assert!(!menu.contains("insurance"));
        let mut rules = TableRules::default();
        let mut bankroll = Bankroll::new(1000);
        assert!(apply_setting("I", None, &mut rules, &mut bankroll).is_err());
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// Player intent for the hand currently being decided.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Decision {
    Hit,
    Stand,
    Double,
    Split,
    Save,
    Back,
    Invalid(String),
}

impl Decision {
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        match trimmed.to_ascii_uppercase().as_str() {
            "H" | "HIT" => Decision::Hit,
            "K" | "KEEP" | "STAND" => Decision::Stand,
            "D" | "DOUBLE" => Decision::Double,
            "S" | "SPLIT" => Decision::Split,
            "SAVE" => Decision::Save,
            "BACK" => Decision::Back,
            _ => Decision::Invalid(trimmed.to_string()),
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Hit => f.write_str("hit"),
            Decision::Stand => f.write_str("stand"),
            Decision::Double => f.write_str("double"),
            Decision::Split => f.write_str("split"),
            Decision::Save => f.write_str("save"),
            Decision::Back => f.write_str("back"),
            Decision::Invalid(text) => write!(f, "invalid '{text}'"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! parse_case {
        ($name:ident, $input:expr, $expected:expr) => {
            #[test]
            fn $name() {
                assert_eq!(Decision::parse($input), $expected);
            }
        };
    }

    parse_case!(hit_letter, "h", Decision::Hit);
    parse_case!(keep_letter, "K", Decision::Stand);
    parse_case!(stand_word, " stand ", Decision::Stand);
    parse_case!(double_letter, "d", Decision::Double);
    parse_case!(split_letter, "S", Decision::Split);
    parse_case!(save_word, "save", Decision::Save);
    parse_case!(back_word, "Back", Decision::Back);
    parse_case!(unknown, "x", Decision::Invalid("x".to_string()));
    parse_case!(empty, "", Decision::Invalid(String::new()));
}

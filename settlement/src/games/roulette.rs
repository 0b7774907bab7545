//! Live Roulette.
//!
//! European single-zero wheel on the live feed; the proprietary RNG wheel
//! mini-game is a different product and never reaches this engine.
//!
//! Table ids: `roulette`. Aliases: "liveroulette".
//!
//! Win codes: the winning number `0`..`36`.
//!
//! Cards: none. rdesc: unused.
//!
//! Markets: "Red"/"Black", "Odd"/"Even", "Low" (1-18)/"High" (19-36),
//! compound "Dozen N" and "Column N" (N in 1-3), and the bare number backs
//! the straight-up. Zero loses every outside market.
//!
//! History codes: the winning number, as digits.

use crate::decoder::GameDecoder;
use crate::label::trailing_number;
use crate::outcome::Outcome;
use crate::registry::{FamilyCategory, FamilyInfo};
use feltline_types::RawRound;

pub struct Roulette;

/// Red numbers on a single-zero wheel.
const RED_NUMBERS: [i64; 18] = [
    1, 3, 5, 7, 9, 12, 14, 16, 18, 19, 21, 23, 25, 27, 30, 32, 34, 36,
];

const NUMBERS: [&str; 37] = [
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12", "13", "14", "15", "16",
    "17", "18", "19", "20", "21", "22", "23", "24", "25", "26", "27", "28", "29", "30", "31",
    "32", "33", "34", "35", "36",
];

impl GameDecoder for Roulette {
    fn family(&self) -> &'static str {
        "roulette"
    }

    fn info(&self) -> FamilyInfo {
        FamilyInfo::new("roulette", "Live Roulette", FamilyCategory::Wheel)
    }

    fn table_ids(&self) -> &'static [&'static str] {
        &["roulette"]
    }

    fn table_aliases(&self) -> &'static [&'static str] {
        &["liveroulette"]
    }

    fn decode(&self, round: &RawRound) -> Option<Outcome> {
        let number: i64 = round.win.trim().parse().ok()?;
        if !(0..=36).contains(&number) {
            return None;
        }
        let mut outcome = Outcome::new(&number.to_string()).total(number);
        if number == 0 {
            outcome = outcome.attr("zero");
        } else {
            outcome = outcome
                .attr(if RED_NUMBERS.contains(&number) { "red" } else { "black" })
                .attr(if number % 2 == 1 { "odd" } else { "even" })
                .attr(if number <= 18 { "low" } else { "high" });
        }
        Some(outcome.mid(round.mid.clone()))
    }

    fn known_outcomes(&self) -> &'static [&'static str] {
        &NUMBERS
    }

    fn known_markets(&self) -> &'static [&'static str] {
        &["red", "black", "odd", "even", "low", "high", "zero"]
    }

    fn match_compound(&self, label: &str, outcome: &Outcome) -> Option<bool> {
        let number = outcome.declared_total()?;
        let (head, group) = trailing_number(label)?;
        if !(1..=3).contains(&group) {
            return None;
        }
        match head {
            "dozen" => Some(number != 0 && (number - 1) / 12 + 1 == group),
            "column" => Some(number != 0 && (number - 1) % 3 + 1 == group),
            _ => None,
        }
    }

    fn history_code(&self, round: &RawRound) -> String {
        match round.win.trim().parse::<i64>() {
            Ok(number) if (0..=36).contains(&number) => number.to_string(),
            _ => "-".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::evaluate;
    use crate::outcome::Condition;

    fn round(win: &str) -> RawRound {
        RawRound::new(None, win, None, None)
    }

    #[test]
    fn test_outside_markets() {
        let outcome = Roulette.decode(&round("32")).unwrap();
        assert_eq!(outcome.winner(), "32");
        assert_eq!(evaluate(&Roulette, "Red", &outcome), Condition::Holds);
        assert_eq!(evaluate(&Roulette, "Even", &outcome), Condition::Holds);
        assert_eq!(evaluate(&Roulette, "High", &outcome), Condition::Holds);
        assert_eq!(evaluate(&Roulette, "Black", &outcome), Condition::Fails);
    }

    #[test]
    fn test_straight_up_numbers() {
        let outcome = Roulette.decode(&round("17")).unwrap();
        assert_eq!(evaluate(&Roulette, "17", &outcome), Condition::Holds);
        assert_eq!(evaluate(&Roulette, "18", &outcome), Condition::Fails);
        assert_eq!(evaluate(&Roulette, "37", &outcome), Condition::Unknown);
    }

    #[test]
    fn test_dozen_and_column() {
        let outcome = Roulette.decode(&round("17")).unwrap();
        assert_eq!(evaluate(&Roulette, "Dozen 2", &outcome), Condition::Holds);
        assert_eq!(evaluate(&Roulette, "Dozen 1", &outcome), Condition::Fails);
        // 17 = column 2.
        assert_eq!(evaluate(&Roulette, "Column 2", &outcome), Condition::Holds);
        assert_eq!(evaluate(&Roulette, "Column 3", &outcome), Condition::Fails);
        assert_eq!(evaluate(&Roulette, "Dozen 4", &outcome), Condition::Unknown);
    }

    #[test]
    fn test_zero_loses_outside_markets() {
        let outcome = Roulette.decode(&round("0")).unwrap();
        assert_eq!(evaluate(&Roulette, "Red", &outcome), Condition::Fails);
        assert_eq!(evaluate(&Roulette, "Odd", &outcome), Condition::Fails);
        assert_eq!(evaluate(&Roulette, "Low", &outcome), Condition::Fails);
        assert_eq!(evaluate(&Roulette, "Dozen 1", &outcome), Condition::Fails);
        assert_eq!(evaluate(&Roulette, "Zero", &outcome), Condition::Holds);
    }

    #[test]
    fn test_out_of_range() {
        assert!(Roulette.decode(&round("37")).is_none());
        assert!(Roulette.decode(&round("-1")).is_none());
        assert!(Roulette.decode(&round("x")).is_none());
    }

    #[test]
    fn test_history() {
        assert_eq!(Roulette.history_code(&round("0")), "0");
        assert_eq!(Roulette.history_code(&round("36")), "36");
    }
}

//! Casino Queen.
//!
//! Four groups race to the queen; the feed names the winning group.
//!
//! Table ids: `queen`. Aliases: "casinoqueen".
//!
//! Win codes: `1` = Total 0, `2` = Total 1, `3` = Total 2, `4` = Total 3.
//!
//! Cards: exactly eight tokens, two per group in group order (group 0 holds
//! positions 0/1, group 1 holds 2/3, and so on).
//!
//! Markets: the four group names only; the table runs no side markets.
//!
//! History codes: the winning group digit, `0`..`3`.

use crate::cards::parse_cards_exact;
use crate::decoder::GameDecoder;
use crate::outcome::Outcome;
use crate::registry::{FamilyCategory, FamilyInfo};
use feltline_types::RawRound;

pub struct CasinoQueen;

const GROUPS: [&str; 4] = ["total 0", "total 1", "total 2", "total 3"];

impl GameDecoder for CasinoQueen {
    fn family(&self) -> &'static str {
        "queen"
    }

    fn info(&self) -> FamilyInfo {
        FamilyInfo::new("queen", "Casino Queen", FamilyCategory::Cards)
    }

    fn table_ids(&self) -> &'static [&'static str] {
        &["queen"]
    }

    fn table_aliases(&self) -> &'static [&'static str] {
        &["casinoqueen"]
    }

    fn decode(&self, round: &RawRound) -> Option<Outcome> {
        let group: usize = match round.win.trim() {
            "1" => 0,
            "2" => 1,
            "3" => 2,
            "4" => 3,
            _ => return None,
        };
        let cards = parse_cards_exact(round.card_str(), 8)?;
        Some(
            Outcome::new(GROUPS[group])
                .cards(cards)
                .mid(round.mid.clone()),
        )
    }

    fn known_outcomes(&self) -> &'static [&'static str] {
        &GROUPS
    }

    fn history_code(&self, round: &RawRound) -> String {
        match round.win.trim() {
            "1" => "0",
            "2" => "1",
            "3" => "2",
            "4" => "3",
            _ => "-",
        }
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::evaluate;
    use crate::outcome::Condition;

    fn round(win: &str) -> RawRound {
        RawRound::new(
            None,
            win,
            Some("2HH,9SS,4DD,KCC,5HH,8SS,JDD,3CC".to_string()),
            None,
        )
    }

    #[test]
    fn test_group_winner() {
        let outcome = CasinoQueen.decode(&round("3")).unwrap();
        assert_eq!(outcome.winner(), "total 2");
        assert_eq!(evaluate(&CasinoQueen, "Total 2", &outcome), Condition::Holds);
        assert_eq!(evaluate(&CasinoQueen, "Total 0", &outcome), Condition::Fails);
        assert_eq!(evaluate(&CasinoQueen, "Total 4", &outcome), Condition::Unknown);
    }

    #[test]
    fn test_requires_eight_cards() {
        let bad = RawRound::new(None, "1", Some("2HH,9SS".to_string()), None);
        assert!(CasinoQueen.decode(&bad).is_none());
    }

    #[test]
    fn test_history_is_group_digit() {
        assert_eq!(CasinoQueen.history_code(&round("4")), "3");
    }
}

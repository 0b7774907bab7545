//! Teen Patti One Day.
//!
//! Table ids: `teen`, `teen1day`. Aliases: "teenpattioneday".
//!
//! Win codes: `1` = Player A, `2` = Player B, `0` = Tie.
//!
//! Cards: exactly six tokens; Player A holds 0/2/4, Player B holds 1/3/5.
//! The one-day table carries no side markets - only the two player backs
//! and lays - so the attribute set is just the winner.
//!
//! History codes: `A`, `B`, `T`.

use crate::cards::parse_cards_exact;
use crate::decoder::GameDecoder;
use crate::outcome::Outcome;
use crate::registry::{FamilyCategory, FamilyInfo};
use feltline_types::RawRound;

pub struct TeenOneDay;

impl GameDecoder for TeenOneDay {
    fn family(&self) -> &'static str {
        "teen"
    }

    fn info(&self) -> FamilyInfo {
        FamilyInfo::new("teen", "Teen Patti One Day", FamilyCategory::Cards)
    }

    fn table_ids(&self) -> &'static [&'static str] {
        &["teen", "teen1day"]
    }

    fn table_aliases(&self) -> &'static [&'static str] {
        &["teenpattioneday"]
    }

    fn decode(&self, round: &RawRound) -> Option<Outcome> {
        let winner = match round.win.trim() {
            "1" => "player a",
            "2" => "player b",
            "0" => "tie",
            _ => return None,
        };
        let cards = parse_cards_exact(round.card_str(), 6)?;
        Some(Outcome::new(winner).cards(cards).mid(round.mid.clone()))
    }

    fn known_outcomes(&self) -> &'static [&'static str] {
        &["player a", "player b", "tie"]
    }

    fn history_code(&self, round: &RawRound) -> String {
        match round.win.trim() {
            "1" => "A",
            "2" => "B",
            "0" => "T",
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
            Some("ASS,2HH,3DD,KSS,QHH,JDD".to_string()),
            None,
        )
    }

    #[test]
    fn test_decode_and_match() {
        let outcome = TeenOneDay.decode(&round("2")).unwrap();
        assert_eq!(outcome.winner(), "player b");
        assert_eq!(evaluate(&TeenOneDay, "Player B", &outcome), Condition::Holds);
        assert_eq!(evaluate(&TeenOneDay, "Player A", &outcome), Condition::Fails);
        // No side markets on the one-day table.
        assert_eq!(
            evaluate(&TeenOneDay, "Pair Plus A", &outcome),
            Condition::Unknown
        );
    }

    #[test]
    fn test_identity_does_not_claim_teen20() {
        assert!(TeenOneDay.belongs_to("teen"));
        assert!(TeenOneDay.belongs_to("teen-1-day"));
        assert!(!TeenOneDay.belongs_to("teen20"));
    }

    #[test]
    fn test_history() {
        assert_eq!(TeenOneDay.history_code(&round("0")), "T");
        assert_eq!(TeenOneDay.history_code(&RawRound::new(None, "", None, None)), "-");
    }
}

//! Dus Ka Dum.
//!
//! One card against the ten.
//!
//! Table ids: `dum10`. Aliases: "duskadum".
//!
//! Win codes: `1` = Under 10 (A-9), `0` = Exactly 10, `2` = Over 10 (J-K).
//! The win code and the dealt card must agree.
//!
//! Cards: exactly one token.
//!
//! Markets: "Odd"/"Even", "Red"/"Black", suit and "Card N" markets on the
//! drawn card.
//!
//! History codes: `U`, `10`, `O`.

use super::match_card_subject;
use crate::cards::{parse_cards_exact, Card};
use crate::decoder::GameDecoder;
use crate::outcome::Outcome;
use crate::registry::{FamilyCategory, FamilyInfo};
use feltline_types::RawRound;

pub struct DusKaDum;

fn side_for(card: Card) -> &'static str {
    if card.rank < 10 {
        "under 10"
    } else if card.rank > 10 {
        "over 10"
    } else {
        "exactly 10"
    }
}

impl GameDecoder for DusKaDum {
    fn family(&self) -> &'static str {
        "dum10"
    }

    fn info(&self) -> FamilyInfo {
        FamilyInfo::new("dum10", "Dus Ka Dum", FamilyCategory::Cards)
    }

    fn table_ids(&self) -> &'static [&'static str] {
        &["dum10"]
    }

    fn table_aliases(&self) -> &'static [&'static str] {
        &["duskadum"]
    }

    fn decode(&self, round: &RawRound) -> Option<Outcome> {
        let winner = match round.win.trim() {
            "1" => "under 10",
            "0" => "exactly 10",
            "2" => "over 10",
            _ => return None,
        };
        let cards = parse_cards_exact(round.card_str(), 1)?;
        if side_for(cards[0]) != winner {
            return None;
        }
        Some(
            Outcome::new(winner)
                .card_attrs("", cards[0])
                .cards(cards)
                .mid(round.mid.clone()),
        )
    }

    fn known_outcomes(&self) -> &'static [&'static str] {
        &["under 10", "exactly 10", "over 10"]
    }

    fn match_compound(&self, label: &str, outcome: &Outcome) -> Option<bool> {
        match_card_subject(label, "", *outcome.dealt_cards().first()?)
    }

    fn history_code(&self, round: &RawRound) -> String {
        match round.win.trim() {
            "1" => "U",
            "0" => "10",
            "2" => "O",
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

    fn round(win: &str, card: &str) -> RawRound {
        RawRound::new(None, win, Some(card.to_string()), None)
    }

    #[test]
    fn test_sides() {
        assert_eq!(DusKaDum.decode(&round("1", "9SS")).unwrap().winner(), "under 10");
        assert_eq!(DusKaDum.decode(&round("0", "10SS")).unwrap().winner(), "exactly 10");
        assert_eq!(DusKaDum.decode(&round("2", "JSS")).unwrap().winner(), "over 10");
        assert!(DusKaDum.decode(&round("2", "9SS")).is_none());
    }

    #[test]
    fn test_card_markets() {
        let outcome = DusKaDum.decode(&round("1", "ADD")).unwrap();
        assert_eq!(evaluate(&DusKaDum, "Odd", &outcome), Condition::Holds);
        assert_eq!(evaluate(&DusKaDum, "Card A", &outcome), Condition::Holds);
        assert_eq!(evaluate(&DusKaDum, "Black", &outcome), Condition::Fails);
    }

    #[test]
    fn test_history() {
        assert_eq!(DusKaDum.history_code(&round("0", "10SS")), "10");
    }
}

//! K.B.C.
//!
//! One card climbs the prize ladder.
//!
//! Table ids: `kbc`.
//!
//! Win codes map to ladder rungs, and the dealt card must agree:
//! `1` = Thousand (2-6), `2` = Lakh (7-10), `3` = Crore (J-K),
//! `4` = Crorepati (A).
//!
//! Cards: exactly one token.
//!
//! Markets: "Odd"/"Even", "Red"/"Black", suit and "Card N" markets on the
//! drawn card.
//!
//! History codes: `T`, `L`, `C`, `R`.

use super::match_card_subject;
use crate::cards::{parse_cards_exact, Card};
use crate::decoder::GameDecoder;
use crate::outcome::Outcome;
use crate::registry::{FamilyCategory, FamilyInfo};
use feltline_types::RawRound;

pub struct Kbc;

fn rung_for(card: Card) -> &'static str {
    match card.rank {
        1 => "crorepati",
        2..=6 => "thousand",
        7..=10 => "lakh",
        _ => "crore",
    }
}

impl GameDecoder for Kbc {
    fn family(&self) -> &'static str {
        "kbc"
    }

    fn info(&self) -> FamilyInfo {
        FamilyInfo::new("kbc", "K.B.C", FamilyCategory::Cards)
    }

    fn table_ids(&self) -> &'static [&'static str] {
        &["kbc"]
    }

    fn decode(&self, round: &RawRound) -> Option<Outcome> {
        let winner = match round.win.trim() {
            "1" => "thousand",
            "2" => "lakh",
            "3" => "crore",
            "4" => "crorepati",
            _ => return None,
        };
        let cards = parse_cards_exact(round.card_str(), 1)?;
        if rung_for(cards[0]) != winner {
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
        &["thousand", "lakh", "crore", "crorepati"]
    }

    fn match_compound(&self, label: &str, outcome: &Outcome) -> Option<bool> {
        match_card_subject(label, "", *outcome.dealt_cards().first()?)
    }

    fn history_code(&self, round: &RawRound) -> String {
        match round.win.trim() {
            "1" => "T",
            "2" => "L",
            "3" => "C",
            "4" => "R",
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
    fn test_ladder_rungs() {
        assert_eq!(Kbc.decode(&round("1", "4SS")).unwrap().winner(), "thousand");
        assert_eq!(Kbc.decode(&round("2", "8SS")).unwrap().winner(), "lakh");
        assert_eq!(Kbc.decode(&round("3", "KSS")).unwrap().winner(), "crore");
        assert_eq!(Kbc.decode(&round("4", "ASS")).unwrap().winner(), "crorepati");
        assert!(Kbc.decode(&round("4", "KSS")).is_none());
    }

    #[test]
    fn test_losing_rung_is_recognized() {
        let outcome = Kbc.decode(&round("2", "8SS")).unwrap();
        assert_eq!(evaluate(&Kbc, "Crorepati", &outcome), Condition::Fails);
        assert_eq!(evaluate(&Kbc, "Card 8", &outcome), Condition::Holds);
    }
}

//! Amar Akbar Anthony.
//!
//! One card split into three rank bands.
//!
//! Table ids: `aaa`. Aliases: "amarakbaranthony".
//!
//! Win codes: `1` = Amar (A-6), `2` = Akbar (7-10), `3` = Anthony (J-K).
//! The win code and the dealt card must agree.
//!
//! Cards: exactly one token.
//!
//! Markets: "Odd"/"Even", "Red"/"Black", suit and "Card N" markets on the
//! drawn card, plus "Under 7" (A-6) and "Over 7" (8-K); a drawn seven loses
//! both range markets.
//!
//! History codes: `A` (Amar), `B` (Akbar), `C` (Anthony).

use super::match_card_subject;
use crate::cards::{parse_cards_exact, Card};
use crate::decoder::GameDecoder;
use crate::outcome::Outcome;
use crate::registry::{FamilyCategory, FamilyInfo};
use feltline_types::RawRound;

pub struct AmarAkbarAnthony;

fn band_for(card: Card) -> &'static str {
    match card.rank {
        1..=6 => "amar",
        7..=10 => "akbar",
        _ => "anthony",
    }
}

impl GameDecoder for AmarAkbarAnthony {
    fn family(&self) -> &'static str {
        "aaa"
    }

    fn info(&self) -> FamilyInfo {
        FamilyInfo::new("aaa", "Amar Akbar Anthony", FamilyCategory::Cards)
    }

    fn table_ids(&self) -> &'static [&'static str] {
        &["aaa"]
    }

    fn table_aliases(&self) -> &'static [&'static str] {
        &["amarakbaranthony"]
    }

    fn decode(&self, round: &RawRound) -> Option<Outcome> {
        let winner = match round.win.trim() {
            "1" => "amar",
            "2" => "akbar",
            "3" => "anthony",
            _ => return None,
        };
        let cards = parse_cards_exact(round.card_str(), 1)?;
        if band_for(cards[0]) != winner {
            return None;
        }
        let mut outcome = Outcome::new(winner).card_attrs("", cards[0]);
        if cards[0].rank < 7 {
            outcome = outcome.attr("under 7");
        } else if cards[0].rank > 7 {
            outcome = outcome.attr("over 7");
        }
        Some(outcome.cards(cards).mid(round.mid.clone()))
    }

    fn known_outcomes(&self) -> &'static [&'static str] {
        &["amar", "akbar", "anthony"]
    }

    fn known_markets(&self) -> &'static [&'static str] {
        &["under 7", "over 7"]
    }

    fn match_compound(&self, label: &str, outcome: &Outcome) -> Option<bool> {
        match_card_subject(label, "", *outcome.dealt_cards().first()?)
    }

    fn history_code(&self, round: &RawRound) -> String {
        match round.win.trim() {
            "1" => "A",
            "2" => "B",
            "3" => "C",
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
    fn test_bands() {
        assert_eq!(
            AmarAkbarAnthony.decode(&round("1", "6CC")).unwrap().winner(),
            "amar"
        );
        assert_eq!(
            AmarAkbarAnthony.decode(&round("2", "10CC")).unwrap().winner(),
            "akbar"
        );
        assert_eq!(
            AmarAkbarAnthony.decode(&round("3", "QCC")).unwrap().winner(),
            "anthony"
        );
        assert!(AmarAkbarAnthony.decode(&round("1", "QCC")).is_none());
    }

    #[test]
    fn test_seven_loses_both_ranges() {
        let outcome = AmarAkbarAnthony.decode(&round("2", "7CC")).unwrap();
        assert_eq!(evaluate(&AmarAkbarAnthony, "Under 7", &outcome), Condition::Fails);
        assert_eq!(evaluate(&AmarAkbarAnthony, "Over 7", &outcome), Condition::Fails);
    }

    #[test]
    fn test_card_markets() {
        let outcome = AmarAkbarAnthony.decode(&round("3", "QHH")).unwrap();
        assert_eq!(evaluate(&AmarAkbarAnthony, "Even", &outcome), Condition::Holds);
        assert_eq!(evaluate(&AmarAkbarAnthony, "Red", &outcome), Condition::Holds);
        assert_eq!(evaluate(&AmarAkbarAnthony, "Card Q", &outcome), Condition::Holds);
        assert_eq!(evaluate(&AmarAkbarAnthony, "Card K", &outcome), Condition::Fails);
        assert!(outcome.has("over 7"));
    }
}

//! Note Number.
//!
//! Two cards compose a two-digit note number.
//!
//! Table ids: `notenum`. Aliases: "notenumber".
//!
//! Win codes: the composed number `0`..`99` as the feed spells it.
//!
//! Cards: exactly two tokens from the A-10 range (court cards never deal on
//! this table); each card contributes a digit, rank modulo ten (10 -> 0).
//! The first card is the tens digit. The composed number must agree with
//! the win code.
//!
//! Markets: "Odd"/"Even" on the composed number, and bare numeric labels
//! ("47") back the exact number.
//!
//! History codes: the number zero-padded to two digits.

use crate::cards::{parse_cards_exact, Card};
use crate::decoder::GameDecoder;
use crate::outcome::Outcome;
use crate::registry::{FamilyCategory, FamilyInfo};
use feltline_types::RawRound;

pub struct NoteNumber;

fn digit_for(card: Card) -> Option<i64> {
    if card.rank > 10 {
        return None;
    }
    Some((card.rank % 10) as i64)
}

impl GameDecoder for NoteNumber {
    fn family(&self) -> &'static str {
        "notenum"
    }

    fn info(&self) -> FamilyInfo {
        FamilyInfo::new("notenum", "Note Number", FamilyCategory::Cards)
    }

    fn table_ids(&self) -> &'static [&'static str] {
        &["notenum"]
    }

    fn table_aliases(&self) -> &'static [&'static str] {
        &["notenumber"]
    }

    fn decode(&self, round: &RawRound) -> Option<Outcome> {
        let declared: i64 = round.win.trim().parse().ok()?;
        let cards = parse_cards_exact(round.card_str(), 2)?;
        let number = digit_for(cards[0])? * 10 + digit_for(cards[1])?;
        if declared != number {
            return None;
        }
        Some(
            Outcome::new(&format!("{number:02}"))
                .attr(if number % 2 == 1 { "odd" } else { "even" })
                .total(number)
                .cards(cards)
                .mid(round.mid.clone()),
        )
    }

    fn known_outcomes(&self) -> &'static [&'static str] {
        &[]
    }

    fn known_markets(&self) -> &'static [&'static str] {
        &["odd", "even"]
    }

    fn match_compound(&self, label: &str, outcome: &Outcome) -> Option<bool> {
        // A bare one- or two-digit label backs the exact number.
        if label.is_empty() || label.len() > 2 || !label.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let number: i64 = label.parse().ok()?;
        Some(Some(number) == outcome.declared_total())
    }

    fn history_code(&self, round: &RawRound) -> String {
        match round.win.trim().parse::<i64>() {
            Ok(number) if (0..=99).contains(&number) => format!("{number:02}"),
            _ => "-".to_string(),
        }
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
    fn test_compose_number() {
        // 4DD -> 4 tens, 7SS -> 7 units.
        let outcome = NoteNumber.decode(&round("47", "4DD,7SS")).unwrap();
        assert_eq!(outcome.winner(), "47");
        assert_eq!(outcome.declared_total(), Some(47));
        assert!(outcome.has("odd"));
    }

    #[test]
    fn test_ten_is_zero_digit() {
        let outcome = NoteNumber.decode(&round("3", "10DD,3SS")).unwrap();
        assert_eq!(outcome.winner(), "03");
        assert_eq!(NoteNumber.history_code(&round("3", "10DD,3SS")), "03");
    }

    #[test]
    fn test_court_cards_are_invalid() {
        assert!(NoteNumber.decode(&round("47", "KDD,7SS")).is_none());
    }

    #[test]
    fn test_numeric_labels() {
        let outcome = NoteNumber.decode(&round("47", "4DD,7SS")).unwrap();
        assert_eq!(evaluate(&NoteNumber, "47", &outcome), Condition::Holds);
        assert_eq!(evaluate(&NoteNumber, "48", &outcome), Condition::Fails);
        assert_eq!(evaluate(&NoteNumber, "470", &outcome), Condition::Unknown);
        assert_eq!(evaluate(&NoteNumber, "Even", &outcome), Condition::Fails);
    }

    #[test]
    fn test_declared_number_must_agree() {
        assert!(NoteNumber.decode(&round("48", "4DD,7SS")).is_none());
    }
}

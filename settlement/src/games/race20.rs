//! Race 20-20.
//!
//! Four kings race down the shoe; the first suit to draw its king wins.
//!
//! Table ids: `race20`. Aliases: "race2020".
//!
//! Win codes: `1` = K of Spade, `2` = K of Heart, `3` = K of Club,
//! `4` = K of Diamond.
//!
//! Cards: the full run in dealt order, two to nine tokens; the last card is
//! the winning king and must agree with the win code.
//!
//! Markets: "Odd Cards"/"Even Cards" on the run length, and compound
//! "Win With N" backs the exact run length.
//!
//! History codes: the winning suit letter - `S`, `H`, `C`, `D`.

use crate::cards::{parse_cards, Suit};
use crate::decoder::GameDecoder;
use crate::label::trailing_number;
use crate::outcome::Outcome;
use crate::registry::{FamilyCategory, FamilyInfo};
use feltline_types::RawRound;

pub struct Race20;

fn winning_suit(win: &str) -> Option<Suit> {
    match win {
        "1" => Some(Suit::Spades),
        "2" => Some(Suit::Hearts),
        "3" => Some(Suit::Clubs),
        "4" => Some(Suit::Diamonds),
        _ => None,
    }
}

impl GameDecoder for Race20 {
    fn family(&self) -> &'static str {
        "race20"
    }

    fn info(&self) -> FamilyInfo {
        FamilyInfo::new("race20", "Race 20-20", FamilyCategory::Cards)
    }

    fn table_ids(&self) -> &'static [&'static str] {
        &["race20"]
    }

    fn table_aliases(&self) -> &'static [&'static str] {
        &["race2020"]
    }

    fn decode(&self, round: &RawRound) -> Option<Outcome> {
        let suit = winning_suit(round.win.trim())?;
        let cards = parse_cards(round.card_str())?;
        if !(2..=9).contains(&cards.len()) {
            return None;
        }
        let last = cards[cards.len() - 1];
        if last.rank != 13 || last.suit != suit {
            return None;
        }
        let run = cards.len() as i64;
        Some(
            Outcome::new(&format!("k of {}", suit.name()))
                .attr(if run % 2 == 1 { "odd cards" } else { "even cards" })
                .total(run)
                .cards(cards)
                .mid(round.mid.clone()),
        )
    }

    fn known_outcomes(&self) -> &'static [&'static str] {
        &["k of spade", "k of heart", "k of club", "k of diamond"]
    }

    fn known_markets(&self) -> &'static [&'static str] {
        &["odd cards", "even cards"]
    }

    fn match_compound(&self, label: &str, outcome: &Outcome) -> Option<bool> {
        let (head, number) = trailing_number(label)?;
        if head != "win with" {
            return None;
        }
        Some(Some(number) == outcome.declared_total())
    }

    fn history_code(&self, round: &RawRound) -> String {
        match winning_suit(round.win.trim()) {
            Some(Suit::Spades) => "S",
            Some(Suit::Hearts) => "H",
            Some(Suit::Clubs) => "C",
            Some(Suit::Diamonds) => "D",
            None => "-",
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
    fn test_winner_from_last_card() {
        let outcome = Race20.decode(&round("2", "2SS,9DD,4CC,KHH")).unwrap();
        assert_eq!(outcome.winner(), "k of heart");
        assert!(outcome.has("even cards"));
        assert_eq!(evaluate(&Race20, "K of Spade", &outcome), Condition::Fails);
    }

    #[test]
    fn test_last_card_must_be_declared_king() {
        assert!(Race20.decode(&round("1", "2SS,9DD,4CC,KHH")).is_none());
        assert!(Race20.decode(&round("2", "2SS,9DD,KHH,4CC")).is_none());
    }

    #[test]
    fn test_win_with_market() {
        let outcome = Race20.decode(&round("2", "2SS,9DD,4CC,KHH")).unwrap();
        assert_eq!(evaluate(&Race20, "Win With 4", &outcome), Condition::Holds);
        assert_eq!(evaluate(&Race20, "Win With 5", &outcome), Condition::Fails);
    }

    #[test]
    fn test_history_is_suit_letter() {
        assert_eq!(Race20.history_code(&round("4", "KDD")), "D");
        assert_eq!(Race20.history_code(&round("9", "")), "-");
    }
}

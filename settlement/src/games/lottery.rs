//! Card Lottery.
//!
//! One card; the market is the exact rank.
//!
//! Table ids: `lottcard`. Aliases: "cardlottery".
//!
//! Win codes: the rank value `1`..`13`, which must agree with the dealt
//! card.
//!
//! Cards: exactly one token.
//!
//! The primary outcome is the exact-card market ("card 9", "card k"), so a
//! back on the drawn rank wins at tier one and a back on any other rank is a
//! recognized loss. Color, parity, and suit markets ride on the same card.
//!
//! History codes: the drawn rank token (`A`, `2`..`10`, `J`, `Q`, `K`).

use super::match_card_subject;
use crate::cards::{parse_card, parse_cards_exact};
use crate::decoder::GameDecoder;
use crate::outcome::Outcome;
use crate::registry::{FamilyCategory, FamilyInfo};
use feltline_types::RawRound;

pub struct Lottery;

const OUTCOMES: [&str; 13] = [
    "card a", "card 2", "card 3", "card 4", "card 5", "card 6", "card 7", "card 8", "card 9",
    "card 10", "card j", "card q", "card k",
];

impl GameDecoder for Lottery {
    fn family(&self) -> &'static str {
        "lottcard"
    }

    fn info(&self) -> FamilyInfo {
        FamilyInfo::new("lottcard", "Card Lottery", FamilyCategory::Cards)
    }

    fn table_ids(&self) -> &'static [&'static str] {
        &["lottcard"]
    }

    fn table_aliases(&self) -> &'static [&'static str] {
        &["cardlottery"]
    }

    fn decode(&self, round: &RawRound) -> Option<Outcome> {
        let declared: u8 = round.win.trim().parse().ok()?;
        let cards = parse_cards_exact(round.card_str(), 1)?;
        if declared != cards[0].rank {
            return None;
        }
        let winner = format!("card {}", cards[0].rank_token().to_lowercase());
        Some(
            Outcome::new(&winner)
                .card_attrs("", cards[0])
                .cards(cards)
                .mid(round.mid.clone()),
        )
    }

    fn known_outcomes(&self) -> &'static [&'static str] {
        &OUTCOMES
    }

    fn match_compound(&self, label: &str, outcome: &Outcome) -> Option<bool> {
        match_card_subject(label, "", *outcome.dealt_cards().first()?)
    }

    fn history_code(&self, round: &RawRound) -> String {
        match round.card_str().split(',').next().and_then(parse_card) {
            Some(card) => card.rank_token().to_string(),
            None => "-".to_string(),
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
    fn test_exact_card_market() {
        let outcome = Lottery.decode(&round("9", "9HH")).unwrap();
        assert_eq!(outcome.winner(), "card 9");
        assert_eq!(evaluate(&Lottery, "Card 9", &outcome), Condition::Holds);
        assert_eq!(evaluate(&Lottery, "Card K", &outcome), Condition::Fails);
    }

    #[test]
    fn test_win_code_must_be_the_rank() {
        assert!(Lottery.decode(&round("8", "9HH")).is_none());
        assert!(Lottery.decode(&round("13", "KHH")).is_some());
        assert!(Lottery.decode(&round("14", "KHH")).is_none());
    }

    #[test]
    fn test_history_is_rank_token() {
        assert_eq!(Lottery.history_code(&round("12", "QDD")), "Q");
        assert_eq!(Lottery.history_code(&round("12", "")), "-");
    }
}

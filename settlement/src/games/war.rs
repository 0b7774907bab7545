//! Casino War.
//!
//! Six positions each draw against the dealer card; every position that
//! outranks the dealer (ace high) is a winner. On this feed a rank tie goes
//! to the dealer, so a tied position simply loses.
//!
//! Table ids: `war`. Aliases: "casinowar".
//!
//! Win codes: the dealer card's rank value `1`..`13`, which must agree with
//! the dealt dealer card.
//!
//! Cards: exactly seven tokens - the dealer card first, then positions 1-6.
//!
//! Markets: "Winner N" backs position N beating the dealer; "Dealer
//! <suit|color|parity|card N>" markets ride on the dealer card.
//!
//! History codes: the dealer rank token.

use super::match_card_subject;
use crate::cards::{parse_card, parse_cards_exact};
use crate::decoder::GameDecoder;
use crate::outcome::Outcome;
use crate::registry::{FamilyCategory, FamilyInfo};
use feltline_types::RawRound;

pub struct CasinoWar;

impl GameDecoder for CasinoWar {
    fn family(&self) -> &'static str {
        "war"
    }

    fn info(&self) -> FamilyInfo {
        FamilyInfo::new("war", "Casino War", FamilyCategory::Cards)
    }

    fn table_ids(&self) -> &'static [&'static str] {
        &["war"]
    }

    fn table_aliases(&self) -> &'static [&'static str] {
        &["casinowar"]
    }

    fn decode(&self, round: &RawRound) -> Option<Outcome> {
        let declared: u8 = round.win.trim().parse().ok()?;
        let cards = parse_cards_exact(round.card_str(), 7)?;
        let dealer = cards[0];
        if declared != dealer.rank {
            return None;
        }
        let mut outcome = Outcome::new(&format!("dealer {}", dealer.rank_token()))
            .card_attrs("dealer", dealer);
        for (position, card) in cards[1..].iter().enumerate() {
            if card.rank_ace_high() > dealer.rank_ace_high() {
                outcome = outcome.attr(&format!("winner {}", position + 1));
            }
        }
        Some(outcome.cards(cards).mid(round.mid.clone()))
    }

    fn known_outcomes(&self) -> &'static [&'static str] {
        &[]
    }

    fn known_markets(&self) -> &'static [&'static str] {
        &["winner 1", "winner 2", "winner 3", "winner 4", "winner 5", "winner 6"]
    }

    fn match_compound(&self, label: &str, outcome: &Outcome) -> Option<bool> {
        match_card_subject(label, "dealer", *outcome.dealt_cards().first()?)
    }

    fn history_code(&self, round: &RawRound) -> String {
        match round.card_str().split(',').next().and_then(parse_card) {
            Some(dealer) => dealer.rank_token().to_string(),
            None => "-".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::evaluate;
    use crate::outcome::Condition;

    fn round() -> RawRound {
        // Dealer 9SS; positions: 10HH wins, 2DD loses, ASS wins (ace high),
        // 9CC ties (loses), KDD wins, 3HH loses.
        RawRound::new(
            None,
            "9",
            Some("9SS,10HH,2DD,ASS,9CC,KDD,3HH".to_string()),
            None,
        )
    }

    #[test]
    fn test_winning_positions() {
        let outcome = CasinoWar.decode(&round()).unwrap();
        assert_eq!(evaluate(&CasinoWar, "Winner 1", &outcome), Condition::Holds);
        assert_eq!(evaluate(&CasinoWar, "Winner 2", &outcome), Condition::Fails);
        assert_eq!(evaluate(&CasinoWar, "Winner 3", &outcome), Condition::Holds);
        // Ties go to the dealer.
        assert_eq!(evaluate(&CasinoWar, "Winner 4", &outcome), Condition::Fails);
        assert_eq!(evaluate(&CasinoWar, "Winner 5", &outcome), Condition::Holds);
        assert_eq!(evaluate(&CasinoWar, "Winner 6", &outcome), Condition::Fails);
    }

    #[test]
    fn test_dealer_card_markets() {
        let outcome = CasinoWar.decode(&round()).unwrap();
        assert_eq!(evaluate(&CasinoWar, "Dealer Odd", &outcome), Condition::Holds);
        assert_eq!(evaluate(&CasinoWar, "Dealer Spade", &outcome), Condition::Holds);
        assert_eq!(evaluate(&CasinoWar, "Dealer Red", &outcome), Condition::Fails);
    }

    #[test]
    fn test_win_code_must_match_dealer_card() {
        let bad = RawRound::new(
            None,
            "8",
            Some("9SS,10HH,2DD,ASS,9CC,KDD,3HH".to_string()),
            None,
        );
        assert!(CasinoWar.decode(&bad).is_none());
    }

    #[test]
    fn test_history_is_dealer_rank() {
        assert_eq!(CasinoWar.history_code(&round()), "9");
    }
}

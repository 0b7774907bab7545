//! Teen Patti Joker.
//!
//! Two-player teen patti with a center joker card that seeds its own side
//! markets.
//!
//! Table ids: `teen6`. Aliases: "teenpattijoker".
//!
//! Win codes: `1` = Player A, `2` = Player B, `0` = Tie.
//!
//! Cards: exactly seven tokens - six hand cards (Player A 0/2/4, Player B
//! 1/3/5) and the center joker last.
//!
//! Markets: "Joker Odd"/"Joker Even", "Joker Red"/"Joker Black", joker suit
//! and "Joker Card N" markets, all judged on the center card.
//!
//! History codes: `A`, `B`, `T`.

use super::match_card_subject;
use crate::cards::parse_cards_exact;
use crate::decoder::GameDecoder;
use crate::outcome::Outcome;
use crate::registry::{FamilyCategory, FamilyInfo};
use feltline_types::RawRound;

pub struct TeenJoker;

impl GameDecoder for TeenJoker {
    fn family(&self) -> &'static str {
        "teen6"
    }

    fn info(&self) -> FamilyInfo {
        FamilyInfo::new("teen6", "Teen Patti Joker", FamilyCategory::Cards)
    }

    fn table_ids(&self) -> &'static [&'static str] {
        &["teen6"]
    }

    fn table_aliases(&self) -> &'static [&'static str] {
        &["teenpattijoker"]
    }

    fn decode(&self, round: &RawRound) -> Option<Outcome> {
        let winner = match round.win.trim() {
            "1" => "player a",
            "2" => "player b",
            "0" => "tie",
            _ => return None,
        };
        let cards = parse_cards_exact(round.card_str(), 7)?;
        let joker = cards[6];
        Some(
            Outcome::new(winner)
                .card_attrs("joker", joker)
                .cards(cards)
                .mid(round.mid.clone()),
        )
    }

    fn known_outcomes(&self) -> &'static [&'static str] {
        &["player a", "player b", "tie"]
    }

    fn match_compound(&self, label: &str, outcome: &Outcome) -> Option<bool> {
        let cards = outcome.dealt_cards();
        if cards.len() != 7 {
            return None;
        }
        match_card_subject(label, "joker", cards[6])
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

    fn round() -> RawRound {
        // Joker is the last token: 7HH (red, odd).
        RawRound::new(
            None,
            "2",
            Some("ASS,2HH,3DD,KSS,QHH,JDD,7HH".to_string()),
            None,
        )
    }

    #[test]
    fn test_joker_markets() {
        let outcome = TeenJoker.decode(&round()).unwrap();
        assert_eq!(evaluate(&TeenJoker, "Joker Odd", &outcome), Condition::Holds);
        assert_eq!(evaluate(&TeenJoker, "Joker Red", &outcome), Condition::Holds);
        assert_eq!(evaluate(&TeenJoker, "Joker Even", &outcome), Condition::Fails);
        assert_eq!(evaluate(&TeenJoker, "Joker Card 7", &outcome), Condition::Holds);
        assert_eq!(evaluate(&TeenJoker, "Joker Card K", &outcome), Condition::Fails);
    }

    #[test]
    fn test_winner_and_unknown() {
        let outcome = TeenJoker.decode(&round()).unwrap();
        assert_eq!(outcome.winner(), "player b");
        assert_eq!(evaluate(&TeenJoker, "Pair Plus A", &outcome), Condition::Unknown);
    }

    #[test]
    fn test_requires_seven_cards() {
        let round = RawRound::new(None, "1", Some("ASS,2HH,3DD,KSS,QHH,JDD".to_string()), None);
        assert!(TeenJoker.decode(&round).is_none());
    }
}

//! Teen Patti Test.
//!
//! Three hands race: Tiger, Lion, Dragon.
//!
//! Table ids: `teen9`. Aliases: "teenpattitest".
//!
//! Win codes: `1` = Tiger, `2` = Lion, `3` = Dragon, `0` = Tie.
//!
//! Cards: exactly nine tokens dealt in rotation - Tiger holds 0/3/6, Lion
//! 1/4/7, Dragon 2/5/8.
//!
//! Markets: "Pair Plus Tiger" / "Pair Plus Lion" / "Pair Plus Dragon" pay on
//! pair or better for that hand.
//!
//! History codes: `T`, `L`, `D`.

use crate::cards::parse_cards_exact;
use crate::decoder::GameDecoder;
use crate::hand::classify;
use crate::outcome::Outcome;
use crate::registry::{FamilyCategory, FamilyInfo};
use feltline_types::RawRound;

pub struct TeenTest;

const HANDS: [(&str, usize); 3] = [("tiger", 0), ("lion", 1), ("dragon", 2)];

impl GameDecoder for TeenTest {
    fn family(&self) -> &'static str {
        "teen9"
    }

    fn info(&self) -> FamilyInfo {
        FamilyInfo::new("teen9", "Teen Patti Test", FamilyCategory::Cards)
    }

    fn table_ids(&self) -> &'static [&'static str] {
        &["teen9"]
    }

    fn table_aliases(&self) -> &'static [&'static str] {
        &["teenpattitest"]
    }

    fn decode(&self, round: &RawRound) -> Option<Outcome> {
        let winner = match round.win.trim() {
            "1" => "tiger",
            "2" => "lion",
            "3" => "dragon",
            "0" => "tie",
            _ => return None,
        };
        let cards = parse_cards_exact(round.card_str(), 9)?;
        let mut outcome = Outcome::new(winner).mid(round.mid.clone());
        for (name, offset) in HANDS {
            let hand = [cards[offset], cards[offset + 3], cards[offset + 6]];
            if classify(hand).qualifies_pair_plus() {
                outcome = outcome.attr(&format!("pair plus {name}"));
            }
        }
        Some(outcome.cards(cards))
    }

    fn known_outcomes(&self) -> &'static [&'static str] {
        &["tiger", "lion", "dragon", "tie"]
    }

    fn known_markets(&self) -> &'static [&'static str] {
        &["pair plus tiger", "pair plus lion", "pair plus dragon"]
    }

    fn history_code(&self, round: &RawRound) -> String {
        match round.win.trim() {
            "1" => "T",
            "2" => "L",
            "3" => "D",
            "0" => "X",
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
        // Tiger: A,A,2 (pair); Lion: 3,7,J (high); Dragon: 5,5,5 (trail).
        RawRound::new(
            None,
            win,
            Some("ASS,3HH,5DD,AHH,7CC,5SS,2DD,JSS,5HH".to_string()),
            None,
        )
    }

    #[test]
    fn test_decode_three_hand_winner() {
        let outcome = TeenTest.decode(&round("3")).unwrap();
        assert_eq!(outcome.winner(), "dragon");
        assert_eq!(evaluate(&TeenTest, "Lion", &outcome), Condition::Fails);
    }

    #[test]
    fn test_pair_plus_per_hand() {
        let outcome = TeenTest.decode(&round("1")).unwrap();
        assert!(outcome.has("pair plus tiger"));
        assert!(!outcome.has("pair plus lion"));
        assert!(outcome.has("pair plus dragon"));
    }

    #[test]
    fn test_requires_nine_cards() {
        let short = RawRound::new(None, "1", Some("ASS,3HH,5DD".to_string()), None);
        assert!(TeenTest.decode(&short).is_none());
    }

    #[test]
    fn test_history() {
        assert_eq!(TeenTest.history_code(&round("1")), "T");
        assert_eq!(TeenTest.history_code(&round("3")), "D");
    }
}

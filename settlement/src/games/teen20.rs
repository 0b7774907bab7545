//! Teen Patti 20-20.
//!
//! Table ids: `teen20`. Aliases: "teenpatti2020".
//!
//! Win codes: `1` = Player A, `2` = Player B, `0` = Tie.
//!
//! Cards: exactly six tokens, dealt alternately; Player A holds positions
//! 0/2/4 and Player B holds 1/3/5.
//!
//! rdesc: segment 0 repeats the winner when present; not required.
//!
//! Markets: "Pair Plus A" / "Pair Plus B" pay on pair or better for that
//! hand (derived from the dealt cards). Compound labels of the form
//! "<player> <suit|color|parity|card N>" are judged on that player's first
//! dealt card. "Perfect Pair" exists at the cashier but the feed never
//! reports it; it settles as a fixed loss.
//!
//! History codes: `A`, `B`, `T`.

use super::match_card_subject;
use crate::cards::parse_cards_exact;
use crate::decoder::GameDecoder;
use crate::hand::classify;
use crate::outcome::Outcome;
use crate::registry::{FamilyCategory, FamilyInfo};
use feltline_types::RawRound;

pub struct Teen20;

impl GameDecoder for Teen20 {
    fn family(&self) -> &'static str {
        "teen20"
    }

    fn info(&self) -> FamilyInfo {
        FamilyInfo::new("teen20", "Teen Patti 20-20", FamilyCategory::Cards)
    }

    fn table_ids(&self) -> &'static [&'static str] {
        &["teen20"]
    }

    fn table_aliases(&self) -> &'static [&'static str] {
        &["teenpatti2020"]
    }

    fn decode(&self, round: &RawRound) -> Option<Outcome> {
        let winner = match round.win.trim() {
            "1" => "player a",
            "2" => "player b",
            "0" => "tie",
            _ => return None,
        };
        let cards = parse_cards_exact(round.card_str(), 6)?;
        let hand_a = [cards[0], cards[2], cards[4]];
        let hand_b = [cards[1], cards[3], cards[5]];

        let mut outcome = Outcome::new(winner).mid(round.mid.clone());
        if classify(hand_a).qualifies_pair_plus() {
            outcome = outcome.attr("pair plus a");
        }
        if classify(hand_b).qualifies_pair_plus() {
            outcome = outcome.attr("pair plus b");
        }
        Some(outcome.cards(cards))
    }

    fn known_outcomes(&self) -> &'static [&'static str] {
        &["player a", "player b", "tie"]
    }

    fn known_markets(&self) -> &'static [&'static str] {
        &["pair plus a", "pair plus b"]
    }

    fn match_compound(&self, label: &str, outcome: &Outcome) -> Option<bool> {
        let cards = outcome.dealt_cards();
        if cards.len() != 6 {
            return None;
        }
        match_card_subject(label, "player a", cards[0])
            .or_else(|| match_card_subject(label, "player b", cards[1]))
    }

    fn unverifiable(&self, label: &str) -> bool {
        label == "perfect pair"
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

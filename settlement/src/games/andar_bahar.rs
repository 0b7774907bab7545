//! Andar Bahar tables.
//!
//! `ab20` is the classic table; `abj` adds joker side markets and
//! dealt-count parity markets.
//!
//! Win codes: `1` = Andar, `2` = Bahar.
//!
//! Cards: the joker first, then the alternating run ending on the matching
//! card (andar side first). At least two tokens; the feed never sends more
//! than nine.
//!
//! Markets (`abj` only): "Joker Odd"/"Joker Even"/"Joker Red"/"Joker Black",
//! joker suit and "Joker Card N" markets on the joker card, and
//! "Odd Cards"/"Even Cards" on the count of run cards dealt after the joker.
//!
//! History codes: `A`, `B`.

use super::match_card_subject;
use crate::cards::parse_cards;
use crate::decoder::GameDecoder;
use crate::outcome::Outcome;
use crate::registry::{FamilyCategory, FamilyInfo};
use feltline_types::RawRound;

fn decode(round: &RawRound, joker_markets: bool) -> Option<Outcome> {
    let winner = match round.win.trim() {
        "1" => "andar",
        "2" => "bahar",
        _ => return None,
    };
    let cards = parse_cards(round.card_str())?;
    if cards.len() < 2 || cards.len() > 9 {
        return None;
    }
    let mut outcome = Outcome::new(winner).mid(round.mid.clone());
    if joker_markets {
        outcome = outcome.card_attrs("joker", cards[0]);
        let run = cards.len() - 1;
        outcome = outcome.attr(if run % 2 == 1 { "odd cards" } else { "even cards" });
    }
    Some(outcome.cards(cards))
}

fn history_code(round: &RawRound) -> String {
    match round.win.trim() {
        "1" => "A",
        "2" => "B",
        _ => "-",
    }
    .to_string()
}

/// Classic Andar Bahar.
pub struct Ab20;

impl GameDecoder for Ab20 {
    fn family(&self) -> &'static str {
        "ab20"
    }

    fn info(&self) -> FamilyInfo {
        FamilyInfo::new("ab20", "Andar Bahar", FamilyCategory::Cards)
    }

    fn table_ids(&self) -> &'static [&'static str] {
        &["ab20"]
    }

    fn table_aliases(&self) -> &'static [&'static str] {
        &["andarbahar"]
    }

    fn decode(&self, round: &RawRound) -> Option<Outcome> {
        decode(round, false)
    }

    fn known_outcomes(&self) -> &'static [&'static str] {
        &["andar", "bahar"]
    }

    fn history_code(&self, round: &RawRound) -> String {
        history_code(round)
    }
}

/// Andar Bahar 2, with joker side markets.
pub struct Abj;

impl GameDecoder for Abj {
    fn family(&self) -> &'static str {
        "abj"
    }

    fn info(&self) -> FamilyInfo {
        FamilyInfo::new("abj", "Andar Bahar 2", FamilyCategory::Cards)
    }

    fn table_ids(&self) -> &'static [&'static str] {
        &["abj", "ab2"]
    }

    fn decode(&self, round: &RawRound) -> Option<Outcome> {
        decode(round, true)
    }

    fn known_outcomes(&self) -> &'static [&'static str] {
        &["andar", "bahar"]
    }

    fn known_markets(&self) -> &'static [&'static str] {
        &["odd cards", "even cards"]
    }

    fn match_compound(&self, label: &str, outcome: &Outcome) -> Option<bool> {
        let cards = outcome.dealt_cards();
        match_card_subject(label, "joker", *cards.first()?)
    }

    fn history_code(&self, round: &RawRound) -> String {
        history_code(round)
    }
}

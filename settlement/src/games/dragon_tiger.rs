//! Dragon Tiger tables.
//!
//! Three tables share one feed contract: `dt20` (20-20), `dt202` (20-20 B),
//! and `dt6` (One Day).
//!
//! Win codes: `1` = Dragon, `2` = Tiger, `0` = Tie.
//!
//! Cards: exactly two tokens, dragon first.
//!
//! Markets: "Pair" (equal ranks), plus per-side card markets
//! ("Dragon Red", "Tiger Odd", "Dragon Spade", "Tiger Card 7", ...). Suit
//! and parity markets that hold appear in the attribute set; the compound
//! matcher recognizes the losing direction too.
//!
//! History codes: `D`, `T`, `X` (tie).

use super::match_card_subject;
use crate::cards::parse_cards_exact;
use crate::decoder::GameDecoder;
use crate::outcome::Outcome;
use crate::registry::{FamilyCategory, FamilyInfo};
use feltline_types::RawRound;

fn decode(round: &RawRound) -> Option<Outcome> {
    let winner = match round.win.trim() {
        "1" => "dragon",
        "2" => "tiger",
        "0" => "tie",
        _ => return None,
    };
    let cards = parse_cards_exact(round.card_str(), 2)?;
    let mut outcome = Outcome::new(winner)
        .card_attrs("dragon", cards[0])
        .card_attrs("tiger", cards[1]);
    if cards[0].rank == cards[1].rank {
        outcome = outcome.attr("pair");
    }
    Some(outcome.cards(cards).mid(round.mid.clone()))
}

fn match_compound(label: &str, outcome: &Outcome) -> Option<bool> {
    let cards = outcome.dealt_cards();
    if cards.len() != 2 {
        return None;
    }
    match_card_subject(label, "dragon", cards[0])
        .or_else(|| match_card_subject(label, "tiger", cards[1]))
}

fn history_code(round: &RawRound) -> String {
    match round.win.trim() {
        "1" => "D",
        "2" => "T",
        "0" => "X",
        _ => "-",
    }
    .to_string()
}

const OUTCOMES: [&str; 3] = ["dragon", "tiger", "tie"];

macro_rules! dragon_tiger_decoder {
    ($ty:ident, $family:expr, $name:expr, $ids:expr, $aliases:expr) => {
        pub struct $ty;

        impl GameDecoder for $ty {
            fn family(&self) -> &'static str {
                $family
            }

            fn info(&self) -> FamilyInfo {
                FamilyInfo::new($family, $name, FamilyCategory::Cards)
            }

            fn table_ids(&self) -> &'static [&'static str] {
                $ids
            }

            fn table_aliases(&self) -> &'static [&'static str] {
                $aliases
            }

            fn decode(&self, round: &RawRound) -> Option<Outcome> {
                decode(round)
            }

            fn known_outcomes(&self) -> &'static [&'static str] {
                &OUTCOMES
            }

            fn known_markets(&self) -> &'static [&'static str] {
                &["pair"]
            }

            fn match_compound(&self, label: &str, outcome: &Outcome) -> Option<bool> {
                match_compound(label, outcome)
            }

            fn history_code(&self, round: &RawRound) -> String {
                history_code(round)
            }
        }
    };
}

dragon_tiger_decoder!(Dt20, "dt20", "Dragon Tiger 20-20", &["dt20"], &["dragontiger2020"]);
dragon_tiger_decoder!(Dt202, "dt202", "Dragon Tiger 20-20 B", &["dt202"], &[]);
dragon_tiger_decoder!(Dt6, "dt6", "Dragon Tiger One Day", &["dt6"], &["dragontigeroneday"]);

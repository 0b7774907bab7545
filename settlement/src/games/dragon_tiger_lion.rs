//! Dragon Tiger Lion.
//!
//! Three-way single-card race.
//!
//! Table ids: `dtl20`. Aliases: "dragontigerlion".
//!
//! Win codes: `1` = Dragon, `2` = Tiger, `3` = Lion. The upstream resolves
//! rank ties itself, so there is no tie code.
//!
//! Cards: exactly three tokens - dragon, tiger, lion.
//!
//! Markets: per-side card markets ("Dragon Red", "Lion Even",
//! "Tiger Card Q", ...).
//!
//! History codes: `D`, `T`, `L`.

use super::match_card_subject;
use crate::cards::parse_cards_exact;
use crate::decoder::GameDecoder;
use crate::outcome::Outcome;
use crate::registry::{FamilyCategory, FamilyInfo};
use feltline_types::RawRound;

pub struct Dtl20;

impl GameDecoder for Dtl20 {
    fn family(&self) -> &'static str {
        "dtl20"
    }

    fn info(&self) -> FamilyInfo {
        FamilyInfo::new("dtl20", "Dragon Tiger Lion", FamilyCategory::Cards)
    }

    fn table_ids(&self) -> &'static [&'static str] {
        &["dtl20"]
    }

    fn table_aliases(&self) -> &'static [&'static str] {
        &["dragontigerlion"]
    }

    fn decode(&self, round: &RawRound) -> Option<Outcome> {
        let winner = match round.win.trim() {
            "1" => "dragon",
            "2" => "tiger",
            "3" => "lion",
            _ => return None,
        };
        let cards = parse_cards_exact(round.card_str(), 3)?;
        Some(
            Outcome::new(winner)
                .card_attrs("dragon", cards[0])
                .card_attrs("tiger", cards[1])
                .card_attrs("lion", cards[2])
                .cards(cards)
                .mid(round.mid.clone()),
        )
    }

    fn known_outcomes(&self) -> &'static [&'static str] {
        &["dragon", "tiger", "lion"]
    }

    fn match_compound(&self, label: &str, outcome: &Outcome) -> Option<bool> {
        let cards = outcome.dealt_cards();
        if cards.len() != 3 {
            return None;
        }
        match_card_subject(label, "dragon", cards[0])
            .or_else(|| match_card_subject(label, "tiger", cards[1]))
            .or_else(|| match_card_subject(label, "lion", cards[2]))
    }

    fn history_code(&self, round: &RawRound) -> String {
        match round.win.trim() {
            "1" => "D",
            "2" => "T",
            "3" => "L",
            _ => "-",
        }
        .to_string()
    }
}

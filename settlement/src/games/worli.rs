//! Worli matka tables.
//!
//! Matka draws from the A-10 ranks (court cards never deal); each card
//! contributes its rank modulo ten as a digit.
//!
//! `worli` draws a three-card pana; the round's ank is the digit sum modulo
//! ten. `worli2` (Instant Worli) draws a single card whose digit is the ank
//! directly.
//!
//! Win codes: the ank `0`..`9`, which must agree with the dealt cards.
//!
//! Markets:
//! - "Line 1" (ank 1-5) and "Line 2" (ank 6-0).
//! - "Odd"/"Even" on the ank.
//! - On the pana table: "SP" (all digits distinct), "DP" (exactly one
//!   pair), "TP" (all three alike).
//! - Compound "Single N" backs the exact ank.
//!
//! History codes: the ank digit.

use crate::cards::{parse_cards_exact, Card};
use crate::decoder::GameDecoder;
use crate::label::trailing_number;
use crate::outcome::Outcome;
use crate::registry::{FamilyCategory, FamilyInfo};
use feltline_types::RawRound;

fn digit_for(card: Card) -> Option<i64> {
    if card.rank > 10 {
        return None;
    }
    Some((card.rank % 10) as i64)
}

fn ank_attrs(outcome: Outcome, ank: i64) -> Outcome {
    outcome
        .attr(if (1..=5).contains(&ank) { "line 1" } else { "line 2" })
        .attr(if ank % 2 == 1 { "odd" } else { "even" })
        .total(ank)
}

fn match_single(label: &str, outcome: &Outcome) -> Option<bool> {
    let (head, number) = trailing_number(label)?;
    if head != "single" || !(0..=9).contains(&number) {
        return None;
    }
    Some(Some(number) == outcome.declared_total())
}

const ANKS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// Worli Matka: three-card pana.
pub struct Worli;

impl GameDecoder for Worli {
    fn family(&self) -> &'static str {
        "worli"
    }

    fn info(&self) -> FamilyInfo {
        FamilyInfo::new("worli", "Worli Matka", FamilyCategory::Matka)
    }

    fn table_ids(&self) -> &'static [&'static str] {
        &["worli"]
    }

    fn table_aliases(&self) -> &'static [&'static str] {
        &["worlimatka"]
    }

    fn decode(&self, round: &RawRound) -> Option<Outcome> {
        let declared: i64 = round.win.trim().parse().ok()?;
        let cards = parse_cards_exact(round.card_str(), 3)?;
        let digits = [
            digit_for(cards[0])?,
            digit_for(cards[1])?,
            digit_for(cards[2])?,
        ];
        let ank = digits.iter().sum::<i64>() % 10;
        if declared != ank {
            return None;
        }
        let distinct = {
            let mut sorted = digits.to_vec();
            sorted.sort_unstable();
            sorted.dedup();
            sorted.len()
        };
        let pana = match distinct {
            3 => "sp",
            2 => "dp",
            _ => "tp",
        };
        let outcome = ank_attrs(Outcome::new(&ank.to_string()), ank).attr(pana);
        Some(outcome.cards(cards).mid(round.mid.clone()))
    }

    fn known_outcomes(&self) -> &'static [&'static str] {
        &ANKS
    }

    fn known_markets(&self) -> &'static [&'static str] {
        &["line 1", "line 2", "odd", "even", "sp", "dp", "tp"]
    }

    fn match_compound(&self, label: &str, outcome: &Outcome) -> Option<bool> {
        match_single(label, outcome)
    }

    fn history_code(&self, round: &RawRound) -> String {
        match round.win.trim().parse::<i64>() {
            Ok(ank) if (0..=9).contains(&ank) => ank.to_string(),
            _ => "-".to_string(),
        }
    }
}

/// Instant Worli: single-card ank.
pub struct InstantWorli;

impl GameDecoder for InstantWorli {
    fn family(&self) -> &'static str {
        "worli2"
    }

    fn info(&self) -> FamilyInfo {
        FamilyInfo::new("worli2", "Instant Worli", FamilyCategory::Matka)
    }

    fn table_ids(&self) -> &'static [&'static str] {
        &["worli2"]
    }

    fn table_aliases(&self) -> &'static [&'static str] {
        &["instantworli"]
    }

    fn decode(&self, round: &RawRound) -> Option<Outcome> {
        let declared: i64 = round.win.trim().parse().ok()?;
        let cards = parse_cards_exact(round.card_str(), 1)?;
        let ank = digit_for(cards[0])?;
        if declared != ank {
            return None;
        }
        let outcome = ank_attrs(Outcome::new(&ank.to_string()), ank);
        Some(outcome.cards(cards).mid(round.mid.clone()))
    }

    fn known_outcomes(&self) -> &'static [&'static str] {
        &ANKS
    }

    fn known_markets(&self) -> &'static [&'static str] {
        &["line 1", "line 2", "odd", "even"]
    }

    fn match_compound(&self, label: &str, outcome: &Outcome) -> Option<bool> {
        match_single(label, outcome)
    }

    fn history_code(&self, round: &RawRound) -> String {
        match round.win.trim().parse::<i64>() {
            Ok(ank) if (0..=9).contains(&ank) => ank.to_string(),
            _ => "-".to_string(),
        }
    }
}

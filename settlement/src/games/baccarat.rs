//! Baccarat tables.
//!
//! Two tables share one feed contract: `baccarat` (A) and `baccarat2` (B).
//!
//! Win codes: `1` = Player, `2` = Banker, `3` = Tie.
//!
//! Cards: four to six tokens in dealing order, kept for audit; hand
//! composition is not reconstructed from them because the feed does not
//! mark which side drew the third card.
//!
//! rdesc: segment 0 is the winner, optionally with the winning points in a
//! parenthesized suffix ("Banker(8)"); later segments carry the side flags
//! the feed confirmed: "Player Pair", "Banker Pair", and on the A table
//! "Big"/"Small". Only flags the feed reports can pay.
//!
//! "Perfect Pair" and "Either Pair" exist at the cashier but are never
//! reported by this feed; they settle as fixed losses.
//!
//! History codes: `P`, `B`, `T`.

use crate::cards::parse_cards;
use crate::decoder::GameDecoder;
use crate::label::{parenthesized_total, split_rdesc};
use crate::outcome::Outcome;
use crate::registry::{FamilyCategory, FamilyInfo};
use feltline_types::RawRound;

fn decode(round: &RawRound, size_flags: bool) -> Option<Outcome> {
    let winner = match round.win.trim() {
        "1" => "player",
        "2" => "banker",
        "3" => "tie",
        _ => return None,
    };
    let cards = parse_cards(round.card_str())?;
    if !(4..=6).contains(&cards.len()) {
        return None;
    }
    let mut outcome = Outcome::new(winner).cards(cards).mid(round.mid.clone());
    let segments = split_rdesc(round.rdesc_str());
    if let Some(points) = segments.first().and_then(|s| parenthesized_total(s)) {
        outcome = outcome.total(points);
    }
    for segment in segments.iter().skip(1) {
        let confirmed = matches!(segment.as_str(), "player pair" | "banker pair")
            || (size_flags && matches!(segment.as_str(), "big" | "small"));
        if confirmed {
            outcome = outcome.attr(segment);
        }
    }
    Some(outcome)
}

fn history_code(round: &RawRound) -> String {
    match round.win.trim() {
        "1" => "P",
        "2" => "B",
        "3" => "T",
        _ => "-",
    }
    .to_string()
}

const OUTCOMES: [&str; 3] = ["player", "banker", "tie"];

fn unverifiable(label: &str) -> bool {
    matches!(label, "perfect pair" | "either pair")
}

/// Baccarat A, with Big/Small side markets.
pub struct Baccarat;

impl GameDecoder for Baccarat {
    fn family(&self) -> &'static str {
        "baccarat"
    }

    fn info(&self) -> FamilyInfo {
        FamilyInfo::new("baccarat", "Baccarat A", FamilyCategory::Cards)
    }

    fn table_ids(&self) -> &'static [&'static str] {
        &["baccarat"]
    }

    fn decode(&self, round: &RawRound) -> Option<Outcome> {
        decode(round, true)
    }

    fn known_outcomes(&self) -> &'static [&'static str] {
        &OUTCOMES
    }

    fn known_markets(&self) -> &'static [&'static str] {
        &["player pair", "banker pair", "big", "small"]
    }

    fn unverifiable(&self, label: &str) -> bool {
        unverifiable(label)
    }

    fn history_code(&self, round: &RawRound) -> String {
        history_code(round)
    }
}

/// Baccarat B: pair flags only, no size markets.
pub struct Baccarat2;

impl GameDecoder for Baccarat2 {
    fn family(&self) -> &'static str {
        "baccarat2"
    }

    fn info(&self) -> FamilyInfo {
        FamilyInfo::new("baccarat2", "Baccarat B", FamilyCategory::Cards)
    }

    fn table_ids(&self) -> &'static [&'static str] {
        &["baccarat2"]
    }

    fn decode(&self, round: &RawRound) -> Option<Outcome> {
        decode(round, false)
    }

    fn known_outcomes(&self) -> &'static [&'static str] {
        &OUTCOMES
    }

    fn known_markets(&self) -> &'static [&'static str] {
        &["player pair", "banker pair"]
    }

    fn unverifiable(&self, label: &str) -> bool {
        unverifiable(label)
    }

    fn history_code(&self, round: &RawRound) -> String {
        history_code(round)
    }
}

//! Lucky 7 tables.
//!
//! One card against the seven: `lucky7` (A) and `lucky7eu` (B).
//!
//! Win codes: `1` = Under 7 (A-6), `2` = Over 7 (8-K), `0` = Seven. The win
//! code and the dealt card must agree or the round is unparseable.
//!
//! Cards: exactly one token.
//!
//! Markets: "Card N" on the exact rank for both tables; the B table also
//! runs "Odd"/"Even", "Red"/"Black" and suit markets on the drawn card.
//!
//! History codes: `L`, `H`, `7`.

use super::{match_card_rank, match_card_subject};
use crate::cards::{parse_cards_exact, Card};
use crate::decoder::GameDecoder;
use crate::outcome::Outcome;
use crate::registry::{FamilyCategory, FamilyInfo};
use feltline_types::RawRound;

fn side_for(card: Card) -> &'static str {
    if card.rank < 7 {
        "under 7"
    } else if card.rank > 7 {
        "over 7"
    } else {
        "seven"
    }
}

fn decode(round: &RawRound, rich_markets: bool) -> Option<Outcome> {
    let winner = match round.win.trim() {
        "1" => "under 7",
        "2" => "over 7",
        "0" => "seven",
        _ => return None,
    };
    let cards = parse_cards_exact(round.card_str(), 1)?;
    if side_for(cards[0]) != winner {
        return None;
    }
    let mut outcome = Outcome::new(winner);
    outcome = if rich_markets {
        outcome.card_attrs("", cards[0])
    } else {
        outcome.attr(&format!("card {}", cards[0].rank_token().to_lowercase()))
    };
    Some(outcome.cards(cards).mid(round.mid.clone()))
}

fn history_code(round: &RawRound) -> String {
    match round.win.trim() {
        "1" => "L",
        "2" => "H",
        "0" => "7",
        _ => "-",
    }
    .to_string()
}

const OUTCOMES: [&str; 3] = ["under 7", "over 7", "seven"];

/// Lucky 7 A: under/over/seven and exact-card markets only.
pub struct Lucky7;

impl GameDecoder for Lucky7 {
    fn family(&self) -> &'static str {
        "lucky7"
    }

    fn info(&self) -> FamilyInfo {
        FamilyInfo::new("lucky7", "Lucky 7 A", FamilyCategory::Cards)
    }

    fn table_ids(&self) -> &'static [&'static str] {
        &["lucky7"]
    }

    fn decode(&self, round: &RawRound) -> Option<Outcome> {
        decode(round, false)
    }

    fn known_outcomes(&self) -> &'static [&'static str] {
        &OUTCOMES
    }

    fn match_compound(&self, label: &str, outcome: &Outcome) -> Option<bool> {
        match_card_rank(label, *outcome.dealt_cards().first()?)
    }

    fn history_code(&self, round: &RawRound) -> String {
        history_code(round)
    }
}

/// Lucky 7 B: adds parity, color, and suit markets.
pub struct Lucky7Eu;

impl GameDecoder for Lucky7Eu {
    fn family(&self) -> &'static str {
        "lucky7eu"
    }

    fn info(&self) -> FamilyInfo {
        FamilyInfo::new("lucky7eu", "Lucky 7 B", FamilyCategory::Cards)
    }

    fn table_ids(&self) -> &'static [&'static str] {
        &["lucky7eu"]
    }

    fn decode(&self, round: &RawRound) -> Option<Outcome> {
        decode(round, true)
    }

    fn known_outcomes(&self) -> &'static [&'static str] {
        &OUTCOMES
    }

    fn match_compound(&self, label: &str, outcome: &Outcome) -> Option<bool> {
        match_card_subject(label, "", *outcome.dealt_cards().first()?)
    }

    fn history_code(&self, round: &RawRound) -> String {
        history_code(round)
    }
}

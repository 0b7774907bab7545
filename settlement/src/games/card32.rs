//! 32 Cards tables.
//!
//! Four seats numbered 8 to 11, each seeded with its number and dealt one
//! card from the 32-card deck (ranks 6-K); highest seed-plus-rank total
//! wins. `card32` is the A table; `card32eu` (B) adds markets on the
//! winning total and per-seat card markets.
//!
//! Win codes: `1` = Player 8, `2` = Player 9, `3` = Player 10,
//! `4` = Player 11.
//!
//! Cards: exactly four tokens, seats in order 8, 9, 10, 11; ranks must be
//! 6 or higher.
//!
//! rdesc: segment 0 repeats the winner with its total in a parenthesized
//! suffix ("Player 10(19)"); the total is recomputed from the cards when
//! the segment is missing.
//!
//! Markets (`card32eu`): "Odd"/"Even" on the winning total, and
//! "<seat> <suit|color|parity|card N>" on each seat's card.
//!
//! History codes: the winning seat number, `8`..`11`.

use super::match_card_subject;
use crate::cards::parse_cards_exact;
use crate::decoder::GameDecoder;
use crate::label::{parenthesized_total, split_rdesc};
use crate::outcome::Outcome;
use crate::registry::{FamilyCategory, FamilyInfo};
use feltline_types::RawRound;

const SEATS: [&str; 4] = ["player 8", "player 9", "player 10", "player 11"];

fn decode(round: &RawRound, rich_markets: bool) -> Option<Outcome> {
    let seat: usize = match round.win.trim() {
        "1" => 0,
        "2" => 1,
        "3" => 2,
        "4" => 3,
        _ => return None,
    };
    let cards = parse_cards_exact(round.card_str(), 4)?;
    if cards.iter().any(|c| c.rank < 6) {
        return None;
    }
    let computed = (seat as i64 + 8) + cards[seat].rank as i64;
    let declared = split_rdesc(round.rdesc_str())
        .first()
        .and_then(|s| parenthesized_total(s));
    let total = declared.unwrap_or(computed);

    let mut outcome = Outcome::new(SEATS[seat]).total(total);
    if rich_markets {
        outcome = outcome.attr(if total % 2 == 1 { "odd" } else { "even" });
    }
    Some(outcome.cards(cards).mid(round.mid.clone()))
}

fn history_code(round: &RawRound) -> String {
    match round.win.trim() {
        "1" => "8",
        "2" => "9",
        "3" => "10",
        "4" => "11",
        _ => "-",
    }
    .to_string()
}

/// 32 Cards A.
pub struct Card32;

impl GameDecoder for Card32 {
    fn family(&self) -> &'static str {
        "card32"
    }

    fn info(&self) -> FamilyInfo {
        FamilyInfo::new("card32", "32 Cards A", FamilyCategory::Cards)
    }

    fn table_ids(&self) -> &'static [&'static str] {
        &["card32"]
    }

    fn table_aliases(&self) -> &'static [&'static str] {
        &["32cards"]
    }

    fn decode(&self, round: &RawRound) -> Option<Outcome> {
        decode(round, false)
    }

    fn known_outcomes(&self) -> &'static [&'static str] {
        &SEATS
    }

    fn history_code(&self, round: &RawRound) -> String {
        history_code(round)
    }
}

/// 32 Cards B, with total-parity and per-seat card markets.
pub struct Card32Eu;

impl GameDecoder for Card32Eu {
    fn family(&self) -> &'static str {
        "card32eu"
    }

    fn info(&self) -> FamilyInfo {
        FamilyInfo::new("card32eu", "32 Cards B", FamilyCategory::Cards)
    }

    fn table_ids(&self) -> &'static [&'static str] {
        &["card32eu"]
    }

    fn decode(&self, round: &RawRound) -> Option<Outcome> {
        decode(round, true)
    }

    fn known_outcomes(&self) -> &'static [&'static str] {
        &SEATS
    }

    fn known_markets(&self) -> &'static [&'static str] {
        &["odd", "even"]
    }

    fn match_compound(&self, label: &str, outcome: &Outcome) -> Option<bool> {
        let cards = outcome.dealt_cards();
        if cards.len() != 4 {
            return None;
        }
        SEATS
            .iter()
            .zip(cards)
            .find_map(|(seat, card)| match_card_subject(label, seat, *card))
    }

    fn history_code(&self, round: &RawRound) -> String {
        history_code(round)
    }
}

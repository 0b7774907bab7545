//! Poker tables.
//!
//! Hold'em-style feed tables: `poker20` (20-20, two seats), `poker` (One
//! Day, two seats), and `poker6` (six seats).
//!
//! Two-seat tables:
//! - Win codes: `1` = Player A, `2` = Player B, `0` = Tie.
//! - Cards: exactly nine tokens - A's hole cards 0/1, B's hole cards 2/3,
//!   board 4-8.
//!
//! Six-seat table:
//! - Win codes: `1`..`6` = the winning seat.
//! - Cards: exactly five tokens - the board only; hole cards stay at the
//!   studio.
//!
//! rdesc: segment 0 is the winner; segment 1, when present, names the
//! winning hand ("Two Pair", "Flush", ...). On tables that run hand
//! markets the name joins the attribute set; unknown names are dropped
//! rather than failing the round.
//!
//! History codes: `A`/`B`/`T` on two-seat tables, the seat digit on six.

use crate::cards::parse_cards_exact;
use crate::decoder::GameDecoder;
use crate::label::split_rdesc;
use crate::outcome::Outcome;
use crate::registry::{FamilyCategory, FamilyInfo};
use feltline_types::RawRound;

const HAND_NAMES: [&str; 10] = [
    "high card",
    "one pair",
    "two pair",
    "three of a kind",
    "straight",
    "flush",
    "full house",
    "four of a kind",
    "straight flush",
    "royal flush",
];

fn winning_hand(round: &RawRound) -> Option<String> {
    split_rdesc(round.rdesc_str())
        .get(1)
        .filter(|name| HAND_NAMES.contains(&name.as_str()))
        .cloned()
}

fn decode_two_seat(round: &RawRound, hand_markets: bool) -> Option<Outcome> {
    let winner = match round.win.trim() {
        "1" => "player a",
        "2" => "player b",
        "0" => "tie",
        _ => return None,
    };
    let cards = parse_cards_exact(round.card_str(), 9)?;
    let mut outcome = Outcome::new(winner);
    if hand_markets {
        if let Some(hand) = winning_hand(round) {
            outcome = outcome.attr(&hand);
        }
    }
    Some(outcome.cards(cards).mid(round.mid.clone()))
}

fn two_seat_history(round: &RawRound) -> String {
    match round.win.trim() {
        "1" => "A",
        "2" => "B",
        "0" => "T",
        _ => "-",
    }
    .to_string()
}

/// Poker 20-20, with winning-hand markets.
pub struct Poker20;

impl GameDecoder for Poker20 {
    fn family(&self) -> &'static str {
        "poker20"
    }

    fn info(&self) -> FamilyInfo {
        FamilyInfo::new("poker20", "Poker 20-20", FamilyCategory::Cards)
    }

    fn table_ids(&self) -> &'static [&'static str] {
        &["poker20"]
    }

    fn decode(&self, round: &RawRound) -> Option<Outcome> {
        decode_two_seat(round, true)
    }

    fn known_outcomes(&self) -> &'static [&'static str] {
        &["player a", "player b", "tie"]
    }

    fn known_markets(&self) -> &'static [&'static str] {
        &HAND_NAMES
    }

    fn history_code(&self, round: &RawRound) -> String {
        two_seat_history(round)
    }
}

/// Poker One Day: the two player backs only.
pub struct PokerOneDay;

impl GameDecoder for PokerOneDay {
    fn family(&self) -> &'static str {
        "poker"
    }

    fn info(&self) -> FamilyInfo {
        FamilyInfo::new("poker", "Poker One Day", FamilyCategory::Cards)
    }

    fn table_ids(&self) -> &'static [&'static str] {
        &["poker", "poker1day"]
    }

    fn decode(&self, round: &RawRound) -> Option<Outcome> {
        decode_two_seat(round, false)
    }

    fn known_outcomes(&self) -> &'static [&'static str] {
        &["player a", "player b", "tie"]
    }

    fn history_code(&self, round: &RawRound) -> String {
        two_seat_history(round)
    }
}

/// Poker 6 Players.
pub struct PokerSix;

const SEATS: [&str; 6] = [
    "player 1", "player 2", "player 3", "player 4", "player 5", "player 6",
];

impl GameDecoder for PokerSix {
    fn family(&self) -> &'static str {
        "poker6"
    }

    fn info(&self) -> FamilyInfo {
        FamilyInfo::new("poker6", "Poker 6 Players", FamilyCategory::Cards)
    }

    fn table_ids(&self) -> &'static [&'static str] {
        &["poker6"]
    }

    fn decode(&self, round: &RawRound) -> Option<Outcome> {
        let seat: usize = round.win.trim().parse().ok()?;
        if !(1..=6).contains(&seat) {
            return None;
        }
        let cards = parse_cards_exact(round.card_str(), 5)?;
        let mut outcome = Outcome::new(SEATS[seat - 1]);
        if let Some(hand) = winning_hand(round) {
            outcome = outcome.attr(&hand);
        }
        Some(outcome.cards(cards).mid(round.mid.clone()))
    }

    fn known_outcomes(&self) -> &'static [&'static str] {
        &SEATS
    }

    fn known_markets(&self) -> &'static [&'static str] {
        &HAND_NAMES
    }

    fn history_code(&self, round: &RawRound) -> String {
        match round.win.trim().parse::<usize>() {
            Ok(seat) if (1..=6).contains(&seat) => seat.to_string(),
            _ => "-".to_string(),
        }
    }
}

//! Teen Patti Open.
//!
//! Eight seats; the feed reports only the winning seat and its hand.
//!
//! Table ids: `teen8`. Aliases: "teenpattiopen".
//!
//! Win codes: `1`..`8` = the winning seat.
//!
//! Cards: exactly three tokens - the winning hand.
//!
//! rdesc: segment 0 repeats the winner ("Player 3"); segment 1, when
//! present, is the hand class ("Pair", "Trail", ...). The class is
//! recomputed from the cards so a missing segment does not block settlement.
//!
//! Markets: hand-class markets on the winning hand ("pair", "color",
//! "sequence", "pure sequence", "trail").
//!
//! History codes: the winning seat number, `1`..`8`.

use crate::cards::parse_cards_exact;
use crate::decoder::GameDecoder;
use crate::hand::classify;
use crate::outcome::Outcome;
use crate::registry::{FamilyCategory, FamilyInfo};
use feltline_types::RawRound;

pub struct TeenOpen;

const SEATS: [&str; 8] = [
    "player 1", "player 2", "player 3", "player 4", "player 5", "player 6", "player 7", "player 8",
];

impl GameDecoder for TeenOpen {
    fn family(&self) -> &'static str {
        "teen8"
    }

    fn info(&self) -> FamilyInfo {
        FamilyInfo::new("teen8", "Teen Patti Open", FamilyCategory::Cards)
    }

    fn table_ids(&self) -> &'static [&'static str] {
        &["teen8"]
    }

    fn table_aliases(&self) -> &'static [&'static str] {
        &["teenpattiopen"]
    }

    fn decode(&self, round: &RawRound) -> Option<Outcome> {
        let seat: usize = round.win.trim().parse().ok()?;
        if !(1..=8).contains(&seat) {
            return None;
        }
        let cards = parse_cards_exact(round.card_str(), 3)?;
        let class = classify([cards[0], cards[1], cards[2]]);
        Some(
            Outcome::new(SEATS[seat - 1])
                .attr(class.name())
                .cards(cards)
                .mid(round.mid.clone()),
        )
    }

    fn known_outcomes(&self) -> &'static [&'static str] {
        &SEATS
    }

    fn known_markets(&self) -> &'static [&'static str] {
        &["high card", "pair", "color", "sequence", "pure sequence", "trail"]
    }

    fn history_code(&self, round: &RawRound) -> String {
        match round.win.trim().parse::<usize>() {
            Ok(seat) if (1..=8).contains(&seat) => seat.to_string(),
            _ => "-".to_string(),
        }
    }
}

//! Trio.
//!
//! Three cards; the headline market is whether they land a trio.
//!
//! Table ids: `trio`.
//!
//! Win codes: `1` = Trio (all three ranks equal), `0` = No Trio.
//! The win code and the dealt cards must agree.
//!
//! Cards: exactly three tokens.
//!
//! Markets: "Odd"/"Even" on the sum of the three rank values.
//!
//! History codes: `T`, `N`.

use crate::cards::parse_cards_exact;
use crate::decoder::GameDecoder;
use crate::outcome::Outcome;
use crate::registry::{FamilyCategory, FamilyInfo};
use feltline_types::RawRound;

pub struct Trio;

impl GameDecoder for Trio {
    fn family(&self) -> &'static str {
        "trio"
    }

    fn info(&self) -> FamilyInfo {
        FamilyInfo::new("trio", "Trio", FamilyCategory::Cards)
    }

    fn table_ids(&self) -> &'static [&'static str] {
        &["trio"]
    }

    fn decode(&self, round: &RawRound) -> Option<Outcome> {
        let cards = parse_cards_exact(round.card_str(), 3)?;
        let is_trio = cards[0].rank == cards[1].rank && cards[1].rank == cards[2].rank;
        let winner = match round.win.trim() {
            "1" if is_trio => "trio",
            "0" if !is_trio => "no trio",
            _ => return None,
        };
        let total: i64 = cards.iter().map(|c| c.rank as i64).sum();
        Some(
            Outcome::new(winner)
                .attr(if total % 2 == 1 { "odd" } else { "even" })
                .total(total)
                .cards(cards)
                .mid(round.mid.clone()),
        )
    }

    fn known_outcomes(&self) -> &'static [&'static str] {
        &["trio", "no trio"]
    }

    fn known_markets(&self) -> &'static [&'static str] {
        &["odd", "even"]
    }

    fn history_code(&self, round: &RawRound) -> String {
        match round.win.trim() {
            "1" => "T",
            "0" => "N",
            _ => "-",
        }
        .to_string()
    }
}

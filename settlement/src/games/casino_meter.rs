//! Casino Meter.
//!
//! The shoe fills a low meter and a high meter; the feed declares which
//! side filled faster.
//!
//! Table ids: `cmeter`. Aliases: "casinometer".
//!
//! Win codes: `1` = Low, `2` = High.
//!
//! Cards: the dealt run, two to nine tokens.
//!
//! Markets: "Odd"/"Even" on the sum of all rank values dealt.
//!
//! History codes: `L`, `H`.

use crate::cards::parse_cards;
use crate::decoder::GameDecoder;
use crate::outcome::Outcome;
use crate::registry::{FamilyCategory, FamilyInfo};
use feltline_types::RawRound;

pub struct CasinoMeter;

impl GameDecoder for CasinoMeter {
    fn family(&self) -> &'static str {
        "cmeter"
    }

    fn info(&self) -> FamilyInfo {
        FamilyInfo::new("cmeter", "Casino Meter", FamilyCategory::Cards)
    }

    fn table_ids(&self) -> &'static [&'static str] {
        &["cmeter"]
    }

    fn table_aliases(&self) -> &'static [&'static str] {
        &["casinometer"]
    }

    fn decode(&self, round: &RawRound) -> Option<Outcome> {
        let winner = match round.win.trim() {
            "1" => "low",
            "2" => "high",
            _ => return None,
        };
        let cards = parse_cards(round.card_str())?;
        if !(2..=9).contains(&cards.len()) {
            return None;
        }
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
        &["low", "high"]
    }

    fn known_markets(&self) -> &'static [&'static str] {
        &["odd", "even"]
    }

    fn history_code(&self, round: &RawRound) -> String {
        match round.win.trim() {
            "1" => "L",
            "2" => "H",
            _ => "-",
        }
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::evaluate;
    use crate::outcome::Condition;

    #[test]
    fn test_decode_and_parity() {
        let round = RawRound::new(None, "1", Some("2HH,9SS,4DD".to_string()), None);
        let outcome = CasinoMeter.decode(&round).unwrap();
        assert_eq!(outcome.winner(), "low");
        assert_eq!(outcome.declared_total(), Some(15));
        assert_eq!(evaluate(&CasinoMeter, "Odd", &outcome), Condition::Holds);
        assert_eq!(evaluate(&CasinoMeter, "High", &outcome), Condition::Fails);
    }

    #[test]
    fn test_card_bounds() {
        let round = RawRound::new(None, "1", Some("2HH".to_string()), None);
        assert!(CasinoMeter.decode(&round).is_none());
    }
}

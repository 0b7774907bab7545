//! Muflis Teen Patti.
//!
//! Lowball teen patti: the weaker conventional hand wins. The inversion is
//! applied upstream when the feed picks the winner, so decoding is the same
//! two-player shape as the straight tables.
//!
//! Table ids: `teenmuf`. Aliases: "muflisteenpatti".
//!
//! Win codes: `1` = Player A, `2` = Player B, `0` = Tie.
//!
//! Cards: exactly six tokens; Player A holds 0/2/4, Player B holds 1/3/5.
//!
//! History codes: `A`, `B`, `T`.

use crate::cards::parse_cards_exact;
use crate::decoder::GameDecoder;
use crate::outcome::Outcome;
use crate::registry::{FamilyCategory, FamilyInfo};
use feltline_types::RawRound;

pub struct TeenMuflis;

impl GameDecoder for TeenMuflis {
    fn family(&self) -> &'static str {
        "teenmuf"
    }

    fn info(&self) -> FamilyInfo {
        FamilyInfo::new("teenmuf", "Muflis Teen Patti", FamilyCategory::Cards)
    }

    fn table_ids(&self) -> &'static [&'static str] {
        &["teenmuf"]
    }

    fn table_aliases(&self) -> &'static [&'static str] {
        &["muflisteenpatti"]
    }

    fn decode(&self, round: &RawRound) -> Option<Outcome> {
        let winner = match round.win.trim() {
            "1" => "player a",
            "2" => "player b",
            "0" => "tie",
            _ => return None,
        };
        let cards = parse_cards_exact(round.card_str(), 6)?;
        Some(Outcome::new(winner).cards(cards).mid(round.mid.clone()))
    }

    fn known_outcomes(&self) -> &'static [&'static str] {
        &["player a", "player b", "tie"]
    }

    fn history_code(&self, round: &RawRound) -> String {
        match round.win.trim() {
            "1" => "A",
            "2" => "B",
            "0" => "T",
            _ => "-",
        }
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_winner() {
        let round = RawRound::new(
            None,
            "1",
            Some("2SS,KHH,4DD,KSS,7HH,QDD".to_string()),
            None,
        );
        let outcome = TeenMuflis.decode(&round).unwrap();
        assert_eq!(outcome.winner(), "player a");
    }

    #[test]
    fn test_identity() {
        assert!(TeenMuflis.belongs_to("teenmuf"));
        assert!(TeenMuflis.belongs_to("muflis-teen-patti-2"));
        assert!(!TeenMuflis.belongs_to("teen"));
    }
}

//! 3 Card Judgement.
//!
//! Three cards against the twenty-one line.
//!
//! Table ids: `3cardj`. Aliases: "3cardjudgement".
//!
//! Win codes: `1` = Under 21, `2` = Over 21, `0` = Exactly 21, where the
//! total is the sum of the three rank values (A=1 .. K=13, range 3-39).
//! The declared side must agree with the dealt cards.
//!
//! Cards: exactly three tokens.
//!
//! rdesc: segment 0 repeats the side with the total in a parenthesized
//! suffix ("Under 21(14)"); when present, the embedded total must agree
//! with the computed one.
//!
//! Markets: "Odd"/"Even" on the total, and compound "Total N" backs the
//! exact total.
//!
//! History codes: the total, as digits.

use crate::cards::parse_cards_exact;
use crate::decoder::GameDecoder;
use crate::label::{parenthesized_total, split_rdesc, trailing_number};
use crate::outcome::Outcome;
use crate::registry::{FamilyCategory, FamilyInfo};
use feltline_types::RawRound;

pub struct ThreeCardJudgement;

impl GameDecoder for ThreeCardJudgement {
    fn family(&self) -> &'static str {
        "3cardj"
    }

    fn info(&self) -> FamilyInfo {
        FamilyInfo::new("3cardj", "3 Card Judgement", FamilyCategory::Cards)
    }

    fn table_ids(&self) -> &'static [&'static str] {
        &["3cardj"]
    }

    fn table_aliases(&self) -> &'static [&'static str] {
        &["3cardjudgement"]
    }

    fn decode(&self, round: &RawRound) -> Option<Outcome> {
        let cards = parse_cards_exact(round.card_str(), 3)?;
        let total: i64 = cards.iter().map(|c| c.rank as i64).sum();
        let winner = match round.win.trim() {
            "1" if total < 21 => "under 21",
            "2" if total > 21 => "over 21",
            "0" if total == 21 => "total 21",
            _ => return None,
        };
        if let Some(declared) = split_rdesc(round.rdesc_str())
            .first()
            .and_then(|s| parenthesized_total(s))
        {
            if declared != total {
                return None;
            }
        }
        Some(
            Outcome::new(winner)
                .attr(if total % 2 == 1 { "odd" } else { "even" })
                .total(total)
                .cards(cards)
                .mid(round.mid.clone()),
        )
    }

    fn known_outcomes(&self) -> &'static [&'static str] {
        &["under 21", "over 21", "total 21"]
    }

    fn known_markets(&self) -> &'static [&'static str] {
        &["odd", "even"]
    }

    fn match_compound(&self, label: &str, outcome: &Outcome) -> Option<bool> {
        let (head, number) = trailing_number(label)?;
        if head != "total" {
            return None;
        }
        Some(Some(number) == outcome.declared_total())
    }

    fn history_code(&self, round: &RawRound) -> String {
        split_rdesc(round.rdesc_str())
            .first()
            .and_then(|s| parenthesized_total(s))
            .map(|t| t.to_string())
            .unwrap_or_else(|| "-".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::evaluate;
    use crate::outcome::Condition;

    fn round(win: &str, card: &str, rdesc: Option<&str>) -> RawRound {
        RawRound::new(None, win, Some(card.to_string()), rdesc.map(|s| s.to_string()))
    }

    #[test]
    fn test_under_with_embedded_total() {
        let outcome = ThreeCardJudgement
            .decode(&round("1", "2HH,5SS,7DD", Some("Under 21(14)")))
            .unwrap();
        assert_eq!(outcome.winner(), "under 21");
        assert_eq!(outcome.declared_total(), Some(14));
        assert!(outcome.has("even"));
    }

    #[test]
    fn test_embedded_total_must_agree() {
        assert!(ThreeCardJudgement
            .decode(&round("1", "2HH,5SS,7DD", Some("Under 21(15)")))
            .is_none());
    }

    #[test]
    fn test_side_must_agree_with_cards() {
        // 2+5+7 = 14, not over 21.
        assert!(ThreeCardJudgement
            .decode(&round("2", "2HH,5SS,7DD", None))
            .is_none());
        // K+Q+J = 36.
        assert!(ThreeCardJudgement
            .decode(&round("2", "KHH,QSS,JDD", None))
            .is_some());
    }

    #[test]
    fn test_total_market() {
        let outcome = ThreeCardJudgement
            .decode(&round("1", "2HH,5SS,7DD", None))
            .unwrap();
        assert_eq!(evaluate(&ThreeCardJudgement, "Total 14", &outcome), Condition::Holds);
        assert_eq!(evaluate(&ThreeCardJudgement, "Total 15", &outcome), Condition::Fails);
        assert_eq!(evaluate(&ThreeCardJudgement, "Odd", &outcome), Condition::Fails);
    }

    #[test]
    fn test_history_uses_embedded_total() {
        assert_eq!(
            ThreeCardJudgement.history_code(&round("1", "", Some("Under 21(14)"))),
            "14"
        );
        assert_eq!(ThreeCardJudgement.history_code(&round("1", "", None)), "-");
    }
}

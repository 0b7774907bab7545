//! Bollywood Casino.
//!
//! One card from the deck lands on one of six film titles.
//!
//! Table ids: `btable`. Aliases: "bollywoodcasino".
//!
//! Win codes and their rank bands (the dealt card must agree):
//! `1` = Don (A), `2` = Amar Akbar Anthony (2-4),
//! `3` = Sahib Bibi Aur Ghulam (5-7), `4` = Dharam Veer (8-9),
//! `5` = Kis Kisko Pyaar Karoon (10-J), `6` = Ghulam (Q-K).
//!
//! Cards: exactly one token.
//!
//! Markets: "Odd"/"Even", "Red"/"Black", suit and "Card N" markets on the
//! drawn card, plus "Dulha Dulhan" (Q or K) and "Barati" (J or A).
//!
//! History codes: the winning option number, `1`..`6`.

use super::match_card_subject;
use crate::cards::{parse_cards_exact, Card};
use crate::decoder::GameDecoder;
use crate::outcome::Outcome;
use crate::registry::{FamilyCategory, FamilyInfo};
use feltline_types::RawRound;

pub struct BollywoodCasino;

fn title_for(card: Card) -> &'static str {
    match card.rank {
        1 => "don",
        2..=4 => "amar akbar anthony",
        5..=7 => "sahib bibi aur ghulam",
        8..=9 => "dharam veer",
        10 | 11 => "kis kisko pyaar karoon",
        _ => "ghulam",
    }
}

impl GameDecoder for BollywoodCasino {
    fn family(&self) -> &'static str {
        "btable"
    }

    fn info(&self) -> FamilyInfo {
        FamilyInfo::new("btable", "Bollywood Casino", FamilyCategory::Cards)
    }

    fn table_ids(&self) -> &'static [&'static str] {
        &["btable"]
    }

    fn table_aliases(&self) -> &'static [&'static str] {
        &["bollywoodcasino"]
    }

    fn decode(&self, round: &RawRound) -> Option<Outcome> {
        let winner = match round.win.trim() {
            "1" => "don",
            "2" => "amar akbar anthony",
            "3" => "sahib bibi aur ghulam",
            "4" => "dharam veer",
            "5" => "kis kisko pyaar karoon",
            "6" => "ghulam",
            _ => return None,
        };
        let cards = parse_cards_exact(round.card_str(), 1)?;
        if title_for(cards[0]) != winner {
            return None;
        }
        let mut outcome = Outcome::new(winner).card_attrs("", cards[0]);
        if matches!(cards[0].rank, 12 | 13) {
            outcome = outcome.attr("dulha dulhan");
        }
        if matches!(cards[0].rank, 1 | 11) {
            outcome = outcome.attr("barati");
        }
        Some(outcome.cards(cards).mid(round.mid.clone()))
    }

    fn known_outcomes(&self) -> &'static [&'static str] {
        &[
            "don",
            "amar akbar anthony",
            "sahib bibi aur ghulam",
            "dharam veer",
            "kis kisko pyaar karoon",
            "ghulam",
        ]
    }

    fn known_markets(&self) -> &'static [&'static str] {
        &["dulha dulhan", "barati"]
    }

    fn match_compound(&self, label: &str, outcome: &Outcome) -> Option<bool> {
        match_card_subject(label, "", *outcome.dealt_cards().first()?)
    }

    fn history_code(&self, round: &RawRound) -> String {
        match round.win.trim() {
            code @ ("1" | "2" | "3" | "4" | "5" | "6") => code.to_string(),
            _ => "-".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::evaluate;
    use crate::outcome::Condition;

    fn round(win: &str, card: &str) -> RawRound {
        RawRound::new(None, win, Some(card.to_string()), None)
    }

    #[test]
    fn test_title_bands() {
        assert_eq!(
            BollywoodCasino.decode(&round("1", "AHH")).unwrap().winner(),
            "don"
        );
        assert_eq!(
            BollywoodCasino.decode(&round("3", "6SS")).unwrap().winner(),
            "sahib bibi aur ghulam"
        );
        assert_eq!(
            BollywoodCasino.decode(&round("6", "QDD")).unwrap().winner(),
            "ghulam"
        );
        assert!(BollywoodCasino.decode(&round("1", "QDD")).is_none());
    }

    #[test]
    fn test_wedding_markets() {
        let outcome = BollywoodCasino.decode(&round("6", "QDD")).unwrap();
        assert_eq!(
            evaluate(&BollywoodCasino, "Dulha Dulhan", &outcome),
            Condition::Holds
        );
        assert_eq!(evaluate(&BollywoodCasino, "Barati", &outcome), Condition::Fails);

        let outcome = BollywoodCasino.decode(&round("1", "AHH")).unwrap();
        assert_eq!(evaluate(&BollywoodCasino, "Barati", &outcome), Condition::Holds);
    }

    #[test]
    fn test_card_markets() {
        let outcome = BollywoodCasino.decode(&round("2", "3CC")).unwrap();
        assert_eq!(evaluate(&BollywoodCasino, "Black", &outcome), Condition::Holds);
        assert_eq!(evaluate(&BollywoodCasino, "Card 3", &outcome), Condition::Holds);
        assert_eq!(evaluate(&BollywoodCasino, "Don", &outcome), Condition::Fails);
    }
}

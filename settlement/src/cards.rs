//! Shared playing-card helpers.
//!
//! The feed encodes a card as `<rank><2-letter-suit>`:
//! - rank token: `A`, `2`..`10`, `J`, `Q`, `K` (1-2 chars)
//! - suit code: `HH` hearts, `DD` diamonds, `SS` spades, `CC` clubs
//!
//! Rank values are A=1, J=11, Q=12, K=13, else the numeral. Hearts and
//! diamonds are red, spades and clubs are black; that mapping lives only
//! here and is identical across every family.

use serde::Serialize;

/// Card color derived from suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Black,
}

impl Color {
    /// Lower-cased name used in attribute sets and labels.
    pub fn name(self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Black => "black",
        }
    }
}

/// The four suits, by feed code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Hearts,
    Diamonds,
    Spades,
    Clubs,
}

impl Suit {
    /// Parse a two-letter feed suit code, case-insensitively.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_uppercase().as_str() {
            "HH" => Some(Suit::Hearts),
            "DD" => Some(Suit::Diamonds),
            "SS" => Some(Suit::Spades),
            "CC" => Some(Suit::Clubs),
            _ => None,
        }
    }

    pub fn color(self) -> Color {
        match self {
            Suit::Hearts | Suit::Diamonds => Color::Red,
            Suit::Spades | Suit::Clubs => Color::Black,
        }
    }

    /// Lower-cased singular name used in attribute sets and labels
    /// ("heart", not "hearts" - the upstream bet vocabulary is singular).
    pub fn name(self) -> &'static str {
        match self {
            Suit::Hearts => "heart",
            Suit::Diamonds => "diamond",
            Suit::Spades => "spade",
            Suit::Clubs => "club",
        }
    }
}

/// One decoded card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Card {
    /// Rank value: A=1, 2..10, J=11, Q=12, K=13.
    pub rank: u8,
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: u8, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub fn color(&self) -> Color {
        self.suit.color()
    }

    /// True when the rank value is odd.
    pub fn is_odd(&self) -> bool {
        self.rank % 2 == 1
    }

    /// Rank for ace-high comparisons (A=14).
    pub fn rank_ace_high(&self) -> u8 {
        if self.rank == 1 {
            14
        } else {
            self.rank
        }
    }

    /// Upper-cased rank token as the feed spells it.
    pub fn rank_token(&self) -> &'static str {
        match self.rank {
            1 => "A",
            2 => "2",
            3 => "3",
            4 => "4",
            5 => "5",
            6 => "6",
            7 => "7",
            8 => "8",
            9 => "9",
            10 => "10",
            11 => "J",
            12 => "Q",
            _ => "K",
        }
    }
}

/// Parse a bare rank token ("A", "10", "k"); used by card-token parsing and
/// by label matchers validating "card <rank>" conditions.
pub fn rank_from_token(token: &str) -> Option<u8> {
    parse_rank(token)
}

/// Parse a rank token (the card token minus its suit code).
fn parse_rank(token: &str) -> Option<u8> {
    match token.to_ascii_uppercase().as_str() {
        "A" => Some(1),
        "J" => Some(11),
        "Q" => Some(12),
        "K" => Some(13),
        numeric => match numeric.parse::<u8>() {
            Ok(n) if (2..=10).contains(&n) => Some(n),
            _ => None,
        },
    }
}

/// Parse one feed card token by stripping the two trailing suit characters;
/// the remainder is the rank token.
pub fn parse_card(token: &str) -> Option<Card> {
    let token = token.trim();
    if token.len() < 3 || !token.is_ascii() {
        return None;
    }
    let split = token.len() - 2;
    let suit = Suit::from_code(&token[split..])?;
    let rank = parse_rank(&token[..split])?;
    Some(Card::new(rank, suit))
}

/// Parse a comma-separated card list in dealt order. Any bad token poisons
/// the whole list; a partial hand cannot be settled against.
pub fn parse_cards(csv: &str) -> Option<Vec<Card>> {
    let csv = csv.trim();
    if csv.is_empty() {
        return None;
    }
    csv.split(',').map(parse_card).collect()
}

/// Parse a card list and require an exact element count.
pub fn parse_cards_exact(csv: &str, count: usize) -> Option<Vec<Card>> {
    let cards = parse_cards(csv)?;
    if cards.len() == count {
        Some(cards)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_card_ranks() {
        assert_eq!(parse_card("ASS"), Some(Card::new(1, Suit::Spades)));
        assert_eq!(parse_card("10HH"), Some(Card::new(10, Suit::Hearts)));
        assert_eq!(parse_card("JDD"), Some(Card::new(11, Suit::Diamonds)));
        assert_eq!(parse_card("QCC"), Some(Card::new(12, Suit::Clubs)));
        assert_eq!(parse_card("KSS"), Some(Card::new(13, Suit::Spades)));
        assert_eq!(parse_card("2HH"), Some(Card::new(2, Suit::Hearts)));
    }

    #[test]
    fn test_parse_card_is_case_insensitive() {
        assert_eq!(parse_card("ass"), Some(Card::new(1, Suit::Spades)));
        assert_eq!(parse_card("10hh"), Some(Card::new(10, Suit::Hearts)));
    }

    #[test]
    fn test_parse_card_rejects_garbage() {
        assert_eq!(parse_card(""), None);
        assert_eq!(parse_card("A"), None);
        assert_eq!(parse_card("AXX"), None);
        assert_eq!(parse_card("0HH"), None);
        assert_eq!(parse_card("11HH"), None);
        assert_eq!(parse_card("AAHH"), None);
    }

    #[test]
    fn test_color_mapping() {
        assert_eq!(Suit::Hearts.color(), Color::Red);
        assert_eq!(Suit::Diamonds.color(), Color::Red);
        assert_eq!(Suit::Spades.color(), Color::Black);
        assert_eq!(Suit::Clubs.color(), Color::Black);
    }

    #[test]
    fn test_parity() {
        assert!(Card::new(7, Suit::Hearts).is_odd());
        assert!(!Card::new(10, Suit::Hearts).is_odd());
        // Court cards: J=11 odd, Q=12 even, K=13 odd, A=1 odd.
        assert!(Card::new(11, Suit::Clubs).is_odd());
        assert!(!Card::new(12, Suit::Clubs).is_odd());
        assert!(Card::new(13, Suit::Clubs).is_odd());
        assert!(Card::new(1, Suit::Clubs).is_odd());
    }

    #[test]
    fn test_parse_cards_poisoned_by_one_bad_token() {
        assert!(parse_cards("ASS,2HH").is_some());
        assert!(parse_cards("ASS,2XX").is_none());
        assert!(parse_cards("").is_none());
    }

    #[test]
    fn test_parse_cards_exact_enforces_count() {
        assert!(parse_cards_exact("ASS,2HH", 2).is_some());
        assert!(parse_cards_exact("ASS,2HH", 3).is_none());
    }

    #[test]
    fn test_parse_cards_tolerates_spaces() {
        let cards = parse_cards(" ASS , 2HH ").unwrap();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].rank, 1);
    }

    #[test]
    fn test_rank_token_round_trips() {
        for rank in 1..=13u8 {
            let card = Card::new(rank, Suit::Hearts);
            let token = format!("{}HH", card.rank_token());
            assert_eq!(parse_card(&token), Some(card));
        }
    }
}

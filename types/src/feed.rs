//! Raw round payloads as delivered by the upstream feed.
//!
//! A finished round arrives as a small set of opaque strings whose shape is
//! game-family-specific:
//! - `win`: short numeric/string code naming the primary outcome.
//! - `card`: comma-separated card tokens, each `<rank><2-letter-suit>`
//!   (e.g. `"10HH"`, `"KSS"`), order-significant.
//! - `rdesc`: optional `#`-delimited free text; segment position is fixed
//!   per family and segment 0 is the primary winner when present.
//! - `mid`: opaque round identifier, passed through untouched.
//!
//! A round's payload is immutable once received. The feed format must be
//! preserved bit-exact; decoding it is the settlement crate's job.

use serde::{Deserialize, Serialize};

/// One completed round on a table, exactly as reported by the feed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRound {
    /// Round identifier ("mid"). Opaque; carried through for traceability.
    #[serde(default)]
    pub mid: Option<String>,
    /// Primary outcome code. Meaning is enumerated per game family.
    pub win: String,
    /// Comma-separated card tokens, when the family deals cards.
    #[serde(default)]
    pub card: Option<String>,
    /// `#`-delimited result description, when the family reports one.
    #[serde(default)]
    pub rdesc: Option<String>,
}

impl RawRound {
    /// Build a round from the feed's field values.
    pub fn new(
        mid: impl Into<Option<String>>,
        win: impl Into<String>,
        card: impl Into<Option<String>>,
        rdesc: impl Into<Option<String>>,
    ) -> Self {
        Self {
            mid: mid.into(),
            win: win.into(),
            card: card.into(),
            rdesc: rdesc.into(),
        }
    }

    /// The card string, or `""` when the feed sent none.
    pub fn card_str(&self) -> &str {
        self.card.as_deref().unwrap_or("")
    }

    /// The result description, or `""` when the feed sent none.
    pub fn rdesc_str(&self) -> &str {
        self.rdesc.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_fields_default_empty() {
        let round = RawRound::new(None, "1", None, None);
        assert_eq!(round.card_str(), "");
        assert_eq!(round.rdesc_str(), "");
    }

    #[test]
    fn test_deserialize_minimal_payload() {
        let round: RawRound = serde_json::from_str(r#"{"win":"2"}"#).unwrap();
        assert_eq!(round.win, "2");
        assert!(round.mid.is_none());
        assert!(round.card.is_none());
        assert!(round.rdesc.is_none());
    }

    #[test]
    fn test_round_trip_full_payload() {
        let round = RawRound::new(
            Some("114230905".to_string()),
            "1",
            Some("ASS,2HH".to_string()),
            Some("Player A#Pair Plus A".to_string()),
        );
        let json = serde_json::to_string(&round).unwrap();
        let back: RawRound = serde_json::from_str(&json).unwrap();
        assert_eq!(round, back);
    }
}

//! Decoded round outcomes.
//!
//! An [`Outcome`] is the structured form of one round for one family: the
//! primary winner plus a normalized set of every fact a bet label might
//! reference. Simple families match bets by pure set membership; complex
//! families layer structured matchers on top (see `decoder`).
//!
//! An outcome is a pure function of its round's raw payload. Attribute
//! storage is a `BTreeSet` so serialized audit output is byte-stable, which
//! is what makes settlement idempotence byte-exact.

use crate::cards::Card;
use crate::label::normalize;
use serde::Serialize;
use std::collections::BTreeSet;

/// Result of evaluating one coverage label against an outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Condition {
    /// The labelled condition holds.
    Holds,
    /// The label is recognized by the family and the condition does not hold.
    Fails,
    /// The label names a market the feed never reports; fixed loss.
    Unverifiable,
    /// No rule tier recognizes the label; fixed loss.
    Unknown,
}

/// The decoded form of a round for one family.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Outcome {
    /// Normalized primary winner/outcome name (e.g. "player a").
    winner: String,
    /// Normalized matchable facts (e.g. {"red", "odd", "card 7"}).
    attributes: BTreeSet<String>,
    /// Decoded cards in dealt order; empty for cardless families.
    cards: Vec<Card>,
    /// Rolled dice pips in order; empty for diceless families.
    dice: Vec<u8>,
    /// Family-declared numeric total, when the round carries one.
    total: Option<i64>,
    /// Round id, passed through untouched for traceability.
    mid: Option<String>,
}

impl Outcome {
    /// Start an outcome from its primary winner name (normalized here).
    pub fn new(winner: &str) -> Self {
        Self {
            winner: normalize(winner),
            attributes: BTreeSet::new(),
            cards: Vec::new(),
            dice: Vec::new(),
            total: None,
            mid: None,
        }
    }

    /// Add one matchable fact (normalized here). Duplicates collapse.
    pub fn attr(mut self, attribute: &str) -> Self {
        self.attributes.insert(normalize(attribute));
        self
    }

    /// Add the standard card-derived facts for a named subject: color,
    /// parity, suit, and the exact card. With an empty subject the facts are
    /// unprefixed ("red"); otherwise prefixed ("dragon red").
    pub fn card_attrs(mut self, subject: &str, card: Card) -> Self {
        let prefix = normalize(subject);
        let mut push = |fact: String| {
            self.attributes.insert(fact);
        };
        if prefix.is_empty() {
            push(card.color().name().to_string());
            push(if card.is_odd() { "odd" } else { "even" }.to_string());
            push(card.suit.name().to_string());
            push(format!("card {}", card.rank_token().to_lowercase()));
        } else {
            push(format!("{} {}", prefix, card.color().name()));
            push(format!(
                "{} {}",
                prefix,
                if card.is_odd() { "odd" } else { "even" }
            ));
            push(format!("{} {}", prefix, card.suit.name()));
            push(format!("{} card {}", prefix, card.rank_token().to_lowercase()));
        }
        self
    }

    /// Record the decoded cards in dealt order.
    pub fn cards(mut self, cards: Vec<Card>) -> Self {
        self.cards = cards;
        self
    }

    /// Record the rolled dice in order.
    pub fn dice(mut self, dice: Vec<u8>) -> Self {
        self.dice = dice;
        self
    }

    /// Record the family-declared numeric total.
    pub fn total(mut self, total: i64) -> Self {
        self.total = Some(total);
        self
    }

    /// Carry the round id through for traceability.
    pub fn mid(mut self, mid: Option<String>) -> Self {
        self.mid = mid;
        self
    }

    /// Normalized primary winner name.
    pub fn winner(&self) -> &str {
        &self.winner
    }

    /// True when the normalized attribute set contains `attribute`
    /// (normalized input expected).
    pub fn has(&self, attribute: &str) -> bool {
        self.attributes.contains(attribute)
    }

    pub fn attributes(&self) -> &BTreeSet<String> {
        &self.attributes
    }

    pub fn dealt_cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn rolled_dice(&self) -> &[u8] {
        &self.dice
    }

    pub fn declared_total(&self) -> Option<i64> {
        self.total
    }

    pub fn round_id(&self) -> Option<&str> {
        self.mid.as_deref()
    }
}

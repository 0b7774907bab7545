//! The per-family decoder contract and the shared bet-matching pipeline.
//!
//! Each game family implements [`GameDecoder`] exactly once: a table
//! identity predicate, a result parser, structured matchers for its compound
//! labels, and a history projection. Everything shared across families -
//! label normalization, the match tier order, back/lay inversion - lives
//! here so no family can drift on the rules that must be uniform.

use crate::label::normalize;
use crate::outcome::{Condition, Outcome};
use crate::registry::FamilyInfo;
use feltline_types::{BetSide, RawRound};

/// Normalize a table id for identity checks: lower-case and strip the
/// hyphen/space/underscore variants seen in the upstream catalogue.
pub fn normalize_table_id(table_id: &str) -> String {
    table_id
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .collect::<String>()
        .to_lowercase()
}

/// One game family's decoder. Implementations are stateless unit structs;
/// every method is a pure function of its inputs.
pub trait GameDecoder: Sync {
    /// Stable family key, used in logs and error values.
    fn family(&self) -> &'static str;

    /// Registry metadata for this family.
    fn info(&self) -> FamilyInfo;

    /// Table ids claimed exactly (normalized form, see
    /// [`normalize_table_id`]). Exact claims are unique across the registry.
    fn table_ids(&self) -> &'static [&'static str];

    /// Looser aliases matched by substring after exact matching fails
    /// ("teen patti 2020" and the like). May overlap between families; the
    /// registry resolves aliases in declaration order.
    fn table_aliases(&self) -> &'static [&'static str] {
        &[]
    }

    /// Does this table id belong to my family?
    fn belongs_to(&self, table_id: &str) -> bool {
        let id = normalize_table_id(table_id);
        self.table_ids().contains(&id.as_str())
            || self.table_aliases().iter().any(|alias| id.contains(alias))
    }

    /// Decode a raw round into a structured outcome.
    ///
    /// `None` means the payload is structurally invalid for this family
    /// (missing required field, win code outside the known enum, wrong card
    /// count). Callers treat `None` as "cannot settle yet", never as "all
    /// bets lose".
    fn decode(&self, round: &RawRound) -> Option<Outcome>;

    /// Primary outcome names this family can produce (normalized). A label
    /// naming a possible-but-losing outcome is a recognized condition, so
    /// lay bets on it can win.
    fn known_outcomes(&self) -> &'static [&'static str];

    /// Side markets this family understands beyond its outcome names
    /// (normalized): parity/color/suit markets, pair markets, and so on.
    fn known_markets(&self) -> &'static [&'static str] {
        &[]
    }

    /// Family-specific structured matcher for compound labels that encode a
    /// subject plus a sub-condition ("player b spade", "line 2", "total 14").
    /// `Some(held)` both recognizes the label and judges it; `None` falls
    /// through to the remaining tiers. The label arrives normalized
    /// (lower-cased, whitespace collapsed), as do the vocabulary lookups.
    fn match_compound(&self, _label: &str, _outcome: &Outcome) -> Option<bool> {
        None
    }

    /// Markets the feed never reports for this family (normalized labels).
    /// These settle as a fixed loss on either side rather than guessing from
    /// cards.
    fn unverifiable(&self, _label: &str) -> bool {
        false
    }

    /// Compact display code for trend strips. Purely cosmetic; must be total
    /// over any previously-accepted round shape (and degrade to `"-"` on
    /// anything else), never panic.
    fn history_code(&self, round: &RawRound) -> String;
}

/// Evaluate one coverage label against a decoded outcome, in fixed priority
/// order; the first matching tier wins:
///
/// 1. exact match against the primary winner name
/// 2. membership in the outcome's attribute set
/// 3. the family's structured compound matcher
/// 4. feed-unverifiable market: fixed loss
/// 5. recognized vocabulary that did not match: the condition fails
/// 6. anything else: unknown, fixed loss
pub fn evaluate(decoder: &dyn GameDecoder, label: &str, outcome: &Outcome) -> Condition {
    let label = normalize(label);
    if label == outcome.winner() {
        return Condition::Holds;
    }
    if outcome.has(&label) {
        return Condition::Holds;
    }
    if let Some(held) = decoder.match_compound(&label, outcome) {
        return if held { Condition::Holds } else { Condition::Fails };
    }
    if decoder.unverifiable(&label) {
        return Condition::Unverifiable;
    }
    if decoder.known_outcomes().contains(&label.as_str())
        || decoder.known_markets().contains(&label.as_str())
    {
        return Condition::Fails;
    }
    Condition::Unknown
}

/// The single shared side rule: a back bet wins exactly when the condition
/// holds, a lay bet exactly when it fails. Unknown and unverifiable labels
/// are fixed losses on both sides - inversion applies only to recognized
/// conditions.
pub fn bet_wins(condition: Condition, side: BetSide) -> bool {
    match (condition, side) {
        (Condition::Holds, BetSide::Back) => true,
        (Condition::Fails, BetSide::Lay) => true,
        _ => false,
    }
}

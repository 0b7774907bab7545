//! Per-bet settlement records.
//!
//! Settlement is idempotent: re-running it on the same (round, bet) pair
//! yields the same record, which is what makes caller-side retries safe. The
//! record therefore carries only data derived from those two inputs.

use serde::{Deserialize, Serialize};

/// Final status of a settled bet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettlementStatus {
    Won,
    Lost,
}

/// How the engine arrived at the status, kept for audit.
///
/// `Matched` covers both wins and definitive losses: the label was evaluated
/// against decoded data. The other two are the fixed safe-default losses,
/// recorded distinctly so audit can separate "the condition failed" from
/// "the feed cannot confirm this market".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettlementBasis {
    /// The label was recognized and judged against the decoded outcome.
    Matched,
    /// No rule tier recognized the label; settles lost on either side.
    UnknownLabel,
    /// The feed never reports data for this market; settles lost on either
    /// side rather than inferring a result.
    Unverifiable,
}

/// The output for one bet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementRecord {
    /// The bet this record settles.
    pub bet_id: String,
    pub status: SettlementStatus,
    /// Gross payout in minor units; zero unless `status` is `Won`.
    pub payout: u64,
    pub basis: SettlementBasis,
}

impl SettlementRecord {
    /// A winning record paying `payout`.
    pub fn won(bet_id: impl Into<String>, payout: u64) -> Self {
        Self {
            bet_id: bet_id.into(),
            status: SettlementStatus::Won,
            payout,
            basis: SettlementBasis::Matched,
        }
    }

    /// A losing record with the given audit basis.
    pub fn lost(bet_id: impl Into<String>, basis: SettlementBasis) -> Self {
        Self {
            bet_id: bet_id.into(),
            status: SettlementStatus::Lost,
            payout: 0,
            basis,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lost_record_pays_zero() {
        let record = SettlementRecord::lost("b9", SettlementBasis::UnknownLabel);
        assert_eq!(record.status, SettlementStatus::Lost);
        assert_eq!(record.payout, 0);
    }

    #[test]
    fn test_serialized_basis_is_snake_case() {
        let record = SettlementRecord::lost("b9", SettlementBasis::Unverifiable);
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains(r#""basis":"unverifiable""#));
        assert!(json.contains(r#""status":"lost""#));
    }
}

//! Settlement orchestrator.
//!
//! Given a table id, a raw round, and the bets placed on it: resolve the
//! decoder once, decode the payload once, and judge every bet against that
//! single outcome. Round-level failures (unknown table, unparseable payload)
//! halt the whole round and bubble to the caller; per-bet failures
//! (unmatched or unverifiable labels) settle only that bet as lost.

use crate::decoder::{bet_wins, evaluate, GameDecoder};
use crate::outcome::{Condition, Outcome};
use crate::registry::DecoderRegistry;
use feltline_types::{Bet, RawRound, SettleError, SettlementBasis, SettlementRecord};
use serde::Serialize;
use tracing::{debug, warn};

/// Everything the ledger and UI collaborators need from one settled round.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RoundSettlement {
    /// The decoded outcome, for audit and history display.
    pub outcome: Outcome,
    /// One record per input bet, in input order.
    pub settlements: Vec<SettlementRecord>,
    /// The round's compact display code from the history formatter.
    pub display_code: String,
}

/// Settle every bet on one finished round.
///
/// The raw payload is decoded exactly once; all bets in the round are judged
/// against that one outcome. Re-invoking with identical inputs produces
/// byte-identical records.
pub fn settle(
    registry: &DecoderRegistry,
    table_id: &str,
    round: &RawRound,
    bets: &[Bet],
) -> Result<RoundSettlement, SettleError> {
    let decoder = registry
        .resolve(table_id)
        .ok_or_else(|| SettleError::UnknownTable {
            table_id: table_id.to_string(),
        })?;

    let outcome = decoder
        .decode(round)
        .ok_or_else(|| SettleError::UnparseableResult {
            family: decoder.family(),
            mid: round.mid.clone(),
        })?;
    debug!(
        family = decoder.family(),
        mid = ?round.mid,
        winner = outcome.winner(),
        "decoded round"
    );

    let settlements = bets
        .iter()
        .map(|bet| settle_bet(decoder, &outcome, bet))
        .collect();

    Ok(RoundSettlement {
        display_code: decoder.history_code(round),
        outcome,
        settlements,
    })
}

/// Judge one bet against an already-decoded outcome.
fn settle_bet(decoder: &dyn GameDecoder, outcome: &Outcome, bet: &Bet) -> SettlementRecord {
    let condition = evaluate(decoder, &bet.label, outcome);
    match condition {
        Condition::Unknown => {
            warn!(
                family = decoder.family(),
                label = %bet.label,
                "unrecognized bet label; settling as lost"
            );
            return SettlementRecord::lost(&bet.id, SettlementBasis::UnknownLabel);
        }
        Condition::Unverifiable => {
            return SettlementRecord::lost(&bet.id, SettlementBasis::Unverifiable);
        }
        Condition::Holds | Condition::Fails => {}
    }
    if bet_wins(condition, bet.side) {
        SettlementRecord::won(&bet.id, bet.winning_payout())
    } else {
        SettlementRecord::lost(&bet.id, SettlementBasis::Matched)
    }
}

/// Project past rounds into their compact display codes for trend strips.
/// Purely cosmetic and total: undecodable rounds degrade to the family's
/// placeholder code rather than failing the strip.
pub fn format_history(decoder: &dyn GameDecoder, rounds: &[RawRound]) -> Vec<String> {
    rounds.iter().map(|r| decoder.history_code(r)).collect()
}

//! Bets placed against a round.
//!
//! A bet names what it covers with a free-text label from the family's
//! vocabulary ("Player A", "Under 7", "Joker Odd"). Stakes and payouts are
//! integer minor units; odds are a multiplier in basis points so that payout
//! arithmetic stays in integers (10_000 = 1.00x).

use serde::{Deserialize, Serialize};

/// Odds basis points corresponding to a 1.00x multiplier.
pub const ODDS_SCALE: u32 = 10_000;

/// Which direction a bet takes on its labelled condition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BetSide {
    /// The condition must hold for the bet to win.
    #[default]
    Back,
    /// The condition must not hold for the bet to win.
    Lay,
}

/// One user wager against one round. Immutable input to settlement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bet {
    /// Caller-assigned bet identifier, echoed on the settlement record.
    pub id: String,
    /// Coverage label; family-specific vocabulary.
    pub label: String,
    /// Stake in minor units.
    pub stake: u64,
    /// Payout multiplier in basis points (10_000 = 1.00x).
    pub odds_bps: u32,
    /// Back or lay. The feed's bet feed omits the side for plain back bets.
    #[serde(default)]
    pub side: BetSide,
}

impl Bet {
    /// Convenience constructor for a back bet.
    pub fn back(id: impl Into<String>, label: impl Into<String>, stake: u64, odds_bps: u32) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            stake,
            odds_bps,
            side: BetSide::Back,
        }
    }

    /// Convenience constructor for a lay bet.
    pub fn lay(id: impl Into<String>, label: impl Into<String>, stake: u64, odds_bps: u32) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            stake,
            odds_bps,
            side: BetSide::Lay,
        }
    }

    /// Gross payout if this bet wins: stake x odds, in minor units.
    ///
    /// Saturates rather than wraps; a saturated payout is still deterministic
    /// and the ledger layer bounds stakes long before this point.
    pub fn winning_payout(&self) -> u64 {
        self.stake
            .saturating_mul(self.odds_bps as u64)
            / ODDS_SCALE as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_defaults_to_back() {
        let bet: Bet = serde_json::from_str(
            r#"{"id":"b1","label":"Player A","stake":100,"odds_bps":19800}"#,
        )
        .unwrap();
        assert_eq!(bet.side, BetSide::Back);
    }

    #[test]
    fn test_winning_payout_scales_by_basis_points() {
        let bet = Bet::back("b1", "Player A", 250, 19_800);
        assert_eq!(bet.winning_payout(), 495);
    }

    #[test]
    fn test_winning_payout_even_money() {
        let bet = Bet::back("b1", "Red", 100, ODDS_SCALE * 2);
        assert_eq!(bet.winning_payout(), 200);
    }

    #[test]
    fn test_winning_payout_saturates() {
        let bet = Bet::back("b1", "Player A", u64::MAX, u32::MAX);
        assert_eq!(bet.winning_payout(), u64::MAX / ODDS_SCALE as u64);
    }

    proptest::proptest! {
        /// Within realistic stake/odds ranges the integer payout matches the
        /// wide-arithmetic value exactly (no saturation, no drift).
        #[test]
        fn prop_payout_matches_wide_arithmetic(
            stake in 0u64..100_000_000,
            odds_bps in 0u32..10_000_000,
        ) {
            let bet = Bet::back("b", "x", stake, odds_bps);
            let wide = (stake as u128 * odds_bps as u128 / ODDS_SCALE as u128) as u64;
            proptest::prop_assert_eq!(bet.winning_payout(), wide);
        }
    }
}

//! Common types used throughout feltline.
//!
//! This crate holds the plain data model shared by the settlement engine and
//! its callers: the raw round payload as delivered by the upstream feed, the
//! bet placed against a round, the per-bet settlement record, and the error
//! taxonomy for round-level failures.
//!
//! Everything here is inert data. Decoding rounds and judging bets live in
//! `feltline-settlement`.

pub mod bet;
pub mod error;
pub mod feed;
pub mod settlement;

pub use bet::{Bet, BetSide};
pub use error::{RegistryError, SettleError};
pub use feed::RawRound;
pub use settlement::{SettlementBasis, SettlementRecord, SettlementStatus};

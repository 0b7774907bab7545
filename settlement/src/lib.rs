//! Feltline settlement engine.
//!
//! This crate turns the upstream feed's heterogeneous result strings into
//! settled bets. It is composed of per-game-family result decoders that
//! normalize raw feed strings into structured outcomes, and a bet-matching
//! layer that evaluates a human-readable coverage label against that outcome.
//!
//! ## Determinism requirements
//! - Do not use wall-clock time inside settlement.
//! - Do not use randomness; outcomes are decoded from the feed, never drawn.
//! - Avoid iteration order of hash-based collections influencing outputs.
//!
//! Every operation is a pure function: the same raw payload always decodes
//! to the same outcome, and re-running `settle` on identical inputs yields
//! byte-identical records. The at-most-once guard around applying payouts to
//! a ledger belongs to the caller.
//!
//! ## Settling a round (example)
//! ```rust,ignore
//! use feltline_settlement::{registry::DecoderRegistry, settle};
//! use feltline_types::{Bet, RawRound};
//!
//! let registry = DecoderRegistry::standard()?;
//! let round = RawRound::new(None, "1", Some("ASS,2HH".into()), None);
//! let bets = vec![Bet::back("b1", "Player A", 100, 19_800)];
//! let settled = settle(&registry, "teen20", &round, &bets)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cards;
pub mod decoder;
pub mod engine;
pub mod games;
pub mod hand;
pub mod label;
pub mod outcome;
pub mod registry;

pub use decoder::{bet_wins, evaluate, GameDecoder};
pub use engine::{format_history, settle, RoundSettlement};
pub use outcome::{Condition, Outcome};
pub use registry::{DecoderRegistry, FamilyCategory, FamilyInfo};

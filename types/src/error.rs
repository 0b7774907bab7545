//! Error taxonomy for round-level settlement failures.
//!
//! Only failures that halt a whole round live here. An unmatched or
//! unverifiable bet label is not an error: it settles that one bet as lost
//! and is recorded on the settlement record's basis field.

use thiserror::Error;

/// Fatal, round-level settlement failures. Must be surfaced to the caller,
/// never defaulted to a guess.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SettleError {
    /// No decoder family claims the table id.
    #[error("unknown table family: {table_id}")]
    UnknownTable { table_id: String },
    /// The payload's shape violates the family's contract (wrong card count,
    /// unrecognized win code, missing required field). Retryable only if the
    /// upstream later supplies a corrected payload.
    #[error("unparseable result for family {family} (mid={mid:?})")]
    UnparseableResult {
        family: &'static str,
        mid: Option<String>,
    },
}

/// Configuration errors raised while building the decoder registry.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Two families both exact-claim the same table id. This is a wiring
    /// mistake and must fail loudly at construction, not resolve silently.
    #[error("table id {table_id} exact-claimed by both {first} and {second}")]
    DuplicateTableId {
        table_id: String,
        first: &'static str,
        second: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_table_message_names_the_table() {
        let err = SettleError::UnknownTable {
            table_id: "teen99".to_string(),
        };
        assert_eq!(err.to_string(), "unknown table family: teen99");
    }

    #[test]
    fn test_duplicate_id_message_names_both_families() {
        let err = RegistryError::DuplicateTableId {
            table_id: "teen20".to_string(),
            first: "teen20",
            second: "teen",
        };
        let msg = err.to_string();
        assert!(msg.contains("teen20"));
        assert!(msg.contains("both"));
    }
}

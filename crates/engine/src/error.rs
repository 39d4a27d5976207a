use std::fmt;

use serde::Serialize;

/// Why a record was skipped during collection or aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FaultReason {
    /// The host could not materialize the material list record.
    ListUnreadable(String),
    /// The host could not extract the item's quantity table.
    QuantityExtraction(String),
}

impl fmt::Display for FaultReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ListUnreadable(msg) => write!(f, "material list unreadable: {msg}"),
            Self::QuantityExtraction(msg) => write!(f, "quantity extraction failed: {msg}"),
        }
    }
}

/// A record skipped during collection or aggregation. Faults ride in the
/// result; the surviving rows are unaffected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fault {
    pub record_id: String,
    pub reason: FaultReason,
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "record '{}': {}", self.record_id, self.reason)
    }
}

impl std::error::Error for Fault {}

#[derive(Debug)]
pub enum StyleError {
    /// TOML parse / deserialization error.
    Parse(String),
    /// Style validation error (blank title, excess precision, etc.).
    Validation(String),
}

impl fmt::Display for StyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "style parse error: {msg}"),
            Self::Validation(msg) => write!(f, "style validation error: {msg}"),
        }
    }
}

impl std::error::Error for StyleError {}

//! Error types for slot-engine operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlotError {
    /// A time range was constructed with a negative start or duration.
    /// Rejected at construction so the merge logic only ever sees
    /// well-formed ranges.
    #[error("invalid time range: start {start}, duration {duration} (both must be >= 0)")]
    InvalidRange { start: i32, duration: i32 },
}

pub type Result<T> = std::result::Result<T, SlotError>;

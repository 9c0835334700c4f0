use thiserror::Error;

/// Errors surfaced by the consuming reads.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecorderError {
    /// The log ran out before a matching entry turned up. Everything scanned
    /// on the way is already gone.
    #[error("event log exhausted while looking for {wanted} ({discarded} entries discarded)")]
    Underflow { wanted: &'static str, discarded: usize },
}

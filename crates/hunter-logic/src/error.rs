//! Errors raised at the parsing and construction boundary.
//!
//! Detectors themselves are total and never fail.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Error)]
pub enum HunterError {
    /// Hunter identifier or display name not in the registry.
    #[error("unknown hunter: {0}")]
    UnknownHunter(String),

    /// History string contains something other than `C` or `D`.
    #[error("invalid move character {0:?} (expected 'C' or 'D')")]
    InvalidMove(char),

    /// Framework-supplied counts disagree with the recorded moves.
    #[error("count mismatch: {len} moves but {cooperations} cooperations + {defections} defections")]
    CountMismatch {
        len: usize,
        cooperations: usize,
        defections: usize,
    },

    #[error("invalid detector config: {0}")]
    InvalidConfig(String),
}

use std::time::Duration;

use thiserror::Error;

/// Coarse classification callers switch on when presenting a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad seed, date, target or board position.
    InvalidInput,
    /// The search hit a configured shuffle or time budget.
    GenerationExhausted,
}

/// Every failure the board engine can report.
///
/// All variants are terminal for the call that produced them; there is no
/// partial board to fall back on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("seed {input:?} is not a 32-bit signed integer")]
    InvalidSeed { input: String },

    #[error("target of {target} matches is out of range (a 12-card board holds at most 220 triples)")]
    TargetOutOfRange { target: u32 },

    #[error("date {input:?} is not in YYYY-MM-DD form")]
    InvalidDate { input: String },

    #[error("board position {position} does not exist")]
    PositionOutOfRange { position: usize },

    #[error("board position {position} was picked more than once")]
    RepeatedPosition { position: usize },

    #[error("no board with {target} matches after {shuffles} shuffles")]
    GenerationExhausted { shuffles: u32, target: u32 },

    #[error("board generation timed out after {elapsed:?} ({shuffles} shuffles)")]
    TimedOut { elapsed: Duration, shuffles: u32 },
}

impl BoardError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BoardError::InvalidSeed { .. }
            | BoardError::TargetOutOfRange { .. }
            | BoardError::InvalidDate { .. }
            | BoardError::PositionOutOfRange { .. }
            | BoardError::RepeatedPosition { .. } => ErrorKind::InvalidInput,
            BoardError::GenerationExhausted { .. } | BoardError::TimedOut { .. } => {
                ErrorKind::GenerationExhausted
            }
        }
    }
}

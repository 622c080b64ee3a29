use thiserror::Error;

/// Errors produced by the engine.
#[derive(Debug, Error)]
pub enum Error {
    /// The move was rejected and the board left untouched.
    #[error("illegal move at ({row}, {col}): {reason}")]
    IllegalMove {
        row: usize,
        col: usize,
        reason: &'static str,
    },

    /// The caller asked for something that only makes sense on a live game,
    /// e.g. searching a board that is already won or full.
    #[error("precondition violated: {0}")]
    PreconditionViolation(&'static str),

    /// A numeric board encoding contained something other than 0, 1 or 2.
    #[error("invalid cell value {value} at ({row}, {col})")]
    InvalidCell { row: usize, col: usize, value: u8 },

    #[error("invalid search configuration: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

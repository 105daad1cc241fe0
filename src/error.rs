use thiserror::Error;

use crate::lexer::TokenKind;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong between reading the source and finishing a run.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid token '{symbol}'")]
    InvalidToken { symbol: char },

    #[error("next token must be {expected}, found {found}")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
    },

    #[error("unbalanced brackets")]
    UnbalancedBrackets,

    #[error("loops nested deeper than {limit}")]
    NestingTooDeep { limit: usize },

    #[error("tape cell value {value} is outside 0-127")]
    CellOutOfRange { value: i64 },

    #[error("tape index {index} is negative")]
    NegativeIndex { index: i64 },

    #[error("expected an integer on input, got '{text}'")]
    InvalidInput { text: String },

    #[error("input exhausted")]
    InputExhausted,

    #[error("step limit of {limit} exceeded")]
    StepLimitExceeded { limit: u64 },

    #[error("IO Error: {0}")]
    Io(
        #[from]
        std::io::Error,
    ),
}

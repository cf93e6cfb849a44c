//! Error types for JSON parsing.
//!
//! Errors carry only the kind of failure, never a byte offset or line number.
//! Callers that just need a yes/no answer use [`Value::from_string`](crate::Value::from_string).

use thiserror::Error;

/// Reasons a JSON document can fail to parse.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input ended while a value, string, or container was still open.
    #[error("unexpected end of input")]
    UnexpectedEnd,

    /// A byte that cannot start or continue the current construct.
    #[error("unexpected character '{0}'")]
    UnexpectedCharacter(char),

    /// Something starting with `t`, `f` or `n` that is not `true`, `false` or `null`.
    #[error("invalid literal")]
    InvalidLiteral,

    /// A number token with missing digits, or one that overflows an f64.
    #[error("invalid number")]
    InvalidNumber,

    /// An unknown `\` escape or a malformed `\uXXXX` sequence.
    #[error("invalid escape sequence in string")]
    InvalidEscape,

    /// Non-whitespace content after the root value.
    #[error("trailing characters after JSON value")]
    TrailingCharacters,

    /// Arrays/objects nested deeper than the configured limit.
    #[error("nesting depth exceeds limit of {0}")]
    DepthLimitExceeded(usize),
}

/// Convenience alias used throughout jvalue-core.
pub type Result<T> = std::result::Result<T, ParseError>;

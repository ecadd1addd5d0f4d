// core/src/errors/syntax_error.rs
use thiserror::Error;

/// Invocation-level misuse: the invocation itself is malformed before any
/// factory runs. Recoverable only by re-invoking correctly; presented to the
/// user together with the usage summary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SyntaxError {
    #[error("missing program/client name")]
    MissingName,

    #[error("unknown program/client: {0}")]
    UnknownName(String),
}

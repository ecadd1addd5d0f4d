// core/src/errors/program_error.rs
use thiserror::Error;

/// Raised by a program or client itself, either while its factory validates
/// the forwarded arguments or later while it runs.
#[derive(Debug, Error)]
pub enum ProgramError {
    #[error("missing parameter: {0}")]
    MissingParameter(&'static str),

    #[error("excess parameters: {0}")]
    ExcessParameters(String),

    #[error("invalid parameter: {name}: {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("input/output error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Failed(String),
}

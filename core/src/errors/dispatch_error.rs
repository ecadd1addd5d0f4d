// core/src/errors/dispatch_error.rs
use thiserror::Error;

use crate::errors::{ProgramError, SyntaxError};
use crate::program::Role;

/// Everything `dispatch` can report.
///
/// Construction collapses every way a factory can refuse into one category
/// distinguished only by its cause text; failures raised by the running
/// instance itself pass through untouched.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error("{role} construction failed: {name}: {cause}")]
    Construction {
        role: Role,
        name: String,
        #[source]
        cause: ProgramError,
    },

    #[error(transparent)]
    Program(#[from] ProgramError),
}

impl DispatchError {
    /// True when the user should be shown the usage summary.
    pub fn is_syntax(&self) -> bool {
        matches!(self, DispatchError::Syntax(_))
    }
}

// core/src/program/traits.rs
use crate::errors::ProgramError;

/// A runnable unit of behavior invoked by name with forwarded arguments.
///
/// Instances are produced by a [`Factory`] and consumed by exactly one `run`;
/// the dispatcher never retains them past that call.
pub trait Program {
    fn run(self: Box<Self>) -> Result<(), ProgramError>;
}

/// Builds a [`Program`] instance from the forwarded arguments, or fails with
/// the reason construction was impossible.
///
/// Argument count/format violations are surfaced here by the implementation
/// itself, not by the dispatcher.
pub type Factory =
    Box<dyn Fn(Vec<String>) -> Result<Box<dyn Program>, ProgramError> + Send + Sync>;

//! Top-level orchestration: parse the invocation, resolve the name, construct
//! the instance, run it, and translate failures.

mod usage;

pub use usage::usage_summary;

use crate::errors::{DispatchError, SyntaxError};
use crate::registry::Registry;

/// Resolve and run one invocation against `registry`.
///
/// The first token names the program or client; the rest is forwarded
/// verbatim to its factory. Blocks until the instance returns or fails; run
/// failures propagate unchanged.
pub fn dispatch(registry: &Registry, invocation: &[String]) -> Result<(), DispatchError> {
    let (name, arguments) = match invocation.split_first() {
        Some((name, rest)) => (name.as_str(), rest),
        None => return Err(SyntaxError::MissingName.into()),
    };

    let entry = registry
        .lookup(name)
        .ok_or_else(|| SyntaxError::UnknownName(name.to_string()))?;

    tracing::debug!(name, role = %entry.role(), "resolved");

    let program = entry
        .construct(arguments.to_vec())
        .map_err(|cause| DispatchError::Construction {
            role: entry.role(),
            name: name.to_string(),
            cause,
        })?;

    tracing::debug!(name, "running");
    program.run().map_err(DispatchError::Program)
}

//! Stable re-exports for consumers (`programs`, `cli`, and external crates).
//!
//! Prefer importing from `brltool_core::api` instead of reaching into internal modules.

pub use crate::config::{load_default, AppConfig, LoggingConfig};
pub use crate::dispatch::{dispatch, usage_summary};
pub use crate::errors::{DispatchError, ProgramError, SyntaxError};
pub use crate::program::{Factory, Program, Role};
pub use crate::registry::{derive_name, Registry};

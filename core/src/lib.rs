pub mod api;
pub mod config;
pub mod dispatch;
pub mod errors;
pub mod program;
pub mod registry;

/// Version of the core crate, reported by the `version` program.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

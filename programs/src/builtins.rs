//! The builtin roster, wired behind the core contracts.

use brltool_core::program::{Program, Role};
use brltool_core::registry::Registry;

use crate::echo::EchoClient;
use crate::pause::PauseClient;
use crate::version::VersionProgram;

/// Build the registry of bundled programs and clients.
///
/// Registration order is the listing order in usage text.
pub fn builtin_registry() -> Registry {
    let mut registry = Registry::new();

    registry.register("EchoClient", Role::Client, |arguments| {
        EchoClient::new(arguments).map(|p| Box::new(p) as Box<dyn Program>)
    });
    registry.register("PauseClient", Role::Client, |arguments| {
        PauseClient::new(arguments).map(|p| Box::new(p) as Box<dyn Program>)
    });
    registry.register("VersionProgram", Role::Program, |arguments| {
        VersionProgram::new(arguments).map(|p| Box::new(p) as Box<dyn Program>)
    });

    registry
}

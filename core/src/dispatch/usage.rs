// core/src/dispatch/usage.rs
use crate::registry::Registry;

/// Render the usage summary shown with invocation diagnostics.
///
/// Lists the registered names in registration order; a read-only enumeration,
/// never a mutation.
pub fn usage_summary(binary: &str, registry: &Registry) -> String {
    let mut usage = format!("usage: {binary} <program/client> [arguments...]\n");

    if registry.is_empty() {
        usage.push_str("No programs or clients have been defined.");
    } else {
        usage.push_str("These programs and clients have been defined:");
        for name in registry.names() {
            usage.push_str("\n  ");
            usage.push_str(name);
        }
    }

    usage
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::errors::ProgramError;
    use crate::program::{Program, Role};

    fn noop_factory(_: Vec<String>) -> Result<Box<dyn Program>, ProgramError> {
        struct Noop;
        impl Program for Noop {
            fn run(self: Box<Self>) -> Result<(), ProgramError> {
                Ok(())
            }
        }
        Ok(Box::new(Noop))
    }

    #[test]
    fn empty_registry_says_so() {
        let registry = Registry::new();
        assert_eq!(
            usage_summary("brltool", &registry),
            "usage: brltool <program/client> [arguments...]\n\
             No programs or clients have been defined."
        );
    }

    #[test]
    fn lists_names_in_registration_order() {
        let mut registry = Registry::new();
        registry.register("EchoClient", Role::Client, noop_factory);
        registry.register("VersionProgram", Role::Program, noop_factory);

        assert_eq!(
            usage_summary("brltool", &registry),
            "usage: brltool <program/client> [arguments...]\n\
             These programs and clients have been defined:\n  echo\n  version"
        );
    }
}

//! Insertion-ordered mapping from command names to factories.
//!
//! Built once before any dispatch and read-only afterwards; lookups need no
//! synchronization.

mod naming;

pub use naming::derive_name;

use std::collections::HashMap;

use crate::errors::ProgramError;
use crate::program::{Factory, Program, Role};

/// One registered program or client.
pub struct Entry {
    name: String,
    role: Role,
    factory: Factory,
}

impl Entry {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Invoke the factory with the forwarded arguments.
    pub fn construct(&self, arguments: Vec<String>) -> Result<Box<dyn Program>, ProgramError> {
        (self.factory)(arguments)
    }
}

#[derive(Default)]
pub struct Registry {
    entries: Vec<Entry>,
    index: HashMap<String, usize>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `symbol` under its derived command name.
    ///
    /// # Panics
    ///
    /// Panics when the derived name collides with an existing entry. A
    /// collision in the roster is a programmer error and aborts
    /// initialization.
    pub fn register<F>(&mut self, symbol: &str, role: Role, factory: F)
    where
        F: Fn(Vec<String>) -> Result<Box<dyn Program>, ProgramError> + Send + Sync + 'static,
    {
        let name = derive_name(symbol, role);
        if self.index.contains_key(&name) {
            panic!("duplicate registration: {name}");
        }

        self.index.insert(name.clone(), self.entries.len());
        self.entries.push(Entry {
            name,
            role,
            factory: Box::new(factory),
        });
    }

    /// Exact, case-sensitive lookup.
    pub fn lookup(&self, name: &str) -> Option<&Entry> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    /// Registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn lookup_returns_the_registered_entry() {
        let mut registry = Registry::new();
        registry.register("EchoClient", Role::Client, noop_factory);

        let entry = registry.lookup("echo").expect("echo should be registered");
        assert_eq!(entry.name(), "echo");
        assert_eq!(entry.role(), Role::Client);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let mut registry = Registry::new();
        registry.register("EchoClient", Role::Client, noop_factory);

        assert!(registry.lookup("Echo").is_none());
        assert!(registry.lookup("ECHO").is_none());
    }

    #[test]
    fn names_preserve_registration_order() {
        let mut registry = Registry::new();
        registry.register("VersionProgram", Role::Program, noop_factory);
        registry.register("EchoClient", Role::Client, noop_factory);
        registry.register("SetParameterClient", Role::Client, noop_factory);

        let names: Vec<&str> = registry.names().collect();
        assert_eq!(names, ["version", "echo", "set-parameter"]);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    #[should_panic(expected = "duplicate registration: echo")]
    fn duplicate_registration_panics() {
        let mut registry = Registry::new();
        registry.register("EchoClient", Role::Client, noop_factory);
        // Same derived name through the other role suffix.
        registry.register("EchoProgram", Role::Program, noop_factory);
    }
}

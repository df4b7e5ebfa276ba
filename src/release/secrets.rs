// src/release/secrets.rs

use std::collections::{BTreeMap, HashMap};

/// Anything that can resolve a named sensitive value.
pub trait SecretSource {
    fn lookup(&self, name: &str) -> Option<String>;
}

/// Reads from the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl SecretSource for ProcessEnv {
    fn lookup(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

impl SecretSource for BTreeMap<String, String> {
    fn lookup(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl SecretSource for HashMap<String, String> {
    fn lookup(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl<S: SecretSource + ?Sized> SecretSource for &S {
    fn lookup(&self, name: &str) -> Option<String> {
        (**self).lookup(name)
    }
}

/// Checks `primary` first, then `fallback`.
///
/// Typical use: project properties from the inventory layered over the
/// process environment.
#[derive(Debug, Clone)]
pub struct Layered<P, F> {
    primary: P,
    fallback: F,
}

impl<P, F> Layered<P, F> {
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }
}

impl<P: SecretSource, F: SecretSource> SecretSource for Layered<P, F> {
    fn lookup(&self, name: &str) -> Option<String> {
        self.primary
            .lookup(name)
            .or_else(|| self.fallback.lookup(name))
    }
}

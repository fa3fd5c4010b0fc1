//! Explicit environment context.
//!
//! The process environment is captured once and never mutated. Defaults
//! computed for the run are recorded here and exported to the runner.

use std::collections::BTreeMap;

/// Variable holding the run mode.
pub const RUN_MODE_VAR: &str = "NODE_ENV";
/// Variable holding the network port.
pub const PORT_VAR: &str = "PORT";

pub const DEFAULT_RUN_MODE: &str = "spec";
pub const DEFAULT_PORT: u16 = 8081;

/// Snapshot of environment variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    vars: BTreeMap<String, String>,
}

/// Effective value of a variable after applying a default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvDefault {
    pub value: String,
    /// True when the variable was absent (or empty) and the default was used.
    pub defaulted: bool,
}

impl Environment {
    /// Capture the current process environment. Non-unicode entries are skipped.
    pub fn from_process() -> Self {
        let vars = std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect();
        Self { vars }
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self { vars: pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }

    /// Record an effective value produced by [`default_if_absent`].
    pub fn apply(&mut self, name: &str, effective: &EnvDefault) {
        if effective.defaulted {
            self.set(name, effective.value.clone());
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Resolve `name` against `env`, falling back to `default` when it is unset
/// or empty. Never overrides an existing value.
pub fn default_if_absent(env: &Environment, name: &str, default: &str) -> EnvDefault {
    match env.get(name).filter(|value| !value.is_empty()) {
        Some(value) => EnvDefault { value: value.to_string(), defaulted: false },
        None => EnvDefault { value: default.to_string(), defaulted: true },
    }
}

use std::path::{Path, PathBuf};

use crate::domain::Environment;
use crate::ports::TestRunner;

/// Application context holding dependencies for command execution.
pub struct AppContext<R: TestRunner> {
    cwd: PathBuf,
    env: Environment,
    runner: R,
}

impl<R: TestRunner> AppContext<R> {
    /// Create a new application context.
    pub fn new(cwd: PathBuf, env: Environment, runner: R) -> Self {
        Self { cwd, env, runner }
    }

    /// Directory positional paths and `--require` values resolve against.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Environment snapshot taken at startup.
    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Get a reference to the test runner.
    pub fn runner(&self) -> &R {
        &self.runner
    }
}

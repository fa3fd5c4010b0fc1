use std::path::PathBuf;

use serde::Serialize;

use crate::domain::{AppError, CompletionSignal, Environment, ParsedOptions};

/// Paths and prelude handed to the runner alongside the parsed options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunnerConfiguration {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub prelude: String,
}

/// Everything the runner needs for one execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunnerInvocation {
    pub options: ParsedOptions,
    pub config: RunnerConfiguration,
}

/// External test runner.
///
/// Implementations run the suites described by `invocation` with `env`
/// exported, and report completion exactly once through the return value.
pub trait TestRunner {
    fn run(
        &self,
        invocation: &RunnerInvocation,
        env: &Environment,
    ) -> Result<CompletionSignal, AppError>;
}

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::domain::{AppError, CompletionSignal, Environment, RunnerConfig};
use crate::ports::{RunnerInvocation, TestRunner};

/// Variable naming the JSON file that holds the invocation.
pub const INVOCATION_ENV: &str = "NAHUAL_INVOCATION";
/// Variable naming the file the runner may write its completion value to.
pub const COMPLETION_ENV: &str = "NAHUAL_COMPLETION";

/// Runs the test suites by spawning the configured runner program.
#[derive(Debug, Clone)]
pub struct ProcessTestRunner {
    config: RunnerConfig,
    cwd: PathBuf,
}

impl ProcessTestRunner {
    pub fn new(config: RunnerConfig, cwd: PathBuf) -> Self {
        Self { config, cwd }
    }
}

impl TestRunner for ProcessTestRunner {
    fn run(
        &self,
        invocation: &RunnerInvocation,
        env: &Environment,
    ) -> Result<CompletionSignal, AppError> {
        let scratch = tempfile::Builder::new().prefix("nahual-").tempdir()?;
        let invocation_path = scratch.path().join("invocation.json");
        let completion_path = scratch.path().join("completion.json");
        fs::write(&invocation_path, serde_json::to_vec_pretty(invocation)?)?;
        fs::write(&completion_path, "")?;

        let mut command = Command::new(&self.config.program);
        command
            .args(&self.config.args)
            .current_dir(&self.cwd)
            .envs(env.iter())
            .env(INVOCATION_ENV, &invocation_path)
            .env(COMPLETION_ENV, &completion_path);

        tracing::debug!(
            program = %self.config.program,
            args = ?self.config.args,
            invocation = %invocation_path.display(),
            "Spawning runner"
        );

        let status = command.status().map_err(|e| AppError::RunnerSpawn {
            program: self.config.program.clone(),
            error: e.to_string(),
        })?;

        if let Some(reported) = read_completion(&completion_path)? {
            return CompletionSignal::from_json(&reported);
        }

        Ok(match status.code() {
            Some(code) => CompletionSignal::Code(code),
            None => CompletionSignal::Other(status.to_string()),
        })
    }
}

/// Completion value written by the runner, if any. A runner that removed the
/// file reported nothing.
fn read_completion(path: &Path) -> Result<Option<String>, AppError> {
    match fs::read_to_string(path) {
        Ok(reported) if reported.trim().is_empty() => Ok(None),
        Ok(reported) => Ok(Some(reported)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(AppError::Completion(format!(
            "Cannot read completion file {}: {}",
            path.display(),
            err
        ))),
    }
}

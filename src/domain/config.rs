//! Runner configuration loaded from `nahual.toml`.

use serde::Deserialize;

use super::AppError;

/// Configuration file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "nahual.toml";
/// Environment variable overriding the runner program.
pub const RUNNER_ENV_VAR: &str = "NAHUAL_RUNNER";
pub const DEFAULT_RUNNER_PROGRAM: &str = "nahual-runner";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NahualConfig {
    #[serde(default)]
    pub runner: RunnerConfig,
}

/// Which external program executes the test suites.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunnerConfig {
    /// Program to spawn.
    #[serde(default = "default_program")]
    pub program: String,
    /// Arguments placed before anything nahual adds.
    #[serde(default)]
    pub args: Vec<String>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self { program: default_program(), args: Vec::new() }
    }
}

fn default_program() -> String {
    DEFAULT_RUNNER_PROGRAM.to_string()
}

/// Parse the contents of a `nahual.toml` file.
pub fn parse_config_content(content: &str) -> Result<NahualConfig, AppError> {
    let config: NahualConfig = toml::from_str(content)?;
    if config.runner.program.trim().is_empty() {
        return Err(AppError::config_error("runner.program must not be empty"));
    }
    Ok(config)
}

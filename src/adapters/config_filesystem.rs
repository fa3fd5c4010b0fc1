use std::fs;
use std::io;
use std::path::Path;

use crate::domain::config::{CONFIG_FILE, RUNNER_ENV_VAR, parse_config_content};
use crate::domain::{AppError, Environment, NahualConfig};

/// Read `nahual.toml` from `cwd`, falling back to defaults when it is absent.
///
/// A non-empty `NAHUAL_RUNNER` replaces the configured runner program.
pub fn load_config(cwd: &Path, env: &Environment) -> Result<NahualConfig, AppError> {
    let config_path = cwd.join(CONFIG_FILE);

    let mut config = match fs::read_to_string(&config_path) {
        Ok(content) => parse_config_content(&content).map_err(|e| {
            AppError::config_error(format!("Invalid {}: {}", config_path.display(), e))
        })?,
        Err(err) if err.kind() == io::ErrorKind::NotFound => NahualConfig::default(),
        Err(err) => return Err(err.into()),
    };

    if let Some(program) = env.get(RUNNER_ENV_VAR).filter(|program| !program.trim().is_empty()) {
        config.runner.program = program.to_string();
    }

    tracing::debug!(
        program = %config.runner.program,
        args = ?config.runner.args,
        "Loaded runner configuration"
    );
    Ok(config)
}

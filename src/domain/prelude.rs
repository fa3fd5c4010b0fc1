//! Prelude script synthesis.
//!
//! The prelude is evaluated by the runner before any step file. It pins the
//! run-mode and port variables and loads the modules given with `--require`.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use super::AppError;
use super::environment::{
    DEFAULT_PORT, DEFAULT_RUN_MODE, Environment, PORT_VAR, RUN_MODE_VAR, default_if_absent,
};
use super::paths::resolve_against;

/// Ordered prelude statements, rendered one per line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreludeScript {
    lines: Vec<String>,
}

impl PreludeScript {
    /// Build the prelude, recording defaulted variables into `env`.
    pub fn synthesize(
        cwd: &Path,
        env: &mut Environment,
        requires: &[String],
    ) -> Result<Self, AppError> {
        let run_mode = default_if_absent(env, RUN_MODE_VAR, DEFAULT_RUN_MODE);
        env.apply(RUN_MODE_VAR, &run_mode);
        let port = default_if_absent(env, PORT_VAR, &DEFAULT_PORT.to_string());
        env.apply(PORT_VAR, &port);

        if run_mode.defaulted || port.defaulted {
            tracing::debug!(
                run_mode = %run_mode.value,
                port = %port.value,
                "Applied environment defaults"
            );
        }

        let mut lines = vec![
            format!("process.env.{}={}", RUN_MODE_VAR, serde_json::to_string(&run_mode.value)?),
            format!("process.env.{}={}", PORT_VAR, port_literal(&port.value)?),
        ];
        for module in requires {
            let resolved = resolve_module(cwd, module)?;
            lines.push(format!("require({})", serde_json::to_string(&resolved)?));
        }

        Ok(Self { lines })
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Module-load statements only.
    pub fn requires(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().skip(2).map(String::as_str)
    }
}

impl fmt::Display for PreludeScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines.join("\n"))
    }
}

/// Numeric ports are emitted bare; anything else is quoted.
fn port_literal(value: &str) -> Result<String, AppError> {
    match value.parse::<u16>() {
        Ok(port) => Ok(port.to_string()),
        Err(_) => Ok(serde_json::to_string(value)?),
    }
}

/// Use the absolute path when `module` names an existing file or directory,
/// otherwise keep it as a module name.
fn resolve_module(cwd: &Path, module: &str) -> Result<String, AppError> {
    let candidate = resolve_against(cwd, module)?;
    match fs::metadata(&candidate) {
        Ok(_) => candidate.to_str().map(str::to_string).ok_or_else(|| {
            AppError::InvalidPath(format!(
                "Required path contains invalid unicode: {}",
                candidate.display()
            ))
        }),
        Err(err) => missing_module(module, &candidate, err),
    }
}

/// A candidate that does not exist is a module name; any other failure to
/// inspect it aborts the run.
fn missing_module(module: &str, candidate: &Path, err: io::Error) -> Result<String, AppError> {
    match err.kind() {
        io::ErrorKind::NotFound | io::ErrorKind::NotADirectory => Ok(module.to_string()),
        kind => Err(AppError::Io(io::Error::new(
            kind,
            format!("Cannot inspect required path {}: {}", candidate.display(), err),
        ))),
    }
}

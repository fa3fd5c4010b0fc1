//! Source and destination path resolution.

use std::path::{Component, Path, PathBuf};

use serde::Serialize;

use super::AppError;

pub const DEFAULT_SOURCE: &str = "test";
pub const DEFAULT_DESTINATION: &str = "generated";

/// Absolute source and destination directories handed to the runner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedPaths {
    pub source: PathBuf,
    pub destination: PathBuf,
}

impl ResolvedPaths {
    /// Resolve the optional positional arguments against `cwd`.
    pub fn resolve(
        cwd: &Path,
        source: Option<&str>,
        destination: Option<&str>,
    ) -> Result<Self, AppError> {
        Ok(Self {
            source: resolve_against(cwd, source.unwrap_or(DEFAULT_SOURCE))?,
            destination: resolve_against(cwd, destination.unwrap_or(DEFAULT_DESTINATION))?,
        })
    }
}

/// Join `path` onto `cwd` (unless already absolute) and normalize it lexically.
pub fn resolve_against(cwd: &Path, path: &str) -> Result<PathBuf, AppError> {
    if !cwd.is_absolute() {
        return Err(AppError::InvalidPath(format!(
            "Working directory is not absolute: {}",
            cwd.display()
        )));
    }

    let mut resolved = PathBuf::new();
    for component in cwd.join(path).components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // Popping past the root stays at the root.
                resolved.pop();
            }
            other => resolved.push(other.as_os_str()),
        }
    }
    Ok(resolved)
}

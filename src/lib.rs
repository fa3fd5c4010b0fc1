//! nahual: translate a command line into a browser-test runner invocation.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;


use std::path::PathBuf;

pub use adapters::ProcessTestRunner;
pub use app::AppContext;
pub use app::commands::run::{Translation, translate};
pub use domain::{
    AppError, CompletionSignal, EnvDefault, Environment, ParsedOptions, PreludeScript,
    ResolvedPaths,
};
pub use ports::{RunnerConfiguration, RunnerInvocation, TestRunner};

/// Parse `args` (without the program name) and run them through `runner`.
///
/// Help and version requests are not handled here; check
/// [`ParsedOptions::help`] and [`ParsedOptions::version`] first when that
/// matters, or use the `nahual` binary.
pub fn run_tests<I, S, R>(
    args: I,
    cwd: PathBuf,
    env: Environment,
    runner: R,
) -> Result<CompletionSignal, AppError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
    R: TestRunner,
{
    let ctx = AppContext::new(cwd, env, runner);
    app::commands::run::execute(&ctx, ParsedOptions::parse(args))
}

/// Usage text printed for `--help`.
pub fn usage() -> String {
    app::commands::help::usage_text()
}

/// Version line printed for `--version`.
pub fn version() -> String {
    app::commands::help::version_text()
}

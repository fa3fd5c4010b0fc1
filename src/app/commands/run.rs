//! Translate parsed options into a runner invocation and delegate to it.

use std::path::Path;

use crate::app::AppContext;
use crate::domain::{
    AppError, CompletionSignal, Environment, ParsedOptions, PreludeScript, ResolvedPaths,
};
use crate::ports::{RunnerConfiguration, RunnerInvocation, TestRunner};

/// Invocation plus the environment to export alongside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub invocation: RunnerInvocation,
    pub env: Environment,
}

/// Resolve paths and synthesize the prelude for `options`.
///
/// `env` is consumed and returned with the effective run-mode and port
/// values recorded.
pub fn translate(
    options: ParsedOptions,
    cwd: &Path,
    mut env: Environment,
) -> Result<Translation, AppError> {
    let paths = ResolvedPaths::resolve(cwd, options.source_arg(), options.destination_arg())?;
    tracing::debug!(
        source = %paths.source.display(),
        destination = %paths.destination.display(),
        "Resolved paths"
    );

    let prelude = PreludeScript::synthesize(cwd, &mut env, &options.require)?;

    Ok(Translation {
        invocation: RunnerInvocation {
            options,
            config: RunnerConfiguration {
                source: paths.source,
                destination: paths.destination,
                prelude: prelude.to_string(),
            },
        },
        env,
    })
}

/// Translate `options` and hand them to the context's runner.
///
/// Setup failures are returned before the runner is touched.
pub fn execute<R: TestRunner>(
    ctx: &AppContext<R>,
    options: ParsedOptions,
) -> Result<CompletionSignal, AppError> {
    let Translation { invocation, env } = translate(options, ctx.cwd(), ctx.env().clone())?;
    let signal = ctx.runner().run(&invocation, &env)?;
    tracing::debug!(?signal, "Runner finished");
    Ok(signal)
}

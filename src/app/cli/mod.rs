//! CLI Adapter.

use std::env;

use tracing_subscriber::EnvFilter;

use crate::adapters::{ProcessTestRunner, load_config};
use crate::app::AppContext;
use crate::app::commands::{help, run};
use crate::domain::{AppError, Environment, ParsedOptions};

/// Variable holding the tracing filter directive.
pub const LOG_ENV_VAR: &str = "NAHUAL_LOG";

/// Entry point for the CLI.
pub fn run() {
    init_logging();

    let options = ParsedOptions::parse(env::args().skip(1));

    if options.help {
        println!("{}", help::usage_text());
        std::process::exit(0);
    }
    if options.version {
        println!("{}", help::version_text());
        std::process::exit(0);
    }

    match run_tests(options) {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_tests(options: ParsedOptions) -> Result<i32, AppError> {
    let cwd = env::current_dir()?;
    let environment = Environment::from_process();
    let config = load_config(&cwd, &environment)?;
    let runner = ProcessTestRunner::new(config.runner, cwd.clone());
    let ctx = AppContext::new(cwd, environment, runner);

    let signal = run::execute(&ctx, options)?;
    Ok(signal.exit_code())
}

/// Log to stderr so stdout stays with help text and the runner.
fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

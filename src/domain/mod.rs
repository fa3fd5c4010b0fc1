pub mod completion;
pub mod config;
pub mod environment;
pub mod error;
pub mod options;
pub mod paths;
pub mod prelude;

pub use completion::CompletionSignal;
pub use config::{NahualConfig, RunnerConfig};
pub use environment::{EnvDefault, Environment};
pub use error::AppError;
pub use options::{FlagKind, FlagSpec, FlagValue, ParsedOptions};
pub use paths::ResolvedPaths;
pub use prelude::PreludeScript;

pub mod config_filesystem;
pub mod process_runner;

pub use config_filesystem::load_config;
pub use process_runner::ProcessTestRunner;

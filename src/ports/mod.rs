mod test_runner;

pub use test_runner::{RunnerConfiguration, RunnerInvocation, TestRunner};

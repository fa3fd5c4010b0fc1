use std::cell::RefCell;

use crate::domain::{AppError, CompletionSignal, Environment};
use crate::ports::{RunnerInvocation, TestRunner};

/// Test runner that records every call and answers with a fixed signal.
pub struct RecordingRunner {
    signal: CompletionSignal,
    calls: RefCell<Vec<(RunnerInvocation, Environment)>>,
}

impl RecordingRunner {
    pub fn new(signal: CompletionSignal) -> Self {
        Self { signal, calls: RefCell::new(Vec::new()) }
    }

    pub fn calls(&self) -> Vec<(RunnerInvocation, Environment)> {
        self.calls.borrow().clone()
    }
}

impl TestRunner for RecordingRunner {
    fn run(
        &self,
        invocation: &RunnerInvocation,
        env: &Environment,
    ) -> Result<CompletionSignal, AppError> {
        self.calls.borrow_mut().push((invocation.clone(), env.clone()));
        Ok(self.signal.clone())
    }
}

//! Completion signal reported by the runner and its exit-code mapping.

use serde_json::{Number, Value};

use super::AppError;

/// What the runner reported when it finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionSignal {
    /// Boolean `true`.
    Success,
    /// Boolean `false`.
    Failure,
    /// An explicit exit code.
    Code(i32),
    /// Anything else, kept as text for diagnostics.
    Other(String),
}

impl CompletionSignal {
    /// Decode a JSON completion value (`true`, `false`, or an integer).
    pub fn from_json(text: &str) -> Result<Self, AppError> {
        let value: Value = serde_json::from_str(text)
            .map_err(|e| AppError::Completion(format!("{}: {}", text.trim(), e)))?;
        Ok(Self::from(value))
    }

    /// Process exit code for this signal.
    pub fn exit_code(&self) -> i32 {
        match self {
            CompletionSignal::Success => 0,
            CompletionSignal::Failure => 1,
            CompletionSignal::Code(code) => *code,
            CompletionSignal::Other(value) => {
                tracing::warn!(%value, "Runner reported an unrecognized completion value");
                1
            }
        }
    }
}

impl From<Value> for CompletionSignal {
    fn from(value: Value) -> Self {
        match value {
            Value::Bool(true) => CompletionSignal::Success,
            Value::Bool(false) => CompletionSignal::Failure,
            Value::Number(ref number) => match exit_code_of(number) {
                Some(code) => CompletionSignal::Code(code),
                None => CompletionSignal::Other(value.to_string()),
            },
            other => CompletionSignal::Other(other.to_string()),
        }
    }
}

/// Whole numbers within `i32` are exit codes, whether written as `42`,
/// `42.0` or `4.2e1`.
fn exit_code_of(number: &Number) -> Option<i32> {
    if let Some(n) = number.as_i64() {
        return i32::try_from(n).ok();
    }
    let n = number.as_f64()?;
    if n.fract() != 0.0 || n < f64::from(i32::MIN) || n > f64::from(i32::MAX) {
        return None;
    }
    Some(n as i32)
}

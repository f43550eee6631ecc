//! Invocation payload and per-invocation outcome.

use serde::Deserialize;
use serde_json::Value;

use crate::error::DateError;

/// Event payload. Only `date` is read; other fields are ignored.
#[derive(Debug, Deserialize)]
pub struct InvocationRequest {
  /// Untyped on purpose: string, epoch number, or anything else the caller sends.
  #[serde(default)]
  pub date: Option<Value>,
}

impl InvocationRequest {
  /// Decode a raw event. Non-object payloads are a date processing failure.
  pub fn from_value(event: &Value) -> Result<Self, DateError> {
    Ok(Self::deserialize(event)?)
  }
}

/// What one invocation produced. Owns the single line written to the log sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
  Formatted(String),
  Failed(String),
}

impl Outcome {
  pub fn line(&self) -> &str {
    match self {
      Outcome::Formatted(s) | Outcome::Failed(s) => s,
    }
  }
}

impl From<Result<String, DateError>> for Outcome {
  fn from(res: Result<String, DateError>) -> Self {
    match res {
      Ok(s) => Outcome::Formatted(s),
      Err(e) => Outcome::Failed(e.to_string()),
    }
  }
}

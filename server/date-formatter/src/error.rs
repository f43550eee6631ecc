//! Date processing failures.
//!
//! Callers only ever see these as a log line: every variant renders with the
//! same `date processing failure:` prefix.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DateError {
  #[error("date processing failure: missing `date` field")]
  Missing,

  #[error("date processing failure: unrecognized date {0:?}")]
  Unparseable(String),

  #[error("date processing failure: unsupported {0} value")]
  Unsupported(&'static str),

  #[error("date processing failure: {0} out of range")]
  OutOfRange(String),

  #[error("date processing failure: malformed event: {0}")]
  Event(#[from] serde_json::Error),
}

impl DateError {
  pub fn unparseable(input: impl Into<String>) -> Self {
    Self::Unparseable(input.into())
  }

  pub fn out_of_range(input: impl ToString) -> Self {
    Self::OutOfRange(input.to_string())
  }
}

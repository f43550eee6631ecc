//! Date Formatter Function
//!
//! Serverless handler that renders an event's `date` field as `DD MMM YYYY`
//! and writes one log line per invocation: the formatted date, or an error
//! description. The invocation itself never fails.

pub mod config;
pub mod date;
pub mod error;
pub mod handler;
pub mod types;

pub use config::LogConfig;
pub use error::DateError;
pub use handler::{function_handler, report, LogSink};
pub use types::{InvocationRequest, Outcome};

use serde_json::Value;

/// Parse and format one event (no I/O). Every failure ends up as `Outcome::Failed`.
pub fn run(event: &Value) -> Outcome {
  format_event(event).into()
}

fn format_event(event: &Value) -> Result<String, DateError> {
  let request = InvocationRequest::from_value(event)?;
  let value = request.date.ok_or(DateError::Missing)?;
  let date = date::parse_date(&value)?;
  Ok(date::format_date(date))
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn run_formats_iso_date() {
    assert_eq!(
      run(&json!({ "date": "2024-03-05" })),
      Outcome::Formatted("05 Mar 2024".to_string())
    );
  }

  #[test]
  fn run_reports_missing_field() {
    let out = run(&json!({ "when": "2024-03-05" }));
    assert_eq!(
      out,
      Outcome::Failed("date processing failure: missing `date` field".to_string())
    );
  }
}

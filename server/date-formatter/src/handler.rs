//! Lambda invocation boundary and the log sink it reports to.

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;

use crate::types::Outcome;

/// Output channel. Receives exactly one outcome per invocation.
pub trait LogSink {
  fn record(&mut self, outcome: &Outcome);
}

/// Production sink: one `tracing` event, tagged with the Lambda request id.
pub struct TracingSink<'a> {
  pub request_id: &'a str,
}

impl LogSink for TracingSink<'_> {
  fn record(&mut self, outcome: &Outcome) {
    match outcome {
      Outcome::Formatted(s) => tracing::info!(request_id = self.request_id, "{}", s),
      Outcome::Failed(e) => tracing::error!(request_id = self.request_id, "{}", e),
    }
  }
}

/// In-memory sink: one pushed line per outcome.
impl LogSink for Vec<String> {
  fn record(&mut self, outcome: &Outcome) {
    self.push(outcome.line().to_string());
  }
}

pub fn report<S: LogSink>(outcome: &Outcome, sink: &mut S) {
  sink.record(outcome);
}

/// Entry point wired into `lambda_runtime`. Always completes with `Ok(())`;
/// failures are only visible in the log line.
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<(), Error> {
  let (payload, context) = event.into_parts();
  let outcome = crate::run(&payload);
  report(
    &outcome,
    &mut TracingSink {
      request_id: &context.request_id,
    },
  );
  Ok(())
}

//! Binary entrypoint: install logging, then hand the handler to the Lambda runtime.

use date_formatter::{function_handler, LogConfig};
use lambda_runtime::{service_fn, Error};

#[tokio::main]
async fn main() -> Result<(), Error> {
  LogConfig::from_env().init()?;
  tracing::debug!("date-formatter starting");

  lambda_runtime::run(service_fn(function_handler)).await
}

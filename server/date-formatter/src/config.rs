//! Logging configuration, read from the variables Lambda manages.

use std::env;

use tracing_subscriber::EnvFilter;

/// How log lines are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
  Text,
  Json,
}

#[derive(Debug, Clone)]
pub struct LogConfig {
  pub format: LogFormat,
  /// `EnvFilter` directive, e.g. `info` or `date_formatter=debug`.
  pub filter: String,
}

impl Default for LogConfig {
  fn default() -> Self {
    Self {
      format: LogFormat::Text,
      filter: "info".to_string(),
    }
  }
}

impl LogConfig {
  /// `AWS_LAMBDA_LOG_FORMAT` picks the format; `RUST_LOG` wins over
  /// `AWS_LAMBDA_LOG_LEVEL` for the filter.
  pub fn from_env() -> Self {
    Self::from_lookup(|key| env::var(key).ok())
  }

  fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
    let mut cfg = Self::default();
    if let Some(f) = get("AWS_LAMBDA_LOG_FORMAT") {
      if f.eq_ignore_ascii_case("json") {
        cfg.format = LogFormat::Json;
      }
    }
    if let Some(level) = get("RUST_LOG").or_else(|| get("AWS_LAMBDA_LOG_LEVEL")) {
      let level = level.trim().to_ascii_lowercase();
      if !level.is_empty() {
        cfg.filter = level;
      }
    }
    cfg
  }

  /// Install the global subscriber. No ANSI and no timestamps: the platform
  /// log pipeline stamps each line.
  pub fn init(&self) -> Result<(), lambda_runtime::Error> {
    let filter = EnvFilter::try_new(&self.filter)?;
    let builder = tracing_subscriber::fmt()
      .with_env_filter(filter)
      .with_ansi(false)
      .without_time()
      .with_target(false);
    match self.format {
      LogFormat::Json => builder.json().try_init(),
      LogFormat::Text => builder.try_init(),
    }
  }
}

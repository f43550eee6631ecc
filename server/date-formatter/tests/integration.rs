//! Integration tests for the date formatter.

use date_formatter::{function_handler, report, run, Outcome};
use lambda_runtime::{Context, LambdaEvent};
use serde_json::{json, Value};

fn invoke(event: Value) -> Vec<String> {
  let mut sink: Vec<String> = Vec::new();
  report(&run(&event), &mut sink);
  sink
}

#[test]
fn iso_dates_format_exactly() {
  assert_eq!(invoke(json!({ "date": "2024-03-05" })), vec!["05 Mar 2024"]);
  assert_eq!(invoke(json!({ "date": "2024-12-31" })), vec!["31 Dec 2024"]);
}

#[test]
fn unparseable_date_logs_error_description() {
  let lines = invoke(json!({ "date": "not-a-date" }));
  assert_eq!(lines.len(), 1);
  assert!(lines[0].starts_with("date processing failure"), "{}", lines[0]);
  assert!(lines[0].contains("not-a-date"));
}

#[test]
fn missing_date_logs_error_description() {
  let lines = invoke(json!({ "other": 1 }));
  assert_eq!(lines, vec!["date processing failure: missing `date` field"]);
}

#[test]
fn repeated_invocations_are_identical() {
  let event = json!({ "date": "2024-03-05T08:00:00Z" });
  assert_eq!(invoke(event.clone()), invoke(event));

  let bad = json!({ "date": false });
  assert_eq!(invoke(bad.clone()), invoke(bad));
}

#[test]
fn epoch_and_timestamp_inputs() {
  assert_eq!(run(&json!({ "date": 1_735_603_200_000_i64 })).line(), "31 Dec 2024");
  assert_eq!(run(&json!({ "date": "2024-12-31T22:00:00-05:00" })).line(), "01 Jan 2025");
}

#[test]
fn reduced_precision_ordinal_and_week_forms() {
  for (input, want) in [
    ("2024-03-05T10:30Z", "05 Mar 2024"),
    ("2024-03-05T10:30+01:00", "05 Mar 2024"),
    ("2024-03-05T10:30:00+03", "05 Mar 2024"),
    ("2024", "01 Jan 2024"),
    ("2024-065", "05 Mar 2024"),
    ("2024-W10-2", "05 Mar 2024"),
  ] {
    assert_eq!(run(&json!({ "date": input })).line(), want, "{}", input);
  }
}

#[test]
fn year_beyond_four_digits_is_a_failure() {
  let out = run(&json!({ "date": 1_000_000_000_000_000_i64 }));
  assert_eq!(
    out,
    Outcome::Failed("date processing failure: 1000000000000000 out of range".to_string())
  );
}

#[test]
fn unsupported_payloads_fail_without_panicking() {
  for event in [
    json!(null),
    json!("2024-03-05"),
    json!([1, 2, 3]),
    json!({ "date": { "year": 2024 } }),
    json!({ "date": [2024, 2, 5] }),
  ] {
    let out = run(&event);
    assert!(matches!(out, Outcome::Failed(_)), "{:?} -> {:?}", event, out);
  }
}

#[tokio::test]
async fn handler_returns_no_payload_either_way() {
  for event in [json!({ "date": "2024-03-05" }), json!({ "date": "nope" }), json!({})] {
    let res = function_handler(LambdaEvent::new(event, Context::default())).await;
    assert!(res.is_ok());
  }
}

//! Date parsing and formatting.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveTime, Utc, Weekday};
use serde_json::{Number, Value};

use crate::error::DateError;

/// Output pattern: two-digit day, short English month, four-digit year.
pub const OUTPUT_FORMAT: &str = "%d %b %Y";

/// Render a calendar date as `DD MMM YYYY`.
pub fn format_date(date: NaiveDate) -> String {
  date.format(OUTPUT_FORMAT).to_string()
}

/// Interpret a loosely-typed event value as a calendar date.
///
/// Strings are read as ISO-8601 dates or timestamps, numbers as epoch
/// milliseconds. Every other JSON type is rejected, as is any date whose year
/// does not fit in four digits.
pub fn parse_date(value: &Value) -> Result<NaiveDate, DateError> {
  let date = match value {
    Value::String(s) => parse_date_str(s),
    Value::Number(n) => parse_epoch_millis(n),
    Value::Null => Err(DateError::Missing),
    Value::Bool(_) => Err(DateError::Unsupported("boolean")),
    Value::Array(_) => Err(DateError::Unsupported("array")),
    Value::Object(_) => Err(DateError::Unsupported("object")),
  }?;

  if !(0..=9999).contains(&date.year()) {
    return Err(DateError::out_of_range(value));
  }
  Ok(date)
}

fn parse_date_str(raw: &str) -> Result<NaiveDate, DateError> {
  parse_iso(raw.trim()).ok_or_else(|| DateError::unparseable(raw))
}

/// `<date>[(T|t| )<time>[Z|±hh[[:]mm]]]`. Offset-carrying timestamps are
/// normalized to UTC before taking the date.
fn parse_iso(s: &str) -> Option<NaiveDate> {
  let (day, time) = match s.find(|c: char| matches!(c, 'T' | 't' | ' ')) {
    Some(i) => (&s[..i], Some(&s[i + 1..])),
    None => (s, None),
  };
  let date = parse_calendar(day)?;
  let Some(time) = time else {
    return Some(date);
  };

  let (clock, offset) = split_offset(time)?;
  let local = date.and_time(parse_clock(clock)?);
  match offset {
    None => Some(local.date()),
    Some(off) => Some(
      local
        .and_local_timezone(off)
        .single()?
        .with_timezone(&Utc)
        .date_naive(),
    ),
  }
}

/// Digits collapse to `9`, so `2024-W10-2` has the shape `9999-W99-9`.
fn shape(s: &str) -> String {
  s.chars()
    .map(|c| if c.is_ascii_digit() { '9' } else { c })
    .collect()
}

fn num<T: std::str::FromStr>(s: &str) -> Option<T> {
  s.parse().ok()
}

fn iso_weekday(d: u32) -> Option<Weekday> {
  use Weekday::*;
  [Mon, Tue, Wed, Thu, Fri, Sat, Sun]
    .get(d.checked_sub(1)? as usize)
    .copied()
}

/// Calendar, ordinal and week dates, extended or basic. Only ASCII shapes
/// match, so the byte slicing below is on char boundaries.
fn parse_calendar(s: &str) -> Option<NaiveDate> {
  let year = || num::<i32>(&s[..4]);
  match shape(s).as_str() {
    "9999-99-99" => NaiveDate::from_ymd_opt(year()?, num(&s[5..7])?, num(&s[8..10])?),
    "99999999" => NaiveDate::from_ymd_opt(year()?, num(&s[4..6])?, num(&s[6..8])?),
    "9999-99" => NaiveDate::from_ymd_opt(year()?, num(&s[5..7])?, 1),
    "9999" => NaiveDate::from_ymd_opt(year()?, 1, 1),
    "9999-999" => NaiveDate::from_yo_opt(year()?, num(&s[5..8])?),
    "9999999" => NaiveDate::from_yo_opt(year()?, num(&s[4..7])?),
    "9999-W99-9" => {
      NaiveDate::from_isoywd_opt(year()?, num(&s[6..8])?, iso_weekday(num(&s[9..10])?)?)
    }
    "9999W999" => NaiveDate::from_isoywd_opt(year()?, num(&s[5..7])?, iso_weekday(num(&s[7..8])?)?),
    "9999-W99" => NaiveDate::from_isoywd_opt(year()?, num(&s[6..8])?, Weekday::Mon),
    "9999W99" => NaiveDate::from_isoywd_opt(year()?, num(&s[5..7])?, Weekday::Mon),
    _ => None,
  }
}

/// Split a trailing `Z`, `±hh`, `±hhmm` or `±hh:mm` off the time of day.
fn split_offset(t: &str) -> Option<(&str, Option<FixedOffset>)> {
  if let Some(clock) = t.strip_suffix('Z').or_else(|| t.strip_suffix('z')) {
    return Some((clock, FixedOffset::east_opt(0)));
  }
  let Some(i) = t.rfind(|c: char| c == '+' || c == '-') else {
    return Some((t, None));
  };

  let (clock, off) = t.split_at(i);
  let sign = if off.starts_with('-') { -1 } else { 1 };
  let digits = &off[1..];
  let (h, m): (u32, u32) = match shape(digits).as_str() {
    "99" => (num(digits)?, 0),
    "9999" => (num(&digits[..2])?, num(&digits[2..])?),
    "99:99" => (num(&digits[..2])?, num(&digits[3..])?),
    _ => return None,
  };
  if m > 59 {
    return None;
  }
  let offset = FixedOffset::east_opt(sign * (h * 3600 + m * 60) as i32)?;
  Some((clock, Some(offset)))
}

/// `hh`, `hh:mm`, `hh:mm:ss` (or basic `hhmm`, `hhmmss`), optional fraction.
fn parse_clock(clock: &str) -> Option<NaiveTime> {
  let hms = match clock.find(|c: char| c == '.' || c == ',') {
    Some(i) => {
      let frac = &clock[i + 1..];
      if frac.is_empty() || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return None;
      }
      &clock[..i]
    }
    None => clock,
  };

  let (h, m, s) = match shape(hms).as_str() {
    "99" => (num(hms)?, 0, 0),
    "99:99" => (num(&hms[..2])?, num(&hms[3..5])?, 0),
    "99:99:99" => (num(&hms[..2])?, num(&hms[3..5])?, num(&hms[6..8])?),
    "9999" => (num(&hms[..2])?, num(&hms[2..4])?, 0),
    "999999" => (num(&hms[..2])?, num(&hms[2..4])?, num(&hms[4..6])?),
    _ => return None,
  };
  NaiveTime::from_hms_opt(h, m, s)
}

fn parse_epoch_millis(n: &Number) -> Result<NaiveDate, DateError> {
  let millis = match n.as_i64() {
    Some(ms) => ms,
    None => {
      let f = n.as_f64().ok_or_else(|| DateError::out_of_range(n))?;
      if !f.is_finite() || f.abs() >= i64::MAX as f64 {
        return Err(DateError::out_of_range(n));
      }
      f.trunc() as i64
    }
  };

  DateTime::<Utc>::from_timestamp_millis(millis)
    .map(|dt| dt.date_naive())
    .ok_or_else(|| DateError::out_of_range(n))
}

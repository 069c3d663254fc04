//! Time target
//!
//! Accepts RFC 3339, RFC 2822 and a fixed list of common layouts. Layouts
//! without an offset are read as UTC; date-only layouts as midnight UTC.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use tracing::trace;

use crate::coerce::Coerce;
use crate::core::{Value, indirect};
use crate::error::{ConvertError, ConvertResult};
use crate::scalar::text::render;

/// Time alias used throughout the crate
pub type Time = DateTime<FixedOffset>;

const OFFSET_LAYOUTS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f %z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
];

const NAIVE_LAYOUTS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%a %b %e %H:%M:%S %Y",
];

const DATE_LAYOUTS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%d %b %Y", "%B %d, %Y"];

/// Parse text with the built-in layouts
pub fn parse_time(input: &str) -> ConvertResult<Time> {
    let rfc3339_error = match DateTime::parse_from_rfc3339(input) {
        Ok(t) => return Ok(t),
        Err(e) => e,
    };
    if let Ok(t) = DateTime::parse_from_rfc2822(input) {
        return Ok(t);
    }
    if let Some(t) = OFFSET_LAYOUTS
        .iter()
        .find_map(|layout| DateTime::parse_from_str(input, layout).ok())
    {
        return Ok(t);
    }
    if let Some(t) = NAIVE_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(input, layout).ok())
    {
        return Ok(t.and_utc().fixed_offset());
    }
    if let Some(d) = DATE_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDate::parse_from_str(input, layout).ok())
    {
        return Ok(midnight_utc(d));
    }

    trace!(input, "no time layout matched");
    Err(ConvertError::InvalidTime {
        input: input.to_owned(),
        source: rfc3339_error,
    })
}

/// Parse text with a caller-supplied `chrono` format string
///
/// The layout may describe a full offset date-time, a naive date-time (read
/// as UTC) or a bare date (midnight UTC).
pub fn parse_time_with_layout(input: &str, layout: &str) -> ConvertResult<Time> {
    if let Ok(t) = DateTime::parse_from_str(input, layout) {
        return Ok(t);
    }
    let naive_error = match NaiveDateTime::parse_from_str(input, layout) {
        Ok(t) => return Ok(t.and_utc().fixed_offset()),
        Err(e) => e,
    };
    if let Ok(d) = NaiveDate::parse_from_str(input, layout) {
        return Ok(midnight_utc(d));
    }
    Err(ConvertError::InvalidTime {
        input: input.to_owned(),
        source: naive_error,
    })
}

fn midnight_utc(date: NaiveDate) -> Time {
    date.and_time(NaiveTime::MIN).and_utc().fixed_offset()
}

impl Coerce for Time {
    const NAME: &'static str = "time";

    fn coerce(value: &Value) -> ConvertResult<Self> {
        let value = indirect(value);
        match value {
            Value::Time(t) => Ok(*t),
            Value::String(s) => parse_time(s),
            Value::Bytes(b) => parse_time(&String::from_utf8_lossy(b)),
            Value::Array(_) | Value::Object(_) | Value::Map(_) => {
                Err(ConvertError::unsupported(value.kind().name(), Self::NAME))
            }
            other => parse_time(&render(other)),
        }
    }
}

/// Coerce `value` to a time using `layout` for text input
pub fn to_time_with_layout_e(value: &Value, layout: &str) -> ConvertResult<Time> {
    let value = indirect(value);
    match value {
        Value::Time(t) => Ok(*t),
        Value::Array(_) | Value::Object(_) | Value::Map(_) => {
            Err(ConvertError::unsupported(value.kind().name(), Time::NAME))
        }
        other => parse_time_with_layout(&render(other), layout),
    }
}

//! Duration target and duration literals
//!
//! Literals are a signed sequence of decimal numbers with unit suffixes, such
//! as `"300ms"`, `"-1.5h"` or `"2h45m"`. Valid units are `ns`, `us` (or `µs`),
//! `ms`, `s`, `m` and `h`. The value must fit in `i64` nanoseconds.
//!
//! ```rust
//! use chrono::TimeDelta;
//! use nebula_convert::temporal::duration::{format_duration, parse_duration};
//!
//! let d = parse_duration("1h30m").unwrap();
//! assert_eq!(d, TimeDelta::minutes(90));
//! assert_eq!(format_duration(d), "1h30m0s");
//! ```

use std::fmt::Write as _;

use chrono::TimeDelta;
use tracing::trace;

use crate::coerce::Coerce;
use crate::core::{Value, indirect};
use crate::error::{ConvertError, ConvertResult};
use crate::scalar::text::render;

const NANOSECOND: u64 = 1;
const MICROSECOND: u64 = 1_000 * NANOSECOND;
const MILLISECOND: u64 = 1_000 * MICROSECOND;
const SECOND: u64 = 1_000 * MILLISECOND;
const MINUTE: u64 = 60 * SECOND;
const HOUR: u64 = 60 * MINUTE;

/// One past `i64::MAX`, the magnitude of `i64::MIN`
const LIMIT: u64 = 1 << 63;

fn unit_nanos(unit: &str) -> Option<u64> {
    match unit {
        "ns" => Some(NANOSECOND),
        "us" | "µs" | "μs" => Some(MICROSECOND),
        "ms" => Some(MILLISECOND),
        "s" => Some(SECOND),
        "m" => Some(MINUTE),
        "h" => Some(HOUR),
        _ => None,
    }
}

/// Parse a duration literal
pub fn parse_duration(input: &str) -> ConvertResult<TimeDelta> {
    let invalid = |reason| ConvertError::invalid_duration(input, reason);

    let mut s = input;
    let mut negative = false;
    if let Some(rest) = s.strip_prefix('-') {
        negative = true;
        s = rest;
    } else if let Some(rest) = s.strip_prefix('+') {
        s = rest;
    }

    if s == "0" {
        return Ok(TimeDelta::zero());
    }
    if s.is_empty() {
        return Err(invalid("empty literal"));
    }

    let mut total: u64 = 0;
    while !s.is_empty() {
        if !s.starts_with(|c: char| c == '.' || c.is_ascii_digit()) {
            return Err(invalid("expected a number"));
        }

        let (whole, rest) = leading_int(s).ok_or_else(|| invalid("overflow"))?;
        let has_whole = rest.len() != s.len();
        s = rest;

        let mut fraction: u64 = 0;
        let mut scale: f64 = 1.0;
        let mut has_fraction = false;
        if let Some(rest) = s.strip_prefix('.') {
            let (f, sc, rest_after) = leading_fraction(rest);
            has_fraction = rest_after.len() != rest.len();
            fraction = f;
            scale = sc;
            s = rest_after;
        }
        if !has_whole && !has_fraction {
            return Err(invalid("expected a number"));
        }

        let unit_len = s
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(s.len());
        if unit_len == 0 {
            return Err(invalid("missing unit"));
        }
        let (unit, rest) = s.split_at(unit_len);
        s = rest;
        let unit = unit_nanos(unit).ok_or_else(|| invalid("unknown unit"))?;

        if whole > LIMIT / unit {
            return Err(invalid("overflow"));
        }
        let mut v = whole * unit;
        if fraction > 0 {
            v += (fraction as f64 * (unit as f64 / scale)) as u64;
            if v > LIMIT {
                return Err(invalid("overflow"));
            }
        }
        total = total.checked_add(v).filter(|t| *t <= LIMIT).ok_or_else(|| invalid("overflow"))?;
    }

    let nanos = if negative {
        -(i128::from(total))
    } else {
        i128::from(total)
    };
    let nanos = i64::try_from(nanos).map_err(|_| invalid("overflow"))?;
    Ok(TimeDelta::nanoseconds(nanos))
}

/// Consume leading digits; `None` if they overflow
fn leading_int(s: &str) -> Option<(u64, &str)> {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    let mut value: u64 = 0;
    for b in s[..end].bytes() {
        value = value.checked_mul(10)?.checked_add(u64::from(b - b'0'))?;
        if value > LIMIT {
            return None;
        }
    }
    Some((value, &s[end..]))
}

/// Consume fractional digits, dropping precision that would overflow
fn leading_fraction(s: &str) -> (u64, f64, &str) {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    let mut value: u64 = 0;
    let mut scale = 1.0;
    let mut saturated = false;
    for b in s[..end].bytes() {
        if saturated {
            continue;
        }
        match value
            .checked_mul(10)
            .and_then(|v| v.checked_add(u64::from(b - b'0')))
        {
            Some(next) if next <= LIMIT => {
                value = next;
                scale *= 10.0;
            }
            _ => saturated = true,
        }
    }
    (value, scale, &s[end..])
}

/// Render a duration as a literal, e.g. `1h30m0s`, `1.5s`, `100ms`
///
/// The output parses back with [`parse_duration`] to the same value.
pub fn format_duration(d: TimeDelta) -> String {
    let nanos = i128::from(d.num_seconds()) * i128::from(SECOND) + i128::from(d.subsec_nanos());
    if nanos == 0 {
        return "0s".to_owned();
    }

    let mut out = String::new();
    if nanos < 0 {
        out.push('-');
    }
    let mut rest = nanos.unsigned_abs();

    let second = u128::from(SECOND);
    if rest < second {
        let (div, unit) = if rest < u128::from(MICROSECOND) {
            (1, "ns")
        } else if rest < u128::from(MILLISECOND) {
            (u128::from(MICROSECOND), "µs")
        } else {
            (u128::from(MILLISECOND), "ms")
        };
        push_decimal(&mut out, rest, div);
        out.push_str(unit);
        return out;
    }

    let hours = rest / u128::from(HOUR);
    rest %= u128::from(HOUR);
    let minutes = rest / u128::from(MINUTE);
    rest %= u128::from(MINUTE);

    if hours > 0 {
        let _ = write!(out, "{hours}h");
    }
    if hours > 0 || minutes > 0 {
        let _ = write!(out, "{minutes}m");
    }
    push_decimal(&mut out, rest, second);
    out.push('s');
    out
}

/// Write `value / div` with the remainder as trimmed decimal places
fn push_decimal(out: &mut String, value: u128, div: u128) {
    let whole = value / div;
    let frac = value % div;
    let _ = write!(out, "{whole}");
    if frac > 0 {
        let width = div.ilog10() as usize;
        let digits = format!("{frac:0width$}");
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }
}

impl Coerce for TimeDelta {
    const NAME: &'static str = "duration";

    fn coerce(value: &Value) -> ConvertResult<Self> {
        let value = indirect(value);
        match value {
            Value::Duration(d) => Ok(*d),
            Value::String(s) => parse_duration(s),
            Value::Bytes(b) => parse_duration(&String::from_utf8_lossy(b)),
            Value::Array(_) | Value::Object(_) | Value::Map(_) => {
                Err(ConvertError::unsupported(value.kind().name(), Self::NAME))
            }
            other => {
                trace!(kind = %other.kind(), "parsing text rendering as duration");
                parse_duration(&render(other))
            }
        }
    }
}

//! String parsers behind the string fallback chain
//!
//! Integer literals take an optional sign, an optional `0x`/`0o`/`0b` radix
//! prefix (either case) and `_` separators between digits. A leading `0`
//! followed by a digit selects octal, so `"010"` is eight and `"0755"` is
//! 493. Invalid octal such as `"08"` is not an integer literal.

/// Parse a signed 64-bit integer literal
pub fn parse_i64(s: &str) -> Option<i64> {
    let (negative, magnitude) = parse_literal(s)?;
    let wide = i128::try_from(magnitude).ok()?;
    let signed = if negative { -wide } else { wide };
    i64::try_from(signed).ok()
}

/// Parse an unsigned 64-bit integer literal; no sign is accepted
pub fn parse_u64(s: &str) -> Option<u64> {
    if s.starts_with(['+', '-']) {
        return None;
    }
    let (_, magnitude) = parse_literal(s)?;
    u64::try_from(magnitude).ok()
}

/// Parse a float, including `inf`/`nan` spellings
pub fn parse_f64(s: &str) -> Option<f64> {
    s.parse::<f64>().ok()
}

/// Strict boolean spellings used inside the numeric fallback chain
pub fn parse_bool_strict(s: &str) -> Option<bool> {
    match s {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

/// Lenient truth table of the bool target, case-insensitive
pub fn parse_bool_loose(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "t" | "true" | "y" | "yes" | "ok" | "on" => Some(true),
        "0" | "f" | "false" | "n" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

/// Split sign, radix and digits; returns the sign and the magnitude
fn parse_literal(s: &str) -> Option<(bool, u128)> {
    let (negative, rest) = match s.as_bytes().first()? {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, digits, prefixed) = split_radix(rest);
    if digits.is_empty() {
        return None;
    }

    let mut magnitude: u128 = 0;
    // The radix prefix counts as a digit for separator placement.
    let mut after_digit = prefixed;
    for c in digits.chars() {
        if c == '_' {
            if !after_digit {
                return None;
            }
            after_digit = false;
            continue;
        }
        let d = c.to_digit(radix)?;
        magnitude = magnitude
            .checked_mul(u128::from(radix))?
            .checked_add(u128::from(d))?;
        after_digit = true;
    }

    after_digit.then_some((negative, magnitude))
}

fn split_radix(s: &str) -> (u32, &str, bool) {
    let bytes = s.as_bytes();
    if bytes.len() >= 2 && bytes[0] == b'0' {
        let radix = match bytes[1] {
            b'x' | b'X' => Some(16),
            b'o' | b'O' => Some(8),
            b'b' | b'B' => Some(2),
            _ => None,
        };
        if let Some(radix) = radix {
            return (radix, &s[2..], true);
        }
        // Bare leading zero: octal, the zero counts as the prefix.
        if bytes[1].is_ascii_digit() {
            return (8, &s[1..], true);
        }
    }
    (10, s, false)
}

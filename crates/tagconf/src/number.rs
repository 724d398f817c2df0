//! Scalar literal parsing for default values.
//!
//! Responsibilities:
//! - Parse integer literals with optional sign and base prefix (`0x`, `0o`,
//!   `0b`, legacy leading-`0` octal) and `_` digit separators.
//! - Range-check integers against the declared width.
//! - Parse boolean, float, and duration literals; durations read as
//!   nanosecond counts may carry a sign.
//!
//! Does NOT handle:
//! - Choosing which parser applies to a field (see `coerce.rs`).
//!
//! Invariants:
//! - A value that does not fit the target width is `Overflow`, never truncated.
//! - Unsigned targets reject any sign character as `InvalidSyntax`.
//! - A float literal that only parses to infinity by overflowing is `Overflow`.

use std::num::IntErrorKind;
use std::str::FromStr;
use std::time::Duration;

use crate::coerce::CoerceError;

/// Sign, radix, and separator-free digits of an integer literal.
struct IntLiteral {
    negative: bool,
    signed: bool,
    radix: u32,
    digits: String,
}

fn split_int_literal(literal: &str) -> Option<IntLiteral> {
    let (negative, signed, rest) = match literal.as_bytes().first() {
        Some(b'-') => (true, true, &literal[1..]),
        Some(b'+') => (false, true, &literal[1..]),
        _ => (false, false, literal),
    };

    let prefix = rest.get(..2).map(str::to_ascii_lowercase);
    let (radix, body, prefixed) = match prefix.as_deref() {
        Some("0x") => (16, &rest[2..], true),
        Some("0o") => (8, &rest[2..], true),
        Some("0b") => (2, &rest[2..], true),
        _ if rest.len() > 1 && rest.starts_with('0') => (8, &rest[1..], true),
        _ => (10, rest, false),
    };

    if !underscores_ok(body, prefixed) {
        return None;
    }

    let digits: String = body.chars().filter(|c| *c != '_').collect();
    // from_str_radix accepts its own sign; a second one is a syntax error here.
    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return None;
    }

    Some(IntLiteral {
        negative,
        signed,
        radix,
        digits,
    })
}

/// Each `_` must sit between two digits, or directly after a base prefix.
fn underscores_ok(body: &str, prefixed: bool) -> bool {
    let mut after_digit = prefixed;
    let mut ends_with_underscore = false;
    for c in body.chars() {
        if c == '_' {
            if !after_digit {
                return false;
            }
            after_digit = false;
            ends_with_underscore = true;
        } else {
            after_digit = true;
            ends_with_underscore = false;
        }
    }
    !ends_with_underscore
}

fn magnitude(
    literal: &str,
    parsed: &IntLiteral,
    target: &'static str,
) -> Result<u128, CoerceError> {
    u128::from_str_radix(&parsed.digits, parsed.radix).map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            CoerceError::overflow(literal, target)
        }
        _ => CoerceError::invalid_syntax(literal, target),
    })
}

/// Parse a signed integer literal into `T`.
pub fn parse_signed<T>(literal: &str, target: &'static str) -> Result<T, CoerceError>
where
    T: TryFrom<i128>,
{
    let parsed =
        split_int_literal(literal).ok_or_else(|| CoerceError::invalid_syntax(literal, target))?;
    let magnitude = magnitude(literal, &parsed, target)?;
    let value = i128::try_from(magnitude).map_err(|_| CoerceError::overflow(literal, target))?;
    let value = if parsed.negative { -value } else { value };
    T::try_from(value).map_err(|_| CoerceError::overflow(literal, target))
}

/// Parse an unsigned integer literal into `T`.
pub fn parse_unsigned<T>(literal: &str, target: &'static str) -> Result<T, CoerceError>
where
    T: TryFrom<u128>,
{
    let parsed =
        split_int_literal(literal).ok_or_else(|| CoerceError::invalid_syntax(literal, target))?;
    if parsed.signed {
        return Err(CoerceError::invalid_syntax(literal, target));
    }
    let magnitude = magnitude(literal, &parsed, target)?;
    T::try_from(magnitude).map_err(|_| CoerceError::overflow(literal, target))
}

/// Parse a boolean literal.
///
/// Accepts `true`/`false` in lower, upper, and title case, plus the short
/// forms `t`, `f`, `T`, `F`, `1`, and `0`.
pub fn parse_bool(literal: &str) -> Result<bool, CoerceError> {
    match literal {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(false),
        _ => Err(CoerceError::invalid_syntax(literal, "bool")),
    }
}

/// Parse a float literal, treating an overflow to infinity as out of range.
pub fn parse_float<T>(
    literal: &str,
    target: &'static str,
    is_infinite: fn(&T) -> bool,
) -> Result<T, CoerceError>
where
    T: FromStr,
{
    let value: T = literal
        .parse()
        .map_err(|_| CoerceError::invalid_syntax(literal, target))?;
    if is_infinite(&value) && !names_infinity(literal) {
        return Err(CoerceError::overflow(literal, target));
    }
    Ok(value)
}

fn names_infinity(literal: &str) -> bool {
    let unsigned = literal.trim_start_matches(['+', '-']).to_ascii_lowercase();
    unsigned == "inf" || unsigned == "infinity"
}

/// Parse a duration literal such as `5s`, `250ms`, or `2h30m`.
pub fn parse_duration(literal: &str) -> Result<Duration, CoerceError> {
    humantime::parse_duration(literal).map_err(|_| CoerceError::invalid_syntax(literal, "duration"))
}

/// Parse a possibly signed duration literal (`-5s`, `+1h`) as nanoseconds.
///
/// Returns `None` when the literal is not a duration at all.
pub fn parse_signed_duration_nanos(literal: &str) -> Option<i128> {
    let (negative, unsigned) = match literal.as_bytes().first() {
        Some(b'-') => (true, &literal[1..]),
        Some(b'+') => (false, &literal[1..]),
        _ => (false, literal),
    };
    let nanos = i128::try_from(humantime::parse_duration(unsigned).ok()?.as_nanos()).ok()?;
    Some(if negative { -nanos } else { nanos })
}

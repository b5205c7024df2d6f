//! Display formatting for amounts and dates.
//!
//! Inline page scripts call these through the `formatCurrency` and
//! `formatDate` exports, so their edge-case behavior tracks what the browser
//! helpers they replace produced: `parseFloat` prefix parsing, `toFixed(2)`
//! rounding, `NaN` passed through as text, and `Invalid Date` for anything
//! the date parser rejects.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime};

use crate::consts::{CURRENCY_SYMBOL, INVALID_DATE};

// =============================================================================
// CURRENCY
// =============================================================================

/// How integer digits are separated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Grouping {
    /// Indian numbering: last three digits, then pairs (`12,34,567`).
    #[default]
    Lakh,
    /// A separator before every run of three digits that reaches the decimal
    /// point (`1,234,567`).
    Thousands,
}

/// Format an amount as rupees with two decimals and lakh grouping.
#[must_use]
pub fn format_currency(amount: f64) -> String {
    format_currency_with(amount, Grouping::Lakh)
}

/// Format a textual amount, parsed with [`parse_float`].
#[must_use]
pub fn format_currency_str(amount: &str) -> String {
    format_currency(parse_float(amount))
}

/// An amount as handed over by a page script.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Amount<'a> {
    Number(f64),
    /// A string, or any other value already coerced to its string form.
    Text(&'a str),
}

/// Format either kind of amount; text goes through [`parse_float`].
#[must_use]
pub fn format_amount(amount: Amount<'_>) -> String {
    match amount {
        Amount::Number(value) => format_currency(value),
        Amount::Text(text) => format_currency_str(text),
    }
}

#[must_use]
pub fn format_currency_with(amount: f64, grouping: Grouping) -> String {
    let fixed = to_fixed_2(amount);
    format!("{CURRENCY_SYMBOL}{}", group_digits(&fixed, grouping))
}

/// Parse the longest numeric prefix of `text`, like JavaScript `parseFloat`.
///
/// Leading whitespace, including the byte order mark, is skipped. `Infinity` (optionally signed) is accepted.
/// Returns NaN when no prefix is numeric.
#[must_use]
pub fn parse_float(text: &str) -> f64 {
    let s = text.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}');
    let bytes = s.as_bytes();

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    if s[end..].starts_with("Infinity") {
        return if s.starts_with('-') { f64::NEG_INFINITY } else { f64::INFINITY };
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse::<f64>().unwrap_or(f64::NAN)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Render like `Number.prototype.toFixed(2)`.
///
/// Exact ties round away from zero. Magnitudes of 1e21 and above fall back to
/// exponent notation (`1e+21`), which carries no decimal point.
fn to_fixed_2(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_owned();
    }
    if x.is_infinite() {
        return if x > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    if x.abs() >= 1e21 {
        return format!("{x:e}").replacen('e', "e+", 1);
    }

    // -0.0 is not below zero and renders unsigned.
    let sign = if x < 0.0 { "-" } else { "" };
    let magnitude = x.abs();
    match exact_tie_hundredths(magnitude) {
        Some(hundredths) => format!("{sign}{}.{:02}", hundredths / 100, hundredths % 100),
        None => format!("{sign}{magnitude:.2}"),
    }
}

/// Hundredths, rounded up, for values that sit exactly halfway between two.
///
/// A binary float lies exactly on a thousandths `5` only when it is an odd
/// multiple of 1/8 (`.125`, `.375`, `.625`, `.875`).
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn exact_tie_hundredths(magnitude: f64) -> Option<u64> {
    const EXACT_INTEGER_LIMIT: f64 = 9_007_199_254_740_992.0;
    let eighths = magnitude * 8.0;
    if eighths.fract() != 0.0 || eighths >= EXACT_INTEGER_LIMIT {
        return None;
    }
    let eighths = eighths as u64;
    if eighths % 2 == 0 {
        return None;
    }
    Some((eighths * 25).div_ceil(2))
}

/// Insert separators into the digit run that ends at the decimal point.
///
/// Text without a decimal point (`NaN`, `Infinity`, exponent form) is
/// returned unchanged.
fn group_digits(fixed: &str, grouping: Grouping) -> String {
    let Some(dot) = fixed.find('.') else {
        return fixed.to_owned();
    };
    let (head, fraction) = fixed.split_at(dot);
    let digits_start = head
        .char_indices()
        .rev()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(0, |(i, c)| i + c.len_utf8());
    let (prefix, digits) = head.split_at(digits_start);
    format!("{prefix}{}{fraction}", group_integer(digits, grouping))
}

fn group_integer(digits: &str, grouping: Grouping) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 2);
    match grouping {
        Grouping::Thousands => {
            for (i, c) in digits.chars().enumerate() {
                out.push(c);
                let remaining = len - i - 1;
                if remaining > 0 && remaining % 3 == 0 {
                    out.push(',');
                }
            }
        }
        Grouping::Lakh => {
            if len <= 3 {
                return digits.to_owned();
            }
            let (lead, last_three) = digits.split_at(len - 3);
            for (i, c) in lead.chars().enumerate() {
                out.push(c);
                let remaining = lead.len() - i - 1;
                if remaining > 0 && remaining % 2 == 0 {
                    out.push(',');
                }
            }
            out.push(',');
            out.push_str(last_three);
        }
    }
    out
}

// =============================================================================
// DATES
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateParseError {
    #[error("empty date string")]
    Empty,
    #[error("unrecognized date: {0}")]
    Unrecognized(String),
}

/// Parse a date string in any of the forms the page templates emit.
///
/// Timestamps keep the calendar date as written; no timezone conversion is
/// applied.
///
/// # Errors
///
/// Returns [`DateParseError`] for empty or unrecognized input.
pub fn parse_date(text: &str) -> Result<Date, DateParseError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(DateParseError::Empty);
    }

    if let Ok(datetime) = OffsetDateTime::parse(text, &Rfc3339) {
        return Ok(datetime.date());
    }

    let datetime = PrimitiveDateTime::parse(text, format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]"))
        .or_else(|_| PrimitiveDateTime::parse(text, format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]")))
        .or_else(|_| PrimitiveDateTime::parse(text, format_description!("[year]-[month]-[day]T[hour]:[minute]")))
        .or_else(|_| PrimitiveDateTime::parse(text, format_description!("[year]-[month]-[day] [hour]:[minute]:[second]")))
        .or_else(|_| PrimitiveDateTime::parse(text, format_description!("[year]-[month]-[day] [hour]:[minute]")));
    if let Ok(datetime) = datetime {
        return Ok(datetime.date());
    }

    let date = Date::parse(text, format_description!("[year]-[month]-[day]"))
        .or_else(|_| Date::parse(text, format_description!("[year]-[month padding:none]-[day padding:none]")))
        .or_else(|_| Date::parse(text, format_description!("[year]/[month]/[day]")))
        .or_else(|_| {
            Date::parse(text, format_description!("[month repr:short case_sensitive:false] [day padding:none], [year]"))
        })
        .or_else(|_| {
            Date::parse(text, format_description!("[month repr:long case_sensitive:false] [day padding:none], [year]"))
        })
        .or_else(|_| {
            Date::parse(text, format_description!("[day padding:none] [month repr:short case_sensitive:false] [year]"))
        })
        .or_else(|_| {
            Date::parse(text, format_description!("[day padding:none] [month repr:long case_sensitive:false] [year]"))
        });
    if let Ok(date) = date {
        return Ok(date);
    }

    Err(DateParseError::Unrecognized(text.to_owned()))
}

/// Render a date in the Indian English short form, e.g. `5 Mar 2024`.
#[must_use]
pub fn display_date(date: Date) -> String {
    date.format(format_description!("[day padding:none] [month repr:short] [year]"))
        .unwrap_or_else(|_| INVALID_DATE.to_owned())
}

/// Parse and render a date string, or `Invalid Date`.
#[must_use]
pub fn format_date(text: &str) -> String {
    match parse_date(text) {
        Ok(date) => display_date(date),
        Err(_) => INVALID_DATE.to_owned(),
    }
}

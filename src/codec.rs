//! # Fixed-column field codec
//!
//! Pure conversions between the fixed-width text fields of a TLE line and typed
//! values. Every `parse_*` function slices `column = (offset, width)` out of a
//! line and decodes it; every `format_*` function renders a value back into
//! exactly `width` characters.
//!
//! ## Field conventions
//! -----------------
//! * **Plain decimals** (`51.6416`, `15.72125391`) carry an explicit point.
//! * **Signed fractions** (`-.00002182`) keep a sign column and drop the leading zero.
//! * **Implied decimals** (`0006703`) omit the leading `0.`; the eccentricity uses them.
//! * **Packed exponents** (`-11606-4`) hold a signed mantissa with an implied leading
//!   point followed by a one-digit signed power of ten; B* and the second derivative
//!   of the mean motion use them.
//! * **Epochs** (`08264.51782528`) are a two-digit year followed by a fractional
//!   day of year, converted to MJD (UTC) through [`crate::time`].
//!
//! Blank numeric fields decode as zero.
//!
//! ## Width policy
//! -----------------
//! Values are rendered at the nominal precision of their column with ordinary
//! rounding. A rendering wider than the column loses its rightmost characters,
//! with no carry into the kept digits (see [`fit_width`]). Implied-decimal and
//! packed-exponent fields have no fractional tail to drop, so they are clamped to
//! the largest representable magnitude instead; packed values whose exponent
//! would fall below `-9` are written as zero. Angles are wrapped into `[0, 360)`
//! after rounding, and only ASCII text is ever written.

use crate::{
    constants::{Column, MJD},
    time::{mjd_to_tle_epoch, tle_epoch_to_mjd},
    tle_errors::TleError,
};

/// Number of mantissa digits of a packed-exponent field
const PACKED_MANTISSA_DIGITS: usize = 5;

/// Encoding of zero in a packed-exponent field
const PACKED_ZERO: &str = " 00000-0";

/// Epoch written for dates without a representable year
const ZERO_EPOCH: &str = "00000.00000000";

/// Horizontal alignment of a text field inside its column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

// -------------------------------------------------------------------------------------------------
// Parsing
// -------------------------------------------------------------------------------------------------

/// Extract the raw text of a column.
///
/// Return
/// ------
/// * the untrimmed slice `line[offset..offset + width]`
/// * [`TleError::TooShortLine`] if the line ends before `offset + width`
pub fn slice_field(line: &str, (offset, width): Column) -> Result<&str, TleError> {
    let end = offset + width;
    if line.len() < end {
        return Err(TleError::TooShortLine {
            required: end,
            actual: line.len(),
        });
    }
    line.get(offset..end)
        .ok_or_else(|| TleError::field_format("ASCII text", line))
}

/// Extract a column as a string with surrounding blanks removed.
pub fn parse_string(line: &str, column: Column) -> Result<String, TleError> {
    Ok(slice_field(line, column)?.trim().to_string())
}

/// Extract a column as an integer, blank columns decode as `0`.
pub fn parse_int(line: &str, column: Column) -> Result<i32, TleError> {
    let text = slice_field(line, column)?.trim();
    if text.is_empty() {
        return Ok(0);
    }
    text.parse::<i32>()
        .map_err(|_| TleError::field_format("an integer", text))
}

/// Extract a column holding a decimal number with an explicit point.
///
/// The sign and the integer part are optional, so `-.00002182` and `51.6416`
/// are both accepted. Blank columns decode as `0.0`.
pub fn parse_decimal(line: &str, column: Column) -> Result<f64, TleError> {
    let text = slice_field(line, column)?.trim();
    parse_finite(text, "a decimal number")
}

/// Extract a column holding only the fractional digits of a number in `[0, 1)`.
///
/// `0006703` decodes as `0.0006703`.
pub fn parse_implied_decimal(line: &str, column: Column) -> Result<f64, TleError> {
    let text = slice_field(line, column)?.trim();
    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TleError::field_format("digits with an implied leading point", text));
    }
    if text.is_empty() {
        return Ok(0.0);
    }
    parse_finite(&format!("0.{text}"), "digits with an implied leading point")
}

/// Extract a packed-exponent column.
///
/// The layout is an optional sign, the mantissa digits (the decimal point is
/// implied before them) and a signed one-digit exponent:
/// `-11606-4` decodes as `-0.11606e-4`.
pub fn parse_packed_exponent(line: &str, column: Column) -> Result<f64, TleError> {
    const EXPECTED: &str = "a packed mantissa and exponent";

    let text = slice_field(line, column)?.trim();
    if text.is_empty() {
        return Ok(0.0);
    }

    let split = text
        .len()
        .checked_sub(2)
        .filter(|&at| text.is_char_boundary(at))
        .ok_or_else(|| TleError::field_format(EXPECTED, text))?;
    let (mantissa, exponent) = text.split_at(split);

    let exponent = exponent
        .parse::<i32>()
        .map_err(|_| TleError::field_format(EXPECTED, text))?;

    let (negative, digits) = match mantissa.strip_prefix('-') {
        Some(digits) => (true, digits),
        None => (false, mantissa.strip_prefix('+').unwrap_or(mantissa)),
    };
    let digits = digits.trim_start();
    let digits = digits.strip_prefix('.').unwrap_or(digits);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TleError::field_format(EXPECTED, text));
    }

    let magnitude = parse_finite(&format!("0.{digits}e{exponent}"), EXPECTED)?;
    Ok(if negative { -magnitude } else { magnitude })
}

/// Extract a single-column character.
///
/// Return
/// ------
/// * the character at `index`, or `'\0'` when it is blank or past the end of the line
pub fn parse_char(line: &str, index: usize) -> char {
    match line.get(index..).and_then(|rest| rest.chars().next()) {
        Some(c) if !c.is_whitespace() => c,
        _ => '\0',
    }
}

/// Extract a `YYDDD.DDDDDDDD` epoch column as a modified julian date (UTC).
pub fn parse_epoch(line: &str, column: Column) -> Result<MJD, TleError> {
    const EXPECTED: &str = "an epoch YYDDD.DDDDDDDD";

    let text = slice_field(line, column)?;
    let (year, day) = match (text.get(..2), text.get(2..)) {
        (Some(year), Some(day)) => (year.trim(), day.trim()),
        _ => return Err(TleError::field_format(EXPECTED, text)),
    };

    let year = year
        .parse::<i32>()
        .ok()
        .filter(|y| (0..100).contains(y))
        .ok_or_else(|| TleError::field_format(EXPECTED, text))?;
    if day.is_empty() {
        return Err(TleError::field_format(EXPECTED, text));
    }
    let day_of_year = parse_finite(day, EXPECTED)?;

    Ok(tle_epoch_to_mjd(year, day_of_year))
}

fn parse_finite(text: &str, expected: &'static str) -> Result<f64, TleError> {
    if text.is_empty() {
        return Ok(0.0);
    }
    text.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| TleError::field_format(expected, text))
}

// -------------------------------------------------------------------------------------------------
// Formatting
// -------------------------------------------------------------------------------------------------

/// Force a rendering into exactly `width` ASCII characters.
///
/// Non-ASCII characters become blanks so that character and byte columns agree.
/// Shorter text is padded with blanks on the side opposite to `align`; longer
/// text keeps its leftmost `width` characters.
pub fn fit_width(text: &str, width: usize, align: Align) -> String {
    let text: String = text
        .chars()
        .map(|c| if c.is_ascii() { c } else { ' ' })
        .collect();
    if text.len() > width {
        return text[..width].to_string();
    }
    match align {
        Align::Left => format!("{text:<width$}"),
        Align::Right => format!("{text:>width$}"),
    }
}

pub fn format_string(value: &str, width: usize, align: Align) -> String {
    fit_width(value, width, align)
}

pub fn format_int(value: i32, width: usize) -> String {
    fit_width(&value.to_string(), width, Align::Right)
}

/// Render a decimal number with a fixed number of fractional digits, right aligned.
pub fn format_decimal(value: f64, width: usize, precision: usize) -> String {
    fit_width(&format!("{value:.precision$}"), width, Align::Right)
}

/// Render an angle in degrees in `[0, 360)` at a fixed precision, right aligned.
///
/// The value is rounded to `precision` decimals before being wrapped, so angles
/// a rounding step below a full turn are written as `0`.
pub fn format_angle(degrees: f64, width: usize, precision: usize) -> String {
    if !degrees.is_finite() {
        return format_decimal(0.0, width, precision);
    }
    let scale = 10f64.powi(precision as i32);
    let ticks = (degrees * scale).round().rem_euclid(360.0 * scale);
    // adding zero turns a negative zero into a positive one
    format_decimal(ticks / scale + 0.0, width, precision)
}

/// Render a number as a sign column followed by the value without its leading zero.
///
/// `-0.00002182` with 8 digits gives `-.00002182`, positive values start with a blank.
pub fn format_signed_fraction(value: f64, width: usize, precision: usize) -> String {
    let body = format!("{:.precision$}", value.abs());
    let body = body.strip_prefix('0').unwrap_or(&body);
    let sign = if value < 0.0 { '-' } else { ' ' };
    fit_width(&format!("{sign}{body}"), width, Align::Right)
}

/// Render the fractional digits of a value in `[0, 1)` without the leading `0.`.
///
/// Values outside the representable range are clamped to `0` or `0.999…`.
pub fn format_implied_decimal(value: f64, digits: usize) -> String {
    let scale = 10f64.powi(digits as i32);
    let largest = scale - 1.0;
    let scaled = if value.is_finite() {
        (value * scale).round().clamp(0.0, largest)
    } else {
        0.0
    };
    format!("{:0digits$}", scaled as u64)
}

/// Render a value in the 8-column packed-exponent layout (`-11606-4`).
pub fn format_packed_exponent(value: f64) -> String {
    const MANTISSA_SCALE: f64 = 100_000.0;

    if value == 0.0 || !value.is_finite() {
        return PACKED_ZERO.to_string();
    }

    let sign = if value < 0.0 { '-' } else { ' ' };
    let magnitude = value.abs();

    let mut exponent = magnitude.log10().floor() as i32 + 1;
    let mut mantissa = (magnitude / 10f64.powi(exponent) * MANTISSA_SCALE).round() as u64;
    if mantissa >= MANTISSA_SCALE as u64 {
        mantissa /= 10;
        exponent += 1;
    }

    if exponent < -9 {
        return PACKED_ZERO.to_string();
    }
    if exponent > 9 {
        mantissa = MANTISSA_SCALE as u64 - 1;
        exponent = 9;
    }

    let exponent_sign = if exponent > 0 { '+' } else { '-' };
    format!(
        "{sign}{mantissa:0width$}{exponent_sign}{}",
        exponent.abs(),
        width = PACKED_MANTISSA_DIGITS
    )
}

/// Render a single-column character, non printable characters become a blank.
pub fn format_char(value: char) -> char {
    if value.is_ascii_graphic() {
        value
    } else {
        ' '
    }
}

/// Render a modified julian date (UTC) in the 14-column `YYDDD.DDDDDDDD` layout.
///
/// Epochs that have no calendar year (non finite, or too far from 2000) are
/// written as the zero epoch `00000.00000000`.
pub fn format_epoch(mjd: MJD) -> String {
    match mjd_to_tle_epoch(mjd) {
        Some((year, day_of_year)) => {
            fit_width(&format!("{year:02}{day_of_year:012.8}"), 14, Align::Left)
        }
        None => ZERO_EPOCH.to_string(),
    }
}

//! Text serialisation engine for [`Decimal`]: canonical digit strings out,
//! legacy-compatible parsing in.
//!
//! The parser reproduces decades-old scanner behaviour byte for byte.
//! Overlong literals degrade into exponent scaling instead of failing, a
//! bare trailing `e` is a no-op suffix, and `"e"` on its own reads as zero.
//! Do not "fix" those paths; embedding scanners depend on them.

use super::Decimal;
use crate::core::{scan, span::ByteSpan};
use std::fmt::{self, Display};
use std::str::FromStr;

/// Outcome of a decimal parse.
///
/// `Failure` means "not a number here, try something else"; `Overlarge`
/// means the text was clearly meant to be a number but the value or its
/// exponent cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParseResult {
    Success {
        decimal: Decimal,
        /// Number of input bytes consumed. Callers embedding the parser in
        /// a larger scanner resume from here.
        processed: usize,
    },
    Failure,
    Overlarge,
}

impl ParseResult {
    /// The parsed value and consumed byte count, if any.
    pub fn value(self) -> Option<(Decimal, usize)> {
        match self {
            Self::Success { decimal, processed } => Some((decimal, processed)),
            _ => None,
        }
    }
}

impl Decimal {
    /// Formats the value as its canonical decimal digit string, with
    /// `separator` as the decimal-separator glyph.
    ///
    /// Digits come out least significant first through repeated division by
    /// ten, so the buffer is built backwards and reversed once at the end.
    /// The separator is pushed reversed for the same reason, which keeps a
    /// multi-character glyph verbatim in the output.
    pub fn format(&self, separator: &str) -> String {
        if self.is_nan() {
            return "NaN".into();
        }
        if self.length() == 0 {
            return "0".into();
        }

        let mut buffer = String::new();
        let push_separator =
            |buffer: &mut String| separator.chars().rev().for_each(|c| buffer.push(c));

        let mut copy = *self;
        // trailing integer zeros carried by a positive scale
        while copy.exponent() > 0 {
            buffer.push('0');
            copy.set_exponent(copy.exponent() - 1);
        }
        if copy.exponent() == 0 {
            copy.set_exponent(1);
        }

        while copy.length() != 0 {
            if copy.exponent() == 0 {
                push_separator(&mut buffer);
            }
            copy.set_exponent(copy.exponent() + 1);
            let (quotient, remainder) = match copy.divide_by_short(10) {
                Ok(division) => division,
                // ten is never zero
                Err(_) => unreachable!(),
            };
            copy = quotient;
            buffer.push(char::from(b'0' + remainder as u8));
        }

        // purely fractional magnitude: pad up to the units place and lead
        // with a zero
        if copy.exponent() <= 0 {
            while copy.exponent() != 0 {
                buffer.push('0');
                copy.set_exponent(copy.exponent() + 1);
            }
            push_separator(&mut buffer);
            buffer.push('0');
        }

        if copy.is_negative() {
            buffer.push('-');
        }

        buffer.chars().rev().collect()
    }
}

impl Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format("."))
    }
}

/// Parses a decimal from `input`, scanning left to right.
///
/// Whitespace is skipped up front (and trailed past when
/// `match_entire_string` is set), an optional sign is consumed, then
/// integer digits, a separator-delimited fraction and an `e`/`E` exponent
/// clause. Integer digits that no longer fit the mantissa switch the parse
/// into scale tracking: every further integer digit bumps the exponent
/// instead of the precision.
///
/// Partial consumption is part of the contract: `processed` reports the
/// cursor position even when the tail of `input` was not numeric.
pub fn parse_decimal(
    input: ByteSpan<'_>,
    separator: ByteSpan<'_>,
    match_entire_string: bool,
) -> ParseResult {
    let mut result = Decimal::ZERO;
    let mut index = skip_whitespace(input, 0);

    if let Some(byte @ (b'+' | b'-')) = input.get(index) {
        result.set_negative(byte == b'-');
        index += 1;
    }

    let mut too_big_to_fit = false;

    // integer digits
    while let Some(digit) = input.get(index).and_then(digit_value) {
        index += 1;

        if too_big_to_fit {
            increment_exponent(&mut result);
            if result.is_nan() {
                return ParseResult::Overlarge;
            }
            continue;
        }

        match multiply_by_ten_and_add(&result, digit) {
            Ok(product) => result = product,
            Err(_) => {
                too_big_to_fit = true;
                increment_exponent(&mut result);
                if result.is_nan() {
                    return ParseResult::Overlarge;
                }
            }
        }
    }

    // fractional digits, once the separator sequence matches in full
    if index < input.len() && contains_separator(input, index, separator) {
        index += separator.len();

        while let Some(digit) = input.get(index).and_then(digit_value) {
            index += 1;

            if too_big_to_fit {
                continue;
            }
            match multiply_by_ten_and_add(&result, digit) {
                Ok(product) => result = product,
                Err(_) => {
                    too_big_to_fit = true;
                    continue;
                }
            }
            if result.exponent() == i32::from(i8::MIN) {
                return ParseResult::Overlarge;
            }
            result.set_exponent(result.exponent() - 1);
        }
    }

    // exponent clause
    if let Some(b'e' | b'E') = input.get(index) {
        index += 1;

        // Historically a bare trailing `e` is accepted as a no-op suffix
        // ("1234e" parses as 1234) and a leading `e` with nothing before it
        // reads as zero, so an input ending here succeeds with whatever has
        // accumulated.
        if index >= input.len() {
            return ParseResult::Success {
                decimal: result,
                processed: index,
            };
        }

        let mut exponent_is_negative = false;
        if let Some(byte @ (b'+' | b'-')) = input.get(index) {
            exponent_is_negative = byte == b'-';
            index += 1;
        }

        let mut exponent = 0i32;
        while let Some(digit) = input.get(index).and_then(digit_value) {
            exponent = 10 * exponent + i32::from(digit);
            if exponent > 2 * i32::from(i8::MAX) {
                return ParseResult::Overlarge;
            }
            index += 1;
        }
        if exponent_is_negative {
            exponent = -exponent;
        }

        exponent += result.exponent();
        if exponent > i32::from(i8::MAX) || exponent < i32::from(i8::MIN) {
            return ParseResult::Overlarge;
        }
        result.set_exponent(exponent);
    }

    if match_entire_string {
        index = skip_whitespace(input, index);
        if index != input.len() {
            // unprocessed content means the string is not a plain decimal
            return ParseResult::Failure;
        }
    }
    if index == 0 {
        return ParseResult::Failure;
    }

    result.compact();
    // Getting a sentinel here means the input was "-0" or a variation on
    // it; normalise that to zero.
    if result.is_nan() {
        return ParseResult::Success {
            decimal: Decimal::ZERO,
            processed: index,
        };
    }

    ParseResult::Success {
        decimal: result,
        processed: index,
    }
}

fn skip_whitespace(input: ByteSpan<'_>, from: usize) -> usize {
    let mut index = from;
    while let Some(byte) = input.get(index) {
        if !scan::is_whitespace(byte) {
            break;
        }
        index += 1;
    }

    index
}

const fn digit_value(byte: u8) -> Option<u8> {
    match byte.is_ascii_digit() {
        true => Some(byte - b'0'),
        _ => None,
    }
}

fn contains_separator(input: ByteSpan<'_>, at: usize, separator: ByteSpan<'_>) -> bool {
    match input.subspan(at..at + separator.len()) {
        Some(window) => window == separator,
        None => false,
    }
}

fn multiply_by_ten_and_add(decimal: &Decimal, digit: u8) -> crate::Result<Decimal> {
    let product = decimal.multiply_by_short(10)?;
    product.add_short(u16::from(digit))
}

/// Bumps the scale of a value that can no longer grow in precision. A
/// saturated exponent turns the value into the sentinel; the caller checks
/// and reports `Overlarge`.
fn increment_exponent(decimal: &mut Decimal) {
    if decimal.exponent() == i32::from(i8::MAX) {
        *decimal = Decimal::NAN;
        return;
    }
    decimal.set_exponent(decimal.exponent() + 1);
}

/// Error returned when parsing a decimal through [`FromStr`].
#[derive(Debug, PartialEq)]
pub enum ParseDecimalError {
    /// The input is not a decimal literal.
    Invalid,
    /// The value or its exponent exceeds the representable range.
    Overlarge,
}

impl Display for ParseDecimalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid => write!(f, "invalid decimal literal"),
            Self::Overlarge => write!(f, "decimal out of representable range"),
        }
    }
}

impl std::error::Error for ParseDecimalError {}

impl FromStr for Decimal {
    type Err = ParseDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse_decimal(ByteSpan::from(s), ByteSpan::from("."), true) {
            ParseResult::Success { decimal, .. } => Ok(decimal),
            ParseResult::Failure => Err(ParseDecimalError::Invalid),
            ParseResult::Overlarge => Err(ParseDecimalError::Overlarge),
        }
    }
}

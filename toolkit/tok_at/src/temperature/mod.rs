//! Temperature reading extraction.
//!
//! A reading is an optional sign, a decimal magnitude, and a one-letter
//! scale suffix: `19C`, `-40F`. The digits are accumulated numerically by
//! a per-digit observer rather than re-parsed from the matched text.

use std::cell::Cell;

use tok_core::{at_least_one, byte, digit, maybe, Cursor, Tokenizer};
use tracing::trace;

use crate::error::ResponseError;

/// Temperature scale suffix of a reading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scale {
    Celsius,
    Fahrenheit,
}

/// A decoded temperature reading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Temperature {
    pub degrees: i32,
    pub scale: Scale,
}

/// Decode a temperature reading such as `19C` or `-40F`.
///
/// The whole input must be consumed by the reading.
pub fn parse_temperature(input: &str) -> Result<Temperature, ResponseError> {
    let value = Cell::new(0_i32);
    let negative = Cell::new(false);
    let fahrenheit = Cell::new(false);

    let sign = maybe(byte(b'-')).observe(|span| negative.set(!span.is_empty()));
    let magnitude = at_least_one(digit().observe(|span| {
        let d = i32::from(span.as_bytes()[0] - b'0');
        value.set(value.get().saturating_mul(10).saturating_add(d));
    }));
    let unit = byte(b'C').or(byte(b'F').observe(|_| fahrenheit.set(true)));
    let reading = sign.then(magnitude).then(unit);

    let mut cursor = Cursor::from(input);
    if reading.tokenize(&mut cursor).is_none() {
        trace!(pos = cursor.pos(), "input is not a temperature reading");
        return Err(ResponseError::Malformed("temperature"));
    }
    if !cursor.is_empty() {
        return Err(ResponseError::TrailingInput(cursor.len()));
    }

    let degrees = if negative.get() {
        -value.get()
    } else {
        value.get()
    };
    let scale = if fahrenheit.get() {
        Scale::Fahrenheit
    } else {
        Scale::Celsius
    };
    Ok(Temperature { degrees, scale })
}

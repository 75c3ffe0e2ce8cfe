//! AT-command response parsing built on the `tok_core` engine.
//!
//! Modem AT commands answer with line-oriented text responses such as
//! `\r\n+CGPADDR: 128.14.178.01\r\n`. This crate composes `tok_core`
//! tokenizers into extractors for those responses: the tokenizer decides
//! *what counts as a match*, observers copy the interesting sub-spans out
//! into owned values, and this layer turns "no match" into a proper error.
//!
//! The engine itself never fails with an error — it only declines to
//! match. Refusing malformed or trailing input is an application-level
//! decision made here, reported as [`ResponseError`].

mod error;
mod quoted;
mod response;
mod temperature;

pub use error::ResponseError;
pub use quoted::parse_quoted;
pub use response::parse_cgpaddr;
pub use temperature::{parse_temperature, Scale, Temperature};

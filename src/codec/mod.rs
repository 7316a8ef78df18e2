//! iCalendar content-line codec.
//!
//! Moves components in and out of text. Values are carried verbatim; no
//! value-type interpretation happens here.

mod parse;
mod write;

pub use parse::{parse, ParseError, ParseErrorKind};
pub use write::write;

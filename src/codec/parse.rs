//! Content-line reader.

use thiserror::Error;
use winnow::combinator::{alt, cut_err, delimited, preceded, repeat, separated};
use winnow::error::StrContext;
use winnow::token::{rest, take_till, take_while};
use winnow::{ModalResult, Parser};

use crate::model::{Component, Parameter, Property, BEGIN, END};

/// What went wrong on a line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// A property or component name contained invalid characters.
    #[error("invalid name {0:?}")]
    InvalidName(String),
    /// A parameter had no `=` or an invalid name.
    #[error("malformed parameter {0:?}")]
    MalformedParameter(String),
    /// A quoted parameter value was never closed.
    #[error("unterminated quoted parameter value")]
    UnterminatedQuote,
    /// The line had no `:` separating the value.
    #[error("missing ':' before property value")]
    MissingColon,
    /// A `BEGIN` or `END` line carried parameters.
    #[error("{0} lines take no parameters")]
    DelimiterParameters(String),
    /// A property appeared before any `BEGIN`.
    #[error("property {0} appears outside any component")]
    PropertyOutsideComponent(String),
    /// An `END` with no open component.
    #[error("END:{0} without matching BEGIN")]
    UnexpectedEnd(String),
    /// An `END` that closes a different component than the open one.
    #[error("END:{found} does not close BEGIN:{expected}")]
    MismatchedEnd {
        /// Name of the component that is open.
        expected: String,
        /// Name given on the `END` line.
        found: String,
    },
    /// Input ended while a component was still open.
    #[error("BEGIN:{0} is never closed")]
    Unclosed(String),
}

/// A parse failure with the 1-based physical line it was detected on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {kind}")]
pub struct ParseError {
    /// Physical line number (the first line of a folded content line).
    pub line: usize,
    /// Failure detail.
    pub kind: ParseErrorKind,
}

impl ParseError {
    fn at(line: usize, kind: ParseErrorKind) -> Self {
        Self { line, kind }
    }
}

/// Parses iCalendar text into its top-level components.
///
/// Accepts CRLF or bare LF line endings and unfolds continuation lines.
///
/// # Errors
///
/// Returns [`ParseError`] on the first malformed line or unbalanced
/// `BEGIN`/`END` pair.
pub fn parse(input: &str) -> Result<Vec<Component>, ParseError> {
    let mut stack: Vec<(usize, Component)> = Vec::new();
    let mut roots = Vec::new();

    for (line_no, line) in unfold(input) {
        let property = parse_content_line(&line).map_err(|kind| ParseError::at(line_no, kind))?;

        if (property.is(BEGIN) || property.is(END)) && !property.params.is_empty() {
            return Err(ParseError::at(line_no, ParseErrorKind::DelimiterParameters(property.name)));
        }

        if property.is(BEGIN) {
            if !is_valid_name(&property.value) {
                return Err(ParseError::at(line_no, ParseErrorKind::InvalidName(property.value)));
            }
            stack.push((line_no, Component::new(&property.value)));
        } else if property.is(END) {
            let Some((_, component)) = stack.pop() else {
                return Err(ParseError::at(line_no, ParseErrorKind::UnexpectedEnd(property.value)));
            };
            if !component.is(&property.value) {
                return Err(ParseError::at(
                    line_no,
                    ParseErrorKind::MismatchedEnd {
                        expected: component.name().to_string(),
                        found: property.value,
                    },
                ));
            }
            match stack.last_mut() {
                Some((_, parent)) => parent.add_component(component),
                None => roots.push(component),
            }
        } else {
            match stack.last_mut() {
                Some((_, current)) => current.add_property(property),
                None => {
                    return Err(ParseError::at(
                        line_no,
                        ParseErrorKind::PropertyOutsideComponent(property.name),
                    ));
                }
            }
        }
    }

    if let Some((line_no, open)) = stack.pop() {
        return Err(ParseError::at(line_no, ParseErrorKind::Unclosed(open.name().to_string())));
    }
    Ok(roots)
}

/// Joins folded lines, keeping the physical line number each logical line starts on.
fn unfold(input: &str) -> Vec<(usize, String)> {
    let input = input.strip_prefix('\u{FEFF}').unwrap_or(input);
    let mut lines: Vec<(usize, String)> = Vec::new();
    for (idx, raw) in input.split('\n').enumerate() {
        let raw = raw.strip_suffix('\r').unwrap_or(raw);
        if let Some(continuation) = raw.strip_prefix([' ', '\t']) {
            if let Some((_, previous)) = lines.last_mut() {
                previous.push_str(continuation);
                continue;
            }
        }
        if raw.is_empty() {
            continue;
        }
        lines.push((idx + 1, raw.to_string()));
    }
    lines
}

// Labels attached to the grammar so failures map back onto `ParseErrorKind`.
const NAME: &str = "name";
const PARAMETER: &str = "parameter";
const CLOSING_QUOTE: &str = "closing quote";
const VALUE: &str = "value";

fn parse_content_line(line: &str) -> Result<Property, ParseErrorKind> {
    content_line.parse(line).map_err(|err| {
        let labels: Vec<&str> = err
            .inner()
            .context()
            .filter_map(|ctx| match ctx {
                StrContext::Label(label) => Some(*label),
                _ => None,
            })
            .collect();

        if labels.contains(&CLOSING_QUOTE) {
            ParseErrorKind::UnterminatedQuote
        } else if labels.contains(&PARAMETER) {
            let head = &line[..err.offset()];
            let start = head.rfind(';').map_or(0, |i| i + 1);
            ParseErrorKind::MalformedParameter(head[start..].to_string())
        } else if labels.contains(&NAME)
            || (err.offset() < line.len() && !line[..err.offset()].contains(';'))
        {
            // Stopped inside the leading name rather than at the end of the line.
            let end = line.find([';', ':']).unwrap_or(line.len());
            ParseErrorKind::InvalidName(line[..end].to_string())
        } else {
            ParseErrorKind::MissingColon
        }
    })
}

/// `name *(";" param) ":" value`
fn content_line(input: &mut &str) -> ModalResult<Property> {
    (
        name.context(StrContext::Label(NAME)),
        repeat(0.., parameter),
        cut_err(preceded(':', rest)).context(StrContext::Label(VALUE)),
    )
        .map(|(name, params, value): (&str, Vec<Parameter>, &str)| {
            let mut property = Property::new(name, value);
            property.params = params;
            property
        })
        .parse_next(input)
}

/// `";" name "=" param-value *("," param-value)`
fn parameter(input: &mut &str) -> ModalResult<Parameter> {
    preceded(
        ';',
        cut_err((name, preceded('=', separated(1.., param_value, ','))))
            .context(StrContext::Label(PARAMETER)),
    )
    .map(|(name, values): (&str, Vec<String>)| Parameter::with_values(name, values))
    .parse_next(input)
}

fn param_value(input: &mut &str) -> ModalResult<String> {
    alt((quoted_value, plain_value)).map(String::from).parse_next(input)
}

fn quoted_value<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    delimited('"', take_till(0.., '"'), cut_err('"').context(StrContext::Label(CLOSING_QUOTE)))
        .parse_next(input)
}

fn plain_value<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_till(0.., [',', ';', ':']).parse_next(input)
}

/// iana-token / x-name: letters, digits and dashes.
fn name<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| c.is_ascii_alphanumeric() || c == '-').parse_next(input)
}

fn is_valid_name(value: &str) -> bool {
    name.parse(value).is_ok()
}

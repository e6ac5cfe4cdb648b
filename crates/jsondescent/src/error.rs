//! Parse error surface.

use core::fmt;

use thiserror::Error;

/// A terminal parse failure.
///
/// Carries the furthest position any grammar alternative reached before the
/// parse gave up, as a 1-based line and character column, together with the
/// [`ErrorKind`] describing what was expected there. Positions are
/// deterministic for a given input.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{kind} at {line}:{column}")]
pub struct ParseError {
    pub kind: ErrorKind,
    pub line: usize,
    pub column: usize,
}

impl ParseError {
    /// Builds an error at a byte offset, translating it to line/column.
    ///
    /// `offset` must lie on a character boundary of `input`.
    pub(crate) fn at(input: &str, offset: usize, kind: ErrorKind) -> Self {
        let prefix = &input[..offset];
        let line = prefix.matches('\n').count() + 1;
        let column = match prefix.rfind('\n') {
            Some(nl) => prefix[nl + 1..].chars().count() + 1,
            None => prefix.chars().count() + 1,
        };
        Self { kind, line, column }
    }
}

/// What went wrong, and what the parser was looking for.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorKind {
    /// The input does not match the grammar at the reported position.
    #[error("syntax error: expected {}", expectation_list(.0))]
    Syntax(Vec<Expectation>),
    /// The furthest failure is at end of input: an unterminated object or
    /// string, an empty document, and so on.
    #[error("unexpected end of input, expected {}", expectation_list(.0))]
    UnexpectedEnd(Vec<Expectation>),
    /// A complete root object matched, but non-whitespace input remains.
    #[error("trailing characters after the root object")]
    TrailingContent,
}

/// One grammar construct the parser expected at the failure position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expectation {
    /// An exact literal: punctuation or one of the `null`/`true`/`false`
    /// keywords.
    Word(&'static str),
    /// A double-quoted string.
    String,
    /// A run of decimal digits.
    Number,
    /// Any value alternative.
    Value,
}

impl fmt::Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expectation::Word(w) => write!(f, "'{w}'"),
            Expectation::String => f.write_str("a string"),
            Expectation::Number => f.write_str("a number"),
            Expectation::Value => f.write_str("a value"),
        }
    }
}

fn expectation_list(expected: &[Expectation]) -> String {
    match expected {
        [] => String::from("nothing"),
        [only] => only.to_string(),
        [head @ .., last] => {
            let mut out = head
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            out.push_str(" or ");
            out.push_str(&last.to_string());
            out
        }
    }
}

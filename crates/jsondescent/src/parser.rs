//! The recursive-descent parser.
//!
//! One function per grammar production, composed bottom-up over a byte-offset
//! cursor. Alternatives backtrack by restoring the cursor; failed rules record
//! their expectation into a furthest-failure slot that backtracking never
//! rewinds, so the surfaced error points at the deepest position any
//! alternative reached.
//!
//! Token convention: every token-producing rule consumes the whitespace
//! following its matched text. Higher-level rules therefore never manage
//! separators themselves; [`Parser::value`] additionally skips leading
//! whitespace because it can be entered at a position no prior token has
//! cleaned up (the first element of an array, for instance).

use crate::{
    error::{ErrorKind, Expectation, ParseError},
    value::{Array, Map, Value},
};

/// Parses a complete JSON document rooted at an object.
///
/// The input must consist of exactly one object, optionally surrounded by
/// whitespace. Anything else left over after the closing `}` is a
/// [`TrailingContent`](ErrorKind::TrailingContent) error.
///
/// Each call is independent and re-entrant: the parser holds no state across
/// invocations, so concurrent calls on different inputs are safe.
///
/// # Examples
///
/// ```
/// use jsondescent::{Value, parse};
///
/// let doc = parse(r#"{"a": 1, "b": [true, null]}"#).unwrap();
/// assert!(doc.is_object());
///
/// assert!(parse("[1, 2, 3]").is_err()); // array roots are rejected
/// ```
///
/// # Errors
///
/// Returns a [`ParseError`] naming the furthest position the parse reached
/// and the constructs expected there.
pub fn parse(input: &str) -> Result<Value, ParseError> {
    let mut parser = Parser::new(input);
    parser.skip_whitespace();
    let Ok(root) = parser.object() else {
        return Err(parser.into_error());
    };
    if parser.pos < parser.input.len() {
        return Err(ParseError::at(
            parser.input,
            parser.pos,
            ErrorKind::TrailingContent,
        ));
    }
    Ok(Value::Object(root))
}

/// Sentinel for a failed rule. The expectation itself is recorded on the
/// [`Parser`], not carried in the error value, so backtracking stays cheap.
struct Miss;

type Matched<T> = Result<T, Miss>;

struct Parser<'a> {
    input: &'a str,
    /// Cursor, as a byte offset into `input`. Always on a char boundary.
    pos: usize,
    /// Furthest byte offset any rule has failed at.
    furthest: usize,
    /// Expectations recorded at `furthest`.
    expected: Vec<Expectation>,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Parser {
            input,
            pos: 0,
            furthest: 0,
            expected: Vec::new(),
        }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// Records a failed expectation at the cursor.
    ///
    /// Failures behind the furthest position are dropped: a shallower
    /// alternative retried after a deep partial match must not dilute the
    /// deep, more specific error.
    fn miss(&mut self, expectation: Expectation) -> Miss {
        if self.pos > self.furthest {
            self.furthest = self.pos;
            self.expected.clear();
        }
        if self.pos == self.furthest && !self.expected.contains(&expectation) {
            self.expected.push(expectation);
        }
        Miss
    }

    fn into_error(self) -> ParseError {
        let Parser {
            input,
            furthest,
            expected,
            ..
        } = self;
        let kind = if furthest == input.len() {
            ErrorKind::UnexpectedEnd(expected)
        } else {
            ErrorKind::Syntax(expected)
        };
        ParseError::at(input, furthest, kind)
    }

    /// Consumes a possibly-empty whitespace run. Never fails.
    fn skip_whitespace(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start().len();
    }

    /// Matches an exact literal, then consumes trailing whitespace.
    ///
    /// Keyword literals must end at a word boundary: `nullable` is not
    /// `null` followed by garbage.
    fn word(&mut self, literal: &'static str) -> Matched<()> {
        if !self.rest().starts_with(literal) {
            return Err(self.miss(Expectation::Word(literal)));
        }
        let end = self.pos + literal.len();
        if literal.ends_with(|c: char| c.is_ascii_alphabetic())
            && self.input[end..].starts_with(|c: char| c.is_alphanumeric() || c == '_')
        {
            return Err(self.miss(Expectation::Word(literal)));
        }
        self.pos = end;
        self.skip_whitespace();
        Ok(())
    }

    /// A double-quoted span.
    ///
    /// `\x` is consumed as a two-character unit and the body is captured
    /// verbatim, escapes undecoded. Line terminators are not valid string
    /// content, bare or after a backslash.
    fn string(&mut self) -> Matched<String> {
        if !self.rest().starts_with('"') {
            return Err(self.miss(Expectation::String));
        }
        let body = self.pos + 1;
        let mut chars = self.input[body..].char_indices();
        loop {
            match chars.next() {
                Some((i, '"')) => {
                    let text = self.input[body..body + i].to_owned();
                    self.pos = body + i + 1;
                    self.skip_whitespace();
                    return Ok(text);
                }
                Some((_, '\\')) => match chars.next() {
                    Some((_, c)) if !is_line_terminator(c) => {}
                    Some((i, _)) => {
                        self.pos = body + i;
                        return Err(self.miss(Expectation::Word("\"")));
                    }
                    None => {
                        self.pos = self.input.len();
                        return Err(self.miss(Expectation::Word("\"")));
                    }
                },
                Some((i, c)) if is_line_terminator(c) => {
                    self.pos = body + i;
                    return Err(self.miss(Expectation::Word("\"")));
                }
                Some(_) => {}
                None => {
                    self.pos = self.input.len();
                    return Err(self.miss(Expectation::Word("\"")));
                }
            }
        }
    }

    /// One or more decimal digits, converted to `f64`.
    ///
    /// The recognized lexeme is the full digit run; there is no sign,
    /// fraction, or exponent in this grammar.
    fn number(&mut self) -> Matched<f64> {
        let rest = self.rest();
        let digits = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        if digits == 0 {
            return Err(self.miss(Expectation::Number));
        }
        let Ok(value) = self.input[self.pos..self.pos + digits].parse::<f64>() else {
            return Err(self.miss(Expectation::Number));
        };
        self.pos += digits;
        self.skip_whitespace();
        Ok(value)
    }

    /// The ordered value alternative: object, array, string, number, `null`,
    /// `true`, `false`. First match wins; the leading character sets are
    /// disjoint, so order only matters for error reporting.
    fn value(&mut self) -> Matched<Value> {
        self.skip_whitespace();
        let start = self.pos;

        match self.object() {
            Ok(map) => return Ok(Value::Object(map)),
            Err(Miss) => self.pos = start,
        }
        match self.array() {
            Ok(items) => return Ok(Value::Array(items)),
            Err(Miss) => self.pos = start,
        }
        match self.string() {
            Ok(text) => return Ok(Value::String(text)),
            Err(Miss) => self.pos = start,
        }
        match self.number() {
            Ok(n) => return Ok(Value::Number(n)),
            Err(Miss) => self.pos = start,
        }
        if self.word("null").is_ok() {
            return Ok(Value::Null);
        }
        if self.word("true").is_ok() {
            return Ok(Value::Boolean(true));
        }
        if self.word("false").is_ok() {
            return Ok(Value::Boolean(false));
        }

        // If no alternative consumed anything, collapse the seven leaf
        // expectations into a single "a value". A deeper partial match keeps
        // its own, more specific expectations.
        if self.furthest == start {
            self.expected.clear();
        }
        Err(self.miss(Expectation::Value))
    }

    /// Zero or more `rule` matches separated by commas.
    ///
    /// A comma commits to a following element: `[1,]` fails at the position
    /// after the comma rather than tolerating the trailing comma.
    fn separated<T>(&mut self, rule: fn(&mut Self) -> Matched<T>) -> Matched<Vec<T>> {
        let mut items = Vec::new();
        let start = self.pos;
        match rule(self) {
            Ok(first) => items.push(first),
            Err(Miss) => {
                self.pos = start;
                return Ok(items);
            }
        }
        while self.word(",").is_ok() {
            items.push(rule(self)?);
        }
        Ok(items)
    }

    /// `'[' (value (',' value)*)? ']'`
    fn array(&mut self) -> Matched<Array> {
        self.word("[")?;
        let items = self.separated(Self::value)?;
        self.word("]")?;
        Ok(items)
    }

    /// `string ':' value`. The key keeps its raw (undecoded) escape text.
    ///
    /// No recovery here: a missing colon or value propagates to the
    /// enclosing object rule.
    fn member(&mut self) -> Matched<(String, Value)> {
        let key = self.string()?;
        self.word(":")?;
        let value = self.value()?;
        Ok((key, value))
    }

    /// `'{' (member (',' member)*)? '}'`, folded left-to-right.
    ///
    /// Duplicate keys are last-write-wins; the key keeps its first insertion
    /// position.
    fn object(&mut self) -> Matched<Map> {
        self.word("{")?;
        let members = self.separated(Self::member)?;
        self.word("}")?;
        let mut map = Map::with_capacity(members.len());
        for (key, value) in members {
            map.insert(key, value);
        }
        Ok(map)
    }
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

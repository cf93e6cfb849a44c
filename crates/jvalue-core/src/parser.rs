//! Recursive-descent JSON parser.
//!
//! The parser walks a [`Cursor`] directly, dispatching on the next significant
//! byte:
//!
//! - `{` / `[` → object / array, recursing for each member
//! - `"` → string literal
//! - `t` / `f` / `n` → `true` / `false` / `null`
//! - `-` or a digit → number
//!
//! Any mismatch aborts the whole parse; nothing partial is returned. Errors say
//! *what* went wrong ([`ParseError`]) but not *where*.
//!
//! # Example
//! ```
//! use jvalue_core::{parse, ParseError, ParserConfig};
//!
//! let v = parse(r#"{"x": [1, 2.5, "s", true, null]}"#).unwrap();
//! assert_eq!(v["x"][1].get_number(), 2.5);
//!
//! assert_eq!(parse("[1,2"), Err(ParseError::UnexpectedEnd));
//!
//! let shallow = ParserConfig::new().max_depth(1);
//! assert_eq!(shallow.parse("[[1]]"), Err(ParseError::DepthLimitExceeded(1)));
//! ```

use crate::error::{ParseError, Result};
use crate::scanner::Cursor;
use crate::value::{Array, Object, Value};

/// Default limit on array/object nesting.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Parser settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    max_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParserConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maximum number of nested arrays/objects. Deeper input fails with
    /// [`ParseError::DepthLimitExceeded`].
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Parse a complete document. Only whitespace may follow the root value.
    pub fn parse(&self, text: &str) -> Result<Value> {
        let mut parser = Parser {
            cursor: Cursor::new(text),
            max_depth: self.max_depth,
            depth: 0,
        };
        parser.parse_document()
    }
}

/// Parse a complete JSON document with the default [`ParserConfig`].
pub fn parse(text: &str) -> Result<Value> {
    ParserConfig::default().parse(text)
}

struct Parser<'a> {
    cursor: Cursor<'a>,
    max_depth: usize,
    depth: usize,
}

impl Parser<'_> {
    fn parse_document(&mut self) -> Result<Value> {
        let value = self.parse_value()?;
        self.cursor.skip_whitespace();
        if !self.cursor.is_at_end() {
            return Err(ParseError::TrailingCharacters);
        }
        Ok(value)
    }

    fn parse_value(&mut self) -> Result<Value> {
        match self.cursor.peek_significant() {
            None => Err(ParseError::UnexpectedEnd),
            Some(b'{') => {
                self.cursor.advance();
                self.nested(Self::parse_object)
            }
            Some(b'[') => {
                self.cursor.advance();
                self.nested(Self::parse_array)
            }
            Some(b'"') => {
                self.cursor.advance();
                Ok(Value::String(self.cursor.read_string()?))
            }
            Some(b't') => self.parse_literal("true", Value::Bool(true)),
            Some(b'f') => self.parse_literal("false", Value::Bool(false)),
            Some(b'n') => self.parse_literal("null", Value::Null),
            Some(b'-' | b'0'..=b'9') => Ok(Value::Number(self.cursor.read_number()?)),
            Some(_) => Err(self.cursor.unexpected()),
        }
    }

    fn parse_literal(&mut self, word: &str, value: Value) -> Result<Value> {
        if self.cursor.match_keyword(word) {
            Ok(value)
        } else {
            Err(ParseError::InvalidLiteral)
        }
    }

    /// Run a container parser one nesting level deeper.
    fn nested(&mut self, parse: fn(&mut Self) -> Result<Value>) -> Result<Value> {
        if self.depth >= self.max_depth {
            return Err(ParseError::DepthLimitExceeded(self.max_depth));
        }
        self.depth += 1;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    /// Members after `[`, through the closing `]`.
    fn parse_array(&mut self) -> Result<Value> {
        let mut items = Array::new();
        if self.cursor.peek_significant() == Some(b']') {
            self.cursor.advance();
            return Ok(Value::Array(items));
        }

        loop {
            items.push(self.parse_value()?);
            match self.cursor.peek_significant() {
                Some(b',') => self.cursor.advance(),
                Some(b']') => {
                    self.cursor.advance();
                    return Ok(Value::Array(items));
                }
                _ => return Err(self.cursor.unexpected()),
            }
        }
    }

    /// Entries after `{`, through the closing `}`. Later duplicates win.
    fn parse_object(&mut self) -> Result<Value> {
        let mut map = Object::new();
        if self.cursor.peek_significant() == Some(b'}') {
            self.cursor.advance();
            return Ok(Value::Object(map));
        }

        loop {
            self.expect(b'"')?;
            let key = self.cursor.read_string()?;
            self.expect(b':')?;
            let value = self.parse_value()?;
            map.insert(key, value);

            match self.cursor.peek_significant() {
                Some(b',') => self.cursor.advance(),
                Some(b'}') => {
                    self.cursor.advance();
                    return Ok(Value::Object(map));
                }
                _ => return Err(self.cursor.unexpected()),
            }
        }
    }

    fn expect(&mut self, byte: u8) -> Result<()> {
        if self.cursor.peek_significant() == Some(byte) {
            self.cursor.advance();
            Ok(())
        } else {
            Err(self.cursor.unexpected())
        }
    }
}

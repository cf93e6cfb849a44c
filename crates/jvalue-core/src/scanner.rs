//! Byte cursor used by the parser.
//!
//! There is no token stream: the parser peeks at the next significant byte
//! and calls straight into the string/number/keyword readers here. All
//! structural bytes are ASCII, so every position the cursor stops at is a
//! valid `char` boundary of the source `&str`, which lets string decoding copy
//! unescaped runs with `push_str` instead of re-validating UTF-8.

use crate::error::{ParseError, Result};

pub(crate) struct Cursor<'a> {
    text: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(text: &'a str) -> Self {
        Self {
            text,
            bytes: text.as_bytes(),
            pos: 0,
        }
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    /// Skip bytes `<= 0x20`.
    pub(crate) fn skip_whitespace(&mut self) {
        while let Some(&b) = self.bytes.get(self.pos) {
            if b > 0x20 {
                break;
            }
            self.pos += 1;
        }
    }

    /// Skip whitespace and return the next byte without consuming it.
    pub(crate) fn peek_significant(&mut self) -> Option<u8> {
        self.skip_whitespace();
        self.peek()
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.pos += 1;
        Some(b)
    }

    pub(crate) fn advance(&mut self) {
        self.pos += 1;
    }

    /// Error describing whatever sits at the cursor.
    pub(crate) fn unexpected(&self) -> ParseError {
        match self.text[self.pos..].chars().next() {
            Some(ch) => ParseError::UnexpectedCharacter(ch),
            None => ParseError::UnexpectedEnd,
        }
    }

    /// Consume `word` if the input continues with it.
    pub(crate) fn match_keyword(&mut self, word: &str) -> bool {
        if self.bytes[self.pos..].starts_with(word.as_bytes()) {
            self.pos += word.len();
            true
        } else {
            false
        }
    }

    /// Decode a string literal. The opening quote must already be consumed;
    /// the closing quote is consumed on success.
    pub(crate) fn read_string(&mut self) -> Result<String> {
        let mut out = String::new();
        let mut run_start = self.pos;
        loop {
            match self.bump() {
                None => return Err(ParseError::UnexpectedEnd),
                Some(b'"') => {
                    out.push_str(&self.text[run_start..self.pos - 1]);
                    return Ok(out);
                }
                Some(b'\\') => {
                    out.push_str(&self.text[run_start..self.pos - 1]);
                    self.read_escape(&mut out)?;
                    run_start = self.pos;
                }
                Some(_) => {}
            }
        }
    }

    /// Decode one escape sequence following a backslash.
    fn read_escape(&mut self, out: &mut String) -> Result<()> {
        let b = self.bump().ok_or(ParseError::UnexpectedEnd)?;
        if let Some(ch) = unescape_byte(b) {
            out.push(ch);
            return Ok(());
        }
        if b != b'u' {
            return Err(ParseError::InvalidEscape);
        }

        let unit = self.read_hex4()?;
        let ch = match unit {
            0xD800..=0xDBFF => self.read_low_surrogate(unit)?,
            0xDC00..=0xDFFF => char::REPLACEMENT_CHARACTER,
            _ => char::from_u32(unit).unwrap_or(char::REPLACEMENT_CHARACTER),
        };
        out.push(ch);
        Ok(())
    }

    /// After a high surrogate, combine with a directly following `\uDC00`-`\uDFFF`.
    /// Anything else leaves the cursor in place and yields U+FFFD for the lone half.
    fn read_low_surrogate(&mut self, high: u32) -> Result<char> {
        if !self.bytes[self.pos..].starts_with(b"\\u") {
            return Ok(char::REPLACEMENT_CHARACTER);
        }
        let rewind = self.pos;
        self.pos += 2;
        let low = self.read_hex4()?;
        if !(0xDC00..=0xDFFF).contains(&low) {
            self.pos = rewind;
            return Ok(char::REPLACEMENT_CHARACTER);
        }
        let code = 0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00);
        Ok(char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER))
    }

    fn read_hex4(&mut self) -> Result<u32> {
        let mut unit = 0;
        for _ in 0..4 {
            let b = self.bump().ok_or(ParseError::UnexpectedEnd)?;
            let digit = char::from(b)
                .to_digit(16)
                .ok_or(ParseError::InvalidEscape)?;
            unit = unit * 16 + digit;
        }
        Ok(unit)
    }

    /// Read `-? digits (. digits)? ([eE] [+-]? digits)?` and convert it.
    pub(crate) fn read_number(&mut self) -> Result<f64> {
        let start = self.pos;
        if self.peek() == Some(b'-') {
            self.pos += 1;
        }
        if self.eat_digits() == 0 {
            return Err(ParseError::InvalidNumber);
        }
        if self.peek() == Some(b'.') {
            self.pos += 1;
            if self.eat_digits() == 0 {
                return Err(ParseError::InvalidNumber);
            }
        }
        if matches!(self.peek(), Some(b'e' | b'E')) {
            self.pos += 1;
            if matches!(self.peek(), Some(b'+' | b'-')) {
                self.pos += 1;
            }
            if self.eat_digits() == 0 {
                return Err(ParseError::InvalidNumber);
            }
        }

        let token = &self.text[start..self.pos];
        let n: f64 = token.parse().map_err(|_| ParseError::InvalidNumber)?;
        if !n.is_finite() {
            return Err(ParseError::InvalidNumber);
        }
        Ok(n)
    }

    fn eat_digits(&mut self) -> usize {
        let start = self.pos;
        while matches!(self.peek(), Some(b'0'..=b'9')) {
            self.pos += 1;
        }
        self.pos - start
    }
}

/// Single-character escapes. `serializer::escape_char` is the inverse, minus `\/`.
pub(crate) fn unescape_byte(b: u8) -> Option<char> {
    match b {
        b'"' => Some('"'),
        b'\\' => Some('\\'),
        b'/' => Some('/'),
        b'b' => Some('\u{08}'),
        b'f' => Some('\u{0c}'),
        b'n' => Some('\n'),
        b'r' => Some('\r'),
        b't' => Some('\t'),
        _ => None,
    }
}

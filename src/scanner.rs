//! Hand-written scanner producing one token per call.
use smol_str::SmolStr;

use crate::parser::{ParseError, Result};

/// A single lexical unit of an s-expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Token {
    Open,
    Close,
    Identifier(SmolStr),
    String(SmolStr),
    Eof,
}

/// Scanner over raw input bytes.
///
/// Input is decoded one code point at a time, so a malformed UTF-8 sequence
/// is only reported once the scanner actually reaches it. After an error the
/// scanner is not advanced; further calls return the same error.
pub(crate) struct Scanner<'a> {
    input: &'a [u8],
    pos: usize,
    // Reused for decoded token text. Decoding only shrinks (escape
    // resolution drops the backslash), so the input length is enough.
    buf: String,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(input: &'a [u8]) -> Self {
        Scanner {
            input,
            pos: 0,
            buf: String::with_capacity(input.len()),
        }
    }

    /// Skips leading whitespace and scans the next token.
    ///
    /// Once the input is exhausted, returns [`Token::Eof`] on every call.
    pub(crate) fn scan(&mut self) -> Result<Token> {
        let (mut c, mut size) = loop {
            match self.decode()? {
                None => return Ok(Token::Eof),
                Some((c, size)) if c.is_whitespace() => self.pos += size,
                Some(next) => break next,
            }
        };

        match c {
            '(' => {
                self.pos += size;
                Ok(Token::Open)
            }
            ')' => {
                self.pos += size;
                Ok(Token::Close)
            }
            '"' => {
                let quote = self.pos;
                self.pos += size;
                self.quoted_string(quote)
            }
            _ => {
                // A bare identifier runs until whitespace, ')' or end of
                // input. A terminating ')' is left for the next scan;
                // terminating whitespace is consumed.
                self.buf.clear();
                loop {
                    self.buf.push(c);
                    self.pos += size;
                    match self.decode()? {
                        None => break,
                        Some((')', _)) => break,
                        Some((next, next_size)) if next.is_whitespace() => {
                            self.pos += next_size;
                            break;
                        }
                        Some((next, next_size)) => {
                            c = next;
                            size = next_size;
                        }
                    }
                }
                Ok(Token::Identifier(SmolStr::new(&self.buf)))
            }
        }
    }

    /// Scans the remainder of a quoted string, the opening quote already
    /// consumed. `\` followed by any code point copies that code point
    /// verbatim; there are no named escapes.
    fn quoted_string(&mut self, quote: usize) -> Result<Token> {
        self.buf.clear();
        loop {
            let Some((c, size)) = self.decode()? else {
                return Err(ParseError::UnterminatedString { offset: quote });
            };
            self.pos += size;
            match c {
                '"' => return Ok(Token::String(SmolStr::new(&self.buf))),
                '\\' => {
                    let Some((escaped, size)) = self.decode()? else {
                        return Err(ParseError::UnterminatedString { offset: quote });
                    };
                    self.pos += size;
                    self.buf.push(escaped);
                }
                c => self.buf.push(c),
            }
        }
    }

    /// Decodes the code point at the cursor without consuming it.
    ///
    /// Returns the code point and its encoded size, `None` at end of input,
    /// or [`ParseError::Encoding`] for a malformed sequence.
    fn decode(&self) -> Result<Option<(char, usize)>> {
        let Some(&lead) = self.input.get(self.pos) else {
            return Ok(None);
        };
        let size = match lead {
            0x00..=0x7f => 1,
            0xc2..=0xdf => 2,
            0xe0..=0xef => 3,
            0xf0..=0xf4 => 4,
            _ => return Err(ParseError::Encoding { offset: self.pos }),
        };
        let bytes = self
            .input
            .get(self.pos..self.pos + size)
            .ok_or(ParseError::Encoding { offset: self.pos })?;
        let text = std::str::from_utf8(bytes)
            .map_err(|_| ParseError::Encoding { offset: self.pos })?;
        match text.chars().next() {
            Some(c) => Ok(Some((c, size))),
            None => Err(ParseError::Encoding { offset: self.pos }),
        }
    }
}

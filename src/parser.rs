//! Recursive-descent parsing of s-expressions.
use crate::scanner::{Scanner, Token};
use crate::value::Value;

/// An error produced while parsing an s-expression.
///
/// Parsing is all-or-nothing: any error aborts the parse and no partial
/// tree is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The input contains a malformed UTF-8 sequence. Detected at the
    /// exact byte offset the scanner reaches it, not up front.
    #[error("invalid UTF-8 encoding at byte {offset}")]
    Encoding { offset: usize },
    /// A quoted string was still open when the input ended. `offset` is
    /// the byte position of the opening quote.
    #[error("unterminated string starting at byte {offset}")]
    UnterminatedString { offset: usize },
    /// The document does not start with an open paren.
    #[error("s-expressions must begin with '('")]
    MissingOpen,
}

/// Shorthand for a result specialised to parse errors.
pub type Result<T, E = ParseError> = std::result::Result<T, E>;

/// Parses an s-expression document into its top-level elements.
///
/// The first token must be `(`; the returned `Vec` holds the elements of
/// that outermost list. The reader is deliberately lax in two ways: input
/// ending before a list is closed yields the elements scanned so far, and
/// anything after the top-level list closes is ignored.
///
/// Parsing recurses once per nesting level, so the nesting depth of the
/// input is bounded by the available call stack.
///
/// ```
/// use sexpr::{parse, Value};
///
/// let values = parse(r#"(a "b")"#).unwrap();
/// assert_eq!(values.len(), 2);
/// assert_eq!(values[0], Value::Identifier("a".into()));
/// assert_eq!(values[1], Value::String("b".into()));
/// ```
pub fn parse(input: &str) -> Result<Vec<Value>> {
    parse_bytes(input.as_bytes())
}

/// Parses an s-expression document from raw bytes.
///
/// Like [`parse`], except the input is validated as UTF-8 while scanning
/// and a malformed sequence surfaces as [`ParseError::Encoding`].
pub fn parse_bytes(input: &[u8]) -> Result<Vec<Value>> {
    let mut scanner = Scanner::new(input);
    match scanner.scan()? {
        Token::Open => parse_list(&mut scanner),
        _ => Err(ParseError::MissingOpen),
    }
}

/// Parses list elements up to the matching close paren, the open paren
/// already consumed. End of input also ends the list.
fn parse_list(scanner: &mut Scanner<'_>) -> Result<Vec<Value>> {
    let mut elements = Vec::new();
    loop {
        match scanner.scan()? {
            Token::Close | Token::Eof => return Ok(elements),
            Token::Open => elements.push(Value::List(parse_list(scanner)?)),
            Token::Identifier(name) => elements.push(Value::Identifier(name)),
            Token::String(text) => elements.push(Value::String(text)),
        }
    }
}

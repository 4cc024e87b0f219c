//! A minimal s-expression reader.
//!
//! Converts a textual s-expression into a nested tree of atoms and lists.
//! There is no printer, no reader macros and no numeric literals; embedders
//! supply the input text and consume the returned [`Value`] tree.
//!
//! # Syntax
//!
//! - **Lists** are sequences of values, delimited on the outside by `(` and
//!   `)` and separated by whitespace. A document must begin with `(`.
//!
//! - **Identifiers** are bare atoms: any run of code points up to the next
//!   whitespace or `)`.
//!
//! - **Strings** are enclosed within double quotes. Within a string, `\`
//!   followed by any code point stands for that code point itself, so `\"`
//!   escapes a quote and `\\` a backslash. There are no named escapes:
//!   `\n` is the letter `n`.
//!
//! # Example
//!
//! ```
//! use sexpr::{parse, Value};
//!
//! let values = parse(r#"(a "b c" (d))"#).unwrap();
//! assert_eq!(values[0], Value::Identifier("a".into()));
//! assert_eq!(values[1], Value::String("b c".into()));
//! assert_eq!(values[2], Value::List(vec![Value::Identifier("d".into())]));
//! ```

pub mod parser;
pub(crate) mod scanner;
pub mod value;

pub use parser::{parse, parse_bytes, ParseError, Result};
pub use value::Value;

//! The parsed representation of an s-expression.
use proptest::arbitrary::Arbitrary;
use smol_str::SmolStr;

/// An s-expression element represented as a recursive enum.
///
/// Atom text is stored with all escapes already resolved; a [`Value`] never
/// contains a literal backslash-escape sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A bare symbolic atom.
    Identifier(SmolStr),
    /// A quoted string atom.
    String(SmolStr),
    /// A nested list of elements, in source order.
    List(Vec<Value>),
}

impl Value {
    /// Returns the identifier text, if this is an identifier atom.
    pub fn as_identifier(&self) -> Option<&str> {
        match self {
            Value::Identifier(name) => Some(name),
            _ => None,
        }
    }

    /// Returns the string text, if this is a quoted string atom.
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Value::String(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the elements, if this is a list.
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }
}

impl Arbitrary for Value {
    type Parameters = ();
    type Strategy = proptest::strategy::BoxedStrategy<Self>;

    fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
        use proptest::prelude::*;

        let leaf = proptest::prop_oneof![
            // Restricted to code points that never need quoting.
            "[a-z+*!?<=>._-][a-z0-9+*!?<=>._-]*"
                .prop_map(|s| Value::Identifier(s.into())),
            any::<String>().prop_map(|s| Value::String(s.into())),
        ];
        leaf.prop_recursive(8, 256, 10, |inner| {
            proptest::collection::vec(inner, 0..10).prop_map(Value::List)
        })
        .boxed()
    }
}

#[cfg(test)]
mod test {
    use super::Value;
    use crate::parse;
    use proptest::prelude::*;

    fn write_value(value: &Value, out: &mut String) {
        match value {
            Value::Identifier(name) => out.push_str(name),
            Value::String(text) => {
                out.push('"');
                for c in text.chars() {
                    if c == '"' || c == '\\' {
                        out.push('\\');
                    }
                    out.push(c);
                }
                out.push('"');
            }
            Value::List(items) => write_list(items, out),
        }
    }

    fn write_list(items: &[Value], out: &mut String) {
        out.push('(');
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            write_value(item, out);
        }
        out.push(')');
    }

    proptest! {
        #[test]
        fn render_then_parse(values: Vec<Value>) {
            let mut sexp = String::new();
            write_list(&values, &mut sexp);
            prop_assert_eq!(parse(&sexp).unwrap(), values);
        }
    }

    #[test]
    fn accessors() {
        let ident = Value::Identifier("a".into());
        let string = Value::String("b".into());
        let list = Value::List(vec![ident.clone()]);

        assert_eq!(ident.as_identifier(), Some("a"));
        assert_eq!(ident.as_string(), None);
        assert_eq!(string.as_string(), Some("b"));
        assert_eq!(string.as_list(), None);
        assert_eq!(list.as_list(), Some(&[ident][..]));
        assert_eq!(list.as_identifier(), None);
    }
}

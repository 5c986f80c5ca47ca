use std::fmt::Write;

use crate::CharExt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ScalarStyle {
    /// Let the producer decide. Traced like a plain scalar, but does not
    /// expose a non-specific tag.
    #[default]
    Any,
    /// Unquoted, flow-context scalar.
    Plain,
    /// `'...'`
    SingleQuoted,
    /// `"..."`
    DoubleQuoted,
    /// Block scalar introduced by `|`, preserving newlines.
    Literal,
    /// Block scalar introduced by `>`, folding newlines.
    Folded,
}

impl ScalarStyle {
    /// The marker written between the node properties and the scalar value.
    #[inline]
    pub fn marker(self) -> &'static str {
        match self {
            ScalarStyle::DoubleQuoted => " \"",
            ScalarStyle::SingleQuoted => " '",
            ScalarStyle::Folded => " >",
            ScalarStyle::Literal => " |",
            ScalarStyle::Plain | ScalarStyle::Any => " :",
        }
    }
}

/// Write `value` with backspace, tab, newline, carriage return and backslash
/// replaced by their two-character escapes. Everything else is copied as is.
pub fn write_escaped(value: &str, writer: &mut impl Write) -> Result<(), std::fmt::Error> {
    let mut start = 0;
    for (index, ch) in value.char_indices() {
        if let Some(escape) = ch.trace_escape() {
            writer.write_str(&value[start..index])?;
            writer.write_str(escape)?;
            start = index + ch.len_utf8();
        }
    }
    writer.write_str(&value[start..])
}

pub fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    // Writing into a `String` cannot fail.
    let _ = write_escaped(value, &mut escaped);
    escaped
}

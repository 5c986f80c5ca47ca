pub trait CharExt {
    /// The two-character escape sequence used for this character in an event
    /// trace, or `None` if it is written verbatim.
    fn trace_escape(self) -> Option<&'static str>;
}

impl CharExt for char {
    #[inline]
    fn trace_escape(self) -> Option<&'static str> {
        match self {
            '\x08' => Some("\\b"),
            '\t' => Some("\\t"),
            '\n' => Some("\\n"),
            '\r' => Some("\\r"),
            '\\' => Some("\\\\"),
            _ => None,
        }
    }
}

use crate::{OwnedTag, ScalarStyle, Span, Tag};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MappingStyle {
    #[default]
    Any,
    Block,
    Flow,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SequenceStyle {
    #[default]
    Any,
    Block,
    Flow,
}

/// `%YAML major.minor`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct VersionDirective {
    pub major: i32,
    pub minor: i32,
}

/// `%TAG handle prefix`
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TagDirective {
    pub handle: String,
    pub prefix: String,
}

/// A single event produced by a YAML parser.
///
/// Anchors are `None` when the node has no anchor. An empty anchor name is
/// treated the same way.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Event<'r> {
    StreamStart(Span),
    StreamEnd(Span),
    DocumentStart {
        span: Span,
        version: Option<VersionDirective>,
        tags: &'r [TagDirective],
        /// The document has no `---` marker.
        implicit: bool,
    },
    DocumentEnd {
        span: Span,
        /// The document has no `...` marker.
        implicit: bool,
    },
    MappingStart {
        span: Span,
        anchor: Option<&'r str>,
        tag: Tag<'r>,
        style: MappingStyle,
    },
    MappingEnd(Span),
    SequenceStart {
        span: Span,
        anchor: Option<&'r str>,
        tag: Tag<'r>,
        style: SequenceStyle,
    },
    SequenceEnd(Span),
    Scalar {
        span: Span,
        anchor: Option<&'r str>,
        tag: Tag<'r>,
        value: &'r str,
        style: ScalarStyle,
    },
    /// A reference to a previously anchored node.
    Alias { span: Span, anchor: &'r str },
    Comment {
        span: Span,
        value: &'r str,
        /// The comment follows other tokens on the same line.
        inline: bool,
    },
}

impl<'r> Event<'r> {
    #[inline]
    pub fn stream_start() -> Self {
        Self::StreamStart(Span::default())
    }

    #[inline]
    pub fn stream_end() -> Self {
        Self::StreamEnd(Span::default())
    }

    #[inline]
    pub fn document_start(implicit: bool) -> Self {
        Self::DocumentStart {
            span: Span::default(),
            version: None,
            tags: &[],
            implicit,
        }
    }

    #[inline]
    pub fn document_end(implicit: bool) -> Self {
        Self::DocumentEnd {
            span: Span::default(),
            implicit,
        }
    }

    #[inline]
    pub fn begin_mapping(anchor: Option<&'r str>, tag: Tag<'r>) -> Self {
        Self::MappingStart {
            span: Span::default(),
            anchor,
            tag,
            style: MappingStyle::Any,
        }
    }

    #[inline]
    pub fn end_mapping() -> Self {
        Self::MappingEnd(Span::default())
    }

    #[inline]
    pub fn begin_sequence(anchor: Option<&'r str>, tag: Tag<'r>) -> Self {
        Self::SequenceStart {
            span: Span::default(),
            anchor,
            tag,
            style: SequenceStyle::Any,
        }
    }

    #[inline]
    pub fn end_sequence() -> Self {
        Self::SequenceEnd(Span::default())
    }

    #[inline]
    pub fn scalar(
        anchor: Option<&'r str>,
        tag: Tag<'r>,
        value: &'r str,
        style: ScalarStyle,
    ) -> Self {
        Self::Scalar {
            span: Span::default(),
            anchor,
            tag,
            value,
            style,
        }
    }

    /// An untagged, unanchored plain scalar.
    #[inline]
    pub fn plain(value: &'r str) -> Self {
        Self::scalar(None, Tag::Empty, value, ScalarStyle::Plain)
    }

    #[inline]
    pub fn alias(anchor: &'r str) -> Self {
        Self::Alias {
            span: Span::default(),
            anchor,
        }
    }

    #[inline]
    pub fn comment(value: &'r str) -> Self {
        Self::Comment {
            span: Span::default(),
            value,
            inline: false,
        }
    }

    #[inline]
    pub fn span(&self) -> Span {
        match *self {
            Event::StreamStart(span)
            | Event::StreamEnd(span)
            | Event::MappingEnd(span)
            | Event::SequenceEnd(span)
            | Event::DocumentStart { span, .. }
            | Event::DocumentEnd { span, .. }
            | Event::MappingStart { span, .. }
            | Event::SequenceStart { span, .. }
            | Event::Scalar { span, .. }
            | Event::Alias { span, .. }
            | Event::Comment { span, .. } => span,
        }
    }

    /// Short name of the event kind, for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Event::StreamStart(_) => "stream-start",
            Event::StreamEnd(_) => "stream-end",
            Event::DocumentStart { .. } => "document-start",
            Event::DocumentEnd { .. } => "document-end",
            Event::MappingStart { .. } => "mapping-start",
            Event::MappingEnd(_) => "mapping-end",
            Event::SequenceStart { .. } => "sequence-start",
            Event::SequenceEnd(_) => "sequence-end",
            Event::Scalar { .. } => "scalar",
            Event::Alias { .. } => "alias",
            Event::Comment { .. } => "comment",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum OwnedEvent {
    StreamStart(Span),
    StreamEnd(Span),
    DocumentStart {
        span: Span,
        version: Option<VersionDirective>,
        tags: Vec<TagDirective>,
        implicit: bool,
    },
    DocumentEnd {
        span: Span,
        implicit: bool,
    },
    MappingStart {
        span: Span,
        anchor: Option<String>,
        tag: OwnedTag,
        style: MappingStyle,
    },
    MappingEnd(Span),
    SequenceStart {
        span: Span,
        anchor: Option<String>,
        tag: OwnedTag,
        style: SequenceStyle,
    },
    SequenceEnd(Span),
    Scalar {
        span: Span,
        anchor: Option<String>,
        tag: OwnedTag,
        value: String,
        style: ScalarStyle,
    },
    Alias {
        span: Span,
        anchor: String,
    },
    Comment {
        span: Span,
        value: String,
        inline: bool,
    },
}

impl PartialEq<Event<'_>> for OwnedEvent {
    #[inline]
    fn eq(&self, other: &Event<'_>) -> bool {
        self.borrow() == *other
    }
}

impl OwnedEvent {
    pub fn borrow(&self) -> Event {
        match self {
            OwnedEvent::StreamStart(span) => Event::StreamStart(*span),
            OwnedEvent::StreamEnd(span) => Event::StreamEnd(*span),
            OwnedEvent::DocumentStart {
                span,
                version,
                tags,
                implicit,
            } => Event::DocumentStart {
                span: *span,
                version: *version,
                tags,
                implicit: *implicit,
            },
            OwnedEvent::DocumentEnd { span, implicit } => Event::DocumentEnd {
                span: *span,
                implicit: *implicit,
            },
            OwnedEvent::MappingStart {
                span,
                anchor,
                tag,
                style,
            } => Event::MappingStart {
                span: *span,
                anchor: anchor.as_deref(),
                tag: tag.borrow(),
                style: *style,
            },
            OwnedEvent::MappingEnd(span) => Event::MappingEnd(*span),
            OwnedEvent::SequenceStart {
                span,
                anchor,
                tag,
                style,
            } => Event::SequenceStart {
                span: *span,
                anchor: anchor.as_deref(),
                tag: tag.borrow(),
                style: *style,
            },
            OwnedEvent::SequenceEnd(span) => Event::SequenceEnd(*span),
            OwnedEvent::Scalar {
                span,
                anchor,
                tag,
                value,
                style,
            } => Event::Scalar {
                span: *span,
                anchor: anchor.as_deref(),
                tag: tag.borrow(),
                value,
                style: *style,
            },
            OwnedEvent::Alias { span, anchor } => Event::Alias {
                span: *span,
                anchor,
            },
            OwnedEvent::Comment {
                span,
                value,
                inline,
            } => Event::Comment {
                span: *span,
                value,
                inline: *inline,
            },
        }
    }
}

impl<'r> Event<'r> {
    pub fn to_owned(self) -> OwnedEvent {
        match self {
            Event::StreamStart(span) => OwnedEvent::StreamStart(span),
            Event::StreamEnd(span) => OwnedEvent::StreamEnd(span),
            Event::DocumentStart {
                span,
                version,
                tags,
                implicit,
            } => OwnedEvent::DocumentStart {
                span,
                version,
                tags: tags.to_vec(),
                implicit,
            },
            Event::DocumentEnd { span, implicit } => OwnedEvent::DocumentEnd { span, implicit },
            Event::MappingStart {
                span,
                anchor,
                tag,
                style,
            } => OwnedEvent::MappingStart {
                span,
                anchor: anchor.map(ToOwned::to_owned),
                tag: tag.to_owned(),
                style,
            },
            Event::MappingEnd(span) => OwnedEvent::MappingEnd(span),
            Event::SequenceStart {
                span,
                anchor,
                tag,
                style,
            } => OwnedEvent::SequenceStart {
                span,
                anchor: anchor.map(ToOwned::to_owned),
                tag: tag.to_owned(),
                style,
            },
            Event::SequenceEnd(span) => OwnedEvent::SequenceEnd(span),
            Event::Scalar {
                span,
                anchor,
                tag,
                value,
                style,
            } => OwnedEvent::Scalar {
                span,
                anchor: anchor.map(ToOwned::to_owned),
                tag: tag.to_owned(),
                value: value.to_owned(),
                style,
            },
            Event::Alias { span, anchor } => OwnedEvent::Alias {
                span,
                anchor: anchor.to_owned(),
            },
            Event::Comment {
                span,
                value,
                inline,
            } => OwnedEvent::Comment {
                span,
                value: value.to_owned(),
                inline,
            },
        }
    }
}

impl<'r> From<&'r OwnedEvent> for Event<'r> {
    #[inline]
    fn from(event: &'r OwnedEvent) -> Self {
        event.borrow()
    }
}

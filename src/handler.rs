use crate::{
    sink::{LineEncoder, Sink},
    Error, Event, EventCursor, FmtSink, IoSink, MappingStyle, ScalarStyle, SequenceStyle, Span,
    Tag, TagDirective, VersionDirective,
};

/// Receiver of parser events, one callback per construct.
///
/// The producer owns the loop and calls these in stream order. Each callback
/// receives only the fields of its construct.
pub trait EventHandler {
    type Error;

    fn on_stream_start(&mut self, span: Span) -> Result<(), Self::Error>;
    fn on_stream_end(&mut self, span: Span) -> Result<(), Self::Error>;
    fn on_document_start(
        &mut self,
        version: Option<VersionDirective>,
        tags: &[TagDirective],
        implicit: bool,
        span: Span,
    ) -> Result<(), Self::Error>;
    fn on_document_end(&mut self, implicit: bool, span: Span) -> Result<(), Self::Error>;
    fn on_mapping_start(
        &mut self,
        anchor: Option<&str>,
        tag: Tag<'_>,
        style: MappingStyle,
        span: Span,
    ) -> Result<(), Self::Error>;
    fn on_mapping_end(&mut self, span: Span) -> Result<(), Self::Error>;
    fn on_sequence_start(
        &mut self,
        anchor: Option<&str>,
        tag: Tag<'_>,
        style: SequenceStyle,
        span: Span,
    ) -> Result<(), Self::Error>;
    fn on_sequence_end(&mut self, span: Span) -> Result<(), Self::Error>;
    fn on_scalar(
        &mut self,
        anchor: Option<&str>,
        tag: Tag<'_>,
        value: &str,
        style: ScalarStyle,
        span: Span,
    ) -> Result<(), Self::Error>;
    fn on_alias(&mut self, anchor: &str, span: Span) -> Result<(), Self::Error>;
    fn on_comment(&mut self, value: &str, inline: bool, span: Span) -> Result<(), Self::Error>;
}

/// Writes an event trace from handler callbacks, producing exactly the same
/// output as [`EventStream`](crate::EventStream) does for the same events.
pub struct TraceWriter<S> {
    encoder: LineEncoder<S>,
}

impl<W: std::fmt::Write> TraceWriter<FmtSink<W>> {
    pub fn new(writer: W) -> Self {
        Self {
            encoder: LineEncoder::new(FmtSink::new(writer)),
        }
    }
}

impl<W: std::io::Write> TraceWriter<IoSink<W>> {
    pub fn with_io_writer(writer: W) -> Self {
        Self {
            encoder: LineEncoder::new(IoSink::new(writer)),
        }
    }
}

impl<S: Sink> TraceWriter<S> {
    pub fn into_inner(self) -> S::Inner {
        self.encoder.into_inner()
    }
}

impl<S: Sink> EventHandler for TraceWriter<S> {
    type Error = Error;

    fn on_stream_start(&mut self, span: Span) -> Result<(), Error> {
        self.encoder.emit(Event::StreamStart(span))
    }

    fn on_stream_end(&mut self, span: Span) -> Result<(), Error> {
        self.encoder.emit(Event::StreamEnd(span))
    }

    fn on_document_start(
        &mut self,
        version: Option<VersionDirective>,
        tags: &[TagDirective],
        implicit: bool,
        span: Span,
    ) -> Result<(), Error> {
        self.encoder.emit(Event::DocumentStart {
            span,
            version,
            tags,
            implicit,
        })
    }

    fn on_document_end(&mut self, implicit: bool, span: Span) -> Result<(), Error> {
        self.encoder.emit(Event::DocumentEnd { span, implicit })
    }

    fn on_mapping_start(
        &mut self,
        anchor: Option<&str>,
        tag: Tag<'_>,
        style: MappingStyle,
        span: Span,
    ) -> Result<(), Error> {
        self.encoder.emit(Event::MappingStart {
            span,
            anchor,
            tag,
            style,
        })
    }

    fn on_mapping_end(&mut self, span: Span) -> Result<(), Error> {
        self.encoder.emit(Event::MappingEnd(span))
    }

    fn on_sequence_start(
        &mut self,
        anchor: Option<&str>,
        tag: Tag<'_>,
        style: SequenceStyle,
        span: Span,
    ) -> Result<(), Error> {
        self.encoder.emit(Event::SequenceStart {
            span,
            anchor,
            tag,
            style,
        })
    }

    fn on_sequence_end(&mut self, span: Span) -> Result<(), Error> {
        self.encoder.emit(Event::SequenceEnd(span))
    }

    fn on_scalar(
        &mut self,
        anchor: Option<&str>,
        tag: Tag<'_>,
        value: &str,
        style: ScalarStyle,
        span: Span,
    ) -> Result<(), Error> {
        self.encoder.emit(Event::Scalar {
            span,
            anchor,
            tag,
            value,
            style,
        })
    }

    fn on_alias(&mut self, anchor: &str, span: Span) -> Result<(), Error> {
        self.encoder.emit(Event::Alias { span, anchor })
    }

    fn on_comment(&mut self, _value: &str, _inline: bool, _span: Span) -> Result<(), Error> {
        // Comments are not part of the trace.
        Ok(())
    }
}

impl<'r> Event<'r> {
    /// Invoke the callback of `handler` that corresponds to this event.
    pub fn deliver_to<H>(self, handler: &mut H) -> Result<(), H::Error>
    where
        H: EventHandler + ?Sized,
    {
        match self {
            Event::StreamStart(span) => handler.on_stream_start(span),
            Event::StreamEnd(span) => handler.on_stream_end(span),
            Event::DocumentStart {
                span,
                version,
                tags,
                implicit,
            } => handler.on_document_start(version, tags, implicit, span),
            Event::DocumentEnd { span, implicit } => handler.on_document_end(implicit, span),
            Event::MappingStart {
                span,
                anchor,
                tag,
                style,
            } => handler.on_mapping_start(anchor, tag, style, span),
            Event::MappingEnd(span) => handler.on_mapping_end(span),
            Event::SequenceStart {
                span,
                anchor,
                tag,
                style,
            } => handler.on_sequence_start(anchor, tag, style, span),
            Event::SequenceEnd(span) => handler.on_sequence_end(span),
            Event::Scalar {
                span,
                anchor,
                tag,
                value,
                style,
            } => handler.on_scalar(anchor, tag, value, style, span),
            Event::Alias { span, anchor } => handler.on_alias(anchor, span),
            Event::Comment {
                span,
                value,
                inline,
            } => handler.on_comment(value, inline, span),
        }
    }
}

/// Drive `handler` with every event of `cursor`, in order.
pub fn replay<C, H>(mut cursor: C, handler: &mut H) -> Result<(), Error>
where
    C: EventCursor,
    C::Error: Into<Error>,
    H: EventHandler + ?Sized,
    H::Error: Into<Error>,
{
    while cursor.move_next().map_err(Into::into)? {
        if let Some(event) = cursor.current() {
            event.deliver_to(handler).map_err(Into::into)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{NonSpecificTag, SliceCursor};

    #[test]
    fn callbacks_write_lines() -> Result<(), Error> {
        let mut writer = TraceWriter::new(String::new());
        let span = Span::default();
        writer.on_stream_start(span)?;
        writer.on_document_start(None, &[], false, span)?;
        writer.on_sequence_start(Some("s"), Tag::Specific("!list"), SequenceStyle::Flow, span)?;
        writer.on_scalar(
            None,
            Tag::NonSpecific(NonSpecificTag::Exclamation),
            "bare",
            ScalarStyle::Plain,
            span,
        )?;
        writer.on_comment("ignored", true, span)?;
        writer.on_scalar(None, Tag::Empty, "x\ty", ScalarStyle::DoubleQuoted, span)?;
        writer.on_alias("s", span)?;
        writer.on_sequence_end(span)?;
        writer.on_document_end(true, span)?;
        writer.on_stream_end(span)?;
        assert_eq!(
            writer.into_inner(),
            "+STR\n+DOC ---\n+SEQ &s <!list>\n=VAL <!> :bare\n=VAL \"x\\ty\n=ALI *s\n-SEQ\n-DOC\n-STR\n"
        );
        Ok(())
    }

    #[test]
    fn comment_is_a_no_op() -> Result<(), Error> {
        let mut writer = TraceWriter::new(String::new());
        writer.on_comment("# note", false, Span::default())?;
        assert_eq!(writer.into_inner(), "");
        Ok(())
    }

    #[derive(Default)]
    struct Recorder(Vec<&'static str>);

    impl EventHandler for Recorder {
        type Error = std::convert::Infallible;

        fn on_stream_start(&mut self, _: Span) -> Result<(), Self::Error> {
            self.0.push("stream-start");
            Ok(())
        }
        fn on_stream_end(&mut self, _: Span) -> Result<(), Self::Error> {
            self.0.push("stream-end");
            Ok(())
        }
        fn on_document_start(
            &mut self,
            _: Option<VersionDirective>,
            _: &[TagDirective],
            _: bool,
            _: Span,
        ) -> Result<(), Self::Error> {
            self.0.push("document-start");
            Ok(())
        }
        fn on_document_end(&mut self, _: bool, _: Span) -> Result<(), Self::Error> {
            self.0.push("document-end");
            Ok(())
        }
        fn on_mapping_start(
            &mut self,
            _: Option<&str>,
            _: Tag<'_>,
            _: MappingStyle,
            _: Span,
        ) -> Result<(), Self::Error> {
            self.0.push("mapping-start");
            Ok(())
        }
        fn on_mapping_end(&mut self, _: Span) -> Result<(), Self::Error> {
            self.0.push("mapping-end");
            Ok(())
        }
        fn on_sequence_start(
            &mut self,
            _: Option<&str>,
            _: Tag<'_>,
            _: SequenceStyle,
            _: Span,
        ) -> Result<(), Self::Error> {
            self.0.push("sequence-start");
            Ok(())
        }
        fn on_sequence_end(&mut self, _: Span) -> Result<(), Self::Error> {
            self.0.push("sequence-end");
            Ok(())
        }
        fn on_scalar(
            &mut self,
            _: Option<&str>,
            _: Tag<'_>,
            _: &str,
            _: ScalarStyle,
            _: Span,
        ) -> Result<(), Self::Error> {
            self.0.push("scalar");
            Ok(())
        }
        fn on_alias(&mut self, _: &str, _: Span) -> Result<(), Self::Error> {
            self.0.push("alias");
            Ok(())
        }
        fn on_comment(&mut self, _: &str, _: bool, _: Span) -> Result<(), Self::Error> {
            self.0.push("comment");
            Ok(())
        }
    }

    #[test]
    fn replay_delivers_every_event_in_order() -> Result<(), Error> {
        let events: Vec<_> = [
            Event::stream_start(),
            Event::document_start(true),
            Event::begin_mapping(None, Tag::Empty),
            Event::comment("c"),
            Event::plain("k"),
            Event::begin_sequence(None, Tag::Empty),
            Event::alias("a"),
            Event::end_sequence(),
            Event::end_mapping(),
            Event::document_end(true),
            Event::stream_end(),
        ]
        .into_iter()
        .map(Event::to_owned)
        .collect();

        let mut recorder = Recorder::default();
        replay(SliceCursor::new(&events), &mut recorder)?;
        let expected: Vec<_> = events.iter().map(|e| e.borrow().name()).collect();
        assert_eq!(recorder.0, expected);
        Ok(())
    }
}

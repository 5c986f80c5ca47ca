use crate::{sink::LineEncoder, sink::Sink, Error, EventCursor, FmtSink, IoSink};

/// Renders the events of a cursor as an event trace.
///
/// This is a single forward pass: the stream consumes itself when written,
/// and does not remember any events it has already seen. The cursor is
/// trusted to produce a well-formed sequence (balanced starts and ends,
/// documents inside the stream); nothing is checked.
pub struct EventStream<C> {
    cursor: C,
}

impl<C> EventStream<C>
where
    C: EventCursor,
    C::Error: Into<Error>,
{
    pub fn new(cursor: C) -> Self {
        Self { cursor }
    }

    /// Like [`EventStream::new`], for callers whose event source may be
    /// absent. Fails with [`Error::MissingEventSource`].
    pub fn try_new(cursor: Option<C>) -> Result<Self, Error> {
        cursor.map(Self::new).ok_or(Error::MissingEventSource)
    }

    pub fn write_to<W: std::fmt::Write>(self, writer: &mut W) -> Result<(), Error> {
        self.drive(FmtSink::new(writer)).map(drop)
    }

    pub fn write_to_io<W: std::io::Write>(self, writer: W) -> Result<(), Error> {
        self.drive(IoSink::new(writer)).map(drop)
    }

    pub fn to_trace_string(self) -> Result<String, Error> {
        self.drive(FmtSink::new(String::new()))
    }

    fn drive<S: Sink>(mut self, sink: S) -> Result<S::Inner, Error> {
        let mut encoder = LineEncoder::new(sink);
        tracing::debug!("writing event trace");
        while self.cursor.move_next().map_err(Into::into)? {
            if let Some(event) = self.cursor.current() {
                tracing::trace!(event = event.name(), at = %event.span().start, "encoding event");
                encoder.emit(event)?;
            }
        }
        tracing::debug!(lines = encoder.lines(), "event trace complete");
        Ok(encoder.into_inner())
    }
}

use crate::{encode_event, Error, Event};

mod private {
    use crate::Error;

    /// A destination for complete trace lines.
    pub trait Sink {
        type Inner;
        fn write_line(&mut self, line: &str) -> Result<(), Error>;
        fn into_inner(self) -> Self::Inner;
    }
}

pub(crate) use private::Sink;

/// Trace output into a [`std::fmt::Write`].
pub struct FmtSink<W>(W);

/// Trace output into a [`std::io::Write`]. I/O errors are reported as
/// [`Error::Io`] exactly as the writer raised them.
pub struct IoSink<W>(W);

impl<W: std::fmt::Write> FmtSink<W> {
    #[inline]
    pub fn new(writer: W) -> Self {
        Self(writer)
    }
}

impl<W: std::io::Write> IoSink<W> {
    #[inline]
    pub fn new(writer: W) -> Self {
        Self(writer)
    }
}

impl<W: std::fmt::Write> Sink for FmtSink<W> {
    type Inner = W;

    #[inline]
    fn write_line(&mut self, line: &str) -> Result<(), Error> {
        self.0.write_str(line)?;
        self.0.write_char('\n')?;
        Ok(())
    }

    #[inline]
    fn into_inner(self) -> W {
        self.0
    }
}

impl<W: std::io::Write> Sink for IoSink<W> {
    type Inner = W;

    #[inline]
    fn write_line(&mut self, line: &str) -> Result<(), Error> {
        self.0.write_all(line.as_bytes())?;
        self.0.write_all(b"\n")?;
        Ok(())
    }

    #[inline]
    fn into_inner(self) -> W {
        self.0
    }
}

/// Encodes events one line at a time into a sink.
///
/// The line is assembled in a buffer first, so the sink only ever sees whole
/// lines.
pub(crate) struct LineEncoder<S> {
    sink: S,
    line: String,
    lines: usize,
}

impl<S: Sink> LineEncoder<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            line: String::new(),
            lines: 0,
        }
    }

    pub fn emit(&mut self, event: Event<'_>) -> Result<(), Error> {
        self.line.clear();
        if encode_event(&mut self.line, event)? {
            self.sink.write_line(&self.line)?;
            self.lines += 1;
        }
        Ok(())
    }

    /// Number of lines written so far.
    #[inline]
    pub fn lines(&self) -> usize {
        self.lines
    }

    #[inline]
    pub fn into_inner(self) -> S::Inner {
        self.sink.into_inner()
    }
}

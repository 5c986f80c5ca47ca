//! Event source backed by [`libyaml_safer`].

use libyaml_safer::EventData;

use crate::{
    Error, Event, EventCursor, EventStream, Mark, MappingStyle, OwnedEvent, OwnedTag,
    ScalarStyle, SequenceStyle, Span, TagDirective, VersionDirective,
};

/// Pulls events from a libyaml parser.
///
/// libyaml keeps reporting the end of the stream once it is reached; this
/// cursor yields it once and is then exhausted.
pub struct LibyamlCursor<'r> {
    parser: libyaml_safer::Parser<'r>,
    current: Option<OwnedEvent>,
    done: bool,
}

impl<'r> LibyamlCursor<'r> {
    pub fn new(parser: libyaml_safer::Parser<'r>) -> Self {
        Self {
            parser,
            current: None,
            done: false,
        }
    }
}

impl<'r> EventCursor for LibyamlCursor<'r> {
    type Error = libyaml_safer::Error;

    fn move_next(&mut self) -> Result<bool, Self::Error> {
        if self.done {
            self.current = None;
            return Ok(false);
        }
        let event = self.parser.parse()?;
        self.done = matches!(event.data, EventData::StreamEnd);
        self.current = Some(convert_event(event));
        Ok(true)
    }

    #[inline]
    fn current(&self) -> Option<Event<'_>> {
        self.current.as_ref().map(OwnedEvent::borrow)
    }
}

/// Parse `input` as YAML and return its event trace.
pub fn trace_yaml(input: &str) -> Result<String, Error> {
    let mut bytes = input.as_bytes();
    let mut parser = libyaml_safer::Parser::new();
    parser.set_input(&mut bytes);
    EventStream::new(LibyamlCursor::new(parser)).to_trace_string()
}

fn convert_mark(mark: libyaml_safer::Mark) -> Mark {
    Mark::new(mark.index as usize, mark.line as usize, mark.column as usize)
}

fn convert_event(event: libyaml_safer::Event) -> OwnedEvent {
    let span: Span = convert_mark(event.start_mark).until(convert_mark(event.end_mark));
    match event.data {
        EventData::StreamStart { .. } => OwnedEvent::StreamStart(span),
        EventData::StreamEnd => OwnedEvent::StreamEnd(span),
        EventData::DocumentStart {
            version_directive,
            tag_directives,
            implicit,
            ..
        } => OwnedEvent::DocumentStart {
            span,
            version: version_directive.map(|version| VersionDirective {
                major: version.major,
                minor: version.minor,
            }),
            tags: tag_directives
                .into_iter()
                .map(|directive| TagDirective {
                    handle: directive.handle,
                    prefix: directive.prefix,
                })
                .collect(),
            implicit,
        },
        EventData::DocumentEnd { implicit, .. } => OwnedEvent::DocumentEnd { span, implicit },
        EventData::Alias { anchor, .. } => OwnedEvent::Alias { span, anchor },
        EventData::Scalar {
            anchor,
            tag,
            value,
            style,
            ..
        } => OwnedEvent::Scalar {
            span,
            anchor,
            tag: OwnedTag::from_raw(tag),
            value,
            style: convert_scalar_style(style),
        },
        EventData::SequenceStart {
            anchor, tag, style, ..
        } => OwnedEvent::SequenceStart {
            span,
            anchor,
            tag: OwnedTag::from_raw(tag),
            style: match style {
                libyaml_safer::SequenceStyle::Block => SequenceStyle::Block,
                libyaml_safer::SequenceStyle::Flow => SequenceStyle::Flow,
                _ => SequenceStyle::Any,
            },
        },
        EventData::SequenceEnd => OwnedEvent::SequenceEnd(span),
        EventData::MappingStart {
            anchor, tag, style, ..
        } => OwnedEvent::MappingStart {
            span,
            anchor,
            tag: OwnedTag::from_raw(tag),
            style: match style {
                libyaml_safer::MappingStyle::Block => MappingStyle::Block,
                libyaml_safer::MappingStyle::Flow => MappingStyle::Flow,
                _ => MappingStyle::Any,
            },
        },
        EventData::MappingEnd => OwnedEvent::MappingEnd(span),
    }
}

fn convert_scalar_style(style: libyaml_safer::ScalarStyle) -> ScalarStyle {
    match style {
        libyaml_safer::ScalarStyle::Plain => ScalarStyle::Plain,
        libyaml_safer::ScalarStyle::SingleQuoted => ScalarStyle::SingleQuoted,
        libyaml_safer::ScalarStyle::DoubleQuoted => ScalarStyle::DoubleQuoted,
        libyaml_safer::ScalarStyle::Literal => ScalarStyle::Literal,
        libyaml_safer::ScalarStyle::Folded => ScalarStyle::Folded,
        _ => ScalarStyle::Any,
    }
}

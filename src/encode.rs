//! The line format of the event trace.
//!
//! Every function here writes to a [`std::fmt::Write`] and knows nothing
//! about where events come from. Both the pull and the push adapters go
//! through [`encode_event`], so the same events always produce the same
//! trace.

use std::fmt::Write;

use crate::{write_escaped, Event, ScalarStyle, Tag};

pub const STREAM_START: &str = "+STR";
pub const STREAM_END: &str = "-STR";
pub const DOCUMENT_START: &str = "+DOC";
pub const DOCUMENT_END: &str = "-DOC";
pub const MAPPING_START: &str = "+MAP";
pub const MAPPING_END: &str = "-MAP";
pub const SEQUENCE_START: &str = "+SEQ";
pub const SEQUENCE_END: &str = "-SEQ";
pub const SCALAR: &str = "=VAL";
pub const ALIAS: &str = "=ALI *";

const EXPLICIT_DOCUMENT_START: &str = " ---";
const EXPLICIT_DOCUMENT_END: &str = " ...";

/// Whether the tag of a node must appear in the trace.
///
/// Specific tags are always shown. A plain scalar additionally shows a
/// non-specific tag that was present in the source (`!`), since a plain
/// scalar would otherwise be resolved by its content. Collections are
/// checked with [`ScalarStyle::Any`].
#[inline]
pub fn tag_is_explicit(tag: Tag<'_>, style: ScalarStyle) -> bool {
    !tag.is_non_specific() || (style == ScalarStyle::Plain && !tag.is_empty())
}

/// Write the ` &anchor` and ` <tag>` segments of a node, in that order.
pub fn write_anchor_and_tag(
    writer: &mut impl Write,
    anchor: Option<&str>,
    tag: Tag<'_>,
    style: ScalarStyle,
) -> Result<(), std::fmt::Error> {
    if let Some(anchor) = anchor.filter(|anchor| !anchor.is_empty()) {
        writer.write_str(" &")?;
        writer.write_str(anchor)?;
    }

    match tag.as_str() {
        Some(text) if tag_is_explicit(tag, style) => {
            writer.write_str(" <")?;
            writer.write_str(text)?;
            writer.write_char('>')
        }
        _ => Ok(()),
    }
}

pub fn write_scalar(
    writer: &mut impl Write,
    anchor: Option<&str>,
    tag: Tag<'_>,
    value: &str,
    style: ScalarStyle,
) -> Result<(), std::fmt::Error> {
    writer.write_str(SCALAR)?;
    write_anchor_and_tag(writer, anchor, tag, style)?;
    writer.write_str(style.marker())?;
    write_escaped(value, writer)
}

/// Write the trace line for `event`, without a line terminator.
///
/// Returns `false` if the event has no line in the trace (comments), in which
/// case nothing was written.
pub fn encode_event(writer: &mut impl Write, event: Event<'_>) -> Result<bool, std::fmt::Error> {
    match event {
        Event::StreamStart(_) => writer.write_str(STREAM_START)?,
        Event::StreamEnd(_) => writer.write_str(STREAM_END)?,
        Event::DocumentStart { implicit, .. } => {
            writer.write_str(DOCUMENT_START)?;
            if !implicit {
                writer.write_str(EXPLICIT_DOCUMENT_START)?;
            }
        }
        Event::DocumentEnd { implicit, .. } => {
            writer.write_str(DOCUMENT_END)?;
            if !implicit {
                writer.write_str(EXPLICIT_DOCUMENT_END)?;
            }
        }
        Event::MappingStart { anchor, tag, .. } => {
            writer.write_str(MAPPING_START)?;
            write_anchor_and_tag(writer, anchor, tag, ScalarStyle::Any)?;
        }
        Event::MappingEnd(_) => writer.write_str(MAPPING_END)?,
        Event::SequenceStart { anchor, tag, .. } => {
            writer.write_str(SEQUENCE_START)?;
            write_anchor_and_tag(writer, anchor, tag, ScalarStyle::Any)?;
        }
        Event::SequenceEnd(_) => writer.write_str(SEQUENCE_END)?,
        Event::Scalar {
            anchor,
            tag,
            value,
            style,
            ..
        } => write_scalar(writer, anchor, tag, value, style)?,
        Event::Alias { anchor, .. } => {
            writer.write_str(ALIAS)?;
            writer.write_str(anchor)?;
        }
        Event::Comment { .. } => return Ok(false),
    }
    Ok(true)
}

/// The trace line of a single event, or `None` for comments.
pub fn to_trace_line(event: Event<'_>) -> Option<String> {
    let mut line = String::new();
    match encode_event(&mut line, event) {
        Ok(true) => Some(line),
        _ => None,
    }
}

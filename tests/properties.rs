//! Property tests for the trace encoder.
//!
//! 1. Escaping is reversible: undoing the five escape pairs restores the
//!    scalar text.
//! 2. A scalar line is a single line ending with its style marker and the
//!    escaped value.
//! 3. Pulling events through `EventStream` and pushing them into
//!    `TraceWriter` produce the same bytes for any balanced event sequence.

use proptest::prelude::*;
use yaml_trace::*;

fn unescape(escaped: &str) -> String {
    let mut out = String::with_capacity(escaped.len());
    let mut chars = escaped.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('b') => out.push('\x08'),
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('\\') => out.push('\\'),
            other => panic!("dangling escape before {other:?} in {escaped:?}"),
        }
    }
    out
}

/// Scalar text biased towards the characters that need escaping.
fn scalar_text() -> impl Strategy<Value = String> {
    prop_oneof![
        r"[a-z\\\t\n\r\x08 'é🦀]{0,16}",
        any::<String>(),
    ]
}

fn anchor() -> impl Strategy<Value = Option<String>> {
    prop::option::of("[a-z][a-z0-9]{0,5}")
}

fn tag() -> impl Strategy<Value = OwnedTag> {
    prop_oneof![
        Just(OwnedTag::Empty),
        Just(OwnedTag::NonSpecific(NonSpecificTag::Exclamation)),
        Just(OwnedTag::NonSpecific(NonSpecificTag::Question)),
        "![a-z]{1,6}".prop_map(OwnedTag::Specific),
        Just(OwnedTag::Specific("tag:yaml.org,2002:str".into())),
    ]
}

fn scalar_style() -> impl Strategy<Value = ScalarStyle> {
    prop_oneof![
        Just(ScalarStyle::Any),
        Just(ScalarStyle::Plain),
        Just(ScalarStyle::SingleQuoted),
        Just(ScalarStyle::DoubleQuoted),
        Just(ScalarStyle::Literal),
        Just(ScalarStyle::Folded),
    ]
}

#[derive(Debug, Clone)]
enum Node {
    Scalar {
        anchor: Option<String>,
        tag: OwnedTag,
        value: String,
        style: ScalarStyle,
    },
    Alias(String),
    Comment(String),
    Sequence {
        anchor: Option<String>,
        tag: OwnedTag,
        items: Vec<Node>,
    },
    Mapping {
        anchor: Option<String>,
        tag: OwnedTag,
        entries: Vec<(Node, Node)>,
    },
}

fn node() -> impl Strategy<Value = Node> {
    let leaf = prop_oneof![
        4 => (anchor(), tag(), scalar_text(), scalar_style()).prop_map(
            |(anchor, tag, value, style)| Node::Scalar {
                anchor,
                tag,
                value,
                style,
            }
        ),
        1 => "[a-z]{1,4}".prop_map(Node::Alias),
        1 => "[ -~]{0,10}".prop_map(Node::Comment),
    ];
    leaf.prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            (anchor(), tag(), prop::collection::vec(inner.clone(), 0..4))
                .prop_map(|(anchor, tag, items)| Node::Sequence { anchor, tag, items }),
            (
                anchor(),
                tag(),
                prop::collection::vec((inner.clone(), inner), 0..3)
            )
                .prop_map(|(anchor, tag, entries)| Node::Mapping {
                    anchor,
                    tag,
                    entries
                }),
        ]
    })
}

fn flatten(node: Node, events: &mut Vec<OwnedEvent>) {
    let span = Span::default();
    match node {
        Node::Scalar {
            anchor,
            tag,
            value,
            style,
        } => events.push(OwnedEvent::Scalar {
            span,
            anchor,
            tag,
            value,
            style,
        }),
        Node::Alias(anchor) => events.push(OwnedEvent::Alias { span, anchor }),
        Node::Comment(value) => events.push(OwnedEvent::Comment {
            span,
            value,
            inline: false,
        }),
        Node::Sequence { anchor, tag, items } => {
            events.push(OwnedEvent::SequenceStart {
                span,
                anchor,
                tag,
                style: SequenceStyle::Block,
            });
            for item in items {
                flatten(item, events);
            }
            events.push(OwnedEvent::SequenceEnd(span));
        }
        Node::Mapping {
            anchor,
            tag,
            entries,
        } => {
            events.push(OwnedEvent::MappingStart {
                span,
                anchor,
                tag,
                style: MappingStyle::Flow,
            });
            for (key, value) in entries {
                flatten(key, events);
                flatten(value, events);
            }
            events.push(OwnedEvent::MappingEnd(span));
        }
    }
}

fn stream() -> impl Strategy<Value = Vec<OwnedEvent>> {
    prop::collection::vec((node(), any::<bool>(), any::<bool>()), 0..3).prop_map(|documents| {
        let span = Span::default();
        let mut events = vec![OwnedEvent::StreamStart(span)];
        for (root, start_implicit, end_implicit) in documents {
            events.push(OwnedEvent::DocumentStart {
                span,
                version: None,
                tags: Vec::new(),
                implicit: start_implicit,
            });
            flatten(root, &mut events);
            events.push(OwnedEvent::DocumentEnd {
                span,
                implicit: end_implicit,
            });
        }
        events.push(OwnedEvent::StreamEnd(span));
        events
    })
}

proptest! {
    #[test]
    fn escaping_round_trips(value in scalar_text()) {
        let escaped = escape(&value);
        prop_assert!(!escaped.contains(['\t', '\n', '\r', '\x08']));
        prop_assert_eq!(unescape(&escaped), value);
    }

    #[test]
    fn scalar_line_ends_with_escaped_value(
        anchor in anchor(),
        tag in tag(),
        value in scalar_text(),
        style in scalar_style(),
    ) {
        let event = Event::scalar(anchor.as_deref(), tag.borrow(), &value, style);
        let line = to_trace_line(event).unwrap();
        let expected_suffix = format!("{}{}", style.marker(), escape(&value));
        prop_assert!(line.starts_with("=VAL"));
        prop_assert!(line.ends_with(&expected_suffix));
        prop_assert!(!line.contains('\n'));
        match &anchor {
            Some(anchor) => {
                let expected = format!(" &{anchor}");
                prop_assert!(line.contains(&expected));
            }
            None => prop_assert!(!line[..line.len() - expected_suffix.len()].contains('&')),
        }
    }

    #[test]
    fn pull_and_push_agree(events in stream()) {
        let pulled = EventStream::new(SliceCursor::new(&events)).to_trace_string().unwrap();

        let mut writer = TraceWriter::new(String::new());
        replay(SliceCursor::new(&events), &mut writer).unwrap();
        let pushed = writer.into_inner();

        prop_assert_eq!(&pulled, &pushed);

        let rendered = events
            .iter()
            .filter(|event| !matches!(event, OwnedEvent::Comment { .. }))
            .count();
        prop_assert_eq!(pulled.lines().count(), rendered);
    }
}

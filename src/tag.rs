/// The two markers YAML uses for a node whose tag is left to the
/// application to resolve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NonSpecificTag {
    /// `!`, attached explicitly to a node in the source.
    Exclamation,
    /// `?`, the implicit marker of untagged plain scalars.
    Question,
}

impl NonSpecificTag {
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            NonSpecificTag::Exclamation => "!",
            NonSpecificTag::Question => "?",
        }
    }
}

/// The tag property of a node.
///
/// `Empty` and `NonSpecific` both leave the node's type unresolved, and are
/// therefore both "non-specific". Only `Empty` means that no tag property was
/// present at all.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tag<'r> {
    #[default]
    Empty,
    NonSpecific(NonSpecificTag),
    Specific(&'r str),
}

impl<'r> Tag<'r> {
    /// Interpret a tag as reported by a libyaml-style parser, where `None`
    /// means no tag and `!` is the non-specific tag.
    pub fn from_raw(tag: Option<&'r str>) -> Self {
        match tag {
            None | Some("") => Tag::Empty,
            Some("!") => Tag::NonSpecific(NonSpecificTag::Exclamation),
            Some("?") => Tag::NonSpecific(NonSpecificTag::Question),
            Some(tag) => Tag::Specific(tag),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Tag::Empty)
    }

    #[inline]
    pub fn is_non_specific(&self) -> bool {
        !matches!(self, Tag::Specific(_))
    }

    /// The literal text of the tag, if there is one.
    #[inline]
    pub fn as_str(&self) -> Option<&'r str> {
        match *self {
            Tag::Empty => None,
            Tag::NonSpecific(marker) => Some(marker.as_str()),
            Tag::Specific(tag) => Some(tag),
        }
    }

    #[inline]
    pub fn to_owned(self) -> OwnedTag {
        match self {
            Tag::Empty => OwnedTag::Empty,
            Tag::NonSpecific(marker) => OwnedTag::NonSpecific(marker),
            Tag::Specific(tag) => OwnedTag::Specific(tag.to_owned()),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum OwnedTag {
    #[default]
    Empty,
    NonSpecific(NonSpecificTag),
    Specific(String),
}

impl OwnedTag {
    pub fn from_raw(tag: Option<String>) -> Self {
        let Some(tag) = tag else {
            return OwnedTag::Empty;
        };
        match Tag::from_raw(Some(&tag)) {
            Tag::Specific(_) => {}
            other => return other.to_owned(),
        }
        OwnedTag::Specific(tag)
    }

    #[inline]
    pub fn borrow(&self) -> Tag<'_> {
        match self {
            OwnedTag::Empty => Tag::Empty,
            OwnedTag::NonSpecific(marker) => Tag::NonSpecific(*marker),
            OwnedTag::Specific(tag) => Tag::Specific(tag),
        }
    }
}

impl<'r> From<&'r OwnedTag> for Tag<'r> {
    #[inline]
    fn from(tag: &'r OwnedTag) -> Self {
        tag.borrow()
    }
}

use crate::{Event, OwnedEvent};

/// A source of events that is advanced one event at a time.
pub trait EventCursor {
    type Error;

    /// Advance to the next event. Returns `false` once the source is
    /// exhausted.
    fn move_next(&mut self) -> Result<bool, Self::Error>;

    /// The event reached by the last successful [`move_next`].
    ///
    /// [`move_next`]: EventCursor::move_next
    fn current(&self) -> Option<Event<'_>>;
}

impl<C: EventCursor + ?Sized> EventCursor for &mut C {
    type Error = C::Error;

    #[inline]
    fn move_next(&mut self) -> Result<bool, Self::Error> {
        (**self).move_next()
    }

    #[inline]
    fn current(&self) -> Option<Event<'_>> {
        (**self).current()
    }
}

/// Cursor over events that have already been collected.
#[derive(Clone, Debug)]
pub struct SliceCursor<'a> {
    remaining: &'a [OwnedEvent],
    current: Option<&'a OwnedEvent>,
}

impl<'a> SliceCursor<'a> {
    pub fn new(events: &'a [OwnedEvent]) -> Self {
        Self {
            remaining: events,
            current: None,
        }
    }
}

impl<'a> EventCursor for SliceCursor<'a> {
    type Error = std::convert::Infallible;

    fn move_next(&mut self) -> Result<bool, Self::Error> {
        match self.remaining.split_first() {
            Some((first, rest)) => {
                self.current = Some(first);
                self.remaining = rest;
                Ok(true)
            }
            None => {
                self.current = None;
                Ok(false)
            }
        }
    }

    #[inline]
    fn current(&self) -> Option<Event<'_>> {
        self.current.map(OwnedEvent::borrow)
    }
}

/// Cursor over any iterator of owned events.
pub struct IterCursor<I> {
    events: I,
    current: Option<OwnedEvent>,
}

impl<I: Iterator<Item = OwnedEvent>> IterCursor<I> {
    pub fn new(events: impl IntoIterator<IntoIter = I>) -> Self {
        Self {
            events: events.into_iter(),
            current: None,
        }
    }
}

impl<I: Iterator<Item = OwnedEvent>> EventCursor for IterCursor<I> {
    type Error = std::convert::Infallible;

    fn move_next(&mut self) -> Result<bool, Self::Error> {
        self.current = self.events.next();
        Ok(self.current.is_some())
    }

    #[inline]
    fn current(&self) -> Option<Event<'_>> {
        self.current.as_ref().map(OwnedEvent::borrow)
    }
}

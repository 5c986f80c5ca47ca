//! Canonical text traces of YAML parser events.
//!
//! Renders a stream of parser events in the line-oriented format used by
//! libyaml's test tools and the YAML test suite (`+STR`, `+DOC ---`,
//! `=VAL :foo`, ...). Events can be pulled from an [`EventCursor`] with
//! [`EventStream`], or pushed into a [`TraceWriter`] through the
//! [`EventHandler`] callbacks. Both produce identical output.

mod char;
mod cursor;
mod encode;
mod error;
mod event;
mod handler;
#[cfg(feature = "libyaml")]
mod libyaml;
mod location;
mod scalar;
mod sink;
mod stream;
mod tag;

pub use char::*;
pub use cursor::*;
pub use encode::*;
pub use error::*;
pub use event::*;
pub use handler::*;
#[cfg(feature = "libyaml")]
pub use libyaml::*;
pub use location::*;
pub use scalar::*;
pub use sink::{FmtSink, IoSink};
pub use stream::*;
pub use tag::*;

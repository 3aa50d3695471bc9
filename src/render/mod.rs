//! Typed tag builders and escaping for rendered markup.

mod escape;
mod tags;

pub use escape::escape_html;
pub use tags::{AnchorTag, OptionTag, SpanTag};

//! Tag builders. Field values are interpolated verbatim, without escaping.

use crate::markup::Markup;

/// An inline `<span>` wrapping already-rendered content.
#[derive(Debug, Clone, Copy)]
pub struct SpanTag<'a> {
    pub class: &'a str,
    pub content: &'a str,
}

impl SpanTag<'_> {
    pub fn render(&self) -> String {
        format!("<span class=\"{}\">{}</span>", self.class, self.content)
    }
}

/// A single `<option>` of a select list.
#[derive(Debug, Clone, Copy)]
pub struct OptionTag<'a> {
    pub value: &'a str,
    pub class: &'a str,
    pub selected: bool,
    pub label: &'a str,
}

impl OptionTag<'_> {
    /// The attribute slot always keeps its leading space, so an unselected
    /// option renders as `class="..." >`.
    pub fn render(&self) -> Markup {
        let selected = if self.selected { "selected" } else { "" };
        Markup::new(format!(
            "<option value=\"{}\" class=\"{}\" {}>{}</option>",
            self.value, self.class, selected, self.label
        ))
    }
}

/// An `<a>` link.
#[derive(Debug, Clone, Copy)]
pub struct AnchorTag<'a> {
    pub href: &'a str,
    pub class: &'a str,
    pub label: &'a str,
}

impl AnchorTag<'_> {
    pub fn render(&self) -> Markup {
        Markup::new(format!(
            "<a href=\"{}\" class=\"{}\">{}</a>",
            self.href, self.class, self.label
        ))
    }
}

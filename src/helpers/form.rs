//! Form and navigation helpers.

use crate::localization::Culture;
use crate::markup::Markup;
use crate::render::{AnchorTag, OptionTag};

/// Link target that steps one entry back in browser history.
pub const HISTORY_BACK_HREF: &str = "javascript:history.go(-1);";

/// Renders one `<option>`, marking it `selected` when `currently_selected`
/// is not blank and equals `value` ignoring case.
///
/// Values are interpolated verbatim and must already be attribute-safe.
pub fn drop_down_option(
    value: &str,
    label: &str,
    currently_selected: &str,
    css_class: &str,
    culture: &dyn Culture,
) -> Markup {
    let selected = !currently_selected.trim().is_empty()
        && culture.lowercase(value) == culture.lowercase(currently_selected);

    OptionTag {
        value,
        class: css_class,
        selected,
        label,
    }
    .render()
}

/// Renders a back link driven by browser history.
pub fn js_history_back_button(label: &str, css_class: &str) -> Markup {
    AnchorTag {
        href: HISTORY_BACK_HREF,
        class: css_class,
        label,
    }
    .render()
}

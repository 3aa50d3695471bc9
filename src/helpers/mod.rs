//! View helpers for rendering HTML fragments.

mod date;
mod date_pattern;
mod form;
mod text;

use crate::markup::Markup;
use crate::HelperOptions;
use chrono::NaiveDateTime;

pub use self::date::{parse_date_value, short_date, short_date_highlight_new, NEW_DATE_CLASS};
pub use self::date_pattern::format_date;
pub use self::form::{drop_down_option, js_history_back_button, HISTORY_BACK_HREF};
pub use self::text::{highlight_word, title_case};

pub const DEFAULT_HIGHLIGHT_CLASS: &str = "highlight";
pub const DEFAULT_DATE_FORMAT: &str = "MM/d/yy";
pub const DEFAULT_NEW_THRESHOLD_DAYS: i64 = 7;
pub const DEFAULT_BACK_LABEL: &str = "Cancel";
pub const DEFAULT_BACK_CLASS: &str = "btn";

/// Search term to highlight within a block of text.
#[derive(Debug, Clone, Copy)]
pub struct HighlightRequest<'a> {
    pub needle: Option<&'a str>,
    pub haystack: Option<&'a str>,
    pub css_class: &'a str,
}

impl Default for HighlightRequest<'_> {
    fn default() -> Self {
        Self {
            needle: None,
            haystack: None,
            css_class: DEFAULT_HIGHLIGHT_CLASS,
        }
    }
}

/// An optional date and the pattern to show it with.
#[derive(Debug, Clone, Copy)]
pub struct DateDisplay<'a> {
    pub value: Option<NaiveDateTime>,
    pub format: &'a str,
}

impl Default for DateDisplay<'_> {
    fn default() -> Self {
        Self {
            value: None,
            format: DEFAULT_DATE_FORMAT,
        }
    }
}

/// A date display that also marks values past a day threshold.
#[derive(Debug, Clone, Copy)]
pub struct RecencyHighlight<'a> {
    pub value: Option<NaiveDateTime>,
    pub threshold_days: i64,
    pub format: &'a str,
}

impl Default for RecencyHighlight<'_> {
    fn default() -> Self {
        Self {
            value: None,
            threshold_days: DEFAULT_NEW_THRESHOLD_DAYS,
            format: DEFAULT_DATE_FORMAT,
        }
    }
}

/// One option of a select list.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptionRequest<'a> {
    pub value: &'a str,
    pub label: &'a str,
    pub currently_selected: &'a str,
    pub css_class: &'a str,
}

/// A history-driven back link.
#[derive(Debug, Clone, Copy)]
pub struct BackLink<'a> {
    pub label: &'a str,
    pub css_class: &'a str,
}

impl Default for BackLink<'_> {
    fn default() -> Self {
        Self {
            label: DEFAULT_BACK_LABEL,
            css_class: DEFAULT_BACK_CLASS,
        }
    }
}

/// Helper set bound to a culture and a clock.
#[derive(Debug, Clone, Default)]
pub struct ViewHelpers {
    options: HelperOptions,
}

impl ViewHelpers {
    /// Creates helpers with the given options.
    pub fn new(options: HelperOptions) -> Self {
        Self { options }
    }

    /// Creates helpers for en-US and the system clock.
    pub fn with_defaults() -> Self {
        Self::new(HelperOptions::default())
    }

    pub fn options(&self) -> &HelperOptions {
        &self.options
    }

    pub fn title_case(&self, input: Option<&str>) -> String {
        title_case(input, self.options.culture.as_ref())
    }

    pub fn highlight_word(&self, request: HighlightRequest<'_>) -> Markup {
        highlight_word(request.needle, request.haystack, request.css_class)
    }

    pub fn short_date(&self, request: DateDisplay<'_>) -> Markup {
        short_date(request.value, request.format, self.options.culture.as_ref())
    }

    /// Reads the current time from the configured clock.
    pub fn short_date_highlight_new(&self, request: RecencyHighlight<'_>) -> Markup {
        short_date_highlight_new(
            request.value,
            request.threshold_days,
            request.format,
            self.options.culture.as_ref(),
            self.options.clock.as_ref(),
        )
    }

    pub fn drop_down_option(&self, request: OptionRequest<'_>) -> Markup {
        drop_down_option(
            request.value,
            request.label,
            request.currently_selected,
            request.css_class,
            self.options.culture.as_ref(),
        )
    }

    pub fn js_history_back_button(&self, request: BackLink<'_>) -> Markup {
        js_history_back_button(request.label, request.css_class)
    }
}

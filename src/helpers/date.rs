//! Date display helpers.

use super::date_pattern::format_date;
use crate::clock::Clock;
use crate::error::{Error, Result};
use crate::localization::Culture;
use crate::markup::Markup;
use crate::render::SpanTag;
use chrono::{NaiveDate, NaiveDateTime};

/// Class applied to dates that pass the recency check.
pub const NEW_DATE_CLASS: &str = "new";

/// Formats an optional date. An absent value renders as empty markup.
pub fn short_date(value: Option<NaiveDateTime>, format: &str, culture: &dyn Culture) -> Markup {
    match value {
        Some(value) => Markup::new(format_date(&value, format, culture)),
        None => Markup::empty(),
    }
}

/// Formats an optional date, wrapping it in `<span class="new">` when
/// `value - now` spans at least `threshold_days` whole days.
///
/// The difference is taken as value minus now, so only dates that far in
/// the future are marked.
pub fn short_date_highlight_new(
    value: Option<NaiveDateTime>,
    threshold_days: i64,
    format: &str,
    culture: &dyn Culture,
    clock: &dyn Clock,
) -> Markup {
    let Some(value) = value else {
        return Markup::empty();
    };

    let formatted = format_date(&value, format, culture);
    let days_ahead = value.signed_duration_since(clock.now()).num_days();
    if days_ahead >= threshold_days {
        Markup::new(
            SpanTag {
                class: NEW_DATE_CLASS,
                content: &formatted,
            }
            .render(),
        )
    } else {
        Markup::new(formatted)
    }
}

/// Parses `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM:SS[.fff]` or the same with a space
/// instead of `T`.
pub fn parse_date_value(input: &str) -> Result<NaiveDateTime> {
    let trimmed = input.trim();
    let normalized = trimmed.replacen(' ', "T", 1);
    if let Ok(value) = normalized.parse::<NaiveDateTime>() {
        return Ok(value);
    }
    trimmed
        .parse::<NaiveDate>()
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| Error::InvalidDate(input.to_string()))
}

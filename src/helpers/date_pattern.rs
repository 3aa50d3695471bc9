//! Date/time pattern formatter using .NET-style format strings.
//!
//! A one-character format is a standard format (`d`, `D`, `t`, `T`, `f`,
//! `F`, `g`, `G`, `M`, `Y`, `s`, `u`, `o`, `r`) expanded through the
//! culture. Anything else is a custom pattern such as `MM/d/yy` or
//! `dddd, MMMM d 'at' h:mm tt`. Formatting never fails: unknown characters
//! are copied literally.

use crate::localization::{Culture, DateFormatInfo, InvariantCulture};
use chrono::{Datelike, NaiveDateTime, Timelike};

const SORTABLE_PATTERN: &str = "yyyy'-'MM'-'dd'T'HH':'mm':'ss";
const UNIVERSAL_SORTABLE_PATTERN: &str = "yyyy'-'MM'-'dd HH':'mm':'ss'Z'";
const ROUND_TRIP_PATTERN: &str = "yyyy'-'MM'-'dd'T'HH':'mm':'ss'.'fffffff";
const RFC1123_PATTERN: &str = "ddd, dd MMM yyyy HH':'mm':'ss 'GMT'";

/// Fraction digits carried by a value (100ns ticks).
const MAX_FRACTION_DIGITS: usize = 7;

/// Formats `value` with a standard or custom pattern under `culture`.
pub fn format_date(value: &NaiveDateTime, format: &str, culture: &dyn Culture) -> String {
    let mut out = String::new();
    match expand_standard_format(format, culture.format_info()) {
        Some(StandardFormat::Culture(pattern)) => {
            format_custom(value, &pattern, culture.format_info(), &mut out)
        }
        Some(StandardFormat::Invariant(pattern)) => {
            format_custom(value, pattern, InvariantCulture.format_info(), &mut out)
        }
        None => format_custom(value, format, culture.format_info(), &mut out),
    }
    out
}

enum StandardFormat {
    /// Pattern taken from the active culture.
    Culture(String),
    /// Fixed pattern rendered with invariant names and separators.
    Invariant(&'static str),
}

fn expand_standard_format(format: &str, info: &DateFormatInfo) -> Option<StandardFormat> {
    let mut chars = format.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        // An empty format means the general long-time form.
        return format.is_empty().then(|| {
            StandardFormat::Culture(format!(
                "{} {}",
                info.short_date_pattern, info.long_time_pattern
            ))
        });
    };

    let pattern = match c {
        'd' => info.short_date_pattern.to_string(),
        'D' => info.long_date_pattern.to_string(),
        't' => info.short_time_pattern.to_string(),
        'T' => info.long_time_pattern.to_string(),
        'f' => format!("{} {}", info.long_date_pattern, info.short_time_pattern),
        'F' => format!("{} {}", info.long_date_pattern, info.long_time_pattern),
        'g' => format!("{} {}", info.short_date_pattern, info.short_time_pattern),
        'G' => format!("{} {}", info.short_date_pattern, info.long_time_pattern),
        'M' | 'm' => info.month_day_pattern.to_string(),
        'Y' | 'y' => info.year_month_pattern.to_string(),
        's' => return Some(StandardFormat::Invariant(SORTABLE_PATTERN)),
        'u' => return Some(StandardFormat::Invariant(UNIVERSAL_SORTABLE_PATTERN)),
        'O' | 'o' => return Some(StandardFormat::Invariant(ROUND_TRIP_PATTERN)),
        'R' | 'r' => return Some(StandardFormat::Invariant(RFC1123_PATTERN)),
        _ => return None,
    };
    Some(StandardFormat::Culture(pattern))
}

fn format_custom(value: &NaiveDateTime, pattern: &str, info: &DateFormatInfo, out: &mut String) {
    let chars: Vec<char> = pattern.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match c {
            '\'' | '"' => {
                i += 1;
                while i < chars.len() && chars[i] != c {
                    if chars[i] == '\\' && i + 1 < chars.len() {
                        i += 1;
                    }
                    out.push(chars[i]);
                    i += 1;
                }
                // Skip the closing quote; an unterminated quote runs to the end.
                i += 1;
            }
            '\\' => {
                if let Some(&next) = chars.get(i + 1) {
                    out.push(next);
                }
                i += 2;
            }
            '%' => {
                if let Some(&next) = chars.get(i + 1).filter(|&&next| next != '%') {
                    push_specifier(value, next, 1, info, out);
                }
                i += 2;
            }
            _ => {
                let run = chars[i..].iter().take_while(|&&ch| ch == c).count();
                push_specifier(value, c, run, info, out);
                i += run;
            }
        }
    }
}

fn push_specifier(
    value: &NaiveDateTime,
    c: char,
    run: usize,
    info: &DateFormatInfo,
    out: &mut String,
) {
    match c {
        'd' => match run {
            1 => push_number(out, value.day(), 1),
            2 => push_number(out, value.day(), 2),
            3 => out.push_str(info.abbreviated_day_names[weekday_index(value)]),
            _ => out.push_str(info.day_names[weekday_index(value)]),
        },
        'M' => match run {
            1 => push_number(out, value.month(), 1),
            2 => push_number(out, value.month(), 2),
            3 => out.push_str(info.abbreviated_month_names[value.month0() as usize]),
            _ => out.push_str(info.month_names[value.month0() as usize]),
        },
        'y' => {
            let year = value.year();
            if run <= 2 {
                push_number(out, year.rem_euclid(100) as u32, run);
            } else {
                out.push_str(&format!("{:0width$}", year, width = run));
            }
        }
        'h' => push_number(out, value.hour12().1, run.min(2)),
        'H' => push_number(out, value.hour(), run.min(2)),
        'm' => push_number(out, value.minute(), run.min(2)),
        's' => push_number(out, value.second(), run.min(2)),
        'f' | 'F' => push_fraction(value, c == 'F', run.min(MAX_FRACTION_DIGITS), out),
        't' => {
            let designator = if value.hour() < 12 {
                info.am_designator
            } else {
                info.pm_designator
            };
            if run == 1 {
                out.extend(designator.chars().next());
            } else {
                out.push_str(designator);
            }
        }
        'g' => out.push_str("A.D."),
        // Values carry no zone; offsets render as UTC.
        'z' => out.push_str(match run {
            1 => "+0",
            2 => "+00",
            _ => "+00:00",
        }),
        'K' => {}
        ':' => push_repeated(out, info.time_separator, run),
        '/' => push_repeated(out, info.date_separator, run),
        _ => out.extend(std::iter::repeat(c).take(run)),
    }
}

fn push_number(out: &mut String, n: u32, width: usize) {
    out.push_str(&format!("{:0width$}", n, width = width));
}

fn push_repeated(out: &mut String, s: &str, times: usize) {
    for _ in 0..times {
        out.push_str(s);
    }
}

fn push_fraction(value: &NaiveDateTime, trim_zeros: bool, digits: usize, out: &mut String) {
    // Leap seconds report nanoseconds past 1_000_000_000.
    let ticks = (value.nanosecond() % 1_000_000_000) / 100;
    let all = format!("{:07}", ticks);
    let mut fraction = &all[..digits];
    if trim_zeros {
        fraction = fraction.trim_end_matches('0');
        if fraction.is_empty() {
            if out.ends_with('.') {
                out.pop();
            }
            return;
        }
    }
    out.push_str(fraction);
}

fn weekday_index(value: &NaiveDateTime) -> usize {
    value.weekday().num_days_from_sunday() as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::localization::{EnUsCulture, TurkishCulture};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn sample() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_milli_opt(14, 7, 9, 120)
            .unwrap()
    }

    #[test]
    fn test_default_short_pattern() {
        assert_eq!(format_date(&sample(), "MM/d/yy", &EnUsCulture), "03/5/24");
    }

    #[test]
    fn test_names_and_clock() {
        assert_eq!(
            format_date(&sample(), "dddd, MMMM dd yyyy h:mm tt", &EnUsCulture),
            "Tuesday, March 05 2024 2:07 PM"
        );
        assert_eq!(
            format_date(&sample(), "ddd MMM HH:mm:ss t", &EnUsCulture),
            "Tue Mar 14:07:09 P"
        );
    }

    #[test]
    fn test_quoted_and_escaped_literals() {
        assert_eq!(
            format_date(&sample(), "'Day' d \"of\" M \\y yyyy", &EnUsCulture),
            "Day 5 of 3 y 2024"
        );
        assert_eq!(format_date(&sample(), "%d", &EnUsCulture), "5");
    }

    #[test]
    fn test_fractions() {
        assert_eq!(format_date(&sample(), "ss.fff", &EnUsCulture), "09.120");
        assert_eq!(format_date(&sample(), "ss.FFF", &EnUsCulture), "09.12");
        let whole = NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(1, 2, 3)
            .unwrap();
        assert_eq!(format_date(&whole, "ss.FFF", &EnUsCulture), "03");
    }

    #[test]
    fn test_separators_follow_culture() {
        assert_eq!(format_date(&sample(), "d/M/yyyy", &TurkishCulture), "5.3.2024");
        assert_eq!(format_date(&sample(), "d", &TurkishCulture), "5.03.2024");
        assert_eq!(
            format_date(&sample(), "D", &TurkishCulture),
            "5 Mart 2024 Salı"
        );
    }

    #[test]
    fn test_standard_formats() {
        assert_eq!(format_date(&sample(), "d", &EnUsCulture), "3/5/2024");
        assert_eq!(format_date(&sample(), "g", &EnUsCulture), "3/5/2024 2:07 PM");
        assert_eq!(format_date(&sample(), "", &EnUsCulture), "3/5/2024 2:07:09 PM");
        assert_eq!(format_date(&sample(), "s", &TurkishCulture), "2024-03-05T14:07:09");
        assert_eq!(
            format_date(&sample(), "o", &EnUsCulture),
            "2024-03-05T14:07:09.1200000"
        );
        assert_eq!(
            format_date(&sample(), "r", &TurkishCulture),
            "Tue, 05 Mar 2024 14:07:09 GMT"
        );
    }

    #[test]
    fn test_year_widths() {
        let early = NaiveDate::from_ymd_opt(7, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(format_date(&early, "y|yy|yyy|yyyy", &EnUsCulture), "7|07|007|0007");
    }
}

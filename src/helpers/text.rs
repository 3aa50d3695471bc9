//! Text helpers: title casing and search-term highlighting.

use crate::localization::Culture;
use crate::markup::Markup;
use crate::render::SpanTag;
use regex::{Captures, RegexBuilder};

/// Converts text to title case under the given culture.
///
/// Words made only of uppercase letters are treated as acronyms and kept.
/// `None` yields an empty string. Nothing is escaped.
pub fn title_case(input: Option<&str>, culture: &dyn Culture) -> String {
    let Some(input) = input else {
        return String::new();
    };

    let mut out = String::with_capacity(input.len());
    let mut word = String::new();
    for c in input.chars() {
        if is_word_char(c) {
            word.push(c);
        } else {
            push_title_word(&mut out, &word, culture);
            word.clear();
            out.push(c);
        }
    }
    push_title_word(&mut out, &word, culture);
    out
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '\'' || c == '\u{2019}'
}

fn push_title_word(out: &mut String, word: &str, culture: &dyn Culture) {
    let has_upper = word.chars().any(char::is_uppercase);
    let has_lower = word.chars().any(char::is_lowercase);
    if has_upper && !has_lower {
        out.push_str(word);
        return;
    }

    let mut at_start = true;
    for c in word.chars() {
        if !c.is_alphabetic() {
            out.push(c);
        } else if at_start {
            out.push_str(&culture.to_upper(c));
            at_start = false;
        } else {
            out.push_str(&culture.to_lower(c));
        }
    }
}

/// Wraps every case-insensitive occurrence of `needle` in `haystack` with a
/// `<span class="{css_class}">`, keeping the matched text as written.
///
/// The needle is matched literally. The haystack is assumed to be
/// sanitized already and is not escaped.
pub fn highlight_word(needle: Option<&str>, haystack: Option<&str>, css_class: &str) -> Markup {
    let Some(haystack) = haystack else {
        return Markup::empty();
    };
    let needle = match needle {
        Some(needle) if !needle.trim().is_empty() => needle,
        _ => return Markup::new(haystack),
    };

    let pattern = match RegexBuilder::new(&regex::escape(needle))
        .case_insensitive(true)
        .build()
    {
        Ok(pattern) => pattern,
        Err(err) => {
            tracing::warn!(%err, "search term rejected, leaving text unmarked");
            return Markup::new(haystack);
        }
    };

    let mut matches = 0usize;
    let highlighted = pattern.replace_all(haystack, |caps: &Captures<'_>| {
        matches += 1;
        SpanTag {
            class: css_class,
            content: &caps[0],
        }
        .render()
    });
    tracing::debug!(matches, "highlighted search term");

    Markup::new(highlighted.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::localization::{EnUsCulture, TurkishCulture};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_title_case_absent_is_empty() {
        assert_eq!(title_case(None, &EnUsCulture), "");
    }

    #[test]
    fn test_title_case_words() {
        assert_eq!(
            title_case(Some("the quick bROWN fox"), &EnUsCulture),
            "The Quick Brown Fox"
        );
        assert_eq!(
            title_case(Some("o'neil-smith, esq."), &EnUsCulture),
            "O'neil-Smith, Esq."
        );
    }

    #[test]
    fn test_title_case_keeps_acronyms() {
        assert_eq!(
            title_case(Some("report from NASA today"), &EnUsCulture),
            "Report From NASA Today"
        );
    }

    #[test]
    fn test_title_case_follows_culture() {
        assert_eq!(title_case(Some("istanbul"), &EnUsCulture), "Istanbul");
        assert_eq!(title_case(Some("istanbul"), &TurkishCulture), "İstanbul");
        assert_eq!(title_case(Some("dİyarbakIr"), &TurkishCulture), "Diyarbakır");
    }

    #[test]
    fn test_highlight_absent_haystack() {
        assert_eq!(highlight_word(Some("x"), None, "hl"), "");
    }

    #[test]
    fn test_highlight_blank_needle_returns_haystack() {
        let haystack = "a <b>bold</b> & plain text";
        assert_eq!(highlight_word(None, Some(haystack), "hl"), haystack);
        assert_eq!(highlight_word(Some("   "), Some(haystack), "hl"), haystack);
        assert_eq!(highlight_word(Some(""), Some(haystack), "hl"), haystack);
    }

    #[test]
    fn test_highlight_preserves_original_case() {
        assert_eq!(
            highlight_word(Some("rust"), Some("Rust and RUST and rust"), "highlight"),
            "<span class=\"highlight\">Rust</span> and <span class=\"highlight\">RUST</span> \
             and <span class=\"highlight\">rust</span>"
        );
    }

    #[test]
    fn test_highlight_needle_is_literal() {
        assert_eq!(highlight_word(Some("a.b"), Some("axbz"), "hl"), "axbz");
        assert_eq!(
            highlight_word(Some("a.b"), Some("xa.bz"), "hl"),
            "x<span class=\"hl\">a.b</span>z"
        );
        assert_eq!(
            highlight_word(Some("(1+1)*"), Some("is (1+1)* = 2?"), "hl"),
            "is <span class=\"hl\">(1+1)*</span> = 2?"
        );
    }

    #[test]
    fn test_highlight_class_dollar_is_verbatim() {
        assert_eq!(
            highlight_word(Some("x"), Some("x"), "$0"),
            "<span class=\"$0\">x</span>"
        );
    }

    #[test]
    fn test_highlight_does_not_overlap() {
        assert_eq!(
            highlight_word(Some("aa"), Some("aaa"), "hl"),
            "<span class=\"hl\">aa</span>a"
        );
    }
}

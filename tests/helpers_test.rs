use chrono::{Duration, NaiveDate, NaiveDateTime};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use viewhelpers::{
    BackLink, DateDisplay, FixedClock, HelperOptions, HighlightRequest, InvariantCulture,
    OptionRequest, RecencyHighlight, ViewHelpers,
};

fn noon(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

fn helpers_at(now: NaiveDateTime) -> ViewHelpers {
    ViewHelpers::new(HelperOptions {
        clock: Arc::new(FixedClock(now)),
        ..Default::default()
    })
}

#[test]
fn title_case_absent_and_present() {
    let helpers = ViewHelpers::with_defaults();
    assert_eq!(helpers.title_case(None), "");
    assert_eq!(helpers.title_case(Some("war and peace")), "War And Peace");
}

#[test]
fn highlight_blank_needle_is_identity() {
    let helpers = ViewHelpers::with_defaults();
    for haystack in ["", "plain", "<em>already marked</em> up", "  spaced  "] {
        for needle in [None, Some(""), Some(" \t ")] {
            let markup = helpers.highlight_word(HighlightRequest {
                needle,
                haystack: Some(haystack),
                css_class: "hl",
            });
            assert_eq!(markup.as_str(), haystack);
        }
    }
}

#[test]
fn highlight_absent_haystack_is_empty() {
    let helpers = ViewHelpers::with_defaults();
    let markup = helpers.highlight_word(HighlightRequest {
        needle: Some("x"),
        ..Default::default()
    });
    assert!(markup.is_empty());
}

#[test]
fn highlight_dot_is_literal() {
    let helpers = ViewHelpers::with_defaults();
    let literal = helpers.highlight_word(HighlightRequest {
        needle: Some("a.b"),
        haystack: Some("xa.bz"),
        css_class: "hl",
    });
    assert_eq!(literal.as_str(), "x<span class=\"hl\">a.b</span>z");

    let wildcard = helpers.highlight_word(HighlightRequest {
        needle: Some("a.b"),
        haystack: Some("axbz"),
        css_class: "hl",
    });
    assert_eq!(wildcard.as_str(), "axbz");
}

#[test]
fn short_date_absent_never_renders_now() {
    let helpers = helpers_at(noon(2024, 5, 5));
    for format in ["MM/d/yy", "d", "", "yyyy"] {
        let markup = helpers.short_date(DateDisplay {
            value: None,
            format,
        });
        assert!(markup.is_empty(), "format {format:?} rendered {markup}");
    }
}

#[test]
fn short_date_is_deterministic() {
    let helpers = ViewHelpers::new(HelperOptions {
        culture: Arc::new(InvariantCulture),
        ..Default::default()
    });
    let value = Some(noon(2021, 11, 30));
    assert_eq!(
        helpers.short_date(DateDisplay {
            value,
            ..Default::default()
        }),
        "11/30/21"
    );
    assert_eq!(
        helpers.short_date(DateDisplay {
            value,
            format: "d",
        }),
        "11/30/2021"
    );
}

#[test]
fn highlight_new_uses_value_minus_now() {
    let now = noon(2024, 3, 1);
    let helpers = helpers_at(now);
    let render = |value: NaiveDateTime, threshold_days: i64| {
        helpers
            .short_date_highlight_new(RecencyHighlight {
                value: Some(value),
                threshold_days,
                format: "yyyy-MM-dd",
            })
            .into_string()
    };

    assert_eq!(render(now + Duration::days(10), 7), "<span class=\"new\">2024-03-11</span>");
    assert_eq!(render(now + Duration::days(7), 7), "<span class=\"new\">2024-03-08</span>");
    assert_eq!(render(now + Duration::days(6), 7), "2024-03-07");
    assert_eq!(render(now - Duration::days(1), 7), "2024-02-29");
    assert_eq!(render(now, 0), "<span class=\"new\">2024-03-01</span>");
}

#[test]
fn drop_down_option_selection_cases() {
    let helpers = ViewHelpers::with_defaults();
    let option = |currently_selected: &str| {
        helpers
            .drop_down_option(OptionRequest {
                value: "Pending",
                label: "Pending",
                currently_selected,
                css_class: "",
            })
            .into_string()
    };

    assert_eq!(
        option("pending"),
        "<option value=\"Pending\" class=\"\" selected>Pending</option>"
    );
    assert_eq!(
        option("  "),
        "<option value=\"Pending\" class=\"\" >Pending</option>"
    );
    assert_eq!(
        option("Active"),
        "<option value=\"Pending\" class=\"\" >Pending</option>"
    );
}

#[test]
fn back_button_defaults() {
    let helpers = ViewHelpers::with_defaults();
    let markup = helpers.js_history_back_button(BackLink::default());
    assert_eq!(
        markup.as_str(),
        "<a href=\"javascript:history.go(-1);\" class=\"btn\">Cancel</a>"
    );
}

//! # viewhelpers
//!
//! Presentation helpers for rendering server-side views into HTML: title
//! casing, search-term highlighting, date display, `<option>` tags and a
//! history back link.
//!
//! ## Example
//!
//! ```
//! use viewhelpers::{HighlightRequest, OptionRequest, ViewHelpers};
//!
//! let helpers = ViewHelpers::with_defaults();
//!
//! let text = helpers.highlight_word(HighlightRequest {
//!     needle: Some("rust"),
//!     haystack: Some("Written in Rust"),
//!     ..Default::default()
//! });
//! assert_eq!(text.as_str(), "Written in <span class=\"highlight\">Rust</span>");
//!
//! let option = helpers.drop_down_option(OptionRequest {
//!     value: "Pending",
//!     label: "Pending",
//!     currently_selected: "pending",
//!     ..Default::default()
//! });
//! assert!(option.as_str().contains(" selected>"));
//! ```
//!
//! None of the helpers escape their inputs. Text that comes from users must
//! be escaped (see [`render::escape_html`]) before it is passed in.

pub mod clock;
pub mod error;
pub mod helpers;
pub mod localization;
pub mod markup;
pub mod render;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{Error, Result};
pub use helpers::{
    BackLink, DateDisplay, HighlightRequest, OptionRequest, RecencyHighlight, ViewHelpers,
};
pub use localization::{culture_for, Culture, EnUsCulture, InvariantCulture, TurkishCulture};
pub use markup::Markup;

use std::fmt;
use std::sync::Arc;

/// Ambient settings shared by every helper call.
#[derive(Clone)]
pub struct HelperOptions {
    /// Culture used for casing and date formatting.
    pub culture: Arc<dyn Culture>,
    /// Source of "now" for recency checks.
    pub clock: Arc<dyn Clock>,
}

impl Default for HelperOptions {
    fn default() -> Self {
        Self {
            culture: Arc::new(EnUsCulture),
            clock: Arc::new(SystemClock),
        }
    }
}

impl fmt::Debug for HelperOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HelperOptions")
            .field("culture", &self.culture.name())
            .finish_non_exhaustive()
    }
}

// Python bindings (only when 'python' feature is enabled)
#[cfg(feature = "python")]
mod python_bindings {
    use super::*;
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;

    fn to_py_err(err: Error) -> PyErr {
        PyValueError::new_err(err.to_string())
    }

    fn parse_optional_date(value: Option<&str>) -> PyResult<Option<chrono::NaiveDateTime>> {
        value
            .map(helpers::parse_date_value)
            .transpose()
            .map_err(to_py_err)
    }

    /// Converts text to title case.
    #[pyfunction]
    #[pyo3(signature = (input=None, culture="en-US"))]
    fn title_case(input: Option<&str>, culture: &str) -> PyResult<String> {
        let culture = culture_for(culture).map_err(to_py_err)?;
        Ok(helpers::title_case(input, culture.as_ref()))
    }

    /// Wraps matches of a search term in a span.
    #[pyfunction]
    #[pyo3(signature = (needle=None, haystack=None, css_class="highlight"))]
    fn highlight_word(needle: Option<&str>, haystack: Option<&str>, css_class: &str) -> String {
        helpers::highlight_word(needle, haystack, css_class).into_string()
    }

    /// Formats an ISO date string.
    #[pyfunction]
    #[pyo3(signature = (value=None, format="MM/d/yy", culture="en-US"))]
    fn short_date(value: Option<&str>, format: &str, culture: &str) -> PyResult<String> {
        let culture = culture_for(culture).map_err(to_py_err)?;
        let value = parse_optional_date(value)?;
        Ok(helpers::short_date(value, format, culture.as_ref()).into_string())
    }

    /// Formats an ISO date string, marking dates far enough ahead.
    #[pyfunction]
    #[pyo3(signature = (value=None, days=7, format="MM/d/yy", culture="en-US"))]
    fn short_date_highlight_new(
        value: Option<&str>,
        days: i64,
        format: &str,
        culture: &str,
    ) -> PyResult<String> {
        let culture = culture_for(culture).map_err(to_py_err)?;
        let value = parse_optional_date(value)?;
        Ok(
            helpers::short_date_highlight_new(value, days, format, culture.as_ref(), &SystemClock)
                .into_string(),
        )
    }

    /// Renders an option tag.
    #[pyfunction]
    #[pyo3(signature = (value, label_text, currently_selected="", css_class="", culture="en-US"))]
    fn drop_down_option(
        value: &str,
        label_text: &str,
        currently_selected: &str,
        css_class: &str,
        culture: &str,
    ) -> PyResult<String> {
        let culture = culture_for(culture).map_err(to_py_err)?;
        Ok(helpers::drop_down_option(
            value,
            label_text,
            currently_selected,
            css_class,
            culture.as_ref(),
        )
        .into_string())
    }

    /// Renders a history back link.
    #[pyfunction]
    #[pyo3(signature = (label="Cancel", css_class="btn"))]
    fn js_history_back_button(label: &str, css_class: &str) -> String {
        helpers::js_history_back_button(label, css_class).into_string()
    }

    /// A Python module implemented in Rust.
    #[pymodule]
    pub fn viewhelpers(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(title_case, m)?)?;
        m.add_function(wrap_pyfunction!(highlight_word, m)?)?;
        m.add_function(wrap_pyfunction!(short_date, m)?)?;
        m.add_function(wrap_pyfunction!(short_date_highlight_new, m)?)?;
        m.add_function(wrap_pyfunction!(drop_down_option, m)?)?;
        m.add_function(wrap_pyfunction!(js_history_back_button, m)?)?;
        Ok(())
    }
}

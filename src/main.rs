//! CLI for viewhelpers - renders single HTML fragments from the command line

use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::sync::Arc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use viewhelpers::helpers::{self, parse_date_value};
use viewhelpers::render::escape_html;
use viewhelpers::{
    culture_for, BackLink, DateDisplay, FixedClock, HelperOptions, HighlightRequest, Markup,
    OptionRequest, RecencyHighlight, Result, ViewHelpers,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Culture for casing and date formatting (e.g. en-US, tr-TR, invariant)
    #[arg(long, global = true, env = "VIEWHELPERS_CULTURE", default_value = "en-US")]
    culture: String,

    /// HTML-escape free-text arguments before rendering
    #[arg(long, global = true)]
    escape_input: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert text to title case
    TitleCase {
        /// Text to convert (empty output if omitted)
        text: Option<String>,
    },

    /// Wrap every case-insensitive match of a term in a span
    Highlight {
        /// Term to search for
        #[arg(long)]
        needle: Option<String>,

        /// CSS class of the wrapping span
        #[arg(long = "class", default_value = helpers::DEFAULT_HIGHLIGHT_CLASS)]
        css_class: String,

        /// Text to search in (empty output if omitted)
        haystack: Option<String>,
    },

    /// Format a date
    ShortDate {
        /// Date as YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS (empty output if omitted)
        value: Option<String>,

        /// Date pattern
        #[arg(long, default_value = helpers::DEFAULT_DATE_FORMAT)]
        format: String,
    },

    /// Format a date, marking it when it is at least N days ahead
    ShortDateNew {
        /// Date as YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS (empty output if omitted)
        value: Option<String>,

        /// Day threshold
        #[arg(long, default_value_t = helpers::DEFAULT_NEW_THRESHOLD_DAYS, allow_negative_numbers = true)]
        days: i64,

        /// Date pattern
        #[arg(long, default_value = helpers::DEFAULT_DATE_FORMAT)]
        format: String,

        /// Evaluate against this moment instead of the system clock
        #[arg(long)]
        now: Option<String>,
    },

    /// Render a single select option
    #[command(name = "option")]
    SelectOption {
        /// Option value
        value: String,

        /// Display text
        label: String,

        /// Currently selected value
        #[arg(long, default_value = "")]
        selected: String,

        /// CSS class
        #[arg(long = "class", default_value = "")]
        css_class: String,
    },

    /// Render a browser-history back link
    BackButton {
        /// Link text
        #[arg(long, default_value = helpers::DEFAULT_BACK_LABEL)]
        label: String,

        /// CSS class
        #[arg(long = "class", default_value = helpers::DEFAULT_BACK_CLASS)]
        css_class: String,
    },
}

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn main() {
    init_tracing();
    let args = Args::parse();

    if let Err(e) = run(args).and_then(|output| emit(&output)) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn emit(output: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", output)?;
    Ok(())
}

fn run(args: Args) -> Result<String> {
    let mut options = HelperOptions {
        culture: culture_for(&args.culture)?,
        ..Default::default()
    };
    if let Command::ShortDateNew { now: Some(now), .. } = &args.command {
        options.clock = Arc::new(FixedClock(parse_date_value(now)?));
    }
    let helpers = ViewHelpers::new(options);
    let escape = |text: String| {
        if args.escape_input {
            escape_html(&text)
        } else {
            text
        }
    };

    tracing::debug!(command = ?args.command, culture = %args.culture, "rendering");

    let output: Markup = match args.command {
        Command::TitleCase { text } => {
            let text = text.map(escape);
            return Ok(helpers.title_case(text.as_deref()));
        }
        Command::Highlight {
            needle,
            css_class,
            haystack,
        } => {
            let needle = needle.map(escape);
            let haystack = haystack.map(escape);
            helpers.highlight_word(HighlightRequest {
                needle: needle.as_deref(),
                haystack: haystack.as_deref(),
                css_class: &css_class,
            })
        }
        Command::ShortDate { value, format } => helpers.short_date(DateDisplay {
            value: value.as_deref().map(parse_date_value).transpose()?,
            format: &format,
        }),
        Command::ShortDateNew {
            value,
            days,
            format,
            now: _,
        } => helpers.short_date_highlight_new(RecencyHighlight {
            value: value.as_deref().map(parse_date_value).transpose()?,
            threshold_days: days,
            format: &format,
        }),
        Command::SelectOption {
            value,
            label,
            selected,
            css_class,
        } => {
            let label = escape(label);
            helpers.drop_down_option(OptionRequest {
                value: &value,
                label: &label,
                currently_selected: &selected,
                css_class: &css_class,
            })
        }
        Command::BackButton { label, css_class } => {
            let label = escape(label);
            helpers.js_history_back_button(BackLink {
                label: &label,
                css_class: &css_class,
            })
        }
    };

    Ok(output.into_string())
}

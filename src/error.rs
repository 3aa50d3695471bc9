//! Error types for viewhelpers.
//!
//! The rendering helpers themselves are total; these errors come from the
//! surrounding surface (culture lookup, parsing date input, CLI output).

use thiserror::Error;

/// Result type for viewhelpers operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types raised outside of the rendering helpers.
#[derive(Error, Debug)]
pub enum Error {
    /// No built-in culture matches the requested name.
    #[error("Unknown culture: {0}")]
    UnknownCulture(String),

    /// A date value could not be parsed.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Error occurred during I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

//! Error types for the farmaticket-core library.

use thiserror::Error;

/// Main error type for ticket loading and parsing.
#[derive(Error, Debug)]
pub enum TicketError {
    /// The ticket file is missing, unreadable, or not valid UTF-8.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A `Data:` value did not match the "day month-name year" pattern, or
    /// named a month outside the active table, or denoted an impossible date.
    #[error("invalid date text: {text:?}")]
    DateFormat {
        /// The offending date text, trimmed.
        text: String,
    },

    /// A numeric field could not be parsed.
    #[error("invalid number in {field}: {text:?}")]
    NumberFormat {
        /// Which ticket field was being parsed ("total", "quantity", "price").
        field: &'static str,
        /// The offending text.
        text: String,
    },

    /// A candidate item row did not split into exactly 4 fields.
    ///
    /// Only raised in strict mode; the default policy skips such rows.
    #[error("malformed item row ({fields} fields): {line:?}")]
    MalformedRow {
        /// The offending row, trimmed.
        line: String,
        /// How many `|`-separated fields it actually had.
        fields: usize,
    },
}

/// Result type for the farmaticket library.
pub type Result<T> = std::result::Result<T, TicketError>;

//! Ticket parser: turns ticket text files into structured records.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::Result;
use crate::models::config::{MonthNames, ParserConfig};
use crate::models::ticket::{LineItem, Ticket};

use super::rules::{extract_header_fields, is_candidate_row, parse_item_row};

/// Parser for pharmacy purchase tickets.
///
/// Carries the parse policy as a value; construction is cheap, the methods
/// take `&self`, and one parser can load any number of tickets.
#[derive(Debug, Clone)]
pub struct TicketParser {
    config: ParserConfig,
}

impl TicketParser {
    /// Create a parser with the default policy: permissive rows, Italian
    /// month names.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Create a parser from an explicit configuration.
    pub fn from_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Set whether candidate rows with a wrong field count are rejected
    /// instead of skipped.
    pub fn with_strict_rows(mut self, strict: bool) -> Self {
        self.config.strict_rows = strict;
        self
    }

    /// Replace the month-name table used for the purchase date.
    pub fn with_months(mut self, months: MonthNames) -> Self {
        self.config.months = months;
        self
    }

    /// Parse ticket text into a complete [`Ticket`].
    ///
    /// Runs the header pass and then the item pass over the same lines;
    /// header lines and item rows may be interleaved in any order. The
    /// returned ticket is assembled only after both passes succeed.
    pub fn parse(&self, text: &str) -> Result<Ticket> {
        let header = extract_header_fields(text, &self.config.months)?;
        let items = self.extract_items(text)?;

        debug!(
            "parsed ticket: customer={:?}, {} item rows",
            header.customer,
            items.len()
        );

        Ok(Ticket {
            customer: header.customer,
            purchase_date: header.purchase_date,
            total: header.total,
            items,
        })
    }

    /// Read a ticket file and parse it.
    ///
    /// The whole file is read as UTF-8 up front; a missing, unreadable, or
    /// non-UTF-8 file is an `Io` error and nothing is parsed.
    pub fn load(&self, path: &Path) -> Result<Ticket> {
        info!("loading ticket from {}", path.display());
        let text = fs::read_to_string(path)?;
        self.parse(&text)
    }

    fn extract_items(&self, text: &str) -> Result<Vec<LineItem>> {
        let mut items = Vec::new();

        for line in text.lines() {
            let line = line.trim();
            if !is_candidate_row(line) {
                continue;
            }
            if let Some(item) = parse_item_row(line, self.config.strict_rows)? {
                items.push(item);
            }
        }

        Ok(items)
    }
}

impl Default for TicketParser {
    fn default() -> Self {
        Self::new()
    }
}

impl Ticket {
    /// Load this ticket from a text file, replacing all current state.
    ///
    /// Uses a default-configured [`TicketParser`]. Loading is transactional:
    /// the freshly parsed record replaces the ticket contents only on
    /// success, so a failed load leaves the previous state intact. A reload
    /// overwrites the header fields and fully replaces the item list.
    pub fn load_from_path(&mut self, path: impl AsRef<Path>) -> Result<()> {
        *self = TicketParser::new().load(path.as_ref())?;
        Ok(())
    }
}

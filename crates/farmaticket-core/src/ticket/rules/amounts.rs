//! Euro amount parsing for ticket money fields.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::{Result, TicketError};

/// Parse a Euro amount in Italian ticket notation.
///
/// Every `€` is removed and commas become decimal points before parsing, so
/// `"45,50€"`, `"45.50"` and `"100€"` all parse. `field` names the ticket
/// field being parsed and only feeds the error message.
pub fn parse_euro_amount(text: &str, field: &'static str) -> Result<Decimal> {
    let normalized = text.trim().replace('€', "").replace(',', ".");
    Decimal::from_str(normalized.trim()).map_err(|_| TicketError::NumberFormat {
        field,
        text: text.trim().to_string(),
    })
}

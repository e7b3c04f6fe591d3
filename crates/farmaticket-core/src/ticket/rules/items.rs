//! Medication row parsing.

use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::debug;

use crate::error::{Result, TicketError};
use crate::models::ticket::LineItem;

use super::amounts::parse_euro_amount;

/// Whether a trimmed line is a candidate medication row: it contains a pipe
/// separator and is not the `Articolo` column-title row.
pub fn is_candidate_row(line: &str) -> bool {
    line.contains('|') && !line.starts_with("Articolo")
}

/// Split a quantity field into the numeric quantity and an optional unit label.
///
/// `"2 scatole"` gives `(2, "scatole")`, `"1"` gives `(1, "")`. Tokens after
/// the second are ignored. The quantity is plain numeric text (no currency
/// handling); a missing or non-numeric first token is a `NumberFormat` error.
pub fn parse_quantity_unit(field: &str) -> Result<(Decimal, String)> {
    let mut tokens = field.split_whitespace();
    let first = tokens.next().unwrap_or("");
    let quantity = Decimal::from_str(first).map_err(|_| TicketError::NumberFormat {
        field: "quantity",
        text: first.to_string(),
    })?;
    let unit = tokens.next().unwrap_or("").to_string();
    Ok((quantity, unit))
}

/// Parse one candidate row (already trimmed) into a [`LineItem`].
///
/// A row is well-shaped only when splitting on `|` yields exactly 4 fields:
/// name, quantity with optional unit, an ignored note column, and the unit
/// price. Other field counts return `Ok(None)` in the default permissive mode
/// and a `MalformedRow` error when `strict` is set. Numeric failures inside a
/// well-shaped row propagate in both modes.
pub fn parse_item_row(line: &str, strict: bool) -> Result<Option<LineItem>> {
    let fields: Vec<&str> = line.split('|').collect();
    if fields.len() != 4 {
        if strict {
            return Err(TicketError::MalformedRow {
                line: line.to_string(),
                fields: fields.len(),
            });
        }
        debug!("skipping item row with {} fields: {:?}", fields.len(), line);
        return Ok(None);
    }

    let name = fields[0].trim().to_string();
    let (quantity, unit) = parse_quantity_unit(fields[1])?;
    // fields[2] is the reserved note column.
    let unit_price = parse_euro_amount(fields[3], "price")?;

    Ok(Some(LineItem {
        name,
        quantity,
        unit_price,
        unit,
    }))
}

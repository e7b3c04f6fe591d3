//! Ticket data models for parsed pharmacy receipts.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single purchased medication on the ticket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Medication name, verbatim from the row.
    pub name: String,

    /// Purchased quantity.
    pub quantity: Decimal,

    /// Price per unit.
    pub unit_price: Decimal,

    /// Packaging unit label (e.g. "scatole"); empty when the row carries none.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub unit: String,
}

impl LineItem {
    /// Total amount for this row: `quantity * unit_price`.
    pub fn line_total(&self) -> Decimal {
        self.quantity * self.unit_price
    }
}

/// A parsed pharmacy purchase receipt.
///
/// Header fields are `None` until the corresponding line has been seen in the
/// input; there are no magic default values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    /// Customer name, when a `Cliente:` line was present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,

    /// Purchase date, when a `Data:` line was present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<NaiveDate>,

    /// Declared total amount, when a `Totale:` line was present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<Decimal>,

    /// Medication rows in order of appearance; duplicates allowed.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<LineItem>,
}

impl Ticket {
    /// Create an empty ticket: header fields unset, no items.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sum of [`LineItem::line_total`] over all items.
    ///
    /// Derived from the rows only; never compared against the declared
    /// [`Ticket::total`].
    pub fn items_total(&self) -> Decimal {
        self.items.iter().map(LineItem::line_total).sum()
    }
}

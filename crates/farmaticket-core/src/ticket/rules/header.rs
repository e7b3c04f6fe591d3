//! Header field extraction: customer, purchase date, declared total.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::Result;
use crate::models::config::MonthNames;

use super::amounts::parse_euro_amount;
use super::dates::parse_date;

/// Scalar header fields of a ticket, each independently optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeaderFields {
    /// Value of the last `Cliente:` line, if any.
    pub customer: Option<String>,
    /// Value of the last `Data:` line, if any.
    pub purchase_date: Option<NaiveDate>,
    /// Value of the last `Totale:` line, if any.
    pub total: Option<Decimal>,
}

/// Scan all lines of the ticket text for the three header prefixes.
///
/// Each line is trimmed and matched independently, so header lines may appear
/// in any order and anywhere in the file; the scan never stops early. A field
/// whose prefix never appears stays `None`; that is not an error. A repeated
/// prefix overwrites the previous value.
pub fn extract_header_fields(text: &str, months: &MonthNames) -> Result<HeaderFields> {
    let mut fields = HeaderFields::default();

    for line in text.lines() {
        let line = line.trim();
        if let Some(value) = line.strip_prefix("Cliente:") {
            fields.customer = Some(value.trim().to_string());
        } else if let Some(value) = line.strip_prefix("Data:") {
            fields.purchase_date = Some(parse_date(value, months)?);
        } else if let Some(value) = line.strip_prefix("Totale:") {
            fields.total = Some(parse_euro_amount(value, "total")?);
        }
    }

    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TicketError;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    fn italian() -> MonthNames {
        MonthNames::italian()
    }

    #[test]
    fn test_extracts_all_three_fields() {
        let text = r#"
            Cliente: Mario Rossi
            Data: 15 marzo 2024
            Totale: 45,50€
        "#;

        let fields = extract_header_fields(text, &italian()).unwrap();
        assert_eq!(fields.customer.as_deref(), Some("Mario Rossi"));
        assert_eq!(
            fields.purchase_date,
            NaiveDate::from_ymd_opt(2024, 3, 15)
        );
        assert_eq!(fields.total, Some(Decimal::from_str("45.50").unwrap()));
    }

    #[test]
    fn test_header_order_is_irrelevant() {
        let forward = "Cliente: Anna Bianchi\nData: 2 aprile 2023\nTotale: 12,00€\n";
        let reversed = "Totale: 12,00€\nData: 2 aprile 2023\nCliente: Anna Bianchi\n";

        assert_eq!(
            extract_header_fields(forward, &italian()).unwrap(),
            extract_header_fields(reversed, &italian()).unwrap()
        );
    }

    #[test]
    fn test_missing_fields_stay_none() {
        let fields = extract_header_fields("Cliente: Mario Rossi\n", &italian()).unwrap();
        assert_eq!(fields.customer.as_deref(), Some("Mario Rossi"));
        assert_eq!(fields.purchase_date, None);
        assert_eq!(fields.total, None);

        let empty = extract_header_fields("", &italian()).unwrap();
        assert_eq!(empty, HeaderFields::default());
    }

    #[test]
    fn test_repeated_prefix_keeps_last_value() {
        let text = "Cliente: Mario Rossi\nCliente: Anna Bianchi\n";
        let fields = extract_header_fields(text, &italian()).unwrap();
        assert_eq!(fields.customer.as_deref(), Some("Anna Bianchi"));
    }

    #[test]
    fn test_value_is_text_after_first_colon() {
        let fields =
            extract_header_fields("Cliente: Rossi: Mario\n", &italian()).unwrap();
        assert_eq!(fields.customer.as_deref(), Some("Rossi: Mario"));
    }

    #[test]
    fn test_bad_date_aborts_extraction() {
        let err = extract_header_fields("Data: 15 March 2024\n", &italian()).unwrap_err();
        assert!(matches!(err, TicketError::DateFormat { .. }));
    }

    #[test]
    fn test_bad_total_aborts_extraction() {
        let err = extract_header_fields("Totale: molto\n", &italian()).unwrap_err();
        assert!(matches!(
            err,
            TicketError::NumberFormat { field: "total", .. }
        ));
    }
}

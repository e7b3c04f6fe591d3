//! Purchase date parsing for the `Data:` header line.

use chrono::NaiveDate;

use crate::error::{Result, TicketError};
use crate::models::config::MonthNames;

use super::patterns::DATE_LONG;

/// Parse a long-format date such as `"15 marzo 2024"`.
///
/// The text must be exactly "day month-name 4-digit-year" after trimming; the
/// month name is resolved against `months`, ignoring case. Anything else,
/// including a real month on an impossible day, is a `DateFormat` error.
pub fn parse_date(text: &str, months: &MonthNames) -> Result<NaiveDate> {
    let text = text.trim();
    let caps = DATE_LONG.captures(text).ok_or_else(|| date_error(text))?;

    let day: u32 = caps[1].parse().unwrap_or(0);
    let year: i32 = caps[3].parse().unwrap_or(0);
    let month = months.number_of(&caps[2]).ok_or_else(|| date_error(text))?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| date_error(text))
}

fn date_error(text: &str) -> TicketError {
    TicketError::DateFormat {
        text: text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn italian() -> MonthNames {
        MonthNames::italian()
    }

    #[test]
    fn test_parse_long_date() {
        let date = parse_date("15 marzo 2024", &italian()).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
    }

    #[test]
    fn test_parse_trims_and_ignores_case() {
        let date = parse_date("  1 Gennaio 2023 ", &italian()).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
    }

    #[test]
    fn test_all_months_resolve() {
        for month in 1..=12u32 {
            let name = match month {
                1 => "gennaio",
                2 => "febbraio",
                3 => "marzo",
                4 => "aprile",
                5 => "maggio",
                6 => "giugno",
                7 => "luglio",
                8 => "agosto",
                9 => "settembre",
                10 => "ottobre",
                11 => "novembre",
                _ => "dicembre",
            };
            let date = parse_date(&format!("10 {} 2024", name), &italian()).unwrap();
            assert_eq!(date.month(), month);
        }
    }

    #[test]
    fn test_foreign_month_is_date_format_error() {
        let err = parse_date("15 March 2024", &italian()).unwrap_err();
        assert!(matches!(err, TicketError::DateFormat { .. }));
    }

    #[test]
    fn test_impossible_date_is_rejected() {
        assert!(parse_date("31 febbraio 2024", &italian()).is_err());
        assert!(parse_date("0 marzo 2024", &italian()).is_err());
    }

    #[test]
    fn test_two_digit_year_is_rejected() {
        assert!(parse_date("15 marzo 24", &italian()).is_err());
    }

    #[test]
    fn test_trailing_text_is_rejected() {
        assert!(parse_date("15 marzo 2024 pomeriggio", &italian()).is_err());
        assert!(parse_date("15 marzo", &italian()).is_err());
    }

    #[test]
    fn test_custom_month_table() {
        let months = MonthNames::custom(
            [
                "enero",
                "febrero",
                "marzo",
                "abril",
                "mayo",
                "junio",
                "julio",
                "agosto",
                "septiembre",
                "octubre",
                "noviembre",
                "diciembre",
            ]
            .map(String::from),
        );
        let date = parse_date("5 enero 2024", &months).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
        // Names outside the injected table don't resolve.
        assert!(parse_date("5 gennaio 2024", &months).is_err());
    }
}

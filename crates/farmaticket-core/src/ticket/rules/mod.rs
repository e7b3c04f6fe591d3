//! Rule-based field parsers for ticket text.

pub mod amounts;
pub mod dates;
pub mod header;
pub mod items;
pub mod patterns;

pub use amounts::parse_euro_amount;
pub use dates::parse_date;
pub use header::{extract_header_fields, HeaderFields};
pub use items::{is_candidate_row, parse_item_row, parse_quantity_unit};

//! Regex patterns for ticket field parsing.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Long date format: "15 marzo 2024". Anchored on both sides: the whole
    // header value must match, trailing text is not tolerated.
    pub static ref DATE_LONG: Regex = Regex::new(
        r"^(\d{1,2})\s+(\S+)\s+(\d{4})$"
    ).unwrap();
}

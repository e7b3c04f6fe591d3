//! Ticket parsing: line-oriented extraction of header fields and item rows.

mod parser;
pub mod rules;

pub use parser::TicketParser;

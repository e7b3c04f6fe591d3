//! Core library for Italian pharmacy ticket parsing.
//!
//! This crate provides:
//! - Ticket and line-item data models
//! - Line-oriented parsing of header fields (customer, date, total)
//! - Medication row extraction with a strict/permissive policy
//! - An injectable month-name table for the long date format

pub mod error;
pub mod models;
pub mod ticket;

pub use error::{Result, TicketError};
pub use models::config::{MonthNames, ParserConfig};
pub use models::ticket::{LineItem, Ticket};
pub use ticket::TicketParser;

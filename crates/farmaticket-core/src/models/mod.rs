//! Data models for tickets and parser configuration.

pub mod config;
pub mod ticket;

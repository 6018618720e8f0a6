//! Timesheet Formatter
//!
//! This crate converts a raw time-tracking export (one CSV row per clock
//! event) into a workbook with one sheet per employee. Each sheet carries the
//! normalized hours, leave placeholders, and live sum formulas for regular,
//! overtime, and total hours, so the result stays auditable in any
//! spreadsheet application.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod conversion;
pub mod error;
pub mod models;

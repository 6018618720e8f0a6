//! Core data models for the timesheet formatter.
//!
//! This module contains the input records, sheet layout, and workbook
//! types used throughout the conversion.

mod layout;
mod record;
mod workbook;

pub use layout::{
    ADDRESSABLE_COLUMNS, ExtraColumn, HOURS_HEADER, LayoutProfile, SheetLayout, UNPAID_BREAK_TYPE,
};
pub use record::{ColumnNames, ColumnSchema, EmployeeGroup, NormalizedRow, RawRecord};
pub use workbook::{CellValue, DEFAULT_SHEET_NAME, Sheet, Workbook};

//! Conversion of time-tracking exports into timesheet workbooks.
//!
//! This module contains the whole transformation: duration parsing, record
//! grouping by employee, cell addressing, per-employee sheet layout with
//! sum formulas, sheet naming, workbook assembly, and xlsx serialization.

mod addressing;
mod assembler;
mod duration;
mod export;
mod formatter;
mod grouping;
mod naming;
mod sheet_writer;

pub use addressing::{cell_address, column_range};
pub use assembler::build_workbook;
pub use duration::parse_duration;
pub use export::export_xlsx;
pub use formatter::{ConversionOptions, TimesheetFormatter};
pub use grouping::{group_by_employee, load_groups, read_records};
pub use naming::{MAX_SHEET_NAME_LEN, SheetNamer, UNNAMED_SHEET, sanitize_sheet_name};
pub use sheet_writer::{
    OVERTIME_LABEL, REGULAR_LABEL, TOTAL_HOURS_LABEL, TOTALS_LABEL, write_sheet,
};

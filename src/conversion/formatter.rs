//! One-call conversion from an export to a formatted workbook.

use std::io::Read;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::TimesheetResult;
use crate::models::{ColumnNames, LayoutProfile, Workbook};

use super::assembler::build_workbook;
use super::export::export_xlsx;
use super::grouping::load_groups;

/// Settings that shape a conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionOptions {
    /// The layout policy for every employee sheet.
    pub profile: LayoutProfile,
    /// The header names of the required input columns.
    pub columns: ColumnNames,
}

/// Converts raw time-tracking exports into formatted workbooks.
///
/// The formatter holds only its options. Every call builds its own groups
/// and workbook, so one instance can serve concurrent conversions.
///
/// # Example
///
/// ```
/// use timesheet_formatter::conversion::TimesheetFormatter;
///
/// let csv = "Full Name,Date,Duration,Break Type\n\
///            Alice,2024-03-01,3h 15m,\n\
///            Bob,2024-03-01,8h 0m,Unpaid\n";
///
/// let formatter = TimesheetFormatter::default();
/// let workbook = formatter.build(csv.as_bytes()).unwrap();
/// assert_eq!(workbook.sheet_names(), vec!["Alice", "Bob"]);
///
/// let bytes = formatter.format(csv.as_bytes()).unwrap();
/// assert_eq!(&bytes[0..2], b"PK");
/// ```
#[derive(Debug, Clone, Default)]
pub struct TimesheetFormatter {
    options: ConversionOptions,
}

impl TimesheetFormatter {
    /// Creates a formatter with the given options.
    pub fn new(options: ConversionOptions) -> Self {
        Self { options }
    }

    /// Returns the formatter's options.
    pub fn options(&self) -> &ConversionOptions {
        &self.options
    }

    /// Reads an export and lays it out as a workbook.
    ///
    /// # Errors
    ///
    /// Returns a [`crate::error::TimesheetError`] for malformed input, a
    /// missing required column, or an export without rows.
    pub fn build<R: Read>(&self, input: R) -> TimesheetResult<Workbook> {
        let (schema, groups) = load_groups(input, &self.options.columns)?;
        build_workbook(&groups, &schema, self.options.profile)
    }

    /// Reads an export and returns the serialized xlsx document.
    ///
    /// # Errors
    ///
    /// Everything [`TimesheetFormatter::build`] returns, plus
    /// [`crate::error::TimesheetError::Export`] if serialization fails.
    pub fn format<R: Read>(&self, input: R) -> TimesheetResult<Vec<u8>> {
        let start_time = Instant::now();
        let workbook = self.build(input)?;
        let bytes = export_xlsx(&workbook)?;

        info!(
            sheets = workbook.len(),
            bytes = bytes.len(),
            profile = ?self.options.profile,
            duration_us = start_time.elapsed().as_micros(),
            "Formatted timesheet"
        );
        Ok(bytes)
    }
}

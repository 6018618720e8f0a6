//! Error types for the timesheet formatter.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every hard failure that can occur while turning a time-tracking export
//! into a workbook. Unparsable durations are not errors: they surface as
//! empty hour cells instead.

use thiserror::Error;

/// The main error type for the timesheet formatter.
///
/// Any of these aborts the whole conversion; no partial workbook is ever
/// handed back alongside one.
///
/// # Example
///
/// ```
/// use timesheet_formatter::error::TimesheetError;
///
/// let error = TimesheetError::MissingColumn {
///     column: "Break Type".to_string(),
/// };
/// assert_eq!(error.to_string(), "Required column missing from input: Break Type");
/// ```
#[derive(Debug, Error)]
pub enum TimesheetError {
    /// A required column is absent from the input header row.
    #[error("Required column missing from input: {column}")]
    MissingColumn {
        /// The header name that was expected.
        column: String,
    },

    /// The input contained no data rows, so there is nothing to lay out.
    #[error("Input contains no timesheet rows")]
    EmptyInput,

    /// The input could not be read as comma-separated data.
    #[error("Malformed CSV input: {message}")]
    MalformedCsv {
        /// A description of the parse failure.
        message: String,
    },

    /// The input has more columns than a sheet can address with single-letter
    /// column names.
    #[error("Layout needs {columns} columns but at most {max} (A to Z) are supported")]
    TooManyColumns {
        /// The number of columns the layout would use.
        columns: usize,
        /// The number of addressable columns.
        max: usize,
    },

    /// A sheet with this name already exists in the workbook.
    #[error("Duplicate sheet name: {name}")]
    DuplicateSheetName {
        /// The conflicting sheet name.
        name: String,
    },

    /// No sheet with this name exists in the workbook.
    #[error("Sheet not found: {name}")]
    SheetNotFound {
        /// The requested sheet name.
        name: String,
    },

    /// Removing a sheet would leave the workbook without any sheets.
    #[error("A workbook must contain at least one sheet")]
    NoSheets,

    /// The workbook could not be serialized.
    #[error("Failed to write workbook: {message}")]
    Export {
        /// A description of the serialization error.
        message: String,
    },

    /// Reading or writing output storage failed.
    #[error("Storage error at '{path}': {message}")]
    Storage {
        /// The path involved.
        path: String,
        /// A description of the I/O error.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl From<csv::Error> for TimesheetError {
    fn from(error: csv::Error) -> Self {
        TimesheetError::MalformedCsv {
            message: error.to_string(),
        }
    }
}

impl From<rust_xlsxwriter::XlsxError> for TimesheetError {
    fn from(error: rust_xlsxwriter::XlsxError) -> Self {
        TimesheetError::Export {
            message: error.to_string(),
        }
    }
}

/// A type alias for Results that return TimesheetError.
pub type TimesheetResult<T> = Result<T, TimesheetError>;

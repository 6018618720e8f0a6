//! Input record models.
//!
//! This module defines the rows read from a time-tracking export, the
//! header schema they are read against, and the per-employee groups the
//! rows are partitioned into.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{TimesheetError, TimesheetResult};

/// Header names of the columns every export must provide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnNames {
    /// Header of the employee name column.
    pub full_name: String,
    /// Header of the free-text duration column (e.g. "3h 15m").
    pub duration: String,
    /// Header of the break type column (e.g. "Unpaid").
    pub break_type: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            full_name: "Full Name".to_string(),
            duration: "Duration".to_string(),
            break_type: "Break Type".to_string(),
        }
    }
}

/// Physical positions of the required columns in one particular input.
///
/// Resolved once per input from its header row; every later lookup is a
/// plain index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSchema {
    /// The headers of the columns carried into the output, in input order.
    pub headers: Vec<String>,
    /// Index of the employee name column.
    pub full_name: usize,
    /// Index of the duration column.
    pub duration: usize,
    /// Index of the break type column.
    pub break_type: usize,
}

impl ColumnSchema {
    /// Resolves the required columns against an input header row.
    ///
    /// Headers are compared after trimming surrounding whitespace. The
    /// columns kept for output run from the first input column through the
    /// last of the required ones; anything after that is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`TimesheetError::MissingColumn`] naming the first required
    /// header that is absent.
    ///
    /// # Example
    ///
    /// ```
    /// use timesheet_formatter::models::{ColumnNames, ColumnSchema};
    ///
    /// let headers = ["Full Name", "Date", "Duration", "Break Type", "Notes"];
    /// let schema = ColumnSchema::resolve(headers, &ColumnNames::default()).unwrap();
    ///
    /// assert_eq!(schema.headers, vec!["Full Name", "Date", "Duration", "Break Type"]);
    /// assert_eq!(schema.break_type, 3);
    /// ```
    pub fn resolve<I, S>(headers: I, names: &ColumnNames) -> TimesheetResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let headers: Vec<String> = headers
            .into_iter()
            .map(|h| h.as_ref().trim().to_string())
            .collect();

        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h == name.trim())
                .ok_or_else(|| TimesheetError::MissingColumn {
                    column: name.to_string(),
                })
        };

        let full_name = find(&names.full_name)?;
        let duration = find(&names.duration)?;
        let break_type = find(&names.break_type)?;

        let kept = full_name.max(duration).max(break_type) + 1;
        let mut headers = headers;
        headers.truncate(kept);

        Ok(Self {
            headers,
            full_name,
            duration,
            break_type,
        })
    }

    /// Returns the number of input columns carried into the output.
    pub fn width(&self) -> usize {
        self.headers.len()
    }
}

/// One row of the input export, restricted to the kept columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    /// The employee name, verbatim (may be empty).
    pub full_name: String,
    /// The duration text as exported.
    pub duration_raw: String,
    /// The break type as exported.
    pub break_type: String,
    /// Every kept field of the row, positionally matching the schema headers.
    pub fields: Vec<String>,
}

impl RawRecord {
    /// Builds a record from the kept fields of a row.
    ///
    /// Fields missing from a short row read as empty strings.
    pub fn from_fields(fields: Vec<String>, schema: &ColumnSchema) -> Self {
        let field = |index: usize| fields.get(index).cloned().unwrap_or_default();
        Self {
            full_name: field(schema.full_name),
            duration_raw: field(schema.duration),
            break_type: field(schema.break_type),
            fields,
        }
    }
}

/// A record augmented with its normalized hour value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRow {
    /// The source record.
    pub record: RawRecord,
    /// Fractional hours, or `None` when the duration could not be parsed.
    ///
    /// `None` is rendered as an empty cell, never as zero.
    pub hours: Option<Decimal>,
}

/// All rows for one employee, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeGroup {
    /// The employee name shared by every row.
    pub name: String,
    /// The employee's rows in their original relative order.
    pub rows: Vec<NormalizedRow>,
}

impl EmployeeGroup {
    /// Creates an empty group for the given employee.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rows: Vec::new(),
        }
    }

    /// Returns the number of rows in the group.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the group has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

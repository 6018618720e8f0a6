//! Record loading and grouping.
//!
//! This module reads a time-tracking export, resolves its schema once, and
//! partitions the rows into one ordered group per employee.

use std::collections::HashMap;
use std::io::Read;

use tracing::debug;

use crate::error::{TimesheetError, TimesheetResult};
use crate::models::{ColumnNames, ColumnSchema, EmployeeGroup, NormalizedRow, RawRecord};

use super::duration::parse_duration;

/// Reads CSV input into records restricted to the kept columns.
///
/// # Errors
///
/// - [`TimesheetError::MalformedCsv`] if the input is not valid CSV or a row
///   has a different number of fields than the header
/// - [`TimesheetError::MissingColumn`] if a required header is absent
///
/// # Example
///
/// ```
/// use timesheet_formatter::conversion::read_records;
/// use timesheet_formatter::models::ColumnNames;
///
/// let csv = "Full Name,Date,Duration,Break Type\nAlice,2024-03-01,3h 15m,\n";
/// let (schema, records) = read_records(csv.as_bytes(), &ColumnNames::default()).unwrap();
///
/// assert_eq!(schema.width(), 4);
/// assert_eq!(records[0].full_name, "Alice");
/// ```
pub fn read_records<R: Read>(
    input: R,
    names: &ColumnNames,
) -> TimesheetResult<(ColumnSchema, Vec<RawRecord>)> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(input);

    let schema = ColumnSchema::resolve(reader.headers()?.iter(), names)?;

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let fields = row
            .iter()
            .take(schema.width())
            .map(str::to_string)
            .collect();
        records.push(RawRecord::from_fields(fields, &schema));
    }

    debug!(rows = records.len(), columns = schema.width(), "Read timesheet records");
    Ok((schema, records))
}

/// Partitions records by employee name.
///
/// Groups come out in the order their employee is first seen, and each group
/// keeps its rows in input order. Every row gets its normalized hours from
/// [`parse_duration`]; an empty name is a group of its own.
///
/// # Example
///
/// ```
/// use timesheet_formatter::conversion::{group_by_employee, read_records};
/// use timesheet_formatter::models::ColumnNames;
///
/// let csv = "Full Name,Duration,Break Type\nAlice,1h 0m,\nBob,2h 0m,\nAlice,3h 0m,\n";
/// let (_, records) = read_records(csv.as_bytes(), &ColumnNames::default()).unwrap();
/// let groups = group_by_employee(records);
///
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups[0].name, "Alice");
/// assert_eq!(groups[0].len(), 2);
/// ```
pub fn group_by_employee(records: Vec<RawRecord>) -> Vec<EmployeeGroup> {
    let mut groups: Vec<EmployeeGroup> = Vec::new();
    let mut index_by_name: HashMap<String, usize> = HashMap::new();

    for record in records {
        let hours = parse_duration(&record.duration_raw);
        let index = *index_by_name
            .entry(record.full_name.clone())
            .or_insert_with(|| {
                groups.push(EmployeeGroup::new(record.full_name.clone()));
                groups.len() - 1
            });
        groups[index].rows.push(NormalizedRow { record, hours });
    }

    groups
}

/// Reads and groups an export in one step.
///
/// # Errors
///
/// Everything [`read_records`] returns, plus [`TimesheetError::EmptyInput`]
/// when the export has a header but no rows.
pub fn load_groups<R: Read>(
    input: R,
    names: &ColumnNames,
) -> TimesheetResult<(ColumnSchema, Vec<EmployeeGroup>)> {
    let (schema, records) = read_records(input, names)?;
    if records.is_empty() {
        return Err(TimesheetError::EmptyInput);
    }
    Ok((schema, group_by_employee(records)))
}

//! Workbook assembly.

use tracing::debug;

use crate::error::{TimesheetError, TimesheetResult};
use crate::models::{ColumnSchema, EmployeeGroup, LayoutProfile, Workbook};

use super::naming::SheetNamer;
use super::sheet_writer::write_sheet;

/// Builds a workbook with one sheet per employee group, in group order.
///
/// The placeholder sheet a new workbook starts with is removed once the
/// employee sheets exist.
///
/// # Errors
///
/// Returns [`TimesheetError::EmptyInput`] when `groups` is empty, since a
/// workbook without sheets cannot be written.
pub fn build_workbook(
    groups: &[EmployeeGroup],
    schema: &ColumnSchema,
    profile: LayoutProfile,
) -> TimesheetResult<Workbook> {
    if groups.is_empty() {
        return Err(TimesheetError::EmptyInput);
    }

    let mut workbook = Workbook::new();
    let mut namer = SheetNamer::new();

    for group in groups {
        let sheet_name = namer.assign(&group.name);
        write_sheet(&mut workbook, &sheet_name, group, schema, profile)?;
    }

    let placeholder = workbook.remove_placeholder()?;
    debug!(removed = placeholder.name(), sheets = workbook.len(), "Assembled workbook");

    Ok(workbook)
}

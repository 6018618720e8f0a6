//! Per-employee sheet writing.
//!
//! Lays out one employee group as a sheet: title, headers, data rows, the
//! appended hours and leave columns, and the formula block underneath. All
//! aggregates are written as formulas so the sheet stays editable.

use rust_decimal::prelude::ToPrimitive;
use tracing::{debug, warn};

use crate::error::TimesheetResult;
use crate::models::{
    CellValue, ColumnSchema, EmployeeGroup, ExtraColumn, HOURS_HEADER, LayoutProfile, Sheet,
    SheetLayout, UNPAID_BREAK_TYPE, Workbook,
};

use super::addressing::{cell_address, column_range};

/// Label written in column A above the column sums.
pub const TOTALS_LABEL: &str = "Totals:";
/// Label of the manual overtime entry.
pub const OVERTIME_LABEL: &str = "Overtime:";
/// Label of the regular hours formula.
pub const REGULAR_LABEL: &str = "REG:";
/// Label of the total hours formula.
pub const TOTAL_HOURS_LABEL: &str = "TOTAL HRS:";

/// Writes one employee group to a new sheet named `sheet_name`.
///
/// The title cell holds the employee name verbatim; `sheet_name` is expected
/// to be already valid for the output format. An empty group still produces
/// a complete sheet whose sums cover an empty range.
///
/// # Errors
///
/// - [`crate::error::TimesheetError::TooManyColumns`] if the layout would
///   extend past column Z; nothing is written in that case
/// - [`crate::error::TimesheetError::DuplicateSheetName`] if the workbook
///   already has a sheet with this name
///
/// # Example
///
/// ```
/// use timesheet_formatter::conversion::{group_by_employee, read_records, write_sheet};
/// use timesheet_formatter::models::{ColumnNames, LayoutProfile, Workbook};
///
/// let csv = "Full Name,Date,Duration,Break Type\nAlice,Mon,1h 0m,\nAlice,Tue,2h 0m,Unpaid\n";
/// let (schema, records) = read_records(csv.as_bytes(), &ColumnNames::default()).unwrap();
/// let groups = group_by_employee(records);
///
/// let mut workbook = Workbook::new();
/// write_sheet(&mut workbook, "Alice", &groups[0], &schema, LayoutProfile::Standard).unwrap();
///
/// let sheet = workbook.sheet("Alice").unwrap();
/// assert_eq!(sheet.get(4, 6).unwrap().as_formula(), Some("=SUM(E3:E4)"));
/// ```
pub fn write_sheet(
    workbook: &mut Workbook,
    sheet_name: &str,
    group: &EmployeeGroup,
    schema: &ColumnSchema,
    profile: LayoutProfile,
) -> TimesheetResult<()> {
    let layout = SheetLayout::new(schema.width(), group.len(), profile).inspect_err(|err| {
        warn!(sheet = %sheet_name, error = %err, "Employee sheet does not fit in columns A to Z");
    })?;

    let sheet = workbook.create_sheet(sheet_name)?;

    sheet.set(0, layout.title_row(), CellValue::text(&group.name));
    write_headers(sheet, &layout, schema);
    write_data_rows(sheet, &layout, schema, group);
    let sums = write_sums(sheet, &layout);
    if profile.has_summary_rows() {
        write_summary_rows(sheet, &layout, &sums);
    }

    debug!(sheet = %sheet_name, rows = group.len(), ?profile, "Wrote employee sheet");
    Ok(())
}

fn write_headers(sheet: &mut Sheet, layout: &SheetLayout, schema: &ColumnSchema) {
    let row = layout.header_row();
    for (col, header) in (0u16..).zip(&schema.headers) {
        sheet.set(col, row, CellValue::text(header));
    }
    sheet.set(layout.hours_col(), row, CellValue::text(HOURS_HEADER));
    for (column, col) in layout.extra_columns() {
        sheet.set(col, row, CellValue::text(column.header()));
    }
}

fn write_data_rows(
    sheet: &mut Sheet,
    layout: &SheetLayout,
    schema: &ColumnSchema,
    group: &EmployeeGroup,
) {
    let break_col = u16::try_from(schema.break_type).unwrap_or(u16::MAX);
    let unpaid_col = layout
        .extra_col(ExtraColumn::Unpaid)
        .filter(|_| layout.profile().derives_unpaid());

    for (row, entry) in (layout.first_data_row()..).zip(&group.rows) {
        for (col, field) in (0u16..).zip(&entry.record.fields) {
            if let Some(value) = CellValue::from_field(field) {
                sheet.set(col, row, value);
            }
        }

        if let Some(hours) = entry.hours.and_then(|h| h.to_f64()) {
            sheet.set(layout.hours_col(), row, CellValue::Number(hours));
        }

        if let Some(col) = unpaid_col {
            sheet.set(
                col,
                row,
                CellValue::formula(unpaid_formula(
                    &cell_address(break_col, row),
                    &cell_address(layout.hours_col(), row),
                )),
            );
        }
    }
}

/// Sum cell addresses keyed by the column they total.
struct SumCells {
    hours: String,
    extras: Vec<(ExtraColumn, String)>,
}

impl SumCells {
    fn extra(&self, column: ExtraColumn) -> Option<&str> {
        self.extras
            .iter()
            .find(|(c, _)| *c == column)
            .map(|(_, address)| address.as_str())
    }
}

fn write_sums(sheet: &mut Sheet, layout: &SheetLayout) -> SumCells {
    sheet.set(0, layout.totals_label_row(), CellValue::text(TOTALS_LABEL));

    let mut write_sum = |col: u16| {
        let range = column_range(col, layout.first_data_row(), layout.last_data_row());
        sheet.set(col, layout.sums_row(), CellValue::formula(format!("=SUM({})", range)));
        cell_address(col, layout.sums_row())
    };

    let hours = write_sum(layout.hours_col());
    let extras = layout
        .extra_columns()
        .map(|(column, col)| (column, write_sum(col)))
        .collect();

    SumCells { hours, extras }
}

fn write_summary_rows(sheet: &mut Sheet, layout: &SheetLayout, sums: &SumCells) {
    let label_col = layout.label_col();
    let value_col = layout.value_col();

    sheet.set(label_col, layout.overtime_row(), CellValue::text(OVERTIME_LABEL));
    let overtime = cell_address(value_col, layout.overtime_row());

    let mut regular_terms = vec![sums.hours.clone()];
    regular_terms.extend(sums.extra(ExtraColumn::Unpaid).map(str::to_string));
    regular_terms.push(overtime.clone());
    sheet.set(label_col, layout.regular_row(), CellValue::text(REGULAR_LABEL));
    sheet.set(
        value_col,
        layout.regular_row(),
        CellValue::formula(format!("={}", regular_terms.join("-"))),
    );
    let regular = cell_address(value_col, layout.regular_row());

    let mut total_terms = vec![regular, overtime];
    total_terms.extend(
        [ExtraColumn::Sick, ExtraColumn::Pto, ExtraColumn::Holiday]
            .into_iter()
            .filter_map(|column| sums.extra(column).map(str::to_string)),
    );
    sheet.set(label_col, layout.total_hours_row(), CellValue::text(TOTAL_HOURS_LABEL));
    sheet.set(
        value_col,
        layout.total_hours_row(),
        CellValue::formula(format!("={}", total_terms.join("+"))),
    );
}

fn unpaid_formula(break_cell: &str, hours_cell: &str) -> String {
    format!(
        "=IF({}=\"{}\",{},0)",
        break_cell, UNPAID_BREAK_TYPE, hours_cell
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TimesheetError;
    use crate::models::{ColumnNames, NormalizedRow, RawRecord};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn schema() -> ColumnSchema {
        ColumnSchema::resolve(
            ["Full Name", "Date", "Duration", "Break Type"],
            &ColumnNames::default(),
        )
        .unwrap()
    }

    fn row(name: &str, date: &str, duration: &str, break_type: &str) -> NormalizedRow {
        let fields = vec![
            name.to_string(),
            date.to_string(),
            duration.to_string(),
            break_type.to_string(),
        ];
        NormalizedRow {
            record: RawRecord::from_fields(fields, &schema()),
            hours: crate::conversion::parse_duration(duration),
        }
    }

    fn alice_group() -> EmployeeGroup {
        EmployeeGroup {
            name: "Alice".to_string(),
            rows: vec![
                row("Alice", "2024-03-01", "3h 15m", ""),
                row("Alice", "2024-03-02", "1h 0m", "Unpaid"),
            ],
        }
    }

    fn written(group: &EmployeeGroup, profile: LayoutProfile) -> Workbook {
        let mut workbook = Workbook::new();
        write_sheet(&mut workbook, &group.name, group, &schema(), profile).unwrap();
        workbook
    }

    fn formula(sheet: &Sheet, col: u16, row: u32) -> &str {
        sheet
            .get(col, row)
            .and_then(CellValue::as_formula)
            .unwrap_or_else(|| panic!("expected formula at col {} row {}", col, row))
    }

    fn text(sheet: &Sheet, col: u16, row: u32) -> &str {
        sheet
            .get(col, row)
            .and_then(CellValue::as_text)
            .unwrap_or_else(|| panic!("expected text at col {} row {}", col, row))
    }

    #[test]
    fn test_title_and_headers() {
        let workbook = written(&alice_group(), LayoutProfile::Standard);
        let sheet = workbook.sheet("Alice").unwrap();

        assert_eq!(text(sheet, 0, 1), "Alice");
        let headers: Vec<&str> = (0..9).map(|col| text(sheet, col, 2)).collect();
        assert_eq!(
            headers,
            vec![
                "Full Name",
                "Date",
                "Duration",
                "Break Type",
                "Hours incl break",
                "UNPAID",
                "SICK",
                "PTO",
                "HOLIDAY"
            ]
        );
    }

    #[test]
    fn test_data_rows_and_hours() {
        let workbook = written(&alice_group(), LayoutProfile::Standard);
        let sheet = workbook.sheet("Alice").unwrap();

        assert_eq!(text(sheet, 1, 3), "2024-03-01");
        assert_eq!(text(sheet, 2, 4), "1h 0m");
        assert_eq!(sheet.get(4, 3), Some(&CellValue::Number(3.25)));
        assert_eq!(sheet.get(4, 4), Some(&CellValue::Number(1.0)));
        // empty break type leaves no cell
        assert_eq!(sheet.get(3, 3), None);
        // leave columns are left for manual entry
        assert_eq!(sheet.get(6, 3), None);
        assert_eq!(sheet.get(8, 4), None);
    }

    #[test]
    fn test_unpaid_formula_references_break_and_hours() {
        let workbook = written(&alice_group(), LayoutProfile::Standard);
        let sheet = workbook.sheet("Alice").unwrap();

        assert_eq!(formula(sheet, 5, 3), "=IF(D3=\"Unpaid\",E3,0)");
        assert_eq!(formula(sheet, 5, 4), "=IF(D4=\"Unpaid\",E4,0)");
    }

    #[test]
    fn test_totals_and_sums_for_two_rows() {
        let workbook = written(&alice_group(), LayoutProfile::Standard);
        let sheet = workbook.sheet("Alice").unwrap();

        assert_eq!(text(sheet, 0, 5), TOTALS_LABEL);
        assert_eq!(formula(sheet, 4, 6), "=SUM(E3:E4)");
        assert_eq!(formula(sheet, 5, 6), "=SUM(F3:F4)");
        assert_eq!(formula(sheet, 6, 6), "=SUM(G3:G4)");
        assert_eq!(formula(sheet, 7, 6), "=SUM(H3:H4)");
        assert_eq!(formula(sheet, 8, 6), "=SUM(I3:I4)");
    }

    #[test]
    fn test_summary_formula_chain() {
        let workbook = written(&alice_group(), LayoutProfile::Standard);
        let sheet = workbook.sheet("Alice").unwrap();

        assert_eq!(text(sheet, 3, 7), OVERTIME_LABEL);
        assert_eq!(sheet.get(4, 7), None);
        assert_eq!(text(sheet, 3, 8), REGULAR_LABEL);
        assert_eq!(formula(sheet, 4, 8), "=E6-F6-E7");
        assert_eq!(text(sheet, 3, 9), TOTAL_HOURS_LABEL);
        assert_eq!(formula(sheet, 4, 9), "=E8+E7+G6+H6+I6");
    }

    #[test]
    fn test_unknown_duration_leaves_hours_blank() {
        let group = EmployeeGroup {
            name: "Bob".to_string(),
            rows: vec![row("Bob", "2024-03-01", "??", ""), row("Bob", "2024-03-02", "0h 0m", "")],
        };
        let workbook = written(&group, LayoutProfile::Standard);
        let sheet = workbook.sheet("Bob").unwrap();

        assert_eq!(sheet.get(4, 3), None);
        assert_eq!(sheet.get(4, 4), Some(&CellValue::Number(0.0)));
    }

    #[test]
    fn test_empty_group_writes_header_only_sheet() {
        let group = EmployeeGroup::new("Carol");
        let workbook = written(&group, LayoutProfile::Standard);
        let sheet = workbook.sheet("Carol").unwrap();

        assert_eq!(text(sheet, 4, 2), HOURS_HEADER);
        assert_eq!(text(sheet, 0, 3), TOTALS_LABEL);
        assert_eq!(formula(sheet, 4, 4), "=SUM(E3:E2)");
        assert_eq!(formula(sheet, 4, 6), "=E4-F4-E5");
    }

    #[test]
    fn test_manual_unpaid_leaves_column_blank() {
        let workbook = written(&alice_group(), LayoutProfile::ManualUnpaid);
        let sheet = workbook.sheet("Alice").unwrap();

        assert_eq!(text(sheet, 5, 2), "UNPAID");
        assert_eq!(sheet.get(5, 3), None);
        assert_eq!(formula(sheet, 5, 6), "=SUM(F3:F4)");
        assert_eq!(formula(sheet, 4, 8), "=E6-F6-E7");
    }

    #[test]
    fn test_leave_only_has_sums_without_summary() {
        let workbook = written(&alice_group(), LayoutProfile::LeaveOnly);
        let sheet = workbook.sheet("Alice").unwrap();

        assert_eq!(text(sheet, 5, 2), "SICK");
        assert_eq!(formula(sheet, 7, 6), "=SUM(H3:H4)");
        assert_eq!(sheet.get(3, 7), None);
        assert_eq!(sheet.max_row(), 6);
    }

    #[test]
    fn test_numeric_fields_written_as_numbers() {
        let mut group = alice_group();
        group.rows[0].record.fields[1] = "45352".to_string();
        let workbook = written(&group, LayoutProfile::Standard);
        let sheet = workbook.sheet("Alice").unwrap();

        assert_eq!(sheet.get(1, 3), Some(&CellValue::Number(45352.0)));
    }

    #[test]
    fn test_title_keeps_verbatim_name() {
        let group = EmployeeGroup {
            name: "O'Brien: Night".to_string(),
            rows: vec![row("O'Brien: Night", "2024-03-01", "1h 0m", "")],
        };
        let mut workbook = Workbook::new();
        write_sheet(&mut workbook, "O'Brien_ Night", &group, &schema(), LayoutProfile::Standard)
            .unwrap();
        let sheet = workbook.sheet("O'Brien_ Night").unwrap();
        assert_eq!(text(sheet, 0, 1), "O'Brien: Night");
    }

    #[test]
    fn test_hours_written_from_decimal() {
        let mut group = alice_group();
        group.rows[0].hours = Some(Decimal::from_str("7.75").unwrap());
        let workbook = written(&group, LayoutProfile::Standard);
        let sheet = workbook.sheet("Alice").unwrap();
        assert_eq!(sheet.get(4, 3), Some(&CellValue::Number(7.75)));
    }

    #[test]
    fn test_layout_past_z_fails_before_creating_sheet() {
        let mut headers: Vec<String> = (1..=22).map(|i| format!("Extra {}", i)).collect();
        headers.extend(["Full Name", "Duration", "Break Type"].map(String::from));
        let wide = ColumnSchema::resolve(&headers, &ColumnNames::default()).unwrap();

        let mut fields = vec![String::new(); 22];
        fields.extend(["Alice", "1h 0m", "Unpaid"].map(String::from));
        let group = EmployeeGroup {
            name: "Alice".to_string(),
            rows: vec![NormalizedRow {
                record: RawRecord::from_fields(fields, &wide),
                hours: crate::conversion::parse_duration("1h 0m"),
            }],
        };

        let mut workbook = Workbook::new();
        let result = write_sheet(&mut workbook, "Alice", &group, &wide, LayoutProfile::Standard);

        assert!(matches!(
            result,
            Err(TimesheetError::TooManyColumns { columns: 30, max: 26 })
        ));
        assert!(workbook.sheet("Alice").is_none());
    }
}
